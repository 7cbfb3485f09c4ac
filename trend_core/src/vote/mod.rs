pub mod method_votes;
pub mod vote_tally;
