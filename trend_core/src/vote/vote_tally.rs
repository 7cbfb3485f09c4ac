use serde::Serialize;

use crate::common::enums::TrendLabel;

/// Votes per label across the classifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    pub growth: usize,
    pub decline: usize,
    pub sideways: usize,
    pub insufficient_data: usize,
}

impl VoteTally {
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = TrendLabel>,
    {
        let mut tally = Self::default();
        for label in labels {
            *tally.count_mut(label) += 1;
        }
        tally
    }

    pub fn count(&self, label: TrendLabel) -> usize {
        match label {
            TrendLabel::Growth => self.growth,
            TrendLabel::Decline => self.decline,
            TrendLabel::Sideways => self.sideways,
            TrendLabel::InsufficientData => self.insufficient_data,
        }
    }

    fn count_mut(&mut self, label: TrendLabel) -> &mut usize {
        match label {
            TrendLabel::Growth => &mut self.growth,
            TrendLabel::Decline => &mut self.decline,
            TrendLabel::Sideways => &mut self.sideways,
            TrendLabel::InsufficientData => &mut self.insufficient_data,
        }
    }

    pub fn total(&self) -> usize {
        self.growth + self.decline + self.sideways + self.insufficient_data
    }

    /// Label with the most votes.
    ///
    /// Scans `TrendLabel::VOTE_PRIORITY` and only replaces the leader on a
    /// strictly higher count, so ties go to the earlier label. With no votes
    /// at all the result is `InsufficientData`.
    pub fn winner(&self) -> TrendLabel {
        let mut winner = TrendLabel::InsufficientData;
        let mut max_votes = 0;
        for label in TrendLabel::VOTE_PRIORITY {
            let votes = self.count(label);
            if votes > max_votes {
                max_votes = votes;
                winner = label;
            }
        }
        winner
    }
}
