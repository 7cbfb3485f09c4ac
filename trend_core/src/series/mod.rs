pub mod price_history;
pub mod price_point;
