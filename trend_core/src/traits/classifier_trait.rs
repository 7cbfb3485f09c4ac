use crate::common::enums::{TrendLabel, TrendMethod};

pub trait TrendClassifier {
    /// Which heuristic this is
    fn method(&self) -> TrendMethod;

    /// Fewest prices the classifier will label; shorter input is `InsufficientData`
    fn min_points(&self) -> usize;

    /// Classify a chronological price series (oldest first)
    fn classify(&self, prices: &[f64]) -> TrendLabel;
}
