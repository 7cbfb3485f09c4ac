use serde::Serialize;

use crate::common::enums::{TrendLabel, TrendMethod};

/// Raw label produced by each classifier for one series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodVotes {
    pub simple_comparison: TrendLabel,
    pub moving_averages: TrendLabel,
    pub linear_regression: TrendLabel,
    pub momentum: TrendLabel,
}

impl MethodVotes {
    /// Every method reporting the same label
    pub fn uniform(label: TrendLabel) -> Self {
        Self {
            simple_comparison: label,
            moving_averages: label,
            linear_regression: label,
            momentum: label,
        }
    }

    pub fn get(&self, method: TrendMethod) -> TrendLabel {
        match method {
            TrendMethod::SimpleComparison => self.simple_comparison,
            TrendMethod::MovingAverages => self.moving_averages,
            TrendMethod::LinearRegression => self.linear_regression,
            TrendMethod::Momentum => self.momentum,
        }
    }

    pub fn labels(&self) -> [TrendLabel; 4] {
        TrendMethod::ALL.map(|method| self.get(method))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrendMethod, TrendLabel)> + '_ {
        TrendMethod::ALL
            .into_iter()
            .map(move |method| (method, self.get(method)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_labels_agree() {
        let votes = MethodVotes {
            simple_comparison: TrendLabel::Growth,
            moving_averages: TrendLabel::Sideways,
            linear_regression: TrendLabel::Decline,
            momentum: TrendLabel::InsufficientData,
        };
        assert_eq!(
            votes.labels(),
            [
                TrendLabel::Growth,
                TrendLabel::Sideways,
                TrendLabel::Decline,
                TrendLabel::InsufficientData
            ]
        );
        for (method, label) in votes.iter() {
            assert_eq!(votes.get(method), label);
        }
    }

    #[test]
    fn test_uniform() {
        let votes = MethodVotes::uniform(TrendLabel::Sideways);
        assert!(votes.labels().iter().all(|&l| l == TrendLabel::Sideways));
    }
}
