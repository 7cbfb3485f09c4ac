use crate::common::enums::{TrendLabel, TrendMethod};
use crate::common::utils::tail;
use crate::config::trend_config::SimpleComparisonConfig;
use crate::math::volatility::volatility;
use crate::traits::classifier_trait::TrendClassifier;

/// Number of most recent prices compared
const RECENT_WINDOW: usize = 3;

/// Compares the first and last of the most recent prices against a
/// volatility-adjusted threshold.
#[derive(Debug, Clone, Copy)]
pub struct SimpleComparison {
    config: SimpleComparisonConfig,
}

impl SimpleComparison {
    pub fn new(config: SimpleComparisonConfig) -> Self {
        Self { config }
    }
}

impl TrendClassifier for SimpleComparison {
    fn method(&self) -> TrendMethod {
        TrendMethod::SimpleComparison
    }

    fn min_points(&self) -> usize {
        2
    }

    fn classify(&self, prices: &[f64]) -> TrendLabel {
        if prices.len() < self.min_points() {
            return TrendLabel::InsufficientData;
        }

        let recent = tail(prices, RECENT_WINDOW);
        let first = recent[0];
        let last = recent[recent.len() - 1];

        let adaptive_threshold =
            self.config.base_threshold + volatility(recent) * self.config.volatility_multiplier;
        let change = if first > 0.0 {
            ((last - first) / first).abs()
        } else {
            0.0
        };

        if change < adaptive_threshold * self.config.sideways_factor {
            return TrendLabel::Sideways;
        }
        // A fall only counts past the full threshold, same as a rise.
        if last > first && change > adaptive_threshold {
            TrendLabel::Growth
        } else if change > adaptive_threshold {
            TrendLabel::Decline
        } else {
            TrendLabel::Sideways
        }
    }
}
