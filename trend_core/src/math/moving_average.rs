use crate::common::enums::{TrendLabel, TrendMethod};
use crate::common::utils::{mean, tail};
use crate::config::trend_config::MovingAverageConfig;
use crate::math::volatility::volatility;
use crate::traits::classifier_trait::TrendClassifier;

/// Short vs long simple moving average crossover
#[derive(Debug, Clone, Copy)]
pub struct MovingAverages {
    config: MovingAverageConfig,
}

impl MovingAverages {
    pub fn new(config: MovingAverageConfig) -> Self {
        Self { config }
    }
}

impl TrendClassifier for MovingAverages {
    fn method(&self) -> TrendMethod {
        TrendMethod::MovingAverages
    }

    fn min_points(&self) -> usize {
        4
    }

    fn classify(&self, prices: &[f64]) -> TrendLabel {
        if prices.len() < self.min_points() {
            return TrendLabel::InsufficientData;
        }

        let short_window = self.config.short_window.min(prices.len() / 2);
        let long_window = self.config.long_window.min(prices.len());

        let (Some(short_ma), Some(long_ma)) = (
            mean(tail(prices, short_window)),
            mean(tail(prices, long_window)),
        ) else {
            return TrendLabel::InsufficientData;
        };
        if long_ma == 0.0 {
            return TrendLabel::InsufficientData;
        }

        let diff = (short_ma - long_ma) / long_ma;
        // Uses the whole series, not just the long window
        let adaptive_threshold =
            self.config.base_threshold + volatility(prices) * self.config.volatility_multiplier;

        if diff > adaptive_threshold {
            TrendLabel::Growth
        } else if diff < -adaptive_threshold {
            TrendLabel::Decline
        } else {
            TrendLabel::Sideways
        }
    }
}
