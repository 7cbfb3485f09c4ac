use crate::common::enums::{TrendLabel, TrendMethod};
use crate::common::utils::{mean, tail};
use crate::config::trend_config::MomentumConfig;
use crate::math::volatility::volatility;
use crate::traits::classifier_trait::TrendClassifier;

/// Net move over the recent window as a fraction of its mean
#[derive(Debug, Clone, Copy)]
pub struct Momentum {
    config: MomentumConfig,
}

impl Momentum {
    pub fn new(config: MomentumConfig) -> Self {
        Self { config }
    }
}

impl TrendClassifier for Momentum {
    fn method(&self) -> TrendMethod {
        TrendMethod::Momentum
    }

    fn min_points(&self) -> usize {
        3
    }

    fn classify(&self, prices: &[f64]) -> TrendLabel {
        if prices.len() < self.min_points() {
            return TrendLabel::InsufficientData;
        }

        let recent = tail(prices, self.config.window);
        let momentum = recent[recent.len() - 1] - recent[0];
        let avg_price = match mean(recent) {
            Some(avg) if avg != 0.0 => avg,
            _ => return TrendLabel::InsufficientData,
        };

        let momentum_percent = momentum / avg_price;
        let adaptive_threshold =
            self.config.base_threshold + volatility(recent) * self.config.volatility_multiplier;

        if momentum_percent > adaptive_threshold {
            TrendLabel::Growth
        } else if momentum_percent < -adaptive_threshold {
            TrendLabel::Decline
        } else {
            TrendLabel::Sideways
        }
    }
}
