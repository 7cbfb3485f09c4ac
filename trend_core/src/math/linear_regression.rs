use crate::common::enums::{TrendLabel, TrendMethod};
use crate::common::utils::tail;
use crate::config::trend_config::LinearRegressionConfig;
use crate::traits::classifier_trait::TrendClassifier;

/// Least-squares slope over the recent window, relative to the mean price
#[derive(Debug, Clone, Copy)]
pub struct LinearRegression {
    config: LinearRegressionConfig,
}

impl LinearRegression {
    pub fn new(config: LinearRegressionConfig) -> Self {
        Self { config }
    }

    /// Slope per observation, `None` when it is undefined.
    pub fn slope(prices: &[f64]) -> Option<f64> {
        let n = prices.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_xx) = (0.0, 0.0, 0.0, 0.0);
        for (i, &y) in prices.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator == 0.0 {
            return None;
        }
        Some((n * sum_xy - sum_x * sum_y) / denominator)
    }
}

impl TrendClassifier for LinearRegression {
    fn method(&self) -> TrendMethod {
        TrendMethod::LinearRegression
    }

    fn min_points(&self) -> usize {
        3
    }

    fn classify(&self, prices: &[f64]) -> TrendLabel {
        if prices.len() < self.min_points() {
            return TrendLabel::InsufficientData;
        }

        let recent = tail(prices, self.config.window);
        let Some(slope) = Self::slope(recent) else {
            return TrendLabel::InsufficientData;
        };

        let avg_price = recent.iter().sum::<f64>() / recent.len() as f64;
        if avg_price == 0.0 {
            return TrendLabel::InsufficientData;
        }

        let relative_slope = slope / avg_price;
        if relative_slope > self.config.growth_threshold {
            TrendLabel::Growth
        } else if relative_slope < self.config.fall_threshold {
            TrendLabel::Decline
        } else {
            TrendLabel::Sideways
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::trend_config::TrendConfig;

    fn classifier() -> LinearRegression {
        LinearRegression::new(TrendConfig::DEFAULT.linear_regression)
    }

    #[test]
    fn test_slope() {
        assert!((LinearRegression::slope(&[1.0, 3.0, 5.0]).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(LinearRegression::slope(&[4.0]), None);
        assert_eq!(LinearRegression::slope(&[]), None);
    }

    #[test]
    fn test_min_points() {
        assert_eq!(classifier().classify(&[1.0, 2.0]), TrendLabel::InsufficientData);
        assert_eq!(classifier().classify(&[5.0, 5.0, 5.0]), TrendLabel::Sideways);
    }

    #[test]
    fn test_zero_average() {
        assert_eq!(
            classifier().classify(&[0.0, 0.0, 0.0]),
            TrendLabel::InsufficientData
        );
    }

    #[test]
    fn test_direction() {
        // slope 1 over mean 11
        assert_eq!(classifier().classify(&[10.0, 11.0, 12.0]), TrendLabel::Growth);
        // slope -5 over mean 90
        assert_eq!(
            classifier().classify(&[100.0, 95.0, 90.0, 85.0, 80.0]),
            TrendLabel::Decline
        );
        // slope 0.1 over mean 100
        assert_eq!(
            classifier().classify(&[99.9, 100.0, 100.1]),
            TrendLabel::Sideways
        );
    }

    #[test]
    fn test_window_ignores_old_prices() {
        let mut prices = vec![1000.0; 10];
        prices.extend(std::iter::repeat(10.0).take(20));
        assert_eq!(classifier().classify(&prices), TrendLabel::Sideways);
    }
}
