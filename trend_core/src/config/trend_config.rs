//! Fixed thresholds of the trend classifiers.
//!
//! Values are compile-time constants; nothing here is read at runtime.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleComparisonConfig {
    /// Relative change needed on a calm series
    pub base_threshold: f64,
    pub volatility_multiplier: f64,
    /// Fraction of the adaptive threshold below which the series is flat
    pub sideways_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingAverageConfig {
    pub short_window: usize,
    pub long_window: usize,
    pub base_threshold: f64,
    pub volatility_multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRegressionConfig {
    pub window: usize,
    /// Minimum slope relative to the mean price
    pub growth_threshold: f64,
    pub fall_threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumConfig {
    pub window: usize,
    pub base_threshold: f64,
    pub volatility_multiplier: f64,
}

/// Trend analysis configuration, one section per classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendConfig {
    pub simple_comparison: SimpleComparisonConfig,
    pub moving_averages: MovingAverageConfig,
    pub linear_regression: LinearRegressionConfig,
    pub momentum: MomentumConfig,
}

impl TrendConfig {
    pub const DEFAULT: TrendConfig = TrendConfig {
        simple_comparison: SimpleComparisonConfig {
            base_threshold: 0.08,
            volatility_multiplier: 1.5,
            sideways_factor: 0.4,
        },
        moving_averages: MovingAverageConfig {
            short_window: 3,
            long_window: 7,
            base_threshold: 0.02,
            volatility_multiplier: 1.5,
        },
        linear_regression: LinearRegressionConfig {
            window: 20,
            growth_threshold: 0.03,
            fall_threshold: -0.03,
        },
        momentum: MomentumConfig {
            window: 5,
            base_threshold: 0.05,
            volatility_multiplier: 2.0,
        },
    };
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_const() {
        assert_eq!(TrendConfig::default(), TrendConfig::DEFAULT);
    }

    #[test]
    fn test_windows_are_ordered() {
        let conf = TrendConfig::DEFAULT;
        assert!(conf.moving_averages.short_window < conf.moving_averages.long_window);
        assert!(conf.linear_regression.fall_threshold < 0.0);
        assert!(conf.linear_regression.growth_threshold > 0.0);
    }
}
