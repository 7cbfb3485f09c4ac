use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::change_point::change_locator::ChangePointLocator;
use crate::common::enums::TrendLabel;
use crate::config::trend_config::TrendConfig;
use crate::math::{
    linear_regression::LinearRegression, momentum::Momentum, moving_average::MovingAverages,
    simple_comparison::SimpleComparison,
};
use crate::series::price_history::PriceHistory;
use crate::traits::classifier_trait::TrendClassifier;
use crate::vote::{method_votes::MethodVotes, vote_tally::VoteTally};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendResult {
    pub label: TrendLabel,
    pub days_since_change: u32,
}

impl TrendResult {
    pub fn insufficient() -> Self {
        Self {
            label: TrendLabel::InsufficientData,
            days_since_change: 0,
        }
    }
}

/// Consensus result together with the individual method outputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub result: TrendResult,
    pub methods: MethodVotes,
    pub tally: VoteTally,
}

/// Runs the four classifiers, the vote and the change-point scan
#[derive(Debug, Clone, Copy)]
pub struct TrendAnalyzer {
    simple_comparison: SimpleComparison,
    moving_averages: MovingAverages,
    linear_regression: LinearRegression,
    momentum: Momentum,
    change_locator: ChangePointLocator,
}

impl TrendAnalyzer {
    pub fn new(config: TrendConfig) -> Self {
        let simple_comparison = SimpleComparison::new(config.simple_comparison);
        Self {
            simple_comparison,
            moving_averages: MovingAverages::new(config.moving_averages),
            linear_regression: LinearRegression::new(config.linear_regression),
            momentum: Momentum::new(config.momentum),
            change_locator: ChangePointLocator::new(simple_comparison),
        }
    }

    /// Run every classifier on the full series
    pub fn classify_all(&self, prices: &[f64]) -> MethodVotes {
        MethodVotes {
            simple_comparison: self.simple_comparison.classify(prices),
            moving_averages: self.moving_averages.classify(prices),
            linear_regression: self.linear_regression.classify(prices),
            momentum: self.momentum.classify(prices),
        }
    }

    /// Classify `prices` (oldest first) and count the days since the trend
    /// last changed, using `dates` aligned index-for-index with `prices`.
    pub fn analyze(&self, prices: &[f64], dates: &[NaiveDate]) -> TrendAnalysis {
        if prices.len() < 2 {
            let methods = MethodVotes::uniform(TrendLabel::InsufficientData);
            return TrendAnalysis {
                result: TrendResult::insufficient(),
                methods,
                tally: VoteTally::from_labels(methods.labels()),
            };
        }

        let methods = self.classify_all(prices);
        let tally = VoteTally::from_labels(methods.labels());
        let label = tally.winner();
        let days_since_change = self.change_locator.days_since_change(prices, dates, label);

        debug!(
            "{} prices: simple={} ma={} lr={} momentum={} -> {} ({} days)",
            prices.len(),
            methods.simple_comparison.name(),
            methods.moving_averages.name(),
            methods.linear_regression.name(),
            methods.momentum.name(),
            label.name(),
            days_since_change
        );

        TrendAnalysis {
            result: TrendResult {
                label,
                days_since_change,
            },
            methods,
            tally,
        }
    }

    pub fn analyze_history(&self, history: &PriceHistory) -> TrendAnalysis {
        self.analyze(history.prices(), history.dates())
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(TrendConfig::DEFAULT)
    }
}

/// Trend label and days since it last changed, with the reference thresholds.
pub fn compute_trend(prices: &[f64], dates: &[NaiveDate]) -> TrendResult {
    TrendAnalyzer::default().analyze(prices, dates).result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consecutive_days(n: usize) -> Vec<NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        start.iter_days().take(n).collect()
    }

    #[test]
    fn test_short_series_short_circuits() {
        let analysis = TrendAnalyzer::default().analyze(&[3.0], &consecutive_days(1));
        assert_eq!(analysis.result, TrendResult::insufficient());
        assert_eq!(analysis.tally.insufficient_data, 4);
    }

    #[test]
    fn test_methods_are_reported() {
        let prices = [100.0, 95.0, 90.0, 85.0, 80.0];
        let analysis = TrendAnalyzer::default().analyze(&prices, &consecutive_days(5));
        assert_eq!(analysis.methods.simple_comparison, TrendLabel::Sideways);
        assert_eq!(analysis.methods.moving_averages, TrendLabel::Sideways);
        assert_eq!(analysis.methods.linear_regression, TrendLabel::Decline);
        assert_eq!(analysis.methods.momentum, TrendLabel::Decline);
        // 2-2 tie resolved towards decline
        assert_eq!(analysis.result.label, TrendLabel::Decline);
        assert_eq!(analysis.tally.total(), 4);
    }

    #[test]
    fn test_analyze_history_matches_slices() {
        let prices = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        let dates = consecutive_days(5);
        let history = PriceHistory::new(prices.clone(), dates.clone()).unwrap();
        let analyzer = TrendAnalyzer::default();
        assert_eq!(
            analyzer.analyze_history(&history),
            analyzer.analyze(&prices, &dates)
        );
    }
}
