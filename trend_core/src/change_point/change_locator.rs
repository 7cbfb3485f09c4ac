use chrono::NaiveDate;
use log::trace;

use crate::common::enums::TrendLabel;
use crate::common::utils::elapsed_days;
use crate::math::simple_comparison::SimpleComparison;
use crate::traits::classifier_trait::TrendClassifier;

/// Finds how long the current trend has been in place.
///
/// Walks truncated prefixes of the series from the end and reclassifies each
/// with the simple comparison only (not the full vote).
#[derive(Debug, Clone, Copy)]
pub struct ChangePointLocator {
    classifier: SimpleComparison,
}

impl ChangePointLocator {
    pub fn new(classifier: SimpleComparison) -> Self {
        Self { classifier }
    }

    /// Days between the last date and the most recent prefix whose label
    /// differs from `current`. Falls back to the full date span when no
    /// prefix differs, and to 0 when there are fewer than 3 prices or 2 dates.
    pub fn days_since_change(
        &self,
        prices: &[f64],
        dates: &[NaiveDate],
        current: TrendLabel,
    ) -> u32 {
        if prices.len() < 3 || dates.len() < 2 {
            return 0;
        }
        let Some(&last_date) = dates.last() else {
            return 0;
        };

        for i in (1..=prices.len() - 2).rev() {
            let period_trend = self.classifier.classify(&prices[..=i]);
            if period_trend == current {
                continue;
            }
            if let Some(&change_date) = dates.get(i) {
                trace!(
                    "trend change at index {}: {} -> {} on {}",
                    i,
                    period_trend.name(),
                    current.name(),
                    change_date
                );
                return elapsed_days(change_date, last_date);
            }
        }

        elapsed_days(dates[0], last_date)
    }
}
