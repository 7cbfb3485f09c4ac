use chrono::NaiveDate;
use log::debug;

use crate::common::trend_error::TrendError;
use crate::series::price_point::PricePoint;

/// Aligned price and date series for one item.
///
/// Index `i` of `prices` and `dates` always refers to the same observation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    prices: Vec<f64>,
    dates: Vec<NaiveDate>,
}

impl PriceHistory {
    pub fn new(prices: Vec<f64>, dates: Vec<NaiveDate>) -> Result<Self, TrendError> {
        if prices.len() != dates.len() {
            return Err(TrendError::LengthMismatch {
                prices: prices.len(),
                dates: dates.len(),
            });
        }
        if let Some((index, &value)) = prices.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(TrendError::NonFinitePrice { index, value });
        }
        Ok(Self { prices, dates })
    }

    /// Build a chronological history from observations in recording order.
    ///
    /// Several observations on the same date collapse into one, keeping the
    /// one recorded last (a restated price replaces the earlier one).
    pub fn from_observations<I>(points: I) -> Result<Self, TrendError>
    where
        I: IntoIterator<Item = PricePoint>,
    {
        let mut points: Vec<PricePoint> = points.into_iter().collect();
        // stable, so same-day entries keep recording order
        points.sort_by_key(|point| point.date);

        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => {
                    debug!("{}: restated {} -> {}", point.date, last.price, point.price);
                    *last = point;
                }
                _ => deduped.push(point),
            }
        }

        let (prices, dates) = deduped.into_iter().map(|p| (p.price, p.date)).unzip();
        Self::new(prices, dates)
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn points(&self) -> impl Iterator<Item = PricePoint> + '_ {
        self.dates
            .iter()
            .zip(&self.prices)
            .map(|(&date, &price)| PricePoint::new(date, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = PriceHistory::new(vec![1.0, 2.0], vec![date(1)]).unwrap_err();
        assert_eq!(err, TrendError::LengthMismatch { prices: 2, dates: 1 });
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = PriceHistory::new(vec![1.0, f64::NAN], vec![date(1), date(2)]).unwrap_err();
        assert!(matches!(err, TrendError::NonFinitePrice { index: 1, .. }));
    }

    #[test]
    fn test_from_observations_sorts_and_dedups() {
        let history = PriceHistory::from_observations([
            PricePoint::new(date(3), 30.0),
            PricePoint::new(date(1), 10.0),
            PricePoint::new(date(2), 20.0),
            PricePoint::new(date(2), 21.0),
        ])
        .unwrap();

        assert_eq!(history.prices(), &[10.0, 21.0, 30.0]);
        assert_eq!(history.dates(), &[date(1), date(2), date(3)]);
        assert_eq!(history.first_date(), Some(date(1)));
        assert_eq!(history.last_date(), Some(date(3)));
    }

    #[test]
    fn test_empty() {
        let history = PriceHistory::from_observations(Vec::new()).unwrap();
        assert!(history.is_empty());
        assert_eq!(history.last_date(), None);
        assert_eq!(history.points().count(), 0);
    }
}
