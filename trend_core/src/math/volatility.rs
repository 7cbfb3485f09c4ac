/// Root-mean-square of period-over-period relative changes.
///
/// Pairs whose predecessor is not positive add nothing to the sum, but the
/// denominator stays `len - 1` regardless.
pub fn volatility(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }

    let sum_squared_changes: f64 = prices
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .map(|pair| {
            let change = (pair[1] - pair[0]) / pair[0];
            change * change
        })
        .sum();

    (sum_squared_changes / (prices.len() - 1) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_short_series_is_zero() {
        assert_eq!(volatility(&[]), 0.0);
        assert_eq!(volatility(&[42.0]), 0.0);
    }

    #[test]
    fn test_flat_series_is_zero() {
        assert_eq!(volatility(&[7.5, 7.5, 7.5, 7.5]), 0.0);
    }

    #[test]
    fn test_constant_relative_change() {
        // +10% then -10%
        assert!((volatility(&[100.0, 110.0, 99.0]) - 0.1).abs() < EPS);
        assert!((volatility(&[100.0, 110.0]) - 0.1).abs() < EPS);
    }

    #[test]
    fn test_non_positive_predecessor_keeps_denominator() {
        // (0 -> 1) is skipped, (1 -> 2) contributes 1.0, denominator is still 2
        let expected = (1.0_f64 / 2.0).sqrt();
        assert!((volatility(&[0.0, 1.0, 2.0]) - expected).abs() < EPS);
    }
}
