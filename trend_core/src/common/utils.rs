use chrono::NaiveDate;

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Last `n` elements of a slice, or the whole slice if it is shorter
pub fn tail(values: &[f64], n: usize) -> &[f64] {
    &values[values.len().saturating_sub(n)..]
}

/// Whole days between two dates, absolute, never less than 1.
pub fn elapsed_days(from: NaiveDate, to: NaiveDate) -> u32 {
    let days = (to - from).num_days().unsigned_abs();
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}
