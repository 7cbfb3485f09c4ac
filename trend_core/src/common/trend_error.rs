use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrendError {
    #[error("price/date length mismatch: {prices} prices, {dates} dates")]
    LengthMismatch { prices: usize, dates: usize },

    #[error("non-finite price {value} at index {index}")]
    NonFinitePrice { index: usize, value: f64 },
}
