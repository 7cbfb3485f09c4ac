pub mod linear_regression;
pub mod momentum;
pub mod moving_average;
pub mod simple_comparison;
pub mod volatility;
