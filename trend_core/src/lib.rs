pub mod analyzer;
pub mod change_point;
pub mod common;
pub mod config;
pub mod math;
pub mod series;
pub mod traits;
pub mod vote;

pub use analyzer::trend_analyzer::{compute_trend, TrendAnalysis, TrendAnalyzer, TrendResult};
pub use common::enums::{TrendLabel, TrendMethod};
pub use common::trend_error::TrendError;
pub use config::trend_config::TrendConfig;
pub use series::price_history::PriceHistory;
