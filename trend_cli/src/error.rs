use thiserror::Error;
use trend_core::TrendError;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history table has no header row")]
    MissingHeader,

    #[error("row {row}: {source}")]
    Trend {
        row: usize,
        #[source]
        source: TrendError,
    },
}
