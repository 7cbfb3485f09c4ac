pub mod enums;
pub mod trend_error;
pub mod utils;
