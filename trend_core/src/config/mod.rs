pub mod trend_config;
