pub mod trend_analyzer;
