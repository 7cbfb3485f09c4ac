mod error;
mod history;
mod report;

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use trend_core::TrendAnalyzer;

use crate::history::read_history_file;
use crate::report::ComparisonReport;

#[derive(Parser)]
#[command(name = "trend_cli")]
#[command(about = "Compare stored trend statistics with recalculated ones")]
#[command(version)]
struct Cli {
    /// Tab-separated price history table
    #[arg(short, long, default_value = "History.md")]
    input: PathBuf,

    /// Where to write the report
    #[arg(short, long, default_value = "StatisticsComparison.md")]
    output: PathBuf,

    /// Read at most this many data rows
    #[arg(short, long)]
    limit: Option<usize>,

    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Reading price history from {:?}", cli.input);
    let records = read_history_file(&cli.input, cli.limit)?;
    info!("Parsed {} item rows", records.len());

    let report = ComparisonReport::build(&records, &TrendAnalyzer::default());
    let rendered = match cli.format {
        ReportFormat::Text => report.render_text(),
        ReportFormat::Json => report.render_json()?,
    };
    fs::write(&cli.output, rendered)?;

    println!("Results saved to {:?}", cli.output);
    println!("Items processed: {}", report.items.len());
    if let Some(summary) = &report.summary {
        println!("Trend matches: {}/{}", summary.trend_matches, summary.items);
    }

    Ok(())
}
