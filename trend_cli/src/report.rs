use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use trend_core::vote::method_votes::MethodVotes;
use trend_core::{TrendAnalyzer, TrendLabel, TrendResult};

use crate::error::HistoryError;
use crate::history::{format_date, parse_days, HistoryRecord};

/// Days differences above this are flagged in the report
pub const LARGE_DAYS_DIFF: u32 = 5;

const PREVIEW_LEN: usize = 5;
const RULE_WIDTH: usize = 100;

/// Stored vs calculated values for one item
#[derive(Debug, Clone, Serialize)]
pub struct ItemComparison {
    pub name: String,
    pub status: String,
    pub phase: String,
    pub potential: String,
    pub recommendation: String,
    pub current_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub prices_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub first_prices: Vec<f64>,
    pub last_prices: Vec<f64>,
    pub table_trend: String,
    pub table_label: Option<TrendLabel>,
    pub calculated: TrendResult,
    pub methods: MethodVotes,
    pub trend_match: bool,
    pub table_days: u32,
    pub days_diff: u32,
}

impl ItemComparison {
    pub fn new(record: &HistoryRecord, analyzer: &TrendAnalyzer) -> Self {
        let analysis = analyzer.analyze_history(&record.history);
        let prices = record.history.prices();
        let table_label = TrendLabel::from_str(&record.table_trend).ok();
        let table_days = parse_days(&record.table_days);

        Self {
            name: record.name.clone(),
            status: record.status.clone(),
            phase: record.phase.clone(),
            potential: record.potential.clone(),
            recommendation: record.recommendation.clone(),
            current_price: record.current_price,
            min_price: record.min_price,
            max_price: record.max_price,
            prices_count: prices.len(),
            first_date: record.history.first_date(),
            last_date: record.history.last_date(),
            first_prices: prices.iter().take(PREVIEW_LEN).copied().collect(),
            last_prices: prices[prices.len().saturating_sub(PREVIEW_LEN)..].to_vec(),
            table_trend: record.table_trend.clone(),
            table_label,
            calculated: analysis.result,
            methods: analysis.methods,
            trend_match: table_label == Some(analysis.result.label),
            table_days,
            days_diff: table_days.abs_diff(analysis.result.days_since_change),
        }
    }

    pub fn large_days_gap(&self) -> bool {
        self.days_diff > LARGE_DAYS_DIFF
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    pub items: usize,
    pub trend_matches: usize,
    pub match_percent: f64,
    pub avg_days_diff: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub items: Vec<ItemComparison>,
    pub summary: Option<ReportSummary>,
}

impl ComparisonReport {
    /// Compare every record with at least two dated prices.
    pub fn build(records: &[HistoryRecord], analyzer: &TrendAnalyzer) -> Self {
        let items: Vec<ItemComparison> = records
            .iter()
            .filter(|record| {
                let usable = record.history.len() >= 2;
                if !usable {
                    debug!("{}: fewer than 2 prices, skipped", record.name);
                }
                usable
            })
            .map(|record| ItemComparison::new(record, analyzer))
            .collect();

        let summary = Self::summarize(&items);
        Self { items, summary }
    }

    fn summarize(items: &[ItemComparison]) -> Option<ReportSummary> {
        if items.is_empty() {
            return None;
        }
        let count = items.len() as f64;
        let trend_matches = items.iter().filter(|item| item.trend_match).count();
        let total_days_diff: u64 = items.iter().map(|item| u64::from(item.days_diff)).sum();

        Some(ReportSummary {
            items: items.len(),
            trend_matches,
            match_percent: trend_matches as f64 * 100.0 / count,
            avg_days_diff: total_days_diff as f64 / count,
        })
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }

    pub fn render_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn fmt_opt_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

fn fmt_opt_price(price: Option<f64>) -> String {
    price.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "—".to_string())
}

impl fmt::Display for ItemComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        if !self.status.is_empty() {
            writeln!(f, "Status: {}", self.status)?;
        }
        writeln!(
            f,
            "Current price: {} (min {}, max {})",
            fmt_opt_price(self.current_price),
            fmt_opt_price(self.min_price),
            fmt_opt_price(self.max_price)
        )?;
        for (label, value) in [
            ("Phase", &self.phase),
            ("Potential", &self.potential),
            ("Recommendation", &self.recommendation),
        ] {
            if !value.is_empty() {
                writeln!(f, "{}: {}", label, value)?;
            }
        }
        writeln!(f, "Prices (one per date): {}", self.prices_count)?;
        writeln!(
            f,
            "Period: {} - {}",
            fmt_opt_date(self.first_date),
            fmt_opt_date(self.last_date)
        )?;
        writeln!(f, "First {} prices: {:?}", PREVIEW_LEN, self.first_prices)?;
        writeln!(f, "Last {} prices: {:?}", PREVIEW_LEN, self.last_prices)?;
        let methods: Vec<String> = self
            .methods
            .iter()
            .map(|(method, label)| format!("{} {}", method, label))
            .collect();
        writeln!(f, "Methods: {}", methods.join(", "))?;
        writeln!(f)?;

        writeln!(f, "TREND:")?;
        match self.table_label {
            Some(label) => writeln!(f, "  Table:       {}", label)?,
            None => writeln!(f, "  Table:       {:?} (unrecognised)", self.table_trend)?,
        }
        writeln!(f, "  Calculated:  {}", self.calculated.label)?;
        writeln!(f, "  Match:       {}", if self.trend_match { "✓" } else { "✗" })?;
        if !self.trend_match {
            writeln!(f, "  NOTE: trends differ!")?;
        }
        writeln!(f)?;

        writeln!(f, "DAYS SINCE CHANGE:")?;
        writeln!(f, "  Table:       {}", self.table_days)?;
        writeln!(f, "  Calculated:  {}", self.calculated.days_since_change)?;
        writeln!(f, "  Difference:  {} days", self.days_diff)?;
        if self.large_days_gap() {
            writeln!(f, "  NOTE: large difference in days!")?;
        }
        Ok(())
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        writeln!(f, "STATISTICS COMPARISON: TABLE vs CALCULATED")?;
        writeln!(f, "{}", rule)?;

        for (i, item) in self.items.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {}", i + 1, item.name)?;
            write!(f, "{}", item)?;
        }

        writeln!(f)?;
        match &self.summary {
            None => {
                writeln!(f, "ERROR: no items could be parsed from the history table")?;
                writeln!(f, "Check the file format (tab-separated, dated price columns)")?;
            }
            Some(summary) => {
                writeln!(f, "{}", rule)?;
                writeln!(f, "SUMMARY")?;
                writeln!(f, "{}", rule)?;
                writeln!(
                    f,
                    "Trend matches: {}/{} ({:.1}%)",
                    summary.trend_matches, summary.items, summary.match_percent
                )?;
                writeln!(f, "Average days difference: {:.1}", summary.avg_days_diff)?;
            }
        }
        Ok(())
    }
}
