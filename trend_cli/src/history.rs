//! Reader for the tab-separated price history table.
//!
//! Layout of a data row:
//! - `[1]` name, `[2]` status, `[3]` link, `[4]` buy price, `[5]` current price
//! - `[6]` min, `[7]` max, `[8]` stored trend glyph, `[9]` stored days text
//! - `[10]` phase, `[11]` potential, `[12]` recommendation
//! - `[13..]` one price per observation; the header of each of these columns
//!   starts with the date as `dd.MM.yy`, optionally followed by a session
//!   marker ("день" / "ночь").

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use trend_core::series::price_point::PricePoint;
use trend_core::{PriceHistory, TrendError};

use crate::error::HistoryError;

/// First column holding a dated price
pub const FIRST_PRICE_COLUMN: usize = 13;

const DATE_FORMAT: &str = "%d.%m.%y";

/// One item row of the history table
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    pub name: String,
    pub status: String,
    pub current_price: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub table_trend: String,
    pub table_days: String,
    pub phase: String,
    pub potential: String,
    pub recommendation: String,
    pub history: PriceHistory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DateColumn {
    index: usize,
    date: NaiveDate,
}

pub fn read_history_file(
    path: &Path,
    limit: Option<usize>,
) -> Result<Vec<HistoryRecord>, HistoryError> {
    let file = File::open(path)?;
    read_history(file, limit)
}

/// Read at most `limit` data rows (all when `None`), skipping malformed ones.
pub fn read_history<R: Read>(
    reader: R,
    limit: Option<usize>,
) -> Result<Vec<HistoryRecord>, HistoryError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(HistoryError::MissingHeader);
    }
    let date_columns = date_columns(&headers);
    debug!("{} dated price columns", date_columns.len());

    let mut records = Vec::new();
    for (row, result) in rdr.records().enumerate().take(limit.unwrap_or(usize::MAX)) {
        let record = result?;
        let parsed = parse_record(&record, &date_columns)
            .map_err(|source| HistoryError::Trend { row: row + 1, source })?;
        match parsed {
            Some(item) => records.push(item),
            None => debug!("skipping row {}: not an item row", row + 1),
        }
    }

    Ok(records)
}

fn date_columns(headers: &StringRecord) -> Vec<DateColumn> {
    headers
        .iter()
        .enumerate()
        .skip(FIRST_PRICE_COLUMN)
        .filter_map(|(index, header)| {
            let header = header.trim();
            if !has_date_prefix(header) {
                return None;
            }
            match parse_date(&header[..8]) {
                Some(date) => Some(DateColumn { index, date }),
                None => {
                    warn!("column {}: invalid date in header {:?}", index, header);
                    None
                }
            }
        })
        .collect()
}

fn parse_record(
    record: &StringRecord,
    date_columns: &[DateColumn],
) -> Result<Option<HistoryRecord>, TrendError> {
    if record.len() <= FIRST_PRICE_COLUMN {
        return Ok(None);
    }
    let cell = move |i: usize| record.get(i).unwrap_or("").trim();

    let name = cell(1);
    if name.is_empty() {
        return Ok(None);
    }

    let points = date_columns.iter().filter_map(|column| {
        parse_price(cell(column.index)).map(|price| PricePoint::new(column.date, price))
    });
    let history = PriceHistory::from_observations(points)?;

    Ok(Some(HistoryRecord {
        name: name.to_string(),
        status: cell(2).to_string(),
        current_price: parse_price(cell(5)),
        min_price: parse_price(cell(6)),
        max_price: parse_price(cell(7)),
        table_trend: cell(8).to_string(),
        table_days: cell(9).to_string(),
        phase: cell(10).to_string(),
        potential: cell(11).to_string(),
        recommendation: cell(12).to_string(),
        history,
    }))
}

/// `dd.dd.dd` at the start of the header
fn has_date_prefix(header: &str) -> bool {
    let bytes = header.as_bytes();
    bytes.len() >= 8
        && bytes[..8].iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a price such as `20,61 ₽`, `1 234,5` or `20.61`.
pub fn parse_price(s: &str) -> Option<f64> {
    let cleaned: String = s
        .chars()
        .filter(|c| !matches!(c, '₽' | ' ' | '\u{a0}'))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|price| price.is_finite())
}

/// Digits of the stored days text as a number, 0 when there are none.
pub fn parse_days(s: &str) -> u32 {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> String {
        let mut cols: Vec<String> = [
            "", "Название", "Статус", "Ссылка", "Купить", "Цена", "Мин", "Макс", "Тренд",
            "Дни", "Фаза", "Потенциал", "Рекомендация",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        cols.extend(
            ["01.01.24", "02.01.24 ночь", "02.01.24 день", "03.01.24", "Итого"]
                .iter()
                .map(|s| s.to_string()),
        );
        cols.join("\t")
    }

    fn row(name: &str, prices: [&str; 5]) -> String {
        let mut cols = vec![
            "", name, "active", "http://x", "", "20,61 ₽", "18", "22", "🟩", "3 дн.", "", "", "",
        ];
        cols.extend(prices);
        cols.join("\t")
    }

    fn table(rows: &[String]) -> String {
        let mut lines = vec![header()];
        lines.extend(rows.iter().cloned());
        lines.join("\n")
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("20,61 ₽"), Some(20.61));
        assert_eq!(parse_price("20.61"), Some(20.61));
        assert_eq!(parse_price("1\u{a0}234,5 ₽"), Some(1234.5));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price(" ₽"), None);
        assert_eq!(parse_price("n/a"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("12 дней"), 12);
        assert_eq!(parse_days("🕐 3"), 3);
        assert_eq!(parse_days(""), 0);
        assert_eq!(parse_days("—"), 0);
    }

    #[test]
    fn test_date_helpers() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_date("05.01.24"), Some(date));
        assert_eq!(parse_date("32.01.24"), None);
        assert_eq!(format_date(date), "05.01.24");
        assert!(has_date_prefix("02.01.24 день"));
        assert!(!has_date_prefix("2.01.24"));
        assert!(!has_date_prefix("Итого"));
    }

    #[test]
    fn test_reads_rows_and_keeps_later_same_day_price() {
        let data = table(&[row("Item A", ["10", "11", "12", "13,5 ₽", "999"])]);
        let records = read_history(data.as_bytes(), None).unwrap();

        assert_eq!(records.len(), 1);
        let item = &records[0];
        assert_eq!(item.name, "Item A");
        assert_eq!(item.current_price, Some(20.61));
        assert_eq!(item.table_trend, "🟩");
        assert_eq!(parse_days(&item.table_days), 3);
        // "Итого" is not a dated column; 02.01 day price replaces the night one
        assert_eq!(item.history.prices(), &[10.0, 12.0, 13.5]);
        assert_eq!(item.history.len(), 3);
    }

    #[test]
    fn test_skips_blank_cells_and_bad_rows() {
        let data = table(&[
            row("Item B", ["", "5", "", "6", ""]),
            row("", ["1", "2", "3", "4", "5"]),
            "\tshort row\t1".to_string(),
        ]);
        let records = read_history(data.as_bytes(), None).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].history.prices(), &[5.0, 6.0]);
    }

    #[test]
    fn test_limit_counts_data_rows() {
        let data = table(&[
            row("A", ["1", "2", "3", "4", ""]),
            row("B", ["1", "2", "3", "4", ""]),
            row("C", ["1", "2", "3", "4", ""]),
        ]);
        let records = read_history(data.as_bytes(), Some(2)).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(
            read_history("".as_bytes(), None),
            Err(HistoryError::MissingHeader)
        ));
    }
}
