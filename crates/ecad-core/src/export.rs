use crate::error::EcadError;
use crate::model::{AnalyticRecord, DistributionRecord, RecordSet};
use crate::parsing::values::render_decimal;
use rust_decimal::Decimal;
use std::io::Write;

pub const DISTRIBUTION_HEADERS: &[&str] = &[
    "ISRC",
    "WORK",
    "RUBRIC",
    "PERIOD",
    "GROSS_VALUE",
    "SHARE_PERCENT",
    "RECEIVED_VALUE",
    "REPORT_TYPE",
];

pub const ANALYTIC_HEADERS: &[&str] = &[
    "WORK_ID",
    "WORK_TITLE",
    "RIGHTSHOLDER_NAME",
    "ASSOCIATION_CODE",
    "QUOTA_SHARE",
    "REPORT_TYPE",
];

/// How numeric cells are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberStyle {
    /// `1234.56`
    #[default]
    Plain,
    /// `1.234,56`
    National,
}

impl NumberStyle {
    fn render(&self, value: Decimal) -> String {
        match self {
            NumberStyle::Plain => value.to_string(),
            NumberStyle::National => render_decimal(value),
        }
    }
}

/// A header row plus data rows, ready for a spreadsheet sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_records(records: &RecordSet, style: NumberStyle) -> Table {
        match records {
            RecordSet::None => Table {
                headers: Vec::new(),
                rows: Vec::new(),
            },
            RecordSet::Distribution(records) => Table {
                headers: to_strings(DISTRIBUTION_HEADERS),
                rows: records.iter().map(|r| distribution_row(r, style)).collect(),
            },
            RecordSet::Analytic(records) => Table {
                headers: to_strings(ANALYTIC_HEADERS),
                rows: records.iter().map(|r| analytic_row(r, style)).collect(),
            },
        }
    }
}

fn to_strings(headers: &[&str]) -> Vec<String> {
    headers.iter().map(|h| h.to_string()).collect()
}

fn distribution_row(r: &DistributionRecord, style: NumberStyle) -> Vec<String> {
    vec![
        r.isrc.clone(),
        r.work.clone().unwrap_or_default(),
        r.rubric.clone(),
        r.period.clone().unwrap_or_default(),
        style.render(r.gross_value),
        style.render(r.share_percent),
        style.render(r.received_value),
        r.report_type.to_string(),
    ]
}

fn analytic_row(r: &AnalyticRecord, style: NumberStyle) -> Vec<String> {
    vec![
        r.work_id.clone(),
        r.work_title.clone(),
        r.rightsholder_name.clone(),
        r.association_code.clone(),
        style.render(r.quota_share),
        r.report_type.to_string(),
    ]
}

/// Write a table as CSV with a header row.
///
/// National-style numbers contain commas; pass `b';'` as the delimiter to
/// keep them unquoted for spreadsheet locales that expect it.
pub fn write_csv<W: Write>(table: &Table, writer: W, delimiter: u8) -> Result<(), EcadError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    if !table.headers.is_empty() {
        wtr.write_record(&table.headers)?;
    }
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
