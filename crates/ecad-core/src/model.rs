use crate::classify::LayoutTag;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One financial row of a distribution statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DistributionRecord {
    /// Last ISRC seen before this row, or the profile default.
    pub isrc: String,
    /// Last work header seen before this row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    pub rubric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub gross_value: Decimal,
    pub share_percent: Decimal,
    pub received_value: Decimal,
    pub report_type: LayoutTag,
}

/// One rightsholder quota line of an analytic report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AnalyticRecord {
    pub work_id: String,
    #[serde(default)]
    pub work_title: String,
    pub rightsholder_name: String,
    pub association_code: String,
    pub quota_share: Decimal,
    pub report_type: LayoutTag,
}

/// Records of exactly one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum RecordSet {
    /// No extractor ran (UNKNOWN or EMPTY layout).
    None,
    Distribution(Vec<DistributionRecord>),
    Analytic(Vec<AnalyticRecord>),
}

impl RecordSet {
    pub fn len(&self) -> usize {
        match self {
            RecordSet::None => 0,
            RecordSet::Distribution(r) => r.len(),
            RecordSet::Analytic(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counters for one document scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub pages: usize,
    pub empty_pages: usize,
    pub lines: usize,
    pub records: usize,
}

/// Result of classifying and extracting one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub layout: LayoutTag,
    pub records: RecordSet,
    pub stats: ScanStats,
}
