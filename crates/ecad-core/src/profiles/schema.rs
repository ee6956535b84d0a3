use crate::classify::LayoutTag;
use serde::{Deserialize, Serialize};

/// A layout profile: the header phrases and line grammars of one family of
/// royalty reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    pub classifier: ClassifierDef,
    pub distribution: DistributionDef,
    pub analytic: AnalyticDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierDef {
    /// Number of leading characters of the first page that are inspected.
    #[serde(default = "default_window")]
    pub window: usize,
    /// Ordered rules; the first one with a matching phrase wins.
    pub rules: Vec<ClassifierRuleDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierRuleDef {
    pub layout: LayoutTag,
    pub phrases: Vec<String>,
}

/// Grammar of the financial distribution statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionDef {
    /// ISRC reported for rows seen before any ISRC line.
    #[serde(default = "default_isrc")]
    pub default_isrc: String,
    /// Line carrying a work identifier. Group: `isrc`.
    pub isrc: PatternDef,
    /// Line opening a work block. Group: `work`.
    #[serde(default)]
    pub work: Option<PatternDef>,
    /// Financial row. Groups: `label`, `gross`, `share`, `received`, optional `period`.
    pub row: PatternDef,
}

/// Grammar of the rightsholder analytic report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticDef {
    /// Work header line. Groups: `work`, optional `title`.
    pub header: PatternDef,
    /// Rightsholder line. Groups: `name`, `association`, `share`.
    pub holder: PatternDef,
    /// Marker after which the captured title is discarded.
    #[serde(default)]
    pub title_stop: Option<String>,
}

/// A regular expression with named groups and a sample line it must match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDef {
    pub pattern: String,
    pub example: String,
}

fn default_window() -> usize {
    600
}

fn default_isrc() -> String {
    "N/A".to_string()
}
