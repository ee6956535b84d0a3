use serde::{Deserialize, Serialize};
use std::fmt;

/// The report layout a document follows, decided from its first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutTag {
    /// Financial statement: rubrics with gross, share and received values.
    Distribution,
    /// Cadastral analytic: works followed by their rightsholders and quotas.
    Analytic,
    /// Text was found but no known header phrase matched.
    Unknown,
    /// The first page is missing or has no extractable text.
    Empty,
}

impl LayoutTag {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            LayoutTag::Distribution => "Rightsholder distribution statement",
            LayoutTag::Analytic => "Analytic of connected rightsholder",
            LayoutTag::Unknown => "Unknown layout",
            LayoutTag::Empty => "No extractable text",
        }
    }

    /// Whether an extractor exists for this layout.
    pub fn is_extractable(&self) -> bool {
        matches!(self, LayoutTag::Distribution | LayoutTag::Analytic)
    }
}

impl fmt::Display for LayoutTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutTag::Distribution => write!(f, "DISTRIBUTION"),
            LayoutTag::Analytic => write!(f, "ANALYTIC"),
            LayoutTag::Unknown => write!(f, "UNKNOWN"),
            LayoutTag::Empty => write!(f, "EMPTY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_uppercase_tag() {
        let json = serde_json::to_string(&LayoutTag::Analytic).unwrap();
        assert_eq!(json, "\"ANALYTIC\"");
        let tag: LayoutTag = serde_json::from_str("\"DISTRIBUTION\"").unwrap();
        assert_eq!(tag, LayoutTag::Distribution);
    }

    #[test]
    fn test_display_matches_serialized_form() {
        for tag in [
            LayoutTag::Distribution,
            LayoutTag::Analytic,
            LayoutTag::Unknown,
            LayoutTag::Empty,
        ] {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json.trim_matches('"'), tag.to_string());
        }
    }

    #[test]
    fn test_only_known_layouts_are_extractable() {
        assert!(LayoutTag::Distribution.is_extractable());
        assert!(LayoutTag::Analytic.is_extractable());
        assert!(!LayoutTag::Unknown.is_extractable());
        assert!(!LayoutTag::Empty.is_extractable());
    }
}
