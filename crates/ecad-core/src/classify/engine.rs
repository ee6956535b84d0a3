use crate::classify::outcome::LayoutTag;
use crate::extraction::PageContent;
use crate::profiles::schema::ClassifierDef;

/// Decides a document's layout from a bounded prefix of its first page.
///
/// Rules are checked in order and the first rule with a phrase present in
/// the uppercased prefix wins, so more specific phrases must come first.
#[derive(Debug, Clone)]
pub struct Classifier {
    window: usize,
    rules: Vec<(LayoutTag, Vec<String>)>,
}

impl Classifier {
    pub fn new(def: &ClassifierDef) -> Self {
        let rules = def
            .rules
            .iter()
            .map(|rule| {
                let phrases = rule.phrases.iter().map(|p| p.to_uppercase()).collect();
                (rule.layout, phrases)
            })
            .collect();

        Classifier {
            window: def.window,
            rules,
        }
    }

    /// Classify a document. Never looks past the first page.
    pub fn classify(&self, pages: &[PageContent]) -> LayoutTag {
        match pages.first().and_then(PageContent::text) {
            Some(text) => self.classify_text(text),
            None => LayoutTag::Empty,
        }
    }

    /// Classify the text of a first page.
    pub fn classify_text(&self, text: &str) -> LayoutTag {
        if text.trim().is_empty() {
            return LayoutTag::Empty;
        }

        // Cut before uppercasing: some characters (ligatures, ß) expand.
        let prefix = text.chars().take(self.window).collect::<String>().to_uppercase();

        self.rules
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| prefix.contains(p.as_str())))
            .map(|(layout, _)| *layout)
            .unwrap_or(LayoutTag::Unknown)
    }
}
