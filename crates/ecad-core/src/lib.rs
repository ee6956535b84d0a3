pub mod classify;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profiles;

use std::sync::LazyLock;

use classify::{Classifier, LayoutTag};
use error::EcadError;
use extraction::{PageContent, PdfExtractor};
use model::{AnalyticRecord, DistributionRecord, Extraction, RecordSet, ScanStats};
use parsing::analytic::AnalyticScanner;
use parsing::distribution::DistributionScanner;
use profiles::builtin::{load_preset, DEFAULT_PRESET};
use profiles::schema::LayoutProfile;

pub use parsing::values::{normalize_decimal, render_decimal};

/// A compiled layout profile: one classifier and one scanner per layout.
#[derive(Debug, Clone)]
pub struct Engine {
    name: String,
    classifier: Classifier,
    distribution: DistributionScanner,
    analytic: AnalyticScanner,
}

impl Engine {
    /// Validate and compile a profile.
    pub fn new(profile: &LayoutProfile) -> Result<Self, EcadError> {
        profiles::validate_classifier(&profile.classifier)?;
        Ok(Engine {
            name: profile.name.clone(),
            classifier: Classifier::new(&profile.classifier),
            distribution: DistributionScanner::new(&profile.distribution)?,
            analytic: AnalyticScanner::new(&profile.analytic)?,
        })
    }

    /// Compile one of the built-in presets.
    pub fn from_preset(name: &str) -> Result<Self, EcadError> {
        Self::new(&load_preset(name)?)
    }

    pub fn profile_name(&self) -> &str {
        &self.name
    }

    pub fn classify(&self, pages: &[PageContent]) -> LayoutTag {
        self.classifier.classify(pages)
    }

    pub fn extract_distribution(&self, pages: &[PageContent]) -> Vec<DistributionRecord> {
        parsing::scan(&self.distribution, pages)
    }

    pub fn extract_analytic(&self, pages: &[PageContent]) -> Vec<AnalyticRecord> {
        parsing::scan(&self.analytic, pages)
    }

    /// Classify a document and run the matching extractor.
    ///
    /// UNKNOWN and EMPTY documents are not errors; they produce an empty
    /// record set.
    pub fn extract(&self, pages: &[PageContent]) -> Extraction {
        let layout = self.classify(pages);
        log::info!("classified document as {} ({})", layout, layout.label());

        let records = match layout {
            LayoutTag::Distribution => RecordSet::Distribution(self.extract_distribution(pages)),
            LayoutTag::Analytic => RecordSet::Analytic(self.extract_analytic(pages)),
            LayoutTag::Unknown | LayoutTag::Empty => RecordSet::None,
        };

        let empty_pages = pages.iter().filter(|p| p.text().is_none()).count();
        let stats = ScanStats {
            pages: pages.len(),
            empty_pages,
            lines: if layout.is_extractable() {
                parsing::document_lines(pages).count()
            } else {
                0
            },
            records: records.len(),
        };
        log::debug!(
            "scanned {} line(s) on {} page(s) ({} without text), {} record(s)",
            stats.lines,
            stats.pages,
            stats.empty_pages,
            stats.records
        );

        Extraction {
            layout,
            records,
            stats,
        }
    }
}

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(|| {
    Engine::from_preset(DEFAULT_PRESET).expect("built-in default profile is valid")
});

/// The engine compiled from the built-in default profile.
pub fn default_engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// Classify a document with the default profile.
pub fn classify(pages: &[PageContent]) -> LayoutTag {
    DEFAULT_ENGINE.classify(pages)
}

/// Extract distribution records with the default profile.
pub fn extract_distribution(pages: &[PageContent]) -> Vec<DistributionRecord> {
    DEFAULT_ENGINE.extract_distribution(pages)
}

/// Extract analytic records with the default profile.
pub fn extract_analytic(pages: &[PageContent]) -> Vec<AnalyticRecord> {
    DEFAULT_ENGINE.extract_analytic(pages)
}

/// Main API entry point: extract text from a PDF, classify it and extract
/// its records.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    engine: &Engine,
) -> Result<Extraction, EcadError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    log::debug!(
        "{} returned {} page(s)",
        extractor.backend_name(),
        pages.len()
    );
    Ok(engine.extract(&pages))
}
