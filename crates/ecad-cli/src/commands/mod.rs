pub mod classify;
pub mod extract;
pub mod profiles;

use ecad_core::error::EcadError;
use ecad_core::extraction::pdftotext::PdftotextExtractor;
use ecad_core::extraction::{pages_from_text, PageContent, PdfExtractor};
use ecad_core::Engine;
use std::path::Path;

/// Build the engine from a custom profile file, or from a preset.
pub fn load_engine(preset: &str, profile: Option<&Path>) -> Result<Engine, EcadError> {
    let engine = match profile {
        Some(path) => Engine::new(&ecad_core::profiles::load_profile(path)?)?,
        None => Engine::from_preset(preset)?,
    };
    log::info!("using layout profile '{}'", engine.profile_name());
    Ok(engine)
}

/// Read an input file into pages, choosing the backend by extension.
pub fn load_pages(path: &Path) -> Result<Vec<PageContent>, EcadError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => {
            let pdf_bytes = std::fs::read(path)?;
            PdftotextExtractor::new().extract_pages(&pdf_bytes)
        }
        "txt" => {
            let text = std::fs::read_to_string(path)?;
            Ok(pages_from_text(&text))
        }
        _ => Err(EcadError::UnsupportedInput(path.to_path_buf())),
    }
}

/// Report a per-file failure without stopping the batch.
pub fn report_failure(path: &Path, err: &EcadError) {
    log::warn!("skipping {}: {err}", path.display());
    eprintln!("{}: error: {err}", path.display());
}

/// Turn the failure count of a batch into the command's result.
pub fn batch_result(failed: usize, total: usize) -> Result<(), EcadError> {
    if failed == 0 {
        Ok(())
    } else {
        Err(EcadError::BatchFailed { failed, total })
    }
}
