pub mod builtin;
pub mod schema;

use crate::classify::LayoutTag;
use crate::error::EcadError;
use crate::Engine;
use regex::Regex;
use schema::{ClassifierDef, LayoutProfile, PatternDef};
use std::path::Path;

/// Load a layout profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<LayoutProfile, EcadError> {
    let content = std::fs::read_to_string(path).map_err(|e| EcadError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a layout profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<LayoutProfile, EcadError> {
    let profile: LayoutProfile =
        serde_json::from_str(json).map_err(|e| EcadError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a layout profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<LayoutProfile, EcadError> {
    let profile: LayoutProfile = serde_json::from_str(json).map_err(EcadError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed and that every pattern matches its
/// own example line.
pub fn validate_profile(profile: &LayoutProfile) -> Result<(), EcadError> {
    Engine::new(profile).map(|_| ())
}

pub(crate) fn validate_classifier(def: &ClassifierDef) -> Result<(), EcadError> {
    if def.window == 0 {
        return Err(EcadError::ProfileInvalid(
            "classifier window must be greater than zero".into(),
        ));
    }

    if def.rules.is_empty() {
        return Err(EcadError::ProfileInvalid(
            "classifier rules must not be empty".into(),
        ));
    }

    for rule in &def.rules {
        if !rule.layout.is_extractable() {
            return Err(EcadError::ProfileInvalid(format!(
                "classifier rule targets '{}' (expected DISTRIBUTION or ANALYTIC)",
                rule.layout
            )));
        }
        if rule.phrases.is_empty() || rule.phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(EcadError::ProfileInvalid(format!(
                "classifier rule for '{}' has an empty phrase list or a blank phrase",
                rule.layout
            )));
        }
    }

    if !def.rules.iter().any(|r| r.layout == LayoutTag::Distribution)
        || !def.rules.iter().any(|r| r.layout == LayoutTag::Analytic)
    {
        log::warn!("classifier rules do not cover both DISTRIBUTION and ANALYTIC layouts");
    }

    Ok(())
}

/// Compile a pattern, checking its named groups and its example line.
pub(crate) fn compile_pattern(
    field: &str,
    def: &PatternDef,
    required: &[&str],
) -> Result<Regex, EcadError> {
    let re = Regex::new(&def.pattern).map_err(|e| {
        EcadError::ProfileInvalid(format!("pattern '{}' does not compile: {}", field, e))
    })?;

    let names: Vec<&str> = re.capture_names().flatten().collect();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|group| !names.contains(group))
        .collect();
    if !missing.is_empty() {
        return Err(EcadError::ProfileInvalid(format!(
            "pattern '{}' lacks named group(s): {}",
            field,
            missing.join(", ")
        )));
    }

    if !re.is_match(&def.example) {
        return Err(EcadError::ProfileInvalid(format!(
            "pattern '{}' does not match its example '{}'",
            field, def.example
        )));
    }

    Ok(re)
}
