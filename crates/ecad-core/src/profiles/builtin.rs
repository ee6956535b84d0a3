use crate::error::EcadError;
use crate::profiles::schema::LayoutProfile;

const DEFAULT_JSON: &str = include_str!("../../../../profiles/default.json");
const PT_BR_JSON: &str = include_str!("../../../../profiles/pt-br.json");

/// Available predefined layout profiles.
pub const PRESETS: &[&str] = &["default", "pt-br"];

pub const DEFAULT_PRESET: &str = "default";

/// Load a predefined layout profile by name.
pub fn load_preset(name: &str) -> Result<LayoutProfile, EcadError> {
    let json = match name {
        "default" => DEFAULT_JSON,
        "pt-br" => PT_BR_JSON,
        _ => {
            return Err(EcadError::ProfileInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let profile: LayoutProfile = serde_json::from_str(json)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::LayoutTag;
    use crate::profiles::validate_profile;

    #[test]
    fn test_all_presets_are_valid() {
        for name in PRESETS {
            let profile = load_preset(name).unwrap();
            validate_profile(&profile).unwrap();
        }
    }

    #[test]
    fn test_default_preset_checks_analytic_first() {
        let p = load_preset("default").unwrap();
        assert_eq!(p.classifier.window, 600);
        assert_eq!(p.classifier.rules[0].layout, LayoutTag::Analytic);
        assert_eq!(p.classifier.rules[1].layout, LayoutTag::Distribution);
    }

    #[test]
    fn test_pt_br_preset_has_title_stop() {
        let p = load_preset("pt-br").unwrap();
        assert_eq!(p.analytic.title_stop.as_deref(), Some("NÃO"));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("xyz").is_err());
    }
}
