use ecad_core::error::EcadError;
use ecad_core::profiles::builtin;
use std::collections::HashMap;
use std::path::Path;

pub fn list() -> Result<(), EcadError> {
    println!("Available layout profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        println!("  {:<8} {} (v{})", name, profile.name, profile.version);
        if let Some(ref desc) = profile.description {
            println!("           {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), EcadError> {
    let profile = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), EcadError> {
    let profile = ecad_core::profiles::load_profile(file)?;

    println!("Profile '{}' (v{}) is valid.", profile.name, profile.version);
    println!("  Classifier window: {} characters", profile.classifier.window);
    for rule in &profile.classifier.rules {
        println!("  {:<12} {}", rule.layout.to_string(), rule.phrases.join(" | "));
    }

    // Phrases that appear under more than one layout can never reach the later rule.
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut warnings = Vec::new();
    for rule in &profile.classifier.rules {
        for phrase in &rule.phrases {
            let key = phrase.to_uppercase();
            match seen.get(&key) {
                Some(layout) if *layout != rule.layout.to_string() => warnings.push(format!(
                    "phrase '{}' is listed for {} and {}; {} always wins",
                    phrase, layout, rule.layout, layout
                )),
                Some(_) => {}
                None => {
                    seen.insert(key, rule.layout.to_string());
                }
            }
        }
    }

    if profile.distribution.work.is_none() {
        warnings.push("no distribution.work pattern: WORK column will be empty".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
