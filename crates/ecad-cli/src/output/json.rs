use ecad_core::error::EcadError;
use ecad_core::model::Extraction;

pub fn print(extraction: &Extraction) -> Result<(), EcadError> {
    let json = serde_json::to_string_pretty(extraction)?;
    println!("{json}");
    Ok(())
}
