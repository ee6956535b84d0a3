use ecad_core::error::EcadError;
use ecad_core::Engine;
use serde_json::json;
use std::path::PathBuf;

pub fn run(input_files: &[PathBuf], engine: &Engine, output_format: &str) -> Result<(), EcadError> {
    let mut results = Vec::new();
    let mut failed = 0;

    for path in input_files {
        match super::load_pages(path) {
            Ok(pages) => results.push((path, engine.classify(&pages))),
            Err(e) => {
                super::report_failure(path, &e);
                failed += 1;
            }
        }
    }

    match output_format {
        "json" => {
            let value: Vec<_> = results
                .iter()
                .map(|(path, layout)| {
                    json!({
                        "file": path.display().to_string(),
                        "layout": layout,
                        "label": layout.label(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            let width = results
                .iter()
                .map(|(path, _)| path.display().to_string().len())
                .max()
                .unwrap_or(10);
            for (path, layout) in &results {
                println!(
                    "{:<width$}  {:<12}  {}",
                    path.display().to_string(),
                    layout.to_string(),
                    layout.label(),
                    width = width
                );
            }
        }
    }

    super::batch_result(failed, input_files.len())
}
