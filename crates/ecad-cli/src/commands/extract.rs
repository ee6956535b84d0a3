use ecad_core::classify::LayoutTag;
use ecad_core::error::EcadError;
use ecad_core::export::{write_csv, NumberStyle, Table};
use ecad_core::model::Extraction;
use ecad_core::Engine;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_files: &[PathBuf],
    engine: &Engine,
    output_format: &str,
    national: bool,
    out_dir: Option<&Path>,
) -> Result<(), EcadError> {
    let style = if national {
        NumberStyle::National
    } else {
        NumberStyle::Plain
    };
    let delimiter = if national { b';' } else { b',' };

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)?;
    }

    let multi = input_files.len() > 1;
    let mut written: HashSet<PathBuf> = HashSet::new();
    let mut failed = 0;

    for (i, path) in input_files.iter().enumerate() {
        let pages = match super::load_pages(path) {
            Ok(pages) => pages,
            Err(e) => {
                super::report_failure(path, &e);
                failed += 1;
                continue;
            }
        };
        let extraction = engine.extract(&pages);

        if !extraction.layout.is_extractable() {
            eprintln!("{}: {}", path.display(), not_extracted_reason(extraction.layout));
            continue;
        }

        if extraction.records.is_empty() {
            eprintln!(
                "{}: {} but no records found",
                path.display(),
                extraction.layout.label()
            );
            continue;
        }

        match out_dir {
            Some(dir) => {
                let ext = if output_format == "json" { "json" } else { "csv" };
                let target = output_path(dir, path, ext);
                if !written.insert(target.clone()) {
                    log::warn!("{} overwrites an earlier output", target.display());
                    eprintln!(
                        "{}: warning: {} was already written by an earlier input and is replaced",
                        path.display(),
                        target.display()
                    );
                }
                if let Err(e) = write_output(&target, &extraction, output_format, style, delimiter)
                {
                    super::report_failure(path, &e);
                    failed += 1;
                    continue;
                }
                eprintln!(
                    "{}: {} record(s) ({}), written to {}",
                    path.display(),
                    extraction.records.len(),
                    extraction.layout.label(),
                    target.display()
                );
            }
            None => {
                if multi && output_format == "table" {
                    if i > 0 {
                        println!();
                    }
                    println!("--- {} ({}) ---\n", path.display(), extraction.layout);
                }
                print(&extraction, output_format, style, delimiter)?;
            }
        }
    }

    super::batch_result(failed, input_files.len())
}

fn not_extracted_reason(layout: LayoutTag) -> &'static str {
    match layout {
        LayoutTag::Empty => "no extractable text on the first page (scanned PDF?)",
        _ => "layout not recognized",
    }
}

fn print(
    extraction: &Extraction,
    output_format: &str,
    style: NumberStyle,
    delimiter: u8,
) -> Result<(), EcadError> {
    match output_format {
        "json" => output::json::print(extraction)?,
        "csv" => {
            let table = Table::from_records(&extraction.records, style);
            write_csv(&table, std::io::stdout().lock(), delimiter)?;
        }
        _ => output::table::print(&Table::from_records(&extraction.records, style)),
    }
    Ok(())
}

/// Output file name for an input: `<stem>_DATA.<ext>`.
fn output_path(dir: &Path, input: &Path, ext: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "report".to_string());
    dir.join(format!("{stem}_DATA.{ext}"))
}

fn write_output(
    target: &Path,
    extraction: &Extraction,
    output_format: &str,
    style: NumberStyle,
    delimiter: u8,
) -> Result<(), EcadError> {
    if output_format == "json" {
        std::fs::write(target, serde_json::to_string_pretty(extraction)?)?;
        return Ok(());
    }

    let file = std::fs::File::create(target)?;
    write_csv(&Table::from_records(&extraction.records, style), file, delimiter)?;
    Ok(())
}
