use std::path::PathBuf;
use suncheck_core::error::SuncheckError;
use suncheck_core::extraction::pdftotext::PdftotextExtractor;

use crate::output;

pub fn run(
    inputs: Vec<PathBuf>,
    output_file: Option<PathBuf>,
    table_file: Option<PathBuf>,
) -> Result<(), SuncheckError> {
    let table = super::load_table(table_file.as_deref())?;
    let extractor = PdftotextExtractor::new();

    let extraction = if inputs.len() == 1 && inputs[0].is_dir() {
        suncheck_core::extract_dir(&inputs[0], &extractor, &table)?
    } else {
        suncheck_core::extract_pdfs(inputs, &extractor, &table)?
    };

    let json = output::json::to_string(&extraction.data)?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} measurement(s) from {} report(s), written to {}",
                extraction.measurements,
                extraction.reports.len(),
                path.display()
            );
            eprint!("{}", output::table::format_summary(&extraction));
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}
