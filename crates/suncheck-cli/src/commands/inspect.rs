use std::path::PathBuf;
use suncheck_core::classify::LineClassifier;
use suncheck_core::error::SuncheckError;
use suncheck_core::extraction::pdftotext::PdftotextExtractor;
use suncheck_core::extraction::PdfExtractor;

use crate::output;

pub fn run(
    pdf_file: PathBuf,
    table_file: Option<PathBuf>,
    show_all: bool,
) -> Result<(), SuncheckError> {
    let table = super::load_table(table_file.as_deref())?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let pages = PdftotextExtractor::new().extract_pages(&pdf_bytes)?;

    let classifier = LineClassifier::new(&table);
    print!(
        "{}",
        output::table::format_classified(&pages, &classifier, show_all)
    );

    Ok(())
}
