pub mod classify;
pub mod cursor;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod model;
pub mod scanner;
pub mod store;
pub mod table;

use std::path::{Path, PathBuf};

use classify::LineClassifier;
use error::SuncheckError;
use extraction::PdfExtractor;
use model::Report;
use scanner::SectionScanner;
use store::{ExtractedData, MeasurementStore};
use table::schema::ClassificationTable;
use tracing::info;

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub data: ExtractedData,
    /// Report sources in day order (day 1 first).
    pub reports: Vec<String>,
    pub measurements: usize,
}

/// Main API entry point: extract measurements from reports already in
/// chronological order.
///
/// Each report is scanned in turn into one shared store. Any fault aborts
/// the whole run; no partial data is returned.
pub fn extract_reports(
    reports: &[Report],
    table: &ClassificationTable,
) -> Result<Extraction, SuncheckError> {
    let classifier = LineClassifier::new(table);
    let mut store = MeasurementStore::new();
    let mut measurements = 0;

    for report in reports {
        let summary = SectionScanner::new(classifier, report).scan(&mut store)?;
        info!(
            report = %report.source,
            day = report.day,
            sections = summary.sections,
            measurements = summary.measurements,
            "report scanned"
        );
        measurements += summary.measurements;
    }

    Ok(Extraction {
        data: store.finalize(),
        reports: reports.iter().map(|r| r.source.clone()).collect(),
        measurements,
    })
}

/// Extract measurements from PDF files.
///
/// Files are ordered by the date in their names; the 1-based position in
/// that order becomes the day index.
pub fn extract_pdfs(
    paths: Vec<PathBuf>,
    extractor: &dyn PdfExtractor,
    table: &ClassificationTable,
) -> Result<Extraction, SuncheckError> {
    let ordered = discovery::order_reports(paths)?;
    let reports = load_reports(&ordered, extractor)?;
    extract_reports(&reports, table)
}

/// Extract measurements from every PDF report in a directory.
pub fn extract_dir(
    dir: &Path,
    extractor: &dyn PdfExtractor,
    table: &ClassificationTable,
) -> Result<Extraction, SuncheckError> {
    let ordered = discovery::discover_reports(dir)?;
    let reports = load_reports(&ordered, extractor)?;
    extract_reports(&reports, table)
}

/// Read and text-extract ordered PDF files into dated reports.
fn load_reports(
    ordered: &[PathBuf],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<Report>, SuncheckError> {
    let mut reports = Vec::with_capacity(ordered.len());
    for (i, path) in ordered.iter().enumerate() {
        let pdf_bytes = std::fs::read(path)?;
        let pages = extractor.extract_pages(&pdf_bytes)?;
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        info!(
            report = %source,
            pages = pages.len(),
            backend = extractor.backend_name(),
            "text extracted"
        );
        reports.push(Report::new(i as u32 + 1, source, pages));
    }
    Ok(reports)
}
