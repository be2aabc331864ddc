//! Integration tests for the extraction pipeline.
//!
//! Uses a MockExtractor that maps PDF bytes to pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use std::collections::HashMap;
use std::path::PathBuf;

use suncheck_core::error::SuncheckError;
use suncheck_core::extraction::{PageContent, PdfExtractor};
use suncheck_core::model::{Instrument, Particle, Report};
use suncheck_core::table::schema::ClassificationTable;
use suncheck_core::{extract_dir, extract_pdfs, extract_reports};

/// Returns the pages registered for the file content it is handed.
struct MockExtractor {
    by_content: HashMap<Vec<u8>, Vec<PageContent>>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, SuncheckError> {
        self.by_content
            .get(pdf_bytes)
            .cloned()
            .ok_or_else(|| SuncheckError::Extraction("unknown test document".into()))
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent::new(number, lines.iter().map(|s| s.to_string()).collect())
}

fn report(day: u32, pages: Vec<PageContent>) -> Report {
    Report::new(day, format!("day {day}"), pages)
}

/// A two-page report with every header grammar.
fn full_report(dose_6mv: &str, dose_9mev: &str) -> Vec<PageContent> {
    vec![
        page(
            1,
            &[
                "SunCheck Machine",
                "Daily QA Summary",
                "Photon constancy with quad wedges - 6 MV",
                "Adjusted Dose / MU",
                "1.004",
                "Flatness",
                "1.023",
                "Photon - 6 MV",
                "Dose / MU",
            ],
        ),
        page(
            2,
            &[
                dose_6mv,
                "Electron constancy with quad wedges - 9 MeV",
                "Adjusted Dose / MU",
                "0.998",
                "Electron constancy - VW Stack - 9 MeV",
                "Dose / MU",
                dose_9mev,
                "Page 2 of 2",
            ],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Example scenario: photon section ends exactly at the electron header
// ---------------------------------------------------------------------------
#[test]
fn photon_section_ends_at_electron_header() {
    let reports = vec![report(
        1,
        vec![page(
            1,
            &[
                "Photon - 6 MV",
                "quad wedges constancy",
                "Flatness",
                "1.023",
                "Symmetry",
                "0.998",
                "Electron constancy with quad wedges - 9 MeV",
            ],
        )],
    )];

    let result = extract_reports(&reports, &ClassificationTable::default()).unwrap();
    let data = &result.data;

    assert_eq!(
        data.series(Instrument::Profiler, Particle::Photon, "6 MV", "Flatness"),
        Some(&[1.023][..])
    );
    assert_eq!(
        data.series(Instrument::Profiler, Particle::Photon, "6 MV", "Symmetry"),
        Some(&[0.998][..])
    );
    // The electron header opened its own (empty) section.
    assert_eq!(
        data.energies(Instrument::Profiler, Particle::Electron),
        vec!["9 MeV"]
    );
    assert_eq!(result.measurements, 2);
}

// ---------------------------------------------------------------------------
// Series accumulate across reports in day order
// ---------------------------------------------------------------------------
#[test]
fn multiple_reports_accumulate_by_day() {
    let reports = vec![
        report(1, full_report("1.001", "1.010")),
        report(2, full_report("1.002", "1.020")),
        report(3, full_report("1.003", "1.030")),
    ];

    let result = extract_reports(&reports, &ClassificationTable::default()).unwrap();
    let data = &result.data;

    assert_eq!(
        data.series(Instrument::Chamber, Particle::Photon, "6 MV", "Dose / MU"),
        Some(&[1.001, 1.002, 1.003][..])
    );
    assert_eq!(
        data.series(Instrument::Chamber, Particle::Electron, "9 MeV", "Dose / MU"),
        Some(&[1.010, 1.020, 1.030][..])
    );
    assert_eq!(
        data.series(Instrument::Profiler, Particle::Photon, "6 MV", "Adjusted Dose / MU"),
        Some(&[1.004, 1.004, 1.004][..])
    );
    assert_eq!(
        data.series(Instrument::Profiler, Particle::Electron, "9 MeV", "Adjusted Dose / MU"),
        Some(&[0.998, 0.998, 0.998][..])
    );
    assert_eq!(data.series_count(), 5);
    assert_eq!(result.measurements, 15);
    assert_eq!(result.reports, vec!["day 1", "day 2", "day 3"]);
}

// ---------------------------------------------------------------------------
// Label is the last line of page 1, value the first line of page 2
// ---------------------------------------------------------------------------
#[test]
fn value_across_page_boundary_stays_in_section() {
    let reports = vec![report(1, full_report("1.005", "1.0"))];
    let result = extract_reports(&reports, &ClassificationTable::default()).unwrap();

    assert_eq!(
        result
            .data
            .series(Instrument::Chamber, Particle::Photon, "6 MV", "Dose / MU"),
        Some(&[1.005][..])
    );
}

// ---------------------------------------------------------------------------
// A malformed value aborts the whole run
// ---------------------------------------------------------------------------
#[test]
fn malformed_value_aborts_run() {
    let reports = vec![
        report(1, full_report("1.001", "1.010")),
        report(2, full_report("1.002", "see note")),
    ];

    let result = extract_reports(&reports, &ClassificationTable::default());

    match result {
        Err(SuncheckError::MalformedValueLine {
            report,
            page,
            subsection,
            found,
            ..
        }) => {
            assert_eq!(report, "day 2");
            assert_eq!(page, 2);
            assert_eq!(subsection, "Dose / MU");
            assert_eq!(found, "see note");
        }
        other => panic!("expected MalformedValueLine, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Finalized output is plain nested JSON
// ---------------------------------------------------------------------------
#[test]
fn finalized_output_serializes_to_nested_json() {
    let reports = vec![
        report(1, full_report("1.001", "1.010")),
        report(2, full_report("1.002", "1.020")),
    ];
    let result = extract_reports(&reports, &ClassificationTable::default()).unwrap();

    let json = serde_json::to_value(&result.data).unwrap();
    assert_eq!(
        json["IC"]["photon"]["6 MV"]["Dose / MU"],
        serde_json::json!([1.001, 1.002])
    );
    assert_eq!(
        json["ICP"]["electron"]["9 MeV"]["Adjusted Dose / MU"],
        serde_json::json!([0.998, 0.998])
    );
    assert!(json["IC"]["electron"].is_object());
}

// ---------------------------------------------------------------------------
// A custom table extends classification without touching the scanner
// ---------------------------------------------------------------------------
#[test]
fn custom_table_adds_keyword() {
    let mut table = ClassificationTable::default();
    table.data_keywords.push("Output".into());
    let reports = vec![report(
        1,
        vec![page(1, &["Photon - 10 MV", "Output", "99.8", "Flatness", "1.0"])],
    )];

    let default_result = extract_reports(&reports, &ClassificationTable::default()).unwrap();
    assert!(default_result
        .data
        .series(Instrument::Chamber, Particle::Photon, "10 MV", "Output")
        .is_none());

    let result = extract_reports(&reports, &table).unwrap();
    assert_eq!(
        result
            .data
            .series(Instrument::Chamber, Particle::Photon, "10 MV", "Output"),
        Some(&[99.8][..])
    );
}

// ---------------------------------------------------------------------------
// PDF files are ordered by the date in their names
// ---------------------------------------------------------------------------
#[test]
fn pdfs_are_ordered_by_report_date() {
    let dir = tempfile::tempdir().unwrap();
    let mut by_content = HashMap::new();
    for (name, dose) in [("July 1.pdf", "3.0"), ("June 12.pdf", "2.0"), ("June 3.pdf", "1.0")] {
        let content = name.as_bytes().to_vec();
        std::fs::write(dir.path().join(name), &content).unwrap();
        by_content.insert(
            content,
            vec![page(1, &["Photon - 6 MV", "Dose / MU", dose])],
        );
    }
    let extractor = MockExtractor { by_content };
    let table = ClassificationTable::default();

    let paths: Vec<PathBuf> = ["July 1.pdf", "June 3.pdf", "June 12.pdf"]
        .iter()
        .map(|n| dir.path().join(n))
        .collect();
    let from_paths = extract_pdfs(paths, &extractor, &table).unwrap();
    assert_eq!(
        from_paths.reports,
        vec!["June 3.pdf", "June 12.pdf", "July 1.pdf"]
    );
    assert_eq!(
        from_paths
            .data
            .series(Instrument::Chamber, Particle::Photon, "6 MV", "Dose / MU"),
        Some(&[1.0, 2.0, 3.0][..])
    );

    let from_dir = extract_dir(dir.path(), &extractor, &table).unwrap();
    assert_eq!(from_dir.data, from_paths.data);
}

#[test]
fn badly_named_pdf_is_rejected() {
    let extractor = MockExtractor {
        by_content: HashMap::new(),
    };
    let result = extract_pdfs(
        vec![PathBuf::from("June 3.pdf"), PathBuf::from("final.pdf")],
        &extractor,
        &ClassificationTable::default(),
    );
    assert!(matches!(
        result,
        Err(SuncheckError::InvalidReportName { .. })
    ));
}
