use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SuncheckError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    /// The line after a recognised subsection label is not a number.
    #[error(
        "{report}: page {page}, line {line}: expected a numeric value for '{subsection}', found '{found}'"
    )]
    MalformedValueLine {
        report: String,
        page: usize,
        line: usize,
        subsection: String,
        found: String,
    },

    #[error("{report}: could not read an energy label from header '{header}'")]
    UnrecognizedEnergyLabel { report: String, header: String },

    #[error("report file name '{name}' is not a date like 'June 3'")]
    InvalidReportName { name: String },

    #[error("no PDF reports found in {}", .0.display())]
    NoReports(PathBuf),

    #[error("failed to load classification table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid classification table: {0}")]
    TableInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
