pub mod builtin;
pub mod schema;

use crate::error::SuncheckError;
use schema::ClassificationTable;
use std::path::Path;

/// Load a classification table from a JSON file.
pub fn load_table(path: &Path) -> Result<ClassificationTable, SuncheckError> {
    let content = std::fs::read_to_string(path).map_err(|e| SuncheckError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_table(&content, path)
}

/// Parse a classification table from a JSON string.
pub fn parse_table(json: &str, source: &Path) -> Result<ClassificationTable, SuncheckError> {
    let table: ClassificationTable =
        serde_json::from_str(json).map_err(|e| SuncheckError::TableLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_table(&table)?;
    Ok(table)
}

/// Parse a classification table from a JSON string (no file path context).
pub fn parse_table_str(json: &str) -> Result<ClassificationTable, SuncheckError> {
    let table: ClassificationTable = serde_json::from_str(json).map_err(SuncheckError::Json)?;
    validate_table(&table)?;
    Ok(table)
}

/// Validate that a table keeps headers and data lines apart.
///
/// Every header marker must contain one of the exclusions, otherwise a
/// header that also mentions a keyword would be read as a data label.
pub fn validate_table(table: &ClassificationTable) -> Result<(), SuncheckError> {
    if table.data_keywords.is_empty() {
        return Err(SuncheckError::TableInvalid(
            "data_keywords must not be empty".into(),
        ));
    }

    let all_terms = table
        .data_keywords
        .iter()
        .chain(&table.data_exclusions)
        .chain(std::iter::once(&table.profiler_marker));
    for term in all_terms {
        if term.is_empty() {
            return Err(SuncheckError::TableInvalid(
                "keywords, exclusions and markers must not be empty strings".into(),
            ));
        }
    }

    for kw in &table.data_keywords {
        if table.data_exclusions.contains(kw) {
            return Err(SuncheckError::TableInvalid(format!(
                "'{}' is both a data keyword and an exclusion",
                kw
            )));
        }
    }

    let markers = &table.header_markers;
    if markers.delimiter.is_empty() {
        return Err(SuncheckError::TableInvalid(
            "header delimiter must not be empty".into(),
        ));
    }

    for (name, marker) in [
        ("photon", &markers.photon),
        ("electron", &markers.electron),
        ("electron_profiler", &markers.electron_profiler),
        ("electron_stack", &markers.electron_stack),
    ] {
        if marker.is_empty() {
            return Err(SuncheckError::TableInvalid(format!(
                "header marker '{}' must not be empty",
                name
            )));
        }
        if !table.data_exclusions.iter().any(|ex| marker.contains(ex.as_str())) {
            return Err(SuncheckError::TableInvalid(format!(
                "header marker '{}' ('{}') contains none of the data exclusions",
                name, marker
            )));
        }
    }

    Ok(())
}
