//! Finding report files and putting them in chronological order.
//!
//! Reports are named after the day they were taken ("June 3.pdf"). There is
//! no year in the name, so all reports of a run are assumed to belong to the
//! same year.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::error::SuncheckError;

/// Year used to complete month/day names. A leap year, so "February 29"
/// is accepted.
const REFERENCE_YEAR: i32 = 2000;

/// Parse the date of a report from its file name, e.g. "June 3.pdf".
pub fn report_date(path: &Path) -> Result<NaiveDate, SuncheckError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .unwrap_or_default();
    parse_month_day(stem).ok_or_else(|| SuncheckError::InvalidReportName {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
    })
}

/// Parse "June 3" / "Jun 03" into a date in the reference year.
pub fn parse_month_day(s: &str) -> Option<NaiveDate> {
    let with_year = format!("{} {}", s.trim(), REFERENCE_YEAR);
    NaiveDate::parse_from_str(&with_year, "%B %d %Y").ok()
}

/// Sort report paths by the date in their names.
///
/// Fails on the first name that is not a date rather than guessing its place.
pub fn order_reports(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>, SuncheckError> {
    let mut dated = paths
        .into_iter()
        .map(|p| report_date(&p).map(|d| (d, p)))
        .collect::<Result<Vec<_>, _>>()?;
    dated.sort_by(|(a_date, a_path), (b_date, b_path)| {
        a_date.cmp(b_date).then_with(|| a_path.cmp(b_path))
    });
    Ok(dated.into_iter().map(|(_, p)| p).collect())
}

/// All PDF reports directly inside `dir`, oldest first.
pub fn discover_reports(dir: &Path) -> Result<Vec<PathBuf>, SuncheckError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && path.is_file() {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(SuncheckError::NoReports(dir.to_path_buf()));
    }

    order_reports(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_day() {
        assert_eq!(
            parse_month_day("June 3"),
            NaiveDate::from_ymd_opt(REFERENCE_YEAR, 6, 3)
        );
        assert_eq!(
            parse_month_day("February 29"),
            NaiveDate::from_ymd_opt(REFERENCE_YEAR, 2, 29)
        );
        assert!(parse_month_day("June 31").is_none());
        assert!(parse_month_day("notes").is_none());
    }

    #[test]
    fn test_report_date_from_path() {
        let date = report_date(Path::new("/data/linac/July 14.pdf")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(REFERENCE_YEAR, 7, 14).unwrap());
    }

    #[test]
    fn test_invalid_report_name() {
        let err = report_date(Path::new("summary.pdf")).unwrap_err();
        assert!(matches!(
            err,
            SuncheckError::InvalidReportName { ref name } if name == "summary.pdf"
        ));
    }

    #[test]
    fn test_order_reports_chronologically() {
        let ordered = order_reports(vec![
            PathBuf::from("July 1.pdf"),
            PathBuf::from("June 12.pdf"),
            PathBuf::from("June 3.pdf"),
        ])
        .unwrap();
        assert_eq!(
            ordered,
            vec![
                PathBuf::from("June 3.pdf"),
                PathBuf::from("June 12.pdf"),
                PathBuf::from("July 1.pdf"),
            ]
        );
    }

    #[test]
    fn test_discover_reports_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["June 12.pdf", "June 3.PDF", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"%PDF-1.4").unwrap();
        }
        std::fs::create_dir(dir.path().join("May 1.pdf")).unwrap();

        let found = discover_reports(dir.path()).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["June 3.PDF", "June 12.pdf"]);
    }

    #[test]
    fn test_discover_reports_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover_reports(dir.path()),
            Err(SuncheckError::NoReports(_))
        ));
    }
}
