use serde::{Deserialize, Serialize};

use super::builtin;

/// Keyword lists that drive line classification.
///
/// All matching is case-sensitive substring matching against a raw
/// extracted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTable {
    /// A line containing any of these is a candidate subsection label.
    pub data_keywords: Vec<String>,
    /// A candidate label containing any of these is rejected (header text).
    pub data_exclusions: Vec<String>,
    /// Marks the profiler instrument (ICP) when present.
    pub profiler_marker: String,
    pub header_markers: HeaderMarkers,
}

/// Substrings identifying section header grammars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMarkers {
    /// `Photon - <energy>`; also any line naming photons ends a section.
    pub photon: String,
    /// Any line naming electrons ends a section.
    pub electron: String,
    /// `Electron constancy with quad wedges - <energy>`
    pub electron_profiler: String,
    /// `Electron constancy - VW Stack - <energy> - ...`; the energy label is
    /// the segment after the second delimiter.
    pub electron_stack: String,
    /// Separator between header segments.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    builtin::HEADER_DELIMITER.to_string()
}

impl Default for ClassificationTable {
    fn default() -> Self {
        ClassificationTable {
            data_keywords: to_strings(builtin::DATA_KEYWORDS),
            data_exclusions: to_strings(builtin::DATA_EXCLUSIONS),
            profiler_marker: builtin::PROFILER_MARKER.to_string(),
            header_markers: HeaderMarkers::default(),
        }
    }
}

impl Default for HeaderMarkers {
    fn default() -> Self {
        HeaderMarkers {
            photon: builtin::PHOTON_MARKER.to_string(),
            electron: builtin::ELECTRON_MARKER.to_string(),
            electron_profiler: builtin::ELECTRON_PROFILER_HEADER.to_string(),
            electron_stack: builtin::ELECTRON_STACK_HEADER.to_string(),
            delimiter: default_delimiter(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
