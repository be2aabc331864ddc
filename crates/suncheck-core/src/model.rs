use serde::{Deserialize, Serialize};
use std::fmt;

use crate::extraction::PageContent;

/// Beam particle of a QA section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Particle {
    Photon,
    Electron,
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Particle::Photon => write!(f, "photon"),
            Particle::Electron => write!(f, "electron"),
        }
    }
}

/// Device that produced a section's measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Instrument {
    /// Profiler with quad wedges.
    #[serde(rename = "ICP")]
    Profiler,
    /// Ion chamber in phantom.
    #[serde(rename = "IC")]
    Chamber,
}

impl Instrument {
    pub fn from_profiler_flag(uses_profiler: bool) -> Instrument {
        if uses_profiler {
            Instrument::Profiler
        } else {
            Instrument::Chamber
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Profiler => write!(f, "ICP"),
            Instrument::Chamber => write!(f, "IC"),
        }
    }
}

/// The (particle, energy, instrument) triple parsed from a section header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub particle: Particle,
    /// Energy/mode label, e.g. "6 MV" or "9 MeV".
    pub energy: String,
    pub instrument: Instrument,
}

/// One dated QA report with its extracted page text.
#[derive(Debug, Clone)]
pub struct Report {
    /// 1-based position of the report in chronological order.
    pub day: u32,
    /// Where the report came from (usually the file name), for diagnostics.
    pub source: String,
    pub pages: Vec<PageContent>,
}

impl Report {
    pub fn new(day: u32, source: impl Into<String>, pages: Vec<PageContent>) -> Self {
        Report {
            day,
            source: source.into(),
            pages,
        }
    }
}
