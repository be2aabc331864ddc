//! The classification literals for SunCheck machine QA printouts.

pub const DATA_KEYWORDS: &[&str] = &[
    "MU",
    "profile constancy",
    "Flatness",
    "Symmetry",
    "Beam Quality",
    "Dose",
    "Wedge factor",
    "EDW",
    "energy",
];

pub const DATA_EXCLUSIONS: &[&str] = &["Photon", "Electron"];

pub const PROFILER_MARKER: &str = "quad wedges";

pub const PHOTON_MARKER: &str = "Photon";
pub const ELECTRON_MARKER: &str = "Electron";
pub const ELECTRON_PROFILER_HEADER: &str = "Electron constancy with quad wedges";
pub const ELECTRON_STACK_HEADER: &str = "Electron constancy - VW Stack";

pub const HEADER_DELIMITER: &str = " - ";
