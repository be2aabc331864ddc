//! Line classification for extracted report text.
//!
//! Reports carry no markup, so every decision here is a substring test
//! against the [`ClassificationTable`].

use crate::model::{Instrument, Particle, SectionHeader};
use crate::table::schema::ClassificationTable;

/// What a single line means to the section scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// Opens a new section.
    Header(SectionHeader),
    /// Looks like a header but has no usable energy label.
    MalformedHeader,
    /// Names a particle without matching a header grammar. Ends the current
    /// section without opening another.
    SectionBreak,
    /// A subsection label; its value is on the next line.
    Data { subsection: String },
    Other,
}

#[derive(Debug, Clone, Copy)]
pub struct LineClassifier<'a> {
    table: &'a ClassificationTable,
}

impl<'a> LineClassifier<'a> {
    pub fn new(table: &'a ClassificationTable) -> Self {
        LineClassifier { table }
    }

    /// True if the line is a subsection label: at least one keyword and no
    /// exclusion.
    pub fn is_data_line(&self, line: &str) -> bool {
        self.table
            .data_keywords
            .iter()
            .any(|kw| line.contains(kw.as_str()))
            && !self
                .table
                .data_exclusions
                .iter()
                .any(|ex| line.contains(ex.as_str()))
    }

    /// True if the line marks the profiler (quad wedges) instrument.
    pub fn uses_profiler_instrument(&self, line: &str) -> bool {
        line.contains(self.table.profiler_marker.as_str())
    }

    pub fn particle_type(&self, line: &str) -> Option<Particle> {
        let markers = &self.table.header_markers;
        if line.contains(markers.photon.as_str()) {
            Some(Particle::Photon)
        } else if line.contains(markers.electron.as_str()) {
            Some(Particle::Electron)
        } else {
            None
        }
    }

    /// Particle of a section header in one of the three header grammars, or
    /// None if the line does not open a section.
    pub fn header_particle(&self, line: &str) -> Option<Particle> {
        let markers = &self.table.header_markers;
        if self.particle_type(line) == Some(Particle::Photon) {
            Some(Particle::Photon)
        } else if line.contains(markers.electron_profiler.as_str())
            || line.contains(markers.electron_stack.as_str())
        {
            Some(Particle::Electron)
        } else {
            None
        }
    }

    pub fn is_header_line(&self, line: &str) -> bool {
        self.header_particle(line).is_some()
    }

    /// True if the line terminates an open section.
    pub fn ends_section(&self, line: &str) -> bool {
        self.particle_type(line).is_some()
    }

    /// Energy/mode label of a header line.
    ///
    /// Normally the segment after the first delimiter. The VW Stack electron
    /// layout repeats the delimiter, so its label is one segment further on.
    /// Returns None when the segment is missing or blank.
    pub fn energy_label(&self, header_line: &str) -> Option<String> {
        let markers = &self.table.header_markers;
        let index = if header_line.contains(markers.electron_stack.as_str()) {
            2
        } else {
            1
        };
        let label = header_line.split(markers.delimiter.as_str()).nth(index)?.trim();
        if label.is_empty() {
            None
        } else {
            Some(label.to_string())
        }
    }

    /// Parse a header line into its (particle, energy, instrument) triple.
    ///
    /// Returns None for non-header lines and for headers without an energy
    /// label.
    pub fn parse_header(&self, line: &str) -> Option<SectionHeader> {
        let particle = self.header_particle(line)?;
        let energy = self.energy_label(line)?;
        Some(SectionHeader {
            particle,
            energy,
            instrument: Instrument::from_profiler_flag(self.uses_profiler_instrument(line)),
        })
    }

    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_header_line(line) {
            match self.parse_header(line) {
                Some(header) => LineKind::Header(header),
                None => LineKind::MalformedHeader,
            }
        } else if self.ends_section(line) {
            LineKind::SectionBreak
        } else if self.is_data_line(line) {
            LineKind::Data {
                subsection: subsection_name(line),
            }
        } else {
            LineKind::Other
        }
    }
}

/// Name of the subsection a label line introduces.
///
/// Labels such as "Flatness 1.02%" fold a value into the line; the name is
/// then the first word. Multi-word labels without digits ("Dose / MU") are
/// kept whole.
pub fn subsection_name(line: &str) -> String {
    let line = line.trim();
    match line.find(' ') {
        Some(space) => {
            let rest = line[space + 1..].trim();
            if rest.chars().any(|c| c.is_ascii_digit()) {
                line[..space].trim().to_string()
            } else {
                line.to_string()
            }
        }
        None => line.to_string(),
    }
}
