//! Section scanner: walks one report and moves measurements into the store.
//!
//! The scanner is either looking for a section header or inside a section.
//! Inside a section every label line is followed by exactly one value line.
//! A line naming a particle closes the section and is looked at again as a
//! possible header for the next one.

use tracing::{debug, trace, warn};

use crate::classify::{subsection_name, LineClassifier};
use crate::cursor::PageCursor;
use crate::error::SuncheckError;
use crate::model::{Instrument, Report, SectionHeader};
use crate::store::MeasurementStore;

/// Counts for one scanned report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub sections: usize,
    pub measurements: usize,
}

#[derive(Debug)]
struct OpenSection {
    header: SectionHeader,
    measurements: usize,
}

#[derive(Debug)]
enum ScanState {
    SeekingHeader,
    InSection(OpenSection),
}

enum SectionStep {
    Continue(OpenSection),
    /// The line ended the section and has to be examined again.
    Closed(OpenSection),
}

pub struct SectionScanner<'a> {
    classifier: LineClassifier<'a>,
    report: &'a Report,
}

impl<'a> SectionScanner<'a> {
    pub fn new(classifier: LineClassifier<'a>, report: &'a Report) -> Self {
        SectionScanner { classifier, report }
    }

    /// Scan the whole report, recording every subsection value into `store`.
    pub fn scan(&self, store: &mut MeasurementStore) -> Result<ScanSummary, SuncheckError> {
        let report: &'a Report = self.report;
        let mut cursor = PageCursor::new(&report.pages);
        let mut state = ScanState::SeekingHeader;
        let mut revisit: Option<&str> = None;
        let mut summary = ScanSummary::default();

        loop {
            let line = match revisit.take().or_else(|| cursor.next_line()) {
                Some(line) => line,
                None => break,
            };

            state = match state {
                ScanState::SeekingHeader => match self.open_section(line)? {
                    Some(section) => ScanState::InSection(section),
                    None => {
                        trace!(line, "outside section");
                        ScanState::SeekingHeader
                    }
                },
                ScanState::InSection(section) => {
                    match self.step(section, line, &mut cursor, store)? {
                        SectionStep::Continue(section) => ScanState::InSection(section),
                        SectionStep::Closed(section) => {
                            self.close_section(section, store, &mut summary);
                            revisit = Some(line);
                            ScanState::SeekingHeader
                        }
                    }
                }
            };
        }

        // End of document also ends the last section.
        if let ScanState::InSection(section) = state {
            self.close_section(section, store, &mut summary);
        }

        Ok(summary)
    }

    fn open_section(&self, line: &str) -> Result<Option<OpenSection>, SuncheckError> {
        let Some(particle) = self.classifier.header_particle(line) else {
            return Ok(None);
        };
        let energy = self.classifier.energy_label(line).ok_or_else(|| {
            SuncheckError::UnrecognizedEnergyLabel {
                report: self.report.source.clone(),
                header: line.trim().to_string(),
            }
        })?;
        let header = SectionHeader {
            particle,
            energy,
            instrument: Instrument::from_profiler_flag(
                self.classifier.uses_profiler_instrument(line),
            ),
        };
        debug!(
            report = %self.report.source,
            particle = %header.particle,
            energy = %header.energy,
            instrument = %header.instrument,
            "section opened"
        );
        Ok(Some(OpenSection {
            header,
            measurements: 0,
        }))
    }

    fn step(
        &self,
        mut section: OpenSection,
        line: &str,
        cursor: &mut PageCursor<'a>,
        store: &mut MeasurementStore,
    ) -> Result<SectionStep, SuncheckError> {
        if self.classifier.ends_section(line) {
            return Ok(SectionStep::Closed(section));
        }

        if self.classifier.is_data_line(line) {
            let subsection = subsection_name(line);
            let value = self.read_value(&subsection, cursor)?;
            let header = &section.header;
            let previous = store.record(
                header.instrument,
                header.particle,
                &header.energy,
                &subsection,
                self.report.day,
                value,
            );
            if let Some(previous) = previous {
                warn!(
                    report = %self.report.source,
                    energy = %header.energy,
                    subsection = %subsection,
                    previous,
                    value,
                    "subsection measured twice in one report, keeping the later value"
                );
            }
            debug!(
                day = self.report.day,
                instrument = %header.instrument,
                energy = %header.energy,
                subsection = %subsection,
                value,
                "measurement"
            );
            section.measurements += 1;
        } else if section.measurements == 0
            && section.header.instrument == Instrument::Chamber
            && self.classifier.uses_profiler_instrument(line)
        {
            // The quad wedges marker can sit on its own line below the header.
            debug!(line, "profiler marker in section preamble");
            section.header.instrument = Instrument::Profiler;
        } else {
            trace!(line, "skipped");
        }

        Ok(SectionStep::Continue(section))
    }

    /// Read the value belonging to a label from the next line, wherever
    /// that line is.
    fn read_value(
        &self,
        subsection: &str,
        cursor: &mut PageCursor<'a>,
    ) -> Result<f64, SuncheckError> {
        let (page, line) = cursor.location();
        let value_line = cursor.next_line();
        value_line
            .and_then(|l| l.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .ok_or_else(|| SuncheckError::MalformedValueLine {
                report: self.report.source.clone(),
                page,
                line,
                subsection: subsection.to_string(),
                found: value_line
                    .map(|l| l.trim().to_string())
                    .unwrap_or_else(|| "<end of document>".to_string()),
            })
    }

    fn close_section(
        &self,
        section: OpenSection,
        store: &mut MeasurementStore,
        summary: &mut ScanSummary,
    ) {
        let header = section.header;
        store.open_section(header.instrument, header.particle, &header.energy);
        debug!(
            particle = %header.particle,
            energy = %header.energy,
            measurements = section.measurements,
            "section closed"
        );
        summary.sections += 1;
        summary.measurements += section.measurements;
    }
}
