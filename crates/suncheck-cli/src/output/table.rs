use suncheck_core::classify::{LineClassifier, LineKind};
use suncheck_core::extraction::PageContent;
use suncheck_core::Extraction;

/// Per (instrument, particle, energy) counts of series and values.
pub fn format_summary(extraction: &Extraction) -> String {
    let mut out = String::new();
    for (instrument, particles) in &extraction.data.0 {
        for (particle, energies) in particles {
            for (energy, subsections) in energies {
                let values: usize = subsections.values().map(|s| s.len()).sum();
                out.push_str(&format!(
                    "  {:<4} {:<9} {:<10} {:>3} series, {:>4} values\n",
                    instrument.to_string(),
                    particle.to_string(),
                    energy,
                    subsections.len(),
                    values
                ));
            }
        }
    }
    out
}

/// One row per interesting line: where it is and what the scanner makes of it.
pub fn format_classified(
    pages: &[PageContent],
    classifier: &LineClassifier<'_>,
    show_all: bool,
) -> String {
    let mut out = String::new();
    for page in pages {
        for (i, line) in page.lines.iter().enumerate() {
            let label = match classifier.classify(line) {
                LineKind::Header(h) => format!(
                    "HEADER   {} {} [{}]",
                    h.particle, h.energy, h.instrument
                ),
                LineKind::MalformedHeader => "HEADER?  no energy label".to_string(),
                LineKind::SectionBreak => "BREAK".to_string(),
                LineKind::Data { subsection } => format!("DATA     {subsection}"),
                LineKind::Other if show_all => "-".to_string(),
                LineKind::Other => continue,
            };
            out.push_str(&format!(
                "{:>3}:{:<4} {:<40} | {}\n",
                page.page_number,
                i + 1,
                label,
                line.trim()
            ));
        }
    }
    out
}
