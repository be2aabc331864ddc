use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Instrument, Particle};

/// Subsection name -> series.
pub type SubsectionMap<V> = BTreeMap<String, V>;
/// Energy label -> subsections.
pub type EnergyMap<V> = BTreeMap<String, SubsectionMap<V>>;
/// Instrument -> particle -> energy -> subsection -> series.
pub type Nested<V> = BTreeMap<Instrument, BTreeMap<Particle, EnergyMap<V>>>;

const INSTRUMENTS: [Instrument; 2] = [Instrument::Profiler, Instrument::Chamber];
const PARTICLES: [Particle; 2] = [Particle::Photon, Particle::Electron];

/// Accumulates one scalar per (instrument, particle, energy, subsection, day).
///
/// Levels are created on first use and never replaced, so a section that is
/// split across pages or reports keeps adding to the same leaf.
#[derive(Debug, Clone)]
pub struct MeasurementStore {
    data: Nested<BTreeMap<u32, f64>>,
}

impl MeasurementStore {
    pub fn new() -> Self {
        let mut data: Nested<BTreeMap<u32, f64>> = Nested::new();
        for instrument in INSTRUMENTS {
            let particles = data.entry(instrument).or_insert_with(BTreeMap::new);
            for particle in PARTICLES {
                particles.entry(particle).or_insert_with(EnergyMap::new);
            }
        }
        MeasurementStore { data }
    }

    /// Make sure the energy level exists, even if no subsection follows.
    pub fn open_section(&mut self, instrument: Instrument, particle: Particle, energy: &str) {
        self.energy_mut(instrument, particle, energy);
    }

    /// Store `value` for `day`. Returns the value previously stored for the
    /// same key and day, if any.
    pub fn record(
        &mut self,
        instrument: Instrument,
        particle: Particle,
        energy: &str,
        subsection: &str,
        day: u32,
        value: f64,
    ) -> Option<f64> {
        self.energy_mut(instrument, particle, energy)
            .entry(subsection.to_string())
            .or_default()
            .insert(day, value)
    }

    /// Number of individual measurements recorded.
    pub fn len(&self) -> usize {
        self.leaves().map(|leaf| leaf.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten every day -> value map into a day-ordered series.
    pub fn finalize(self) -> ExtractedData {
        let data: Nested<Vec<f64>> = self
            .data
            .into_iter()
            .map(|(instrument, particles)| {
                let particles: BTreeMap<Particle, EnergyMap<Vec<f64>>> = particles
                    .into_iter()
                    .map(|(particle, energies)| {
                        let energies: EnergyMap<Vec<f64>> = energies
                            .into_iter()
                            .map(|(energy, subsections)| {
                                let subsections: SubsectionMap<Vec<f64>> = subsections
                                    .into_iter()
                                    .map(|(name, by_day)| (name, by_day.into_values().collect()))
                                    .collect();
                                (energy, subsections)
                            })
                            .collect();
                        (particle, energies)
                    })
                    .collect();
                (instrument, particles)
            })
            .collect();
        ExtractedData(data)
    }

    fn energy_mut(
        &mut self,
        instrument: Instrument,
        particle: Particle,
        energy: &str,
    ) -> &mut SubsectionMap<BTreeMap<u32, f64>> {
        self.data
            .entry(instrument)
            .or_default()
            .entry(particle)
            .or_default()
            .entry(energy.to_string())
            .or_default()
    }

    fn leaves(&self) -> impl Iterator<Item = &BTreeMap<u32, f64>> {
        self.data
            .values()
            .flat_map(|particles| particles.values())
            .flat_map(|energies| energies.values())
            .flat_map(|subsections| subsections.values())
    }
}

impl Default for MeasurementStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Finalized measurements: string-keyed maps down to day-ordered series.
///
/// Serializes as `{"IC": {"photon": {"6 MV": {"Dose / MU": [1.0, ...]}}}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedData(pub Nested<Vec<f64>>);

impl ExtractedData {
    /// The series for one metric, in day order.
    pub fn series(
        &self,
        instrument: Instrument,
        particle: Particle,
        energy: &str,
        subsection: &str,
    ) -> Option<&[f64]> {
        self.0
            .get(&instrument)?
            .get(&particle)?
            .get(energy)?
            .get(subsection)
            .map(|v| v.as_slice())
    }

    /// Energy labels seen for an instrument and particle.
    pub fn energies(&self, instrument: Instrument, particle: Particle) -> Vec<&str> {
        self.0
            .get(&instrument)
            .and_then(|p| p.get(&particle))
            .map(|e| e.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default()
    }

    /// Number of (instrument, particle, energy, subsection) series.
    pub fn series_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|p| p.values())
            .flat_map(|e| e.values())
            .map(|s| s.len())
            .sum()
    }
}
