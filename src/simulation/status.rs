use std::fmt;

use rand::Rng;

use crate::config::{ENTANGLEMENT_THRESHOLD, STATUS_SAMPLE_PROBABILITY, UNCERTAINTY_THRESHOLD};
use crate::simulation::entity::Entity;
use crate::simulation::metrics::{for_each_pair, is_entangled};

/// Global label derived from population statistics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuantumStatus {
    /// Low uncertainty, low entanglement
    #[default]
    Deterministic,
    /// High uncertainty only
    Superposition,
    /// High entanglement only
    Entangled,
    /// Both high
    EntangledSuperposition,
}

impl QuantumStatus {
    /// Uncertainty is high at or above 0.1, entanglement at or above 0.3
    pub fn from_stats(stats: &PopulationStats) -> Self {
        let uncertain = stats.uncertainty >= UNCERTAINTY_THRESHOLD;
        let entangled = stats.entanglement >= ENTANGLEMENT_THRESHOLD;
        match (uncertain, entangled) {
            (false, false) => QuantumStatus::Deterministic,
            (true, false) => QuantumStatus::Superposition,
            (false, true) => QuantumStatus::Entangled,
            (true, true) => QuantumStatus::EntangledSuperposition,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuantumStatus::Deterministic => "deterministic",
            QuantumStatus::Superposition => "superposition",
            QuantumStatus::Entangled => "entangled",
            QuantumStatus::EntangledSuperposition => "entangled-superposed composite",
        }
    }
}

impl fmt::Display for QuantumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Population statistics the classifier thresholds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopulationStats {
    /// sqrt of the mean of the tradition and innovation population variances
    pub uncertainty: f32,
    /// Fraction of unordered pairs with similarity above 0.8
    pub entanglement: f32,
}

impl PopulationStats {
    /// `None` for an empty population
    pub fn measure(entities: &[Entity]) -> Option<Self> {
        if entities.is_empty() {
            return None;
        }

        let n = entities.len() as f32;
        let tradition_mean = entities.iter().map(|e| e.traits.tradition).sum::<f32>() / n;
        let innovation_mean = entities.iter().map(|e| e.traits.innovation).sum::<f32>() / n;

        let tradition_variance = entities
            .iter()
            .map(|e| (e.traits.tradition - tradition_mean).powi(2))
            .sum::<f32>()
            / n;
        let innovation_variance = entities
            .iter()
            .map(|e| (e.traits.innovation - innovation_mean).powi(2))
            .sum::<f32>()
            / n;

        let uncertainty = ((tradition_variance + innovation_variance) / 2.0).sqrt();

        let mut entangled_pairs = 0usize;
        for_each_pair(entities, |a, b| {
            if is_entangled(a, b) {
                entangled_pairs += 1;
            }
        });

        let total_pairs = entities.len() * (entities.len() - 1) / 2;
        let entanglement = if total_pairs == 0 {
            0.0
        } else {
            entangled_pairs as f32 / total_pairs as f32
        };

        Some(Self {
            uncertainty,
            entanglement,
        })
    }
}

/// Stochastic sampling: recompute with 5% probability, else keep `previous`
pub fn classify_status<R: Rng + ?Sized>(
    entities: &[Entity],
    previous: QuantumStatus,
    rng: &mut R,
) -> QuantumStatus {
    if !rng.gen_bool(STATUS_SAMPLE_PROBABILITY) {
        return previous;
    }
    classify_now(entities, previous)
}

/// Recompute unconditionally; an empty population keeps `previous`
pub fn classify_now(entities: &[Entity], previous: QuantumStatus) -> QuantumStatus {
    PopulationStats::measure(entities)
        .map(|stats| QuantumStatus::from_stats(&stats))
        .unwrap_or(previous)
}
