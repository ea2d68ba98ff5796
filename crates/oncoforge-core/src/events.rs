use crate::trajectory::TrajectorySample;
use serde::Serialize;

/// A step whose impulse crossed the detection threshold. Carries the PRNG
/// state active at that step so downstream consumers can map the event onto
/// a biological coordinate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Event {
    pub step: usize,
    pub time: f64,
    pub impulse: f64,
    pub prng_state: u64,
}

/// Collects every sample whose impulse strictly exceeds `threshold`, in step
/// order. No deduplication or hysteresis: consecutive qualifying steps each
/// produce their own event. Single pass, O(n).
pub fn detect_events(samples: &[TrajectorySample], threshold: f64) -> Vec<Event> {
    samples
        .iter()
        .filter(|s| s.impulse > threshold)
        .map(|s| Event {
            step: s.step,
            time: s.time,
            impulse: s.impulse,
            prng_state: s.prng_state,
        })
        .collect()
}

/// Deterministically maps a stored PRNG state onto a 1-based residue index
/// in `1..=protein_length`.
///
/// `protein_length` must be positive.
pub fn map_state_to_residue(prng_state: u64, offset: u64, protein_length: usize) -> usize {
    assert!(protein_length > 0, "protein_length must be positive");
    (prng_state.wrapping_add(offset) % protein_length as u64) as usize + 1
}
