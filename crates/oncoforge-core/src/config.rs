use crate::consts;
use crate::error::OfResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use typed_builder::TypedBuilder;

/// Parameters of the patient-trajectory recurrence.
#[derive(Args, Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Number of simulated days (steps). Zero or negative yields an empty run.
    #[arg(long, default_value_t = 365)]
    #[builder(default = 365)]
    pub days: i64,

    /// Discretization step in days.
    #[arg(long, default_value_t = 1.0)]
    #[builder(default = 1.0)]
    pub dt: f64,

    /// Exponential memory decay rate (day^-1).
    #[arg(long, default_value_t = 0.01540)]
    #[builder(default = 0.01540)]
    pub decay: f64,

    /// Biological seed: numeric, or an arbitrary tag hashed into the stream.
    #[arg(long, default_value = "123456789")]
    #[builder(default = String::from("123456789"), setter(into))]
    pub seed: String,

    /// Impulse level above which a step is reported as a mutation event.
    #[arg(long, default_value_t = 0.5)]
    #[builder(default = 0.5)]
    pub threshold: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            days: 365,
            dt: 1.0,
            decay: 0.01540,
            seed: String::from("123456789"),
            threshold: 0.5,
        }
    }
}

impl TrajectoryConfig {
    /// Loads parameters from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> OfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Parameters of the mutation search loop.
#[derive(Args, Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of mutation draws. The loop always runs this many iterations.
    #[arg(long, default_value_t = 100)]
    #[builder(default = 100)]
    pub iterations: usize,

    /// Per-position substitution probability.
    #[arg(long, default_value_t = consts::DEFAULT_MUTATION_THRESHOLD)]
    #[builder(default = consts::DEFAULT_MUTATION_THRESHOLD)]
    pub mutation_threshold: f64,

    /// Tumor-type context fed to the scorer (e.g. "leucemia").
    #[arg(long)]
    #[builder(default, setter(strip_option, into))]
    pub context: Option<String>,

    /// Seed tag; defaults to a stable hash of the input sequence.
    #[arg(long)]
    #[builder(default, setter(strip_option, into))]
    pub seed: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            mutation_threshold: consts::DEFAULT_MUTATION_THRESHOLD,
            context: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Loads parameters from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> OfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Suggested memory-decay rate for a tumor type and stage.
///
/// With `alpha > 0` the stage-adjusted formula
/// `lambda0 / (1 + alpha * severity)` is used, where severity maps stages
/// 1..=4 onto [0, 1]. Otherwise the per-type table applies, falling back to
/// the pancreatic default for unknown types or stages.
pub fn decay_for_tumor(tumor_type: &str, stage: u8, alpha: f64) -> f64 {
    const DEFAULT_DECAY: f64 = 0.01540;

    if alpha > 0.0 && stage <= 4 {
        let severity = ((stage as f64 - 1.0) / 3.0).clamp(0.0, 1.0);
        return DEFAULT_DECAY / (1.0 + alpha * severity);
    }

    match (tumor_type.to_lowercase().as_str(), stage) {
        ("prostata", 1..=2) => 0.00385,
        ("prostata", 3..=4) => 0.00770,
        ("mama", _) => 0.00580,
        ("pancreas", _) => DEFAULT_DECAY,
        _ => DEFAULT_DECAY,
    }
}
