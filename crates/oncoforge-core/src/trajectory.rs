use crate::config::TrajectoryConfig;
use crate::consts::{
    AMPLIFICATION_CUTOFF, AMPLIFICATION_FACTOR, BASE_IMPULSE, TRAJECTORY_LCG_A, TRAJECTORY_LCG_C,
    TRAJECTORY_LCG_M, TRAJECTORY_SEED_MASK,
};
use crate::prng::{seed_from_str, Lcg};
use serde::Serialize;
use tracing::warn;

/// Per-step noise policy injected into the trajectory recurrence.
pub trait ImpulseModel {
    /// Returns the non-negative impulse for the current step.
    ///
    /// `prior_states` holds `x_0..x_{n-1}` (empty at step 0) and may be
    /// ignored; `prng_state` is the stream state active at this step.
    fn impulse(&self, prior_states: &[f64], time: f64, seed: u64, prng_state: u64) -> f64;
}

/// Reference noise policy: a small constant floor plus normalized LCG noise,
/// with an asymmetric amplification branch modeling rare large mutation
/// events. The 0.95 cutoff and the x5 amplification are a compatibility
/// contract; downstream consumers depend on the resulting heavy tail.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationNoise;

impl ImpulseModel for MutationNoise {
    fn impulse(&self, _prior_states: &[f64], _time: f64, _seed: u64, prng_state: u64) -> f64 {
        let noise = prng_state as f64 / TRAJECTORY_LCG_M as f64;
        if noise > AMPLIFICATION_CUTOFF {
            BASE_IMPULSE + noise * AMPLIFICATION_FACTOR
        } else {
            BASE_IMPULSE + noise
        }
    }
}

/// One day of the patient recurrence. Invariant: `state == x_0 + memory`,
/// with `x_0` fixed at simulation start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectorySample {
    pub step: usize,
    pub time: f64,
    pub state: f64,
    pub impulse: f64,
    pub memory: f64,
    pub prng_state: u64,
}

/// Deterministic map of the numeric seed into the initial patient state in
/// `[0, 1)`.
pub fn initial_patient_state(seed: u64) -> f64 {
    (seed % 100) as f64 / 100.0
}

/// Advances the patient recurrence day by day and returns the full ordered
/// sample sequence.
///
/// The engine is a pure fold: step `n` depends only on step `n-1`, past
/// samples are never touched, and two runs with the same config produce
/// bit-identical output. Step 0 uses the normalized seed state without
/// advancing the stream; each later step advances once. A non-positive decay
/// rate is accepted but leaves the memory non-decaying or growing.
pub fn run_trajectory<M: ImpulseModel>(cfg: &TrajectoryConfig, model: &M) -> Vec<TrajectorySample> {
    if cfg.days <= 0 {
        return Vec::new();
    }
    if cfg.decay <= 0.0 {
        warn!("Non-positive decay rate {}: memory will not decay", cfg.decay);
    }

    let steps = cfg.days as usize;
    let seed = seed_from_str(&cfg.seed);
    let x0 = initial_patient_state(seed);
    let mut stream = Lcg::new(
        seed & TRAJECTORY_SEED_MASK,
        TRAJECTORY_LCG_A,
        TRAJECTORY_LCG_C,
        TRAJECTORY_LCG_M,
    );
    let decay = (-cfg.decay * cfg.dt).exp();

    let mut samples = Vec::with_capacity(steps);
    let mut prior_states = Vec::with_capacity(steps);

    let f0 = model.impulse(&prior_states, 0.0, seed, stream.state());
    samples.push(TrajectorySample {
        step: 0,
        time: 0.0,
        state: x0,
        impulse: f0,
        memory: 0.0,
        prng_state: stream.state(),
    });
    prior_states.push(x0);

    let mut memory = 0.0;
    for n in 1..steps {
        let prng_state = stream.next();
        let time = n as f64 * cfg.dt;
        let impulse = model.impulse(&prior_states, time, seed, prng_state);
        memory = decay * memory + impulse * cfg.dt;
        let state = x0 + memory;
        samples.push(TrajectorySample {
            step: n,
            time,
            state,
            impulse,
            memory,
            prng_state,
        });
        prior_states.push(state);
    }

    samples
}
