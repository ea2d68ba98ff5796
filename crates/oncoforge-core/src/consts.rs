/// ANSI C style LCG parameters driving the patient-trajectory noise stream.
pub const TRAJECTORY_LCG_A: u64 = 1103515245;
pub const TRAJECTORY_LCG_C: u64 = 12345;
pub const TRAJECTORY_LCG_M: u64 = (1 << 31) - 1;

/// Numerical Recipes LCG parameters driving the per-base mutation stream.
pub const MUTATION_LCG_A: u64 = 1664525;
pub const MUTATION_LCG_C: u64 = 1013904223;
pub const MUTATION_LCG_M: u64 = 1 << 32;

/// Numeric trajectory seeds are masked to a non-negative 31-bit state.
pub const TRAJECTORY_SEED_MASK: u64 = 0x7fff_ffff;

/// Mutation seeds are folded into the sampler's 32-bit state space.
pub const MUTATION_SEED_MASK: u64 = 0xffff_ffff;

/// Per-step impulse floor before noise is added.
pub const BASE_IMPULSE: f64 = 0.05;

/// Noise above this cutoff takes the rare-event amplification branch.
pub const AMPLIFICATION_CUTOFF: f64 = 0.95;

/// Noise multiplier inside the amplification branch.
pub const AMPLIFICATION_FACTOR: f64 = 5.0;

/// Default per-position substitution probability.
pub const DEFAULT_MUTATION_THRESHOLD: f64 = 0.02;

/// Fallback seed used when a seed tag is empty.
pub const DEFAULT_SEED: u64 = 123456789;

/// CDR3-like epitope used by the search when no input sequence is provided.
pub const DEFAULT_EPITOPE_DNA: &str = "TGTGCGAGAGATAGCAGCAACTGGTTTGCTTAC";
