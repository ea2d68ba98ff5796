use crate::consts::DEFAULT_SEED;
use sha2::{Digest, Sha256};

/// A single linear-congruential stream: `state' = (a*state + c) mod m`.
///
/// Each recurrence owns its own instance. The trajectory engine and the
/// mutation sampler use different `(a, c, m)` triples and must never share
/// state; mixing moduli across calls breaks reproducibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
    a: u64,
    c: u64,
    m: u64,
}

impl Lcg {
    /// Creates a stream at `state`. Callers normalize the seed into range
    /// (mask or modulo) before construction; the state is stored as given so
    /// masked reference seeds stay bit-identical.
    pub fn new(state: u64, a: u64, c: u64, m: u64) -> Self {
        Self { state, a, c, m }
    }

    /// Advances the stream and returns the new state.
    ///
    /// The recurrence is computed in 128-bit arithmetic, so it is exact for
    /// any `(a, c, m)` that fit in 64 bits.
    pub fn next(&mut self) -> u64 {
        let wide = self.a as u128 * self.state as u128 + self.c as u128;
        self.state = (wide % self.m as u128) as u64;
        self.state
    }

    /// Current state without advancing.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Current state normalized into `[0, 1)`.
    pub fn unit(&self) -> f64 {
        self.state as f64 / self.m as f64
    }
}

/// Normalizes a caller-provided biological seed tag into a numeric seed.
///
/// Numeric text is used directly (absolute value); anything else goes
/// through [`stable_string_seed`] so the same tag always lands on the same
/// stream. An empty tag falls back to [`DEFAULT_SEED`] rather than failing.
pub fn seed_from_str(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_SEED;
    }
    if let Ok(v) = trimmed.parse::<u64>() {
        return v;
    }
    match trimmed.parse::<i64>() {
        Ok(v) => v.unsigned_abs(),
        Err(_) => stable_string_seed(trimmed),
    }
}

/// Stable 64-bit reduction of an arbitrary string: the first 8 bytes of its
/// SHA-256 digest, big-endian. Identical across runs and platforms.
pub fn stable_string_seed(s: &str) -> u64 {
    let digest = Sha256::digest(s.as_bytes());
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(buf)
}
