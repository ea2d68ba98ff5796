use sha2::{Digest, Sha256};

/// Scoring capability injected into the search loop: maps a protein string
/// to an impact score in `[0, 1]`.
///
/// The trait is infallible by contract. Implementations backed by an
/// external model must degrade to [`HashImpactScorer`] internally when the
/// model is missing or malformed, never surface the failure to the loop.
pub trait ImpactScorer {
    fn score(&self, protein: &str) -> f64;
}

/// Deterministic fallback scorer: SHA-256 of the protein reduced to `[0, 1)`.
///
/// Stable across runs and platforms, which keeps search histories
/// reproducible and totally ordered even without a trained model.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashImpactScorer;

impl ImpactScorer for HashImpactScorer {
    fn score(&self, protein: &str) -> f64 {
        let digest = Sha256::digest(protein.as_bytes());
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&digest[..4]);
        (u32::from_be_bytes(buf) % 1000) as f64 / 1000.0
    }
}

/// Context-aware overlay on a base scorer.
///
/// Hematological contexts boost proteins carrying tyrosine or phenylalanine
/// (candidate activation sites) by x1.2, clamped into `[0, 1]`. With no
/// context the base score passes through untouched. This is a pluggable
/// heuristic layer, not part of the scoring contract itself.
pub fn score_in_context<S: ImpactScorer>(scorer: &S, protein: &str, context: Option<&str>) -> f64 {
    let base = scorer.score(protein);
    let Some(ctx) = context else {
        return base;
    };
    let mut score = base;
    if ctx.to_lowercase().contains("leucemia") && (protein.contains('Y') || protein.contains('F')) {
        score *= 1.2;
    }
    score.min(1.0)
}
