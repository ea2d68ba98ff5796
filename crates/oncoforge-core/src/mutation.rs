use crate::consts::{MUTATION_LCG_A, MUTATION_LCG_C, MUTATION_LCG_M, MUTATION_SEED_MASK};
use crate::prng::Lcg;
use crate::seq::Nucleotide;

/// Applies per-base substitutions to `dna` and returns a full-length mutant.
///
/// Each position advances the 32-bit LCG stream once; the position is
/// substituted when the normalized draw falls below `threshold`, and the
/// replacement is chosen uniformly among the three other bases. The
/// replacement draw comes from a `fastrand` generator seeded with the same
/// genetic seed, kept off the main stream so the accept/reject sequence is
/// independent of how many substitutions fire. A given `(dna, seed,
/// threshold)` triple always yields the same mutant.
pub fn mutate_sequence(dna: &[Nucleotide], seed: u64, threshold: f64) -> Vec<Nucleotide> {
    let mut stream = Lcg::new(
        seed & MUTATION_SEED_MASK,
        MUTATION_LCG_A,
        MUTATION_LCG_C,
        MUTATION_LCG_M,
    );
    let mut picker = fastrand::Rng::with_seed(seed);

    dna.iter()
        .map(|&base| {
            let prob = stream.next() as f64 / MUTATION_LCG_M as f64;
            if prob < threshold {
                let alternatives = base.alternatives();
                alternatives[picker.usize(0..alternatives.len())]
            } else {
                base
            }
        })
        .collect()
}
