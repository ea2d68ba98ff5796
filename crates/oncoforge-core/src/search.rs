use crate::codon::translate;
use crate::config::SearchConfig;
use crate::consts::MUTATION_LCG_M;
use crate::mutation::mutate_sequence;
use crate::prng::{seed_from_str, stable_string_seed};
use crate::scoring::{score_in_context, ImpactScorer};
use crate::seq::{dna_to_string, protein_to_string, Nucleotide};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One accepted iteration of the mutation search. Serialized field names
/// follow the record layout consumed by the reporting dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRecord {
    #[serde(rename = "i")]
    pub iteration: usize,
    pub dna: String,
    #[serde(rename = "prot")]
    pub protein: String,
    #[serde(rename = "impacto")]
    pub impact: f64,
}

/// Full outcome of a search run: baseline, best, and the append-only
/// history including non-improving entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "original_protein")]
    pub baseline_protein: String,
    #[serde(rename = "original_impact")]
    pub baseline_impact: f64,
    pub best_protein: String,
    pub best_impact: f64,
    pub history: Vec<MutationRecord>,
}

/// Resolves the search's base seed: an explicit tag wins, otherwise the
/// input sequence itself is hashed so every input has a stable default
/// stream.
pub fn derive_base_seed(dna: &[Nucleotide], seed_tag: Option<&str>) -> u64 {
    match seed_tag {
        Some(tag) => seed_from_str(tag),
        None => stable_string_seed(&dna_to_string(dna)) % MUTATION_LCG_M,
    }
}

/// Hill-climbing search over mutated variants of `dna`.
///
/// Runs exactly `cfg.iterations` draws; iteration `i` mutates the baseline
/// under seed `base_seed + i`, so the history is reproducible and bounded
/// regardless of convergence. Iterations whose protein is empty or identical
/// to the baseline leave no history entry. Only a strictly greater impact
/// moves the best, so the first improvement wins ties.
pub fn run_search<S: ImpactScorer>(
    dna: &[Nucleotide],
    scorer: &S,
    cfg: &SearchConfig,
) -> SearchResult {
    let base_seed = derive_base_seed(dna, cfg.seed.as_deref());
    let context = cfg.context.as_deref();

    let baseline_protein = protein_to_string(&translate(dna));
    let baseline_impact = score_in_context(scorer, &baseline_protein, context);

    let mut best_protein = baseline_protein.clone();
    let mut best_impact = baseline_impact;
    let mut history = Vec::new();

    for i in 0..cfg.iterations {
        let mutant = mutate_sequence(dna, base_seed.wrapping_add(i as u64), cfg.mutation_threshold);
        let protein = protein_to_string(&translate(&mutant));
        if protein.is_empty() || protein == baseline_protein {
            continue;
        }
        let impact = score_in_context(scorer, &protein, context);
        history.push(MutationRecord {
            iteration: i,
            dna: dna_to_string(&mutant),
            protein: protein.clone(),
            impact,
        });
        if impact > best_impact {
            best_impact = impact;
            best_protein = protein;
        }
    }

    debug!(
        "Search finished: {} of {} iterations accepted, best impact {:.3}",
        history.len(),
        cfg.iterations,
        best_impact
    );

    SearchResult {
        baseline_protein,
        baseline_impact,
        best_protein,
        best_impact,
        history,
    }
}
