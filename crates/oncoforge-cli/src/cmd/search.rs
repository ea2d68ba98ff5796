use crate::fasta;
use crate::reports;
use clap::Args;
use oncoforge_core::config::SearchConfig;
use oncoforge_core::consts::DEFAULT_EPITOPE_DNA;
use oncoforge_core::error::OfResult;
use oncoforge_core::scoring::HashImpactScorer;
use oncoforge_core::search::{derive_base_seed, run_search, SearchResult};
use oncoforge_core::seq::parse_dna;
use rayon::prelude::*;
use std::fs::File;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: SearchConfig,

    /// Load search parameters from a JSON file (replaces the parameter flags).
    #[arg(long)]
    pub params: Option<String>,

    /// Inline input DNA sequence (A/T/C/G).
    #[arg(long)]
    pub dna: Option<String>,

    /// FASTA file; the first sequence is used as the input DNA.
    #[arg(long)]
    pub dna_file: Option<String>,

    /// Independent search attempts; seeds are offset per attempt and the
    /// best result wins.
    #[arg(short = 'a', long, default_value_t = 1)]
    pub attempts: usize,

    /// Write the full search result record to a JSON file.
    #[arg(long)]
    pub out_json: Option<String>,
}

pub fn run(args: SearchArgs) -> OfResult<()> {
    let mut config = args.config;
    if let Some(path) = &args.params {
        info!("📂 Loading search parameters from {}", path);
        config = SearchConfig::load_from_file(path)?;
    }

    let raw = if let Some(path) = &args.dna_file {
        info!("📂 Reading input sequence from {}", path);
        fasta::read_first_sequence(path)?
    } else if let Some(inline) = &args.dna {
        inline.clone()
    } else {
        warn!("⚠️  No input sequence given; using the built-in epitope");
        DEFAULT_EPITOPE_DNA.to_string()
    };
    let dna = parse_dna(&raw)?;

    let scorer = HashImpactScorer;
    let attempts = args.attempts.max(1);
    let base_seed = derive_base_seed(&dna, config.seed.as_deref());

    info!(
        "🔎 Searching {} iterations x {} attempt(s), base seed {}",
        config.iterations, attempts, base_seed
    );

    // Each attempt owns its own PRNG state; nothing is shared across the
    // fan-out, so results are independent of scheduling order.
    let results: Vec<SearchResult> = (0..attempts)
        .into_par_iter()
        .map(|i| {
            let mut cfg = config.clone();
            cfg.seed = Some(base_seed.wrapping_add(i as u64 * 100).to_string());
            run_search(&dna, &scorer, &cfg)
        })
        .collect();

    let mut best: Option<SearchResult> = None;
    for result in results {
        let improved = match &best {
            None => true,
            Some(current) => result.best_impact > current.best_impact,
        };
        if improved {
            best = Some(result);
        }
    }
    let result = best.expect("at least one attempt runs");

    reports::print_search_summary(&result);

    if let Some(path) = &args.out_json {
        serde_json::to_writer_pretty(File::create(path)?, &result)?;
        info!("Result record written to {}", path);
    }

    Ok(())
}
