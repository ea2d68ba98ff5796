use crate::reports;
use clap::Args;
use oncoforge_core::config::{decay_for_tumor, TrajectoryConfig};
use oncoforge_core::error::OfResult;
use oncoforge_core::events::detect_events;
use oncoforge_core::export::write_trajectory_csv;
use oncoforge_core::trajectory::{run_trajectory, MutationNoise};
use std::fs::File;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: TrajectoryConfig,

    /// Load simulation parameters from a JSON file (replaces the parameter flags).
    #[arg(long)]
    pub params: Option<String>,

    /// Tumor type used to look up a suggested decay rate (overrides --decay).
    #[arg(long)]
    pub tumor_type: Option<String>,

    /// Tumor stage (1-4), used together with --tumor-type.
    #[arg(long, default_value_t = 2)]
    pub stage: u8,

    /// Severity coefficient for the stage-adjusted decay formula.
    #[arg(long, default_value_t = 0.0)]
    pub alpha: f64,

    /// Write the full sample table to a CSV file.
    #[arg(long)]
    pub out_csv: Option<String>,

    /// Write detected events to a JSON file.
    #[arg(long)]
    pub out_json: Option<String>,

    /// Map detected events onto 1-based residue indices of a protein this long.
    #[arg(long)]
    pub protein_length: Option<usize>,

    /// Offset added to the PRNG state before residue mapping.
    #[arg(long, default_value_t = 0)]
    pub residue_offset: u64,
}

pub fn run(args: SimulateArgs) -> OfResult<()> {
    let mut config = args.config;

    if let Some(path) = &args.params {
        info!("📂 Loading simulation parameters from {}", path);
        config = TrajectoryConfig::load_from_file(path)?;
    }

    if let Some(tumor) = &args.tumor_type {
        config.decay = decay_for_tumor(tumor, args.stage, args.alpha);
        info!(
            "⚖️  Decay for {} (stage {}): {:.5}/day",
            tumor, args.stage, config.decay
        );
    }

    info!(
        "🧬 Simulating {} days (seed {}, decay {:.5})",
        config.days, config.seed, config.decay
    );
    let samples = run_trajectory(&config, &MutationNoise);
    let events = detect_events(&samples, config.threshold);
    info!(
        "Detected {} mutation events above impulse {}",
        events.len(),
        config.threshold
    );

    reports::print_trajectory_summary(&samples);
    reports::print_events(&events, args.protein_length, args.residue_offset);

    if let Some(path) = &args.out_csv {
        write_trajectory_csv(File::create(path)?, &samples)?;
        info!("Sample table written to {}", path);
    }
    if let Some(path) = &args.out_json {
        serde_json::to_writer_pretty(File::create(path)?, &events)?;
        info!("Event list written to {}", path);
    }

    Ok(())
}
