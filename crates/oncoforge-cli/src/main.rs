use clap::{Parser, Subcommand};
use tracing::error;

mod cmd;
mod fasta;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the patient-trajectory simulation with mutation-event detection.
    Simulate(cmd::simulate::SimulateArgs),
    /// Run the antibody mutation search over an input DNA sequence.
    Search(cmd::search::SearchArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let result = match cli.command {
        Commands::Simulate(args) => cmd::simulate::run(args),
        Commands::Search(args) => cmd::search::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
