//! Command-line entry point for the extraction pipeline.
//!
//! Usage:
//!   cargo run -p extract_runner -- extract --source ../pokecrystal --output out
//!   cargo run -p extract_runner -- extract --source ../pokecrystal --output out --only moves
//!   cargo run -p extract_runner -- normalize MR__MIME
//!   cargo run -p extract_runner -- rates grass 7

mod cmd;

use clap::{ArgAction, Parser, Subcommand};
use cmd::{extract, normalize, rates};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "extract_runner", version)]
struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every domain from a source tree into JSON files
    Extract(extract::ExtractArgs),

    /// Print the canonical key for a raw species token
    Normalize(normalize::NormalizeArgs),

    /// Print slot percentages for an encounter method
    Rates(rates::RatesArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Extract(args)) => extract::execute(args),
        Some(Commands::Normalize(args)) => {
            normalize::execute(args);
            Ok(())
        }
        Some(Commands::Rates(args)) => {
            rates::execute(args);
            Ok(())
        }
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
