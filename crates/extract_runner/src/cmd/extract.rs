use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use log::info;
use poke_extract::{extract_all, Domain, Layout, Style};
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Root of the disassembly checkout
    #[arg(short, long)]
    pub source: PathBuf,

    /// Directory receiving the JSON files
    #[arg(short, long)]
    pub output: PathBuf,

    /// JSON file overriding source paths or output names
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// Restrict the run to these domains (e.g. `moves`, `levelMoves`)
    #[arg(long, num_args = 1..)]
    pub only: Vec<Domain>,

    /// Write single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Serialize)]
struct DomainSummary {
    domain: &'static str,
    records: usize,
    file: PathBuf,
}

#[derive(Serialize)]
struct RunSummary {
    source: PathBuf,
    domains: Vec<DomainSummary>,
    combined: PathBuf,
}

pub fn execute(args: ExtractArgs) -> anyhow::Result<()> {
    let layout = match &args.layout {
        Some(path) => Layout::load(path).context("loading layout file")?,
        None => Layout::default(),
    };

    let mut domains = if args.only.is_empty() {
        Domain::ALL.to_vec()
    } else {
        args.only
    };
    domains.sort_unstable();
    domains.dedup();

    let style = if args.compact {
        Style::Compact
    } else {
        Style::Pretty
    };

    info!("Extracting {} domains from {}", domains.len(), args.source.display());
    let (extraction, written) = extract_all(&args.source, &args.output, &layout, &domains, style)
        .with_context(|| format!("writing outputs to {}", args.output.display()))?;

    let summary = RunSummary {
        source: args.source,
        domains: domains
            .iter()
            .zip(&written)
            .map(|(&domain, file)| DomainSummary {
                domain: domain.name(),
                records: extraction.count(domain),
                file: file.clone(),
            })
            .collect(),
        combined: written.last().cloned().unwrap_or_default(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
