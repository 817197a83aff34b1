use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use codonopt_core::CodonError;

fn main() {
    let cli = Cli::parse();

    // CODONOPT_LOG wins over -v
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let log_level = std::env::var("CODONOPT_LOG").unwrap_or_else(|_| default_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Optimize(args) => crate::cli::commands::optimize::run(args, cli.quiet),
        Commands::Usage(args) => crate::cli::commands::usage::run(args),
        Commands::Translate(args) => crate::cli::commands::translate::run(args),
        Commands::Codes => crate::cli::commands::codes::run(),
    }
}

fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<CodonError>().map(CodonError::root) {
        Some(
            CodonError::Config { .. }
            | CodonError::UnknownGeneticCode { .. }
            | CodonError::GeneticCodeMismatch { .. },
        ) => 2,
        Some(CodonError::Io(_) | CodonError::Csv(_)) => 3,
        Some(
            CodonError::EmptyCorpus
            | CodonError::FastaFormat { .. }
            | CodonError::InvalidLength { .. }
            | CodonError::InvalidCodon { .. }
            | CodonError::InvalidResidue { .. }
            | CodonError::InternalStop { .. },
        ) => 4,
        _ => 1,
    }
}
