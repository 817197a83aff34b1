pub mod commands;
pub mod progress;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "codonopt",
    version,
    about = "Codon optimization against a host organism's codon usage",
    long_about = "codonopt counts codon usage in a host's coding sequences and rewrites target \
                  genes (or back-translates proteins) with the codons the host prefers, checking \
                  that every result still encodes the same protein."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// No progress bar or summary
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize target sequences for a host genome
    Optimize(commands::optimize::OptimizeArgs),

    /// Write the codon usage table of a reference genome as CSV
    Usage(commands::usage::UsageArgs),

    /// Translate nucleotide records to protein
    Translate(commands::translate::TranslateArgs),

    /// List the supported genetic codes
    Codes,
}
