use anyhow::{Context, Result};
use clap::Args;
use codonopt_core::code::DEFAULT_TABLE_ID;
use codonopt_core::io::read_fasta_records_from_path;
use codonopt_core::usage::{write_usage_csv, write_usage_csv_to_path};
use codonopt_core::{CodonUsageTable, GeneticCode, SeqRecord};
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct UsageArgs {
    /// Host coding sequences (FASTA)
    #[arg(short = 'r', long, value_name = "FILE")]
    pub reference: PathBuf,

    /// NCBI genetic code id
    #[arg(short = 'g', long = "genetic-code", value_name = "ID", default_value_t = DEFAULT_TABLE_ID)]
    pub genetic_code: u8,

    /// CSV output (stdout if omitted)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: UsageArgs) -> Result<()> {
    let code = GeneticCode::from_id(args.genetic_code)?;
    let references: Vec<SeqRecord<Vec<u8>>> = read_fasta_records_from_path(&args.reference)
        .with_context(|| format!("Failed to read reference {}", args.reference.display()))?;
    let table = CodonUsageTable::build(&references, &code)
        .context("Failed to build codon usage table")?;
    info!(
        codons = table.total_codons(),
        stops = table.stop_count(),
        "counted reference codons"
    );

    match &args.output {
        Some(path) => write_usage_csv_to_path(&table, path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => write_usage_csv(&table, std::io::stdout().lock())?,
    }
    Ok(())
}
