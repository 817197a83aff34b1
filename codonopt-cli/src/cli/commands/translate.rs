use anyhow::{Context, Result};
use clap::Args;
use codonopt_core::code::{translate_records, DEFAULT_TABLE_ID};
use codonopt_core::io::{
    read_fasta_records_from_path, write_fasta_records, write_fasta_records_to_path,
    DEFAULT_LINE_WIDTH,
};
use codonopt_core::{GeneticCode, ProteinSeq, SeqRecord};
use std::io::Write;
use std::path::PathBuf;

#[derive(Args)]
pub struct TranslateArgs {
    /// Nucleotide FASTA to translate
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: PathBuf,

    /// NCBI genetic code id
    #[arg(short = 'g', long = "genetic-code", value_name = "ID", default_value_t = DEFAULT_TABLE_ID)]
    pub genetic_code: u8,

    /// Stop at the first in-frame stop instead of rejecting the record
    #[arg(long)]
    pub to_stop: bool,

    /// FASTA line width (0 = no wrapping)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: usize,

    /// Output FASTA (stdout if omitted)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: TranslateArgs) -> Result<()> {
    let code = GeneticCode::from_id(args.genetic_code)?;
    let records: Vec<SeqRecord<Vec<u8>>> = read_fasta_records_from_path(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let proteins: Vec<SeqRecord<ProteinSeq>> = if args.to_stop {
        records
            .iter()
            .map(|record| {
                code.translate_to_stop(record.seq())
                    .map(|protein| record.with_seq(protein))
                    .with_context(|| format!("Failed to translate record '{}'", record.id()))
            })
            .collect::<Result<_>>()?
    } else {
        translate_records(&records, &code)?
    };

    match &args.output {
        Some(path) => write_fasta_records_to_path(path, &proteins, args.line_width)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut out = std::io::stdout().lock();
            write_fasta_records(&mut out, &proteins, args.line_width)?;
            out.flush()?;
        }
    }
    Ok(())
}
