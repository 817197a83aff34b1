use crate::cli::progress::BarObserver;
use anyhow::{Context, Result};
use clap::Args;
use codonopt_core::io::{read_fasta_records_from_path, write_fasta_records_to_path};
use codonopt_core::optimize::Strategy;
use codonopt_core::usage::write_usage_csv_to_path;
use codonopt_core::{
    load_config, BatchReport, NoopObserver, OptimizerConfig, Pipeline, ProgressObserver,
    SeqRecord, TargetKind, TargetStatus,
};
use colored::*;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct OptimizeArgs {
    /// Host coding sequences (FASTA) to derive codon usage from
    #[arg(short = 'r', long, value_name = "FILE")]
    pub reference: PathBuf,

    /// Genes or proteins to optimize (FASTA)
    #[arg(short = 't', long, value_name = "FILE")]
    pub targets: PathBuf,

    /// Output FASTA with one record per optimized target
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: PathBuf,

    /// NCBI genetic code id [default: 11]
    #[arg(short = 'g', long = "genetic-code", value_name = "ID")]
    pub genetic_code: Option<u8>,

    /// Worker threads (0 = all cores)
    #[arg(short = 'j', long, value_name = "N")]
    pub workers: Option<usize>,

    /// How to read target records (protein, dna, auto)
    #[arg(long, value_name = "KIND", default_value = "protein")]
    pub target_kind: TargetKind,

    /// Codon selection (most-frequent, weighted)
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Seed for the weighted strategy
    #[arg(long)]
    pub seed: Option<u64>,

    /// End every optimized ORF with the host's preferred stop codon
    #[arg(long)]
    pub append_stop: bool,

    /// Fail targets whose sequence cannot be changed
    #[arg(long)]
    pub strict_identical: bool,

    /// FASTA line width (0 = no wrapping)
    #[arg(long, value_name = "N")]
    pub line_width: Option<usize>,

    /// Also write the usage table as CSV
    #[arg(long, value_name = "FILE")]
    pub usage_csv: Option<PathBuf>,

    /// TOML config file; flags override its values
    #[arg(short = 'c', long, value_name = "FILE", env = "CODONOPT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl OptimizeArgs {
    fn resolve_config(&self) -> Result<OptimizerConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => OptimizerConfig::default(),
        };
        if let Some(id) = self.genetic_code {
            config.optimizer.genetic_code = id;
        }
        if let Some(strategy) = self.strategy {
            config.optimizer.strategy = strategy;
        }
        if let Some(seed) = self.seed {
            config.optimizer.seed = seed;
        }
        if self.append_stop {
            config.optimizer.append_stop = true;
        }
        if self.strict_identical {
            config.verify.identical_is_fatal = true;
        }
        if let Some(workers) = self.workers {
            config.performance.workers = workers;
        }
        if let Some(width) = self.line_width {
            config.output.line_width = width;
        }
        Ok(config)
    }
}

pub fn run(args: OptimizeArgs, quiet: bool) -> Result<()> {
    let config = args.resolve_config()?;

    let references: Vec<SeqRecord<Vec<u8>>> = read_fasta_records_from_path(&args.reference)
        .with_context(|| format!("Failed to read reference {}", args.reference.display()))?;
    let targets: Vec<SeqRecord<Vec<u8>>> = read_fasta_records_from_path(&args.targets)
        .with_context(|| format!("Failed to read targets {}", args.targets.display()))?;
    info!(
        references = references.len(),
        targets = targets.len(),
        "loaded sequences"
    );

    let observer: Box<dyn ProgressObserver> = if quiet {
        Box::new(NoopObserver)
    } else {
        Box::new(BarObserver::new(targets.len()))
    };

    let pipeline = Pipeline::with_observer(&references, &config, observer.as_ref())
        .context("Failed to build codon usage table")?;

    if let Some(path) = &args.usage_csv {
        write_usage_csv_to_path(pipeline.table(), path)
            .with_context(|| format!("Failed to write usage table {}", path.display()))?;
    }

    let report = pipeline.run(&targets, args.target_kind)?;

    write_fasta_records_to_path(
        &args.output,
        &report.optimized_records(),
        config.output.line_width,
    )
    .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if !quiet {
        print_report(&report);
    }
    batch_result(&report)
}

/// A fidelity violation outranks ordinary per-target failures.
fn batch_result(report: &BatchReport) -> Result<()> {
    let summary = report.summary();
    if report.has_fatal() {
        anyhow::bail!(
            "fidelity check failed, {} target(s) skipped",
            summary.skipped
        );
    }
    if summary.failed > 0 {
        anyhow::bail!("{} of {} target(s) failed", summary.failed, summary.total());
    }
    Ok(())
}

fn print_report(report: &BatchReport) {
    for target in report.reports() {
        match &target.status {
            TargetStatus::Optimized(result) => {
                for warning in &result.warnings {
                    eprintln!("{} {}: {}", "warning:".yellow().bold(), target.id, warning);
                }
            }
            TargetStatus::Failed(err) => {
                eprintln!("{} {}", "failed:".red().bold(), err);
            }
            TargetStatus::Skipped => {
                eprintln!("{} {}", "skipped:".dimmed(), target.id);
            }
        }
    }

    let summary = report.summary();
    let line = summary.to_string();
    if summary.failed > 0 || summary.skipped > 0 {
        eprintln!("{}", line.red());
    } else if summary.warned > 0 {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{}", line.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codonopt_core::pipeline::TargetReport;
    use codonopt_core::CodonError;

    fn report(statuses: Vec<(&str, TargetStatus)>) -> BatchReport {
        statuses
            .into_iter()
            .map(|(id, status)| TargetReport {
                id: id.into(),
                desc: None,
                status,
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn fidelity_failure_reports_skipped_targets() {
        let report = report(vec![
            (
                "bad",
                TargetStatus::Failed(CodonError::FidelityViolation {
                    position: 0,
                    expected: 'M',
                    found: 'W',
                }),
            ),
            ("later", TargetStatus::Skipped),
            ("last", TargetStatus::Skipped),
        ]);
        let err = batch_result(&report).unwrap_err();
        assert_eq!(err.to_string(), "fidelity check failed, 2 target(s) skipped");
    }

    #[test]
    fn ordinary_failures_are_counted() {
        let report = report(vec![
            ("bad", TargetStatus::Failed(CodonError::EmptyProtein)),
            ("later", TargetStatus::Skipped),
        ]);
        let err = batch_result(&report).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 target(s) failed");
    }

    #[test]
    fn empty_batch_is_ok() {
        assert!(batch_result(&BatchReport::default()).is_ok());
    }
}
