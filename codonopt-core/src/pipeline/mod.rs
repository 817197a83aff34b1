//! Batch coordinator: builds the usage table once, then optimizes and
//! verifies every target on a worker pool.

mod progress;

pub use progress::{NoopObserver, ProgressObserver, Stage};

use crate::alphabets::dna;
use crate::code::GeneticCode;
use crate::config::OptimizerConfig;
use crate::error::{CodonError, CodonResult};
use crate::optimize::{OptimizationResult, Optimizer, OptimizerOptions, Target, Warning};
use crate::seq::{CodingSeq, SeqBytes, SeqRecord};
use crate::usage::CodonUsageTable;
use crate::verify::{verify_with, VerificationOutcome, VerifyOptions};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

/// How to read a target record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Nucleotide if the record is only A/C/G/T and a whole number of codons,
    /// otherwise protein. Such a record is also a valid peptide (Ala, Cys,
    /// Gly, Thr), so every nucleotide guess carries `Warning::AmbiguousTarget`.
    Auto,
    #[default]
    Protein,
    Nucleotide,
}

impl TargetKind {
    /// The concrete kind for `seq`. Never returns `Auto`.
    pub fn resolve(self, seq: &[u8]) -> TargetKind {
        match self {
            TargetKind::Auto => {
                if !seq.is_empty() && seq.len() % 3 == 0 && dna::alphabet().is_word(seq) {
                    TargetKind::Nucleotide
                } else {
                    TargetKind::Protein
                }
            }
            kind => kind,
        }
    }

    pub fn target(self, seq: &[u8]) -> Target<'_> {
        match self.resolve(seq) {
            TargetKind::Nucleotide => Target::Nucleotide(seq),
            _ => Target::Protein(seq),
        }
    }
}

impl std::str::FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(TargetKind::Auto),
            "protein" | "aa" => Ok(TargetKind::Protein),
            "nucleotide" | "dna" | "nt" => Ok(TargetKind::Nucleotide),
            _ => Err(format!("Unknown target kind: {}", s)),
        }
    }
}

#[derive(Debug)]
pub enum TargetStatus {
    /// Optimized and verified. Verification warnings are appended to
    /// `result.warnings`.
    Optimized(OptimizationResult),
    Failed(CodonError),
    /// Not attempted because an earlier target hit a fatal error.
    Skipped,
}

#[derive(Debug)]
pub struct TargetReport {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub status: TargetStatus,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub warned: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.warned + self.failed + self.skipped
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} succeeded, {} with warnings, {} failed, {} skipped",
            self.succeeded, self.warned, self.failed, self.skipped
        )
    }
}

/// Per-target outcomes, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    reports: Vec<TargetReport>,
}

impl From<Vec<TargetReport>> for BatchReport {
    fn from(reports: Vec<TargetReport>) -> Self {
        Self { reports }
    }
}

impl BatchReport {
    pub fn reports(&self) -> &[TargetReport] {
        &self.reports
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for report in &self.reports {
            match &report.status {
                TargetStatus::Optimized(result) if result.warnings.is_empty() => {
                    summary.succeeded += 1
                }
                TargetStatus::Optimized(_) => summary.warned += 1,
                TargetStatus::Failed(_) => summary.failed += 1,
                TargetStatus::Skipped => summary.skipped += 1,
            }
        }
        summary
    }

    /// A fidelity violation occurred somewhere in the batch.
    pub fn has_fatal(&self) -> bool {
        self.failures().any(CodonError::is_fatal)
    }

    pub fn has_failures(&self) -> bool {
        self.reports
            .iter()
            .any(|r| !matches!(r.status, TargetStatus::Optimized(_)))
    }

    pub fn failures(&self) -> impl Iterator<Item = &CodonError> {
        self.reports.iter().filter_map(|r| match &r.status {
            TargetStatus::Failed(err) => Some(err),
            _ => None,
        })
    }

    /// Optimized sequences named after their source records.
    pub fn optimized_records(&self) -> Vec<SeqRecord<CodingSeq>> {
        self.reports
            .iter()
            .filter_map(|r| match &r.status {
                TargetStatus::Optimized(result) => Some(SeqRecord {
                    id: r.id.clone(),
                    desc: r.desc.clone(),
                    seq: result.sequence.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

pub struct Pipeline<'o> {
    code: GeneticCode,
    table: CodonUsageTable,
    options: OptimizerOptions,
    verify: VerifyOptions,
    workers: usize,
    observer: &'o dyn ProgressObserver,
}

impl Pipeline<'static> {
    pub fn new<S: SeqBytes + Sync>(
        references: &[SeqRecord<S>],
        config: &OptimizerConfig,
    ) -> CodonResult<Self> {
        Pipeline::with_observer(references, config, &NoopObserver)
    }
}

impl<'o> Pipeline<'o> {
    /// Build the usage table from `references`. Any bad reference record
    /// fails the whole pipeline.
    pub fn with_observer<S: SeqBytes + Sync>(
        references: &[SeqRecord<S>],
        config: &OptimizerConfig,
        observer: &'o dyn ProgressObserver,
    ) -> CodonResult<Self> {
        let code = GeneticCode::from_id(config.optimizer.genetic_code)?;
        observer.on_progress(
            Stage::BuildTable,
            &format!("{} reference records", references.len()),
        );
        let table = CodonUsageTable::build(references, &code)?;
        info!(
            code = code.id(),
            codons = table.total_codons(),
            amino_acids = table.amino_acids().len(),
            "built codon usage table"
        );
        Ok(Self {
            code,
            table,
            options: config.optimizer_options(),
            verify: config.verify_options(),
            workers: config.performance.workers,
            observer,
        })
    }

    pub fn table(&self) -> &CodonUsageTable {
        &self.table
    }

    pub fn code(&self) -> &GeneticCode {
        &self.code
    }

    /// Optimize and verify every target. Only a worker pool that fails to
    /// start is returned as `Err`; per-target errors land in the report.
    pub fn run<S: SeqBytes + Sync>(
        &self,
        targets: &[SeqRecord<S>],
        kind: TargetKind,
    ) -> CodonResult<BatchReport> {
        self.run_with(targets, kind, |optimizer: &Optimizer<'_>, target: Target<'_>| {
            optimizer.optimize(target)
        })
    }

    /// `run` with the per-target optimization step supplied by the caller.
    pub(crate) fn run_with<S, F>(
        &self,
        targets: &[SeqRecord<S>],
        kind: TargetKind,
        optimize: F,
    ) -> CodonResult<BatchReport>
    where
        S: SeqBytes + Sync,
        F: Fn(&Optimizer<'_>, Target<'_>) -> CodonResult<OptimizationResult> + Sync,
    {
        let optimizer = Optimizer::new(&self.table, &self.code)?.with_options(self.options);
        let abort = AtomicBool::new(false);

        let reports = with_workers!(self.workers, || -> Vec<TargetReport> {
            par_map!(targets, |record: &SeqRecord<S>| {
                let report = self.process(&optimizer, &optimize, record, kind, &abort);
                self.observer.on_progress(Stage::Optimize, record.id());
                report
            })
        })?;

        let report = BatchReport::from(reports);
        let summary = report.summary();
        info!(%summary, "batch finished");
        self.observer.on_progress(Stage::Finish, &summary.to_string());
        Ok(report)
    }

    fn process<S, F>(
        &self,
        optimizer: &Optimizer<'_>,
        optimize: &F,
        record: &SeqRecord<S>,
        kind: TargetKind,
        abort: &AtomicBool,
    ) -> TargetReport
    where
        S: SeqBytes,
        F: Fn(&Optimizer<'_>, Target<'_>) -> CodonResult<OptimizationResult>,
    {
        let status = if abort.load(Ordering::Acquire) {
            TargetStatus::Skipped
        } else {
            self.optimize_and_verify(optimizer, optimize, record, kind, abort)
        };
        TargetReport {
            id: record.id.clone(),
            desc: record.desc.clone(),
            status,
        }
    }

    fn optimize_and_verify<S, F>(
        &self,
        optimizer: &Optimizer<'_>,
        optimize: &F,
        record: &SeqRecord<S>,
        kind: TargetKind,
        abort: &AtomicBool,
    ) -> TargetStatus
    where
        S: SeqBytes,
        F: Fn(&Optimizer<'_>, Target<'_>) -> CodonResult<OptimizationResult>,
    {
        let id = record.id();
        let target = kind.target(record.seq().as_bytes());

        let mut result = match optimize(optimizer, target) {
            Ok(result) => result,
            Err(err) => {
                warn!(record = id, error = %err, "target failed");
                return TargetStatus::Failed(err.in_record(id));
            }
        };

        match verify_with(target, &result.sequence, &self.code, self.verify) {
            VerificationOutcome::Verified => {}
            VerificationOutcome::VerifiedWithWarning(warning) => result.warnings.push(warning),
            VerificationOutcome::Failed(err) => {
                if err.is_fatal() {
                    error!(record = id, error = %err, "fidelity check failed, aborting batch");
                    abort.store(true, Ordering::Release);
                } else {
                    warn!(record = id, error = %err, "verification failed");
                }
                return TargetStatus::Failed(err.in_record(id));
            }
        }
        if kind == TargetKind::Auto && matches!(target, Target::Nucleotide(_)) {
            result.warnings.push(Warning::AmbiguousTarget);
        }

        for warning in &result.warnings {
            warn!(record = id, "{warning}");
        }
        TargetStatus::Optimized(result)
    }
}
