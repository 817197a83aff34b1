#[macro_use]
mod par;

pub mod alphabets;
pub mod code;
pub mod config;
pub mod error;
pub mod io;
pub mod optimize;
pub mod pipeline;
pub mod seq;
pub mod usage;
pub mod verify;

pub use code::{Codon, GeneticCode, Residue};
pub use config::{load_config, save_config, OptimizerConfig};
pub use error::{CodonError, CodonResult};
pub use optimize::{optimize, OptimizationResult, Optimizer, Target, Warning};
pub use pipeline::{
    BatchReport, BatchSummary, NoopObserver, Pipeline, ProgressObserver, Stage, TargetKind,
    TargetStatus,
};
pub use seq::{CodingSeq, ProteinSeq, SeqRecord};
pub use usage::CodonUsageTable;
pub use verify::{verify, verify_with, VerificationOutcome, VerifyOptions};
