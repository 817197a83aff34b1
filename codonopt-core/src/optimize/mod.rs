//! Rewrites a coding sequence, or back-translates a protein, using the codons
//! a host organism prefers.

mod select;

pub use select::{CodonSelector, MostFrequent, Strategy, Weighted};

use crate::code::{Codon, GeneticCode};
use crate::error::{CodonError, CodonResult};
use crate::seq::{CodingSeq, ProteinSeq};
use crate::usage::CodonUsageTable;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// What to optimize: a nucleotide ORF to re-code, or a protein to
/// back-translate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target<'a> {
    Nucleotide(&'a [u8]),
    Protein(&'a [u8]),
}

/// Conditions worth reporting that do not invalidate a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Warning {
    /// The reference corpus never used this amino acid; its codon came from
    /// the genetic code alone.
    NoUsageData { position: usize, amino_acid: char },
    /// Optimization could not change the nucleotide sequence.
    IdenticalSequence,
    /// The record was read as DNA, but its letters also spell a valid protein.
    AmbiguousTarget,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::NoUsageData {
                position,
                amino_acid,
            } => write!(
                f,
                "no usage data for '{amino_acid}' at residue {position}, used genetic code fallback"
            ),
            Warning::IdenticalSequence => {
                write!(f, "optimized sequence is identical to the original")
            }
            Warning::AmbiguousTarget => write!(
                f,
                "record is also a valid protein but was read as DNA; use --target-kind to choose"
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptimizationResult {
    pub sequence: CodingSeq,
    /// The protein the sequence must encode.
    pub protein: ProteinSeq,
    pub warnings: Vec<Warning>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptimizerOptions {
    pub strategy: Strategy,
    /// Only used by [`Strategy::Weighted`].
    pub seed: u64,
    /// End the ORF with the host's most used stop codon.
    pub append_stop: bool,
}

pub struct Optimizer<'a> {
    table: &'a CodonUsageTable,
    code: &'a GeneticCode,
    options: OptimizerOptions,
    ranked: BTreeMap<u8, Vec<(Codon, u64)>>,
}

impl<'a> Optimizer<'a> {
    pub fn new(table: &'a CodonUsageTable, code: &'a GeneticCode) -> CodonResult<Self> {
        if table.code_id() != code.id() {
            return Err(CodonError::GeneticCodeMismatch {
                table: table.code_id(),
                code: code.id(),
            });
        }
        let ranked = table
            .amino_acids()
            .into_iter()
            .map(|aa| (aa, table.codons(aa)))
            .collect();
        Ok(Self {
            table,
            code,
            options: OptimizerOptions::default(),
            ranked,
        })
    }

    pub fn with_options(mut self, options: OptimizerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &OptimizerOptions {
        &self.options
    }

    pub fn code(&self) -> &GeneticCode {
        self.code
    }

    /// Optimize with the configured strategy. Weighted runs start from the
    /// configured seed on every call.
    pub fn optimize(&self, target: Target<'_>) -> CodonResult<OptimizationResult> {
        match self.options.strategy {
            Strategy::MostFrequent => self.optimize_with(target, &mut MostFrequent),
            Strategy::Weighted => self.optimize_with(target, &mut Weighted::new(self.options.seed)),
        }
    }

    pub fn optimize_with<S>(
        &self,
        target: Target<'_>,
        selector: &mut S,
    ) -> CodonResult<OptimizationResult>
    where
        S: CodonSelector + ?Sized,
    {
        let protein = self.protein_of(target)?;
        if protein.is_empty() {
            return Err(CodonError::EmptyProtein);
        }

        let mut codons = Vec::with_capacity(protein.len() + 1);
        let mut warnings = Vec::new();
        for (position, &aa) in protein.as_bytes().iter().enumerate() {
            let codon = match self.ranked.get(&aa) {
                Some(choices) => selector.select(choices),
                None => {
                    warnings.push(Warning::NoUsageData {
                        position,
                        amino_acid: aa as char,
                    });
                    self.fallback(aa, position)?
                }
            };
            codons.push(codon);
        }

        if self.options.append_stop {
            match self.stop_codon() {
                Some(stop) => codons.push(stop),
                None => debug!(code = self.code.id(), "genetic code has no stop codon to append"),
            }
        }

        Ok(OptimizationResult {
            sequence: CodingSeq::from_codons(codons),
            protein,
            warnings,
        })
    }

    /// The protein a target must keep encoding.
    pub fn protein_of(&self, target: Target<'_>) -> CodonResult<ProteinSeq> {
        match target {
            Target::Nucleotide(bytes) => self.code.translate(bytes),
            Target::Protein(bytes) => ProteinSeq::parse(bytes.to_vec()),
        }
    }

    fn fallback(&self, aa: u8, position: usize) -> CodonResult<Codon> {
        self.code
            .synonyms(aa)
            .first()
            .copied()
            .ok_or(CodonError::InvalidResidue {
                ch: aa as char,
                pos: position,
            })
    }

    fn stop_codon(&self) -> Option<Codon> {
        self.table
            .preferred_stop()
            .or_else(|| self.code.stop_codons().first().copied())
    }
}

/// Optimize `target` with the default, deterministic strategy.
pub fn optimize(
    target: Target<'_>,
    table: &CodonUsageTable,
    code: &GeneticCode,
) -> CodonResult<OptimizationResult> {
    Optimizer::new(table, code)?.optimize(target)
}

#[cfg(test)]
mod tests;
