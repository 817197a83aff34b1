//! Codon usage profiles built from a reference corpus of coding sequences.
//!
//! The table stores raw occurrence counts per codon; frequencies and RSCU are
//! derived on demand, so counts from different corpora stay comparable.

mod export;

pub use export::{write_usage_csv, write_usage_csv_to_path, UsageRow};

use crate::code::codon::parse_codons;
use crate::code::{Codon, GeneticCode, Residue};
use crate::error::{CodonError, CodonResult};
use crate::seq::{SeqBytes, SeqRecord};
use tracing::debug;

const STOP: u8 = b'*';

/// Per-codon counts over a reference corpus, grouped by the amino acid each
/// codon encodes under the genetic code it was built with. Immutable once
/// built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonUsageTable {
    code_id: u8,
    /// Indexed by [`Codon::index`]; `*` marks a stop.
    residues: [u8; 64],
    counts: [u64; 64],
}

impl CodonUsageTable {
    /// Count every in-frame codon of every reference sequence.
    ///
    /// Stop codons are tallied into `stop_count` wherever they sit in a
    /// reference, internal ones included; they never reject the corpus, unlike
    /// `GeneticCode::translate`. A malformed reference (length, alphabet) does
    /// reject it, and the error names the offending record.
    pub fn build<S: SeqBytes + Sync>(
        references: &[SeqRecord<S>],
        code: &GeneticCode,
    ) -> CodonResult<Self> {
        let count_record = |record: &SeqRecord<S>| -> CodonResult<[u64; 64]> {
            let codons = parse_codons(record.seq().as_bytes())
                .map_err(|err| err.in_record(record.id()))?;
            let mut counts = [0u64; 64];
            for codon in codons {
                counts[codon.index()] += 1;
            }
            Ok(counts)
        };
        let per_record: CodonResult<Vec<[u64; 64]>> = par_try_map!(references, count_record);
        let per_record = per_record?;

        let mut counts = [0u64; 64];
        for record_counts in &per_record {
            for (total, n) in counts.iter_mut().zip(record_counts) {
                *total += n;
            }
        }

        let table = Self::from_raw(code, counts)?;
        debug!(
            references = references.len(),
            codons = table.total_codons(),
            stops = table.stop_count(),
            amino_acids = table.amino_acids().len(),
            "codon usage table built"
        );
        Ok(table)
    }

    /// Table from explicit per-codon counts. Unlisted codons count zero.
    pub fn from_counts<I>(code: &GeneticCode, counts: I) -> CodonResult<Self>
    where
        I: IntoIterator<Item = (Codon, u64)>,
    {
        let mut raw = [0u64; 64];
        for (codon, n) in counts {
            raw[codon.index()] += n;
        }
        Self::from_raw(code, raw)
    }

    fn from_raw(code: &GeneticCode, counts: [u64; 64]) -> CodonResult<Self> {
        let mut residues = [STOP; 64];
        for codon in Codon::all() {
            if let Residue::Amino(aa) = code.residue(codon) {
                residues[codon.index()] = aa;
            }
        }
        let table = Self {
            code_id: code.id(),
            residues,
            counts,
        };
        if table.total_codons() == 0 {
            return Err(CodonError::EmptyCorpus);
        }
        Ok(table)
    }

    /// Id of the genetic code the counts are grouped by.
    pub fn code_id(&self) -> u8 {
        self.code_id
    }

    /// Amino acids observed at least once, sorted.
    pub fn amino_acids(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .residues
            .iter()
            .zip(&self.counts)
            .filter(|&(&r, &n)| r != STOP && n > 0)
            .map(|(&r, _)| r)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    pub fn contains(&self, amino_acid: u8) -> bool {
        self.total(amino_acid) > 0
    }

    /// Synonymous codons of `amino_acid` with their counts, most used first,
    /// ties in lexicographic order. Empty if the amino acid was never observed.
    pub fn codons(&self, amino_acid: u8) -> Vec<(Codon, u64)> {
        let aa = amino_acid.to_ascii_uppercase();
        if aa == STOP || !self.contains(aa) {
            return Vec::new();
        }
        self.ranked(aa)
    }

    fn ranked(&self, symbol: u8) -> Vec<(Codon, u64)> {
        let mut out: Vec<(Codon, u64)> = Codon::all()
            .filter(|c| self.residues[c.index()] == symbol)
            .map(|c| (c, self.counts[c.index()]))
            .collect();
        // Codon::all() is already lexicographic and sort_by is stable.
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// The most used codon for `amino_acid`, if it was observed.
    pub fn preferred_codon(&self, amino_acid: u8) -> Option<Codon> {
        self.codons(amino_acid).first().map(|&(c, _)| c)
    }

    /// The most used stop codon, if any stop was observed.
    pub fn preferred_stop(&self) -> Option<Codon> {
        self.ranked(STOP)
            .into_iter()
            .find(|&(_, n)| n > 0)
            .map(|(c, _)| c)
    }

    pub fn count(&self, codon: Codon) -> u64 {
        self.counts[codon.index()]
    }

    /// Occurrences of all codons for `amino_acid`.
    pub fn total(&self, amino_acid: u8) -> u64 {
        let aa = amino_acid.to_ascii_uppercase();
        self.residues
            .iter()
            .zip(&self.counts)
            .filter(|&(&r, _)| r == aa)
            .map(|(_, &n)| n)
            .sum()
    }

    /// Share of `codon` among its synonymous codons, in `[0, 1]`.
    pub fn frequency(&self, codon: Codon) -> f64 {
        let total = self.total(self.residues[codon.index()]);
        if total == 0 {
            return 0.0;
        }
        self.count(codon) as f64 / total as f64
    }

    /// Relative synonymous codon usage: observed count over the mean count of
    /// the synonymous group. 1.0 means no bias.
    pub fn rscu(&self, codon: Codon) -> f64 {
        let symbol = self.residues[codon.index()];
        let total = self.total(symbol);
        if total == 0 {
            return 0.0;
        }
        let group = self.residues.iter().filter(|&&r| r == symbol).count();
        self.count(codon) as f64 * group as f64 / total as f64
    }

    /// Amino-acid codons counted (stops excluded).
    pub fn total_codons(&self) -> u64 {
        self.residues
            .iter()
            .zip(&self.counts)
            .filter(|&(&r, _)| r != STOP)
            .map(|(_, &n)| n)
            .sum()
    }

    pub fn stop_count(&self) -> u64 {
        self.total(STOP)
    }
}
