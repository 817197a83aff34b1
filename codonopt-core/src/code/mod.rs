//! Genetic codes: codon → amino acid (or stop) for each NCBI translation table.

pub mod codon;
mod tables;

pub use codon::Codon;
pub use tables::DEFAULT_TABLE_ID;

use crate::error::{CodonError, CodonResult};
use crate::seq::{ProteinSeq, SeqBytes, SeqRecord};
use codon::parse_codons;

const STOP: u8 = b'*';

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Residue {
    Amino(u8),
    Stop,
}

/// An immutable codon table. Every one of the 64 codons maps to exactly one
/// amino acid or to stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneticCode {
    id: u8,
    name: &'static str,
    /// Indexed by [`Codon::index`]; `*` marks a stop.
    residues: [u8; 64],
}

impl Default for GeneticCode {
    /// Table 11: bacterial, archaeal and plant plastid.
    fn default() -> Self {
        Self::from_table(
            tables::find(tables::DEFAULT_TABLE_ID).unwrap_or(&tables::TABLES[0]),
        )
    }
}

impl GeneticCode {
    pub fn from_id(id: u8) -> CodonResult<Self> {
        tables::find(id)
            .map(Self::from_table)
            .ok_or(CodonError::UnknownGeneticCode { id })
    }

    fn from_table(table: &tables::NcbiTable) -> Self {
        let mut residues = [STOP; 64];
        for (i, &aa) in table.ncbieaa.iter().enumerate() {
            residues[tables::ncbi_to_acgt(i)] = aa;
        }
        Self {
            id: table.id,
            name: table.name,
            residues,
        }
    }

    /// Ids and names of every supported table.
    pub fn available() -> impl Iterator<Item = (u8, &'static str)> {
        tables::TABLES.iter().map(|t| (t.id, t.name))
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn residue(&self, codon: Codon) -> Residue {
        match self.residues[codon.index()] {
            STOP => Residue::Stop,
            aa => Residue::Amino(aa),
        }
    }

    pub fn lookup(&self, codon: &[u8]) -> CodonResult<Residue> {
        Codon::new(codon)
            .map(|c| self.residue(c))
            .ok_or_else(|| CodonError::InvalidCodon {
                codon: String::from_utf8_lossy(codon).into_owned(),
                position: 0,
            })
    }

    /// Codons encoding `amino_acid` (case-insensitive), lexicographically ordered.
    /// Empty when the code has no such residue.
    pub fn synonyms(&self, amino_acid: u8) -> Vec<Codon> {
        let aa = amino_acid.to_ascii_uppercase();
        if aa == STOP {
            return Vec::new();
        }
        self.codons_for(aa)
    }

    pub fn stop_codons(&self) -> Vec<Codon> {
        self.codons_for(STOP)
    }

    fn codons_for(&self, symbol: u8) -> Vec<Codon> {
        self.residues
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r == symbol)
            .map(|(i, _)| Codon::from_index(i))
            .collect()
    }

    /// Distinct amino acids this code can produce, sorted.
    pub fn amino_acids(&self) -> Vec<u8> {
        let mut out: Vec<u8> = self
            .residues
            .iter()
            .copied()
            .filter(|&r| r != STOP)
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Translate a whole coding region. A single trailing stop is dropped; a stop
    /// anywhere else is an error.
    pub fn translate(&self, seq: &[u8]) -> CodonResult<ProteinSeq> {
        let codons = parse_codons(seq)?;
        self.translate_codons(&codons)
    }

    pub(crate) fn translate_codons(&self, codons: &[Codon]) -> CodonResult<ProteinSeq> {
        let last = codons.len().saturating_sub(1);
        let mut out = Vec::with_capacity(codons.len());
        for (position, &codon) in codons.iter().enumerate() {
            match self.residue(codon) {
                Residue::Amino(aa) => out.push(aa),
                Residue::Stop if position == last => break,
                Residue::Stop => return Err(CodonError::InternalStop { position }),
            }
        }
        Ok(ProteinSeq::from_bytes_unchecked(out))
    }

    /// Translate up to, not including, the first in-frame stop.
    pub fn translate_to_stop(&self, seq: &[u8]) -> CodonResult<ProteinSeq> {
        let codons = parse_codons(seq)?;
        let out = codons
            .iter()
            .map_while(|&c| match self.residue(c) {
                Residue::Amino(aa) => Some(aa),
                Residue::Stop => None,
            })
            .collect();
        Ok(ProteinSeq::from_bytes_unchecked(out))
    }
}

/// Translate every record, keeping ids and descriptions. Fails on the first
/// record that does not translate.
pub fn translate_records<S: SeqBytes + Sync>(
    records: &[SeqRecord<S>],
    code: &GeneticCode,
) -> CodonResult<Vec<SeqRecord<ProteinSeq>>> {
    par_try_map!(records, |record: &SeqRecord<S>| {
        code.translate(record.seq().as_bytes())
            .map(|protein| record.with_seq(protein))
            .map_err(|err| err.in_record(record.id()))
    })
}
