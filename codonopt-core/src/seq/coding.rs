use crate::code::codon::parse_codons;
use crate::code::{Codon, GeneticCode};
use crate::error::CodonResult;
use crate::seq::protein::ProteinSeq;
use crate::seq::traits::SeqBytes;
use std::fmt;

/// An open reading frame: whole codons of A/C/G/T, stored uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodingSeq {
    codons: Vec<Codon>,
    bytes: Vec<u8>,
}

impl CodingSeq {
    pub fn new(bytes: Vec<u8>) -> CodonResult<Self> {
        let codons = parse_codons(&bytes)?;
        Ok(Self::from_codons(codons))
    }

    pub fn from_codons(codons: Vec<Codon>) -> Self {
        let bytes = codons.iter().flat_map(|c| *c.as_bytes()).collect();
        Self { codons, bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn translate(&self, code: &GeneticCode) -> CodonResult<ProteinSeq> {
        code.translate_codons(&self.codons)
    }

    /// Codons up to, not including, a single trailing stop.
    pub fn sense_codons(&self, code: &GeneticCode) -> &[Codon] {
        match self.codons.split_last() {
            Some((&last, rest)) if code.residue(last) == crate::code::Residue::Stop => rest,
            _ => &self.codons,
        }
    }
}

impl SeqBytes for CodingSeq {
    fn as_bytes(&self) -> &[u8] {
        CodingSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> CodonResult<Self> {
        CodingSeq::new(bytes)
    }
}

impl fmt::Display for CodingSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
