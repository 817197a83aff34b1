use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodonError {
    #[error("sequence length {len} is not a multiple of 3 ({} trailing bases)", len % 3)]
    InvalidLength { len: usize },

    #[error("invalid codon '{codon}' at codon position {position}")]
    InvalidCodon { codon: String, position: usize },

    #[error("invalid residue '{ch}' at position {pos}")]
    InvalidResidue { ch: char, pos: usize },

    #[error("in-frame stop codon at codon position {position}")]
    InternalStop { position: usize },

    #[error("reference corpus contains no amino acid codons")]
    EmptyCorpus,

    #[error("target encodes an empty protein")]
    EmptyProtein,

    #[error(
        "fidelity violation at residue {position}: expected '{expected}', optimized sequence encodes '{found}'"
    )]
    FidelityViolation {
        position: usize,
        expected: char,
        found: char,
    },

    #[error("optimized sequence is identical to the original")]
    IdenticalSequence,

    #[error("unknown genetic code id {id}")]
    UnknownGeneticCode { id: u8 },

    #[error("usage table was built with genetic code {table}, but code {code} was requested")]
    GeneticCodeMismatch { table: u8, code: u8 },

    #[error("record '{id}': {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: Box<CodonError>,
    },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {msg}")]
    Config { msg: String },
}

impl CodonError {
    pub(crate) fn in_record(self, id: &str) -> Self {
        CodonError::InvalidRecord {
            id: id.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error with any record context stripped.
    pub fn root(&self) -> &CodonError {
        match self {
            CodonError::InvalidRecord { source, .. } => source.root(),
            other => other,
        }
    }

    /// Fatal errors stop the rest of a batch.
    pub fn is_fatal(&self) -> bool {
        matches!(self.root(), CodonError::FidelityViolation { .. })
    }
}

pub type CodonResult<T> = Result<T, CodonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_unwraps_nested_records() {
        let err = CodonError::InvalidLength { len: 10 }
            .in_record("inner")
            .in_record("outer");
        assert!(matches!(err.root(), CodonError::InvalidLength { len: 10 }));
        assert_eq!(
            err.to_string(),
            "record 'outer': record 'inner': sequence length 10 is not a multiple of 3 (1 trailing bases)"
        );
    }

    #[test]
    fn only_fidelity_is_fatal() {
        let fidelity = CodonError::FidelityViolation {
            position: 2,
            expected: 'K',
            found: 'N',
        };
        assert!(fidelity.is_fatal());
        assert!(fidelity.in_record("t1").is_fatal());
        assert!(!CodonError::EmptyProtein.is_fatal());
    }
}
