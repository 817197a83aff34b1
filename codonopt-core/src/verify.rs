//! Post-optimization checks: the protein must be unchanged, and the nucleotide
//! sequence should not be.

use crate::code::GeneticCode;
use crate::error::{CodonError, CodonResult};
use crate::optimize::{Target, Warning};
use crate::seq::{CodingSeq, ProteinSeq};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifyOptions {
    /// Treat an unchanged nucleotide sequence as a failure instead of a warning.
    pub identical_is_fatal: bool,
}

#[derive(Debug)]
pub enum VerificationOutcome {
    Verified,
    VerifiedWithWarning(Warning),
    Failed(CodonError),
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        !matches!(self, VerificationOutcome::Failed(_))
    }

    pub fn warning(&self) -> Option<&Warning> {
        match self {
            VerificationOutcome::VerifiedWithWarning(w) => Some(w),
            _ => None,
        }
    }

    pub fn into_result(self) -> CodonResult<Option<Warning>> {
        match self {
            VerificationOutcome::Verified => Ok(None),
            VerificationOutcome::VerifiedWithWarning(w) => Ok(Some(w)),
            VerificationOutcome::Failed(err) => Err(err),
        }
    }
}

pub fn verify(
    original: Target<'_>,
    optimized: &CodingSeq,
    code: &GeneticCode,
) -> VerificationOutcome {
    verify_with(original, optimized, code, VerifyOptions::default())
}

pub fn verify_with(
    original: Target<'_>,
    optimized: &CodingSeq,
    code: &GeneticCode,
    options: VerifyOptions,
) -> VerificationOutcome {
    let expected = match original {
        Target::Nucleotide(bytes) => code.translate(bytes),
        Target::Protein(bytes) => ProteinSeq::parse(bytes.to_vec()),
    };
    let expected = match expected {
        Ok(protein) => protein,
        Err(err) => return VerificationOutcome::Failed(err),
    };

    if let Err(err) = check_fidelity(&expected, optimized, code) {
        return VerificationOutcome::Failed(err);
    }

    // Divergence only means something against a nucleotide original.
    let Target::Nucleotide(bytes) = original else {
        return VerificationOutcome::Verified;
    };
    let original = match CodingSeq::new(bytes.to_vec()) {
        Ok(seq) => seq,
        Err(err) => return VerificationOutcome::Failed(err),
    };
    if original.sense_codons(code) != optimized.sense_codons(code) {
        VerificationOutcome::Verified
    } else if options.identical_is_fatal {
        VerificationOutcome::Failed(CodonError::IdenticalSequence)
    } else {
        VerificationOutcome::VerifiedWithWarning(Warning::IdenticalSequence)
    }
}

fn check_fidelity(
    expected: &ProteinSeq,
    optimized: &CodingSeq,
    code: &GeneticCode,
) -> CodonResult<()> {
    let expected = expected.as_bytes();
    let residue_at = |i: usize| expected.get(i).map_or('-', |&b| b as char);

    let found = match optimized.translate(code) {
        Ok(protein) => protein,
        Err(CodonError::InternalStop { position }) => {
            return Err(CodonError::FidelityViolation {
                position,
                expected: residue_at(position),
                found: '*',
            })
        }
        Err(err) => return Err(err),
    };
    let found = found.as_bytes();

    let mismatch = expected
        .iter()
        .zip(found)
        .position(|(a, b)| a != b)
        .or_else(|| (expected.len() != found.len()).then(|| expected.len().min(found.len())));

    match mismatch {
        None => Ok(()),
        Some(position) => Err(CodonError::FidelityViolation {
            position,
            expected: residue_at(position),
            found: found.get(position).map_or('-', |&b| b as char),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code11() -> GeneticCode {
        GeneticCode::default()
    }

    fn coding(s: &str) -> CodingSeq {
        CodingSeq::new(s.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn recoded_sequence_verifies() {
        let outcome = verify(
            Target::Nucleotide(b"TTAAAGGGTTGA"),
            &coding("CTGAAAGGC"),
            &code11(),
        );
        assert!(matches!(outcome, VerificationOutcome::Verified));
    }

    #[test]
    fn protein_original_skips_divergence() {
        let outcome = verify(Target::Protein(b"MMW*"), &coding("ATGATGTGG"), &code11());
        assert!(matches!(outcome, VerificationOutcome::Verified));
    }

    #[test]
    fn single_codon_protein_is_identical_warning() {
        let outcome = verify(
            Target::Nucleotide(b"ATGATGATGTGG"),
            &coding("ATGATGATGTGG"),
            &code11(),
        );
        assert_eq!(outcome.warning(), Some(&Warning::IdenticalSequence));
        assert!(outcome.is_verified());
    }

    #[test]
    fn trailing_stop_does_not_count_as_divergence() {
        let outcome = verify(
            Target::Nucleotide(b"ATGTGGTAA"),
            &coding("ATGTGG"),
            &code11(),
        );
        assert_eq!(outcome.warning(), Some(&Warning::IdenticalSequence));
    }

    #[test]
    fn identical_can_be_fatal() {
        let outcome = verify_with(
            Target::Nucleotide(b"ATG"),
            &coding("ATG"),
            &code11(),
            VerifyOptions {
                identical_is_fatal: true,
            },
        );
        assert!(matches!(
            outcome,
            VerificationOutcome::Failed(CodonError::IdenticalSequence)
        ));
    }

    #[test]
    fn changed_protein_is_fidelity_violation() {
        let outcome = verify(
            Target::Nucleotide(b"ATGAAACGC"),
            &coding("ATGAACCGC"),
            &code11(),
        );
        match outcome {
            VerificationOutcome::Failed(CodonError::FidelityViolation {
                position,
                expected,
                found,
            }) => {
                assert_eq!(position, 1);
                assert_eq!(expected, 'K');
                assert_eq!(found, 'N');
            }
            other => panic!("expected fidelity violation, got {other:?}"),
        }
    }

    #[test]
    fn truncated_protein_is_fidelity_violation() {
        let outcome = verify(Target::Protein(b"MKR"), &coding("ATGAAA"), &code11());
        match outcome.into_result() {
            Err(CodonError::FidelityViolation {
                position, found, ..
            }) => {
                assert_eq!(position, 2);
                assert_eq!(found, '-');
            }
            other => panic!("expected fidelity violation, got {other:?}"),
        }
    }

    #[test]
    fn internal_stop_is_fidelity_violation() {
        let outcome = verify(Target::Protein(b"MKR"), &coding("ATGTAACGC"), &code11());
        assert!(matches!(
            outcome,
            VerificationOutcome::Failed(CodonError::FidelityViolation {
                position: 1,
                expected: 'K',
                found: '*'
            })
        ));
    }
}
