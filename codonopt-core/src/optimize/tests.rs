use super::*;
use crate::code::Residue;
use crate::seq::SeqRecord;
use proptest::prelude::{prop, prop_assert_eq, proptest};
use proptest::strategy::Strategy as PropStrategy;

fn code11() -> GeneticCode {
    GeneticCode::default()
}

fn table(seqs: &[&str]) -> CodonUsageTable {
    let records: Vec<SeqRecord<Vec<u8>>> = seqs
        .iter()
        .map(|s| SeqRecord::new("ref", s.as_bytes().to_vec()))
        .collect();
    CodonUsageTable::build(&records, &code11()).unwrap()
}

// ─── scenarios ──────────────────────────────────────────────

#[test]
fn single_reference_back_translation() {
    let code = code11();
    let table = table(&["ATGAAACGC"]);
    let result = optimize(Target::Protein(b"MKR"), &table, &code).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"ATGAAACGC");
    assert_eq!(result.protein.as_bytes(), b"MKR");
    assert!(result.warnings.is_empty());
}

#[test]
fn unseen_amino_acid_falls_back_with_warning() {
    let code = code11();
    let table = table(&["ATGAAACGC"]);
    let result = optimize(Target::Protein(b"MKRW"), &table, &code).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"ATGAAACGCTGG");
    assert_eq!(
        result.warnings,
        vec![Warning::NoUsageData {
            position: 3,
            amino_acid: 'W'
        }]
    );
}

#[test]
fn fallback_uses_smallest_synonym() {
    let code = code11();
    let table = table(&["ATG"]);
    let result = optimize(Target::Protein(b"ML"), &table, &code).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"ATGCTA");
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn nucleotide_target_is_recoded() {
    let code = code11();
    let table = table(&["CTGCTGAAAGGCTAA"]);
    let result = optimize(Target::Nucleotide(b"TTAAAGGGTTGA"), &table, &code).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"CTGAAAGGC");
    assert_eq!(result.protein.as_bytes(), b"LKG");
}

#[test]
fn ties_break_lexicographically() {
    let code = code11();
    let table = table(&["AAGAAA"]);
    let result = optimize(Target::Protein(b"KK"), &table, &code).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"AAAAAA");
}

#[test]
fn protein_target_may_end_in_stop() {
    let code = code11();
    let table = table(&["ATGAAACGC"]);
    let result = optimize(Target::Protein(b"mkr*"), &table, &code).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"ATGAAACGC");
}

#[test]
fn append_stop_uses_host_stop() {
    let code = code11();
    let table = table(&["ATGTGA", "ATGTGA", "ATGTAA"]);
    let optimizer = Optimizer::new(&table, &code).unwrap().with_options(OptimizerOptions {
        append_stop: true,
        ..Default::default()
    });
    let result = optimizer.optimize(Target::Protein(b"MM")).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"ATGATGTGA");
    assert_eq!(result.protein.as_bytes(), b"MM");
}

#[test]
fn append_stop_without_observed_stop() {
    let code = code11();
    let table = table(&["ATG"]);
    let optimizer = Optimizer::new(&table, &code).unwrap().with_options(OptimizerOptions {
        append_stop: true,
        ..Default::default()
    });
    let result = optimizer.optimize(Target::Protein(b"M")).unwrap();
    assert_eq!(result.sequence.as_bytes(), b"ATGTAA");
}

// ─── errors ─────────────────────────────────────────────────

#[test]
fn empty_protein_is_rejected() {
    let code = code11();
    let table = table(&["ATG"]);
    assert!(matches!(
        optimize(Target::Protein(b""), &table, &code),
        Err(CodonError::EmptyProtein)
    ));
    assert!(matches!(
        optimize(Target::Nucleotide(b"TAA"), &table, &code),
        Err(CodonError::EmptyProtein)
    ));
}

#[test]
fn nucleotide_errors_propagate() {
    let code = code11();
    let table = table(&["ATG"]);
    assert!(matches!(
        optimize(Target::Nucleotide(b"ATGA"), &table, &code),
        Err(CodonError::InvalidLength { len: 4 })
    ));
    assert!(matches!(
        optimize(Target::Nucleotide(b"ATGNNN"), &table, &code),
        Err(CodonError::InvalidCodon { position: 1, .. })
    ));
    assert!(matches!(
        optimize(Target::Nucleotide(b"ATGTAGATG"), &table, &code),
        Err(CodonError::InternalStop { position: 1 })
    ));
}

#[test]
fn invalid_protein_residue() {
    let code = code11();
    let table = table(&["ATG"]);
    assert!(matches!(
        optimize(Target::Protein(b"MXK"), &table, &code),
        Err(CodonError::InvalidResidue { ch: 'X', pos: 1 })
    ));
}

#[test]
fn mismatched_code_is_rejected() {
    let table = table(&["ATG"]);
    let mito = GeneticCode::from_id(2).unwrap();
    assert!(matches!(
        Optimizer::new(&table, &mito),
        Err(CodonError::GeneticCodeMismatch { table: 11, code: 2 })
    ));
}

// ─── weighted strategy ──────────────────────────────────────

#[test]
fn weighted_strategy_is_seeded() {
    let code = code11();
    let table = table(&["CTGCTGCTGTTATTACTCAAAAAG"]);
    let options = OptimizerOptions {
        strategy: Strategy::Weighted,
        seed: 11,
        append_stop: false,
    };
    let optimizer = Optimizer::new(&table, &code).unwrap().with_options(options);
    let protein = b"LLLLLLLLLLLLLLLLKKKKKKKK";
    let a = optimizer.optimize(Target::Protein(protein)).unwrap();
    let b = optimizer.optimize(Target::Protein(protein)).unwrap();
    assert_eq!(a.sequence, b.sequence);
    assert_eq!(code.translate(a.sequence.as_bytes()).unwrap().as_bytes(), protein);
    // Only codons seen in the reference corpus are sampled.
    for codon in a.sequence.codons() {
        assert!(table.count(*codon) > 0, "sampled unseen codon {codon}");
    }
}

// ─── properties ─────────────────────────────────────────────

fn sense_codons() -> Vec<Codon> {
    let code = code11();
    Codon::all()
        .filter(|&c| code.residue(c) != Residue::Stop)
        .collect()
}

fn orf() -> impl PropStrategy<Value = Vec<u8>> {
    prop::collection::vec(proptest::sample::select(sense_codons()), 1..120)
        .prop_map(|codons| codons.iter().flat_map(|c| *c.as_bytes()).collect())
}

fn corpus() -> impl PropStrategy<Value = CodonUsageTable> {
    prop::collection::vec(orf(), 1..6).prop_map(|seqs| {
        let records: Vec<SeqRecord<Vec<u8>>> = seqs
            .into_iter()
            .map(|s| SeqRecord::new("ref", s))
            .collect();
        CodonUsageTable::build(&records, &code11()).unwrap()
    })
}

proptest! {
    #[test]
    fn optimization_preserves_protein(table in corpus(), target in orf()) {
        let code = code11();
        let result = optimize(Target::Nucleotide(&target), &table, &code).unwrap();
        prop_assert_eq!(
            code.translate(result.sequence.as_bytes()).unwrap(),
            code.translate(&target).unwrap()
        );
        prop_assert_eq!(result.sequence.len(), target.len());
    }

    #[test]
    fn optimization_is_deterministic(table in corpus(), target in orf()) {
        let code = code11();
        let a = optimize(Target::Nucleotide(&target), &table, &code).unwrap();
        let b = optimize(Target::Nucleotide(&target), &table, &code).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reoptimizing_is_a_fixed_point(table in corpus(), target in orf()) {
        let code = code11();
        let once = optimize(Target::Nucleotide(&target), &table, &code).unwrap();
        let twice = optimize(Target::Nucleotide(once.sequence.as_bytes()), &table, &code).unwrap();
        prop_assert_eq!(once.sequence, twice.sequence);
    }
}
