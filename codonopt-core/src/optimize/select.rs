use crate::code::Codon;
use rand::distributions::{Distribution, WeightedIndex};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Picks one codon for a residue from its ranked usage.
///
/// `choices` is never empty, is ordered most used first with ties in
/// lexicographic order, and its first entry has a non-zero count.
pub trait CodonSelector {
    fn select(&mut self, choices: &[(Codon, u64)]) -> Codon;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Always the most used codon; ties go to the lexicographically smallest.
    #[default]
    MostFrequent,
    /// Sample codons in proportion to their counts from a seeded generator.
    Weighted,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "most-frequent" | "most_frequent" | "max" => Ok(Strategy::MostFrequent),
            "weighted" | "sample" => Ok(Strategy::Weighted),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MostFrequent;

impl CodonSelector for MostFrequent {
    #[inline]
    fn select(&mut self, choices: &[(Codon, u64)]) -> Codon {
        choices[0].0
    }
}

/// Frequency-weighted sampling. The same seed always yields the same sequence
/// of choices.
#[derive(Clone, Debug)]
pub struct Weighted {
    rng: ChaCha8Rng,
}

impl Weighted {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CodonSelector for Weighted {
    fn select(&mut self, choices: &[(Codon, u64)]) -> Codon {
        match WeightedIndex::new(choices.iter().map(|&(_, n)| n)) {
            Ok(dist) => choices[dist.sample(&mut self.rng)].0,
            Err(_) => choices[0].0,
        }
    }
}
