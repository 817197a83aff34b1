use crate::error::{CodonError, CodonResult};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub(crate) const BASES: [u8; 4] = *b"ACGT";

/// Base → rank in A, C, G, T order; 255 for anything else.
static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (rank, &base) in BASES.iter().enumerate() {
        map[base as usize] = rank as u8;
        map[base.to_ascii_lowercase() as usize] = rank as u8;
    }
    map
});

/// An uppercase, unambiguous nucleotide triplet.
///
/// Ordering is lexicographic, which is also the order of [`Codon::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codon([u8; 3]);

impl Codon {
    /// Parse three bases, case-insensitive. `None` if the slice is not exactly
    /// three of A/C/G/T.
    pub fn new(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [a, b, c] => {
                let idx = codon_index(*a, *b, *c)?;
                Some(Self::from_index(idx))
            }
            _ => None,
        }
    }

    /// Panics if `idx >= 64`.
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < 64, "codon index out of range: {idx}");
        Self([BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]])
    }

    #[inline]
    pub fn index(&self) -> usize {
        let [a, b, c] = self.0;
        ((BASE_INDEX[a as usize] as usize) << 4)
            | ((BASE_INDEX[b as usize] as usize) << 2)
            | (BASE_INDEX[c as usize] as usize)
    }

    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// All 64 codons in lexicographic order.
    pub fn all() -> impl Iterator<Item = Codon> {
        (0..64).map(Codon::from_index)
    }
}

#[inline]
pub(crate) fn codon_index(a: u8, b: u8, c: u8) -> Option<usize> {
    let (i1, i2, i3) = (
        BASE_INDEX[a as usize],
        BASE_INDEX[b as usize],
        BASE_INDEX[c as usize],
    );
    if i1 < 4 && i2 < 4 && i3 < 4 {
        Some(((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize))
    } else {
        None
    }
}

/// Split `seq` into codons, enforcing whole triplets of A/C/G/T.
pub(crate) fn parse_codons(seq: &[u8]) -> CodonResult<Vec<Codon>> {
    if seq.len() % 3 != 0 {
        return Err(CodonError::InvalidLength { len: seq.len() });
    }
    seq.chunks_exact(3)
        .enumerate()
        .map(|(position, chunk)| {
            Codon::new(chunk).ok_or_else(|| CodonError::InvalidCodon {
                codon: String::from_utf8_lossy(chunk).into_owned(),
                position,
            })
        })
        .collect()
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl FromStr for Codon {
    type Err = CodonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Codon::new(s.as_bytes()).ok_or_else(|| CodonError::InvalidCodon {
            codon: s.to_string(),
            position: 0,
        })
    }
}
