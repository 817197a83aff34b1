use crate::alphabets::protein;
use crate::error::{CodonError, CodonResult};
use crate::seq::traits::SeqBytes;
use std::fmt;

/// A protein over the 20 standard amino acids, stored uppercase. Never
/// contains a stop symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProteinSeq {
    bytes: Vec<u8>,
}

impl ProteinSeq {
    pub fn new(mut bytes: Vec<u8>) -> CodonResult<Self> {
        if let Some((pos, b)) = protein::alphabet().first_invalid(&bytes) {
            return Err(CodonError::InvalidResidue { ch: b as char, pos });
        }
        bytes.make_ascii_uppercase();
        Ok(Self { bytes })
    }

    /// Like [`ProteinSeq::new`] but accepts one terminal `*`, which is dropped.
    pub fn parse(mut bytes: Vec<u8>) -> CodonResult<Self> {
        if let Some(pos) = memchr::memchr(b'*', &bytes) {
            if pos + 1 != bytes.len() {
                return Err(CodonError::InvalidResidue { ch: '*', pos });
            }
            bytes.truncate(pos);
        }
        Self::new(bytes)
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl SeqBytes for ProteinSeq {
    fn as_bytes(&self) -> &[u8] {
        ProteinSeq::as_bytes(self)
    }

    fn from_bytes(bytes: Vec<u8>) -> CodonResult<Self> {
        ProteinSeq::parse(bytes)
    }
}

impl fmt::Display for ProteinSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
