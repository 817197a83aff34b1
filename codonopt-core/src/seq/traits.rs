use crate::error::CodonResult;

pub trait SeqBytes: Clone + Sized {
    fn as_bytes(&self) -> &[u8];
    fn from_bytes(bytes: Vec<u8>) -> CodonResult<Self>;

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// Unvalidated bytes, for records whose kind is decided after reading.
impl SeqBytes for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }

    fn from_bytes(bytes: Vec<u8>) -> CodonResult<Self> {
        Ok(bytes)
    }
}
