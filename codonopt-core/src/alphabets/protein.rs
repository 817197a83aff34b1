use crate::alphabets::Alphabet;
use std::sync::LazyLock;

static STANDARD: LazyLock<Alphabet> =
    LazyLock::new(|| Alphabet::new(&b"ARNDCEQGHILKMFPSTWYVarndceqghilkmfpstwyv"[..]));

/// The 20 standard amino acids, either case. Stop is not a residue.
pub fn alphabet() -> &'static Alphabet {
    &STANDARD
}
