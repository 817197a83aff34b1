use crate::alphabets::Alphabet;
use std::sync::LazyLock;

static UNAMBIGUOUS: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::new(b"ACGTacgt"));

/// The four unambiguous bases, either case.
pub fn alphabet() -> &'static Alphabet {
    &UNAMBIGUOUS
}
