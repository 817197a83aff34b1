pub mod coding;
pub mod protein;
pub mod record;
pub mod traits;

pub use coding::CodingSeq;
pub use protein::ProteinSeq;
pub use record::SeqRecord;
pub use traits::SeqBytes;
