pub mod codes;
pub mod optimize;
pub mod translate;
pub mod usage;
