pub mod fasta;

pub use fasta::{
    read_fasta_records_from_bytes, read_fasta_records_from_path, read_fasta_records_from_reader,
    write_fasta_records, write_fasta_records_to_path, DEFAULT_LINE_WIDTH,
};
