use super::{CodonUsageTable, STOP};
use crate::error::CodonResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One CSV row of an exported usage table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UsageRow {
    pub amino_acid: char,
    pub codon: String,
    pub count: u64,
    pub frequency: f64,
    pub rscu: f64,
}

impl CodonUsageTable {
    /// Rows for every observed amino acid in alphabetical order, then stops,
    /// each group most used codon first.
    pub fn rows(&self) -> Vec<UsageRow> {
        let mut groups = self.amino_acids();
        if self.stop_count() > 0 {
            groups.push(STOP);
        }
        groups
            .into_iter()
            .flat_map(|symbol| {
                self.ranked(symbol)
                    .into_iter()
                    .map(move |(codon, count)| (symbol, codon, count))
            })
            .map(|(symbol, codon, count)| UsageRow {
                amino_acid: symbol as char,
                codon: codon.to_string(),
                count,
                frequency: self.frequency(codon),
                rscu: self.rscu(codon),
            })
            .collect()
    }
}

pub fn write_usage_csv<W: Write>(table: &CodonUsageTable, writer: W) -> CodonResult<()> {
    let mut out = csv::Writer::from_writer(writer);
    for row in table.rows() {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_usage_csv_to_path(table: &CodonUsageTable, path: impl AsRef<Path>) -> CodonResult<()> {
    let file = File::create(path)?;
    write_usage_csv(table, file)
}
