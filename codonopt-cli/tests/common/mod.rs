#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A host corpus using ATG for Met, AAA for Lys and CGC for Arg.
pub const HOST_FASTA: &str = ">host_gene1 test host\nATGAAACGC\n";

/// Helper to run the codonopt binary
pub fn codonopt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("codonopt").unwrap();
    cmd.env_remove("CODONOPT_LOG").env_remove("CODONOPT_CONFIG");
    cmd
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn create_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

/// Sequences of a FASTA file as (header, sequence) pairs with lines joined.
pub fn read_records(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)?;
    let mut records: Vec<(String, String)> = Vec::new();
    for line in content.lines() {
        if let Some(header) = line.strip_prefix('>') {
            records.push((header.to_string(), String::new()));
        } else if let Some((_, seq)) = records.last_mut() {
            seq.push_str(line.trim());
        }
    }
    Ok(records)
}
