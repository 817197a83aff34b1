use crate::code::DEFAULT_TABLE_ID;
use crate::error::{CodonError, CodonResult};
use crate::io::fasta::DEFAULT_LINE_WIDTH;
use crate::optimize::{OptimizerOptions, Strategy};
use crate::verify::VerifyOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub optimizer: OptimizerSection,
    pub verify: VerifySection,
    pub performance: PerformanceSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSection {
    /// NCBI translation table id
    pub genetic_code: u8,
    pub strategy: Strategy,
    /// Seed for the weighted strategy
    pub seed: u64,
    pub append_stop: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifySection {
    pub identical_is_fatal: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSection {
    /// Worker threads (0 = all cores)
    pub workers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// FASTA line width (0 = single line)
    pub line_width: usize,
}

fn default_genetic_code() -> u8 {
    DEFAULT_TABLE_ID
}

fn default_seed() -> u64 {
    42
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for OptimizerSection {
    fn default() -> Self {
        Self {
            genetic_code: default_genetic_code(),
            strategy: Strategy::default(),
            seed: default_seed(),
            append_stop: false,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
        }
    }
}

impl OptimizerConfig {
    pub fn optimizer_options(&self) -> OptimizerOptions {
        OptimizerOptions {
            strategy: self.optimizer.strategy,
            seed: self.optimizer.seed,
            append_stop: self.optimizer.append_stop,
        }
    }

    pub fn verify_options(&self) -> VerifyOptions {
        VerifyOptions {
            identical_is_fatal: self.verify.identical_is_fatal,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> CodonResult<OptimizerConfig> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| CodonError::Config {
        msg: format!("Failed to parse config: {}", e),
    })
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &OptimizerConfig) -> CodonResult<()> {
    let contents = toml::to_string_pretty(config).map_err(|e| CodonError::Config {
        msg: format!("Failed to serialize config: {}", e),
    })?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = OptimizerConfig::default();
        assert_eq!(config.optimizer.genetic_code, 11);
        assert_eq!(config.optimizer.strategy, Strategy::MostFrequent);
        assert!(!config.optimizer.append_stop);
        assert!(!config.verify.identical_is_fatal);
        assert_eq!(config.performance.workers, 0);
        assert_eq!(config.output.line_width, 80);
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codonopt.toml");
        let mut config = OptimizerConfig::default();
        config.optimizer.genetic_code = 4;
        config.optimizer.strategy = Strategy::Weighted;
        config.performance.workers = 2;

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(
            &path,
            "[optimizer]\nstrategy = \"weighted\"\nseed = 7\n\n[verify]\nidentical_is_fatal = true\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.optimizer.strategy, Strategy::Weighted);
        assert_eq!(config.optimizer.seed, 7);
        assert_eq!(config.optimizer.genetic_code, 11);
        assert_eq!(config.output.line_width, 80);
        assert!(config.verify_options().identical_is_fatal);
        assert_eq!(config.optimizer_options().seed, 7);
    }

    #[test]
    fn malformed_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[optimizer]\nstrategy = \"fastest\"\n").unwrap();
        assert!(matches!(load_config(&path), Err(CodonError::Config { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_config(dir.path().join("absent.toml")),
            Err(CodonError::Io(_))
        ));
    }
}
