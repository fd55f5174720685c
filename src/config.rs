use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Top-level configuration from `.hostlint.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Rendering knobs for the console report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many invalid lines to detail; the rest collapse into the count.
    #[serde(default = "default_max_invalid_examples")]
    pub max_invalid_examples: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_invalid_examples: default_max_invalid_examples(),
        }
    }
}

fn default_max_invalid_examples() -> usize {
    1
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# hostlint configuration

[report]
# How many invalid lines the console report details; the remainder is
# summarized as a count.
max_invalid_examples = 1
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/.hostlint.toml")).unwrap();
        assert_eq!(config.report.max_invalid_examples, 1);
    }

    #[test]
    fn loads_overrides_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".hostlint.toml");
        std::fs::write(&path, "[report]\nmax_invalid_examples = 5\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.report.max_invalid_examples, 5);
    }

    #[test]
    fn starter_toml_parses() {
        let config: Config = toml::from_str(Config::starter_toml()).unwrap();
        assert_eq!(config.report.max_invalid_examples, 1);
    }
}
