//! Pool configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Initial liquidity for a pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Initial reserve (and supply) of token A
    pub liquidity0: f64,

    /// Initial reserve (and supply) of token B
    pub liquidity1: f64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            liquidity0: 1000.0,
            liquidity1: 1000.0,
        }
    }
}

impl PoolConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, liquidity0: Option<f64>, liquidity1: Option<f64>) -> Self {
        if let Some(l0) = liquidity0 {
            self.liquidity0 = l0;
        }
        if let Some(l1) = liquidity1 {
            self.liquidity1 = l1;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.liquidity0, 1000.0);
        assert_eq!(config.liquidity1, 1000.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PoolConfig = serde_json::from_str(r#"{"liquidity1": 50.0}"#).unwrap();
        assert_eq!(config.liquidity0, 1000.0);
        assert_eq!(config.liquidity1, 50.0);
    }

    #[test]
    fn test_load_and_override() {
        let path = std::env::temp_dir().join(format!("cpmm_config_{}.json", std::process::id()));
        fs::write(&path, r#"{"liquidity0": 100.0, "liquidity1": 50.0}"#).unwrap();

        let config = PoolConfig::load(&path).unwrap().with_overrides(None, Some(25.0));
        fs::remove_file(&path).unwrap();

        assert_eq!(config.liquidity0, 100.0);
        assert_eq!(config.liquidity1, 25.0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PoolConfig::load(Path::new("/nonexistent/cpmm.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
