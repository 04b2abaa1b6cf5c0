use crate::error::{Result, TallyError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_PRECISION: usize = 2;
const DEFAULT_LABEL: &str = "Final balance";
pub const MAX_PRECISION: usize = 15;

/// Output configuration. Only read from disk when a path is given explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyConfig {
    /// Decimal places used when printing amounts
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Text printed before the final balance
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            label: default_label(),
        }
    }
}

impl TallyConfig {
    /// Load config from a JSON file. Missing keys fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TallyError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let mut config: TallyConfig = serde_json::from_str(&content)?;
        let precision = config.precision;
        config.set_precision(precision)?;
        Ok(config)
    }

    pub fn set_precision(&mut self, precision: usize) -> Result<()> {
        if precision > MAX_PRECISION {
            return Err(TallyError::Config(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, precision
            )));
        }
        self.precision = precision;
        Ok(())
    }
}
