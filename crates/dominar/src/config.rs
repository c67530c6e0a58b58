//! File-based configuration.
//!
//! ```yaml
//! # dominar.yaml
//! csv:
//!   delimiter: ","
//!   has_header: true
//!   mutant_column: MutantNo
//!   test_column: TestNo
//! chart:
//!   width: 1024
//!   height: 768
//!   title: Test completeness
//! format: text
//! ```
//!
//! Every section and key is optional; missing values take their defaults.

use crate::killmap::CsvOptions;
use crate::render::{ChartConfig, CurveFormat};
use crate::result::DominarResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for reading kill maps and rendering curves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominarConfig {
    /// Kill-map CSV options
    pub csv: CsvOptions,
    /// Chart options
    pub chart: ChartConfig,
    /// Default textual output format
    pub format: CurveFormat,
}

impl DominarConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse YAML configuration text
    pub fn from_yaml_str(yaml: &str) -> DominarResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.chart.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> DominarResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize as YAML
    pub fn to_yaml(&self) -> DominarResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
