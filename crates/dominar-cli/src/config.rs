//! CLI configuration

use dominar::DominarConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "dominar.yaml";

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter for this verbosity
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Config file the settings were loaded from
    pub config_path: Option<PathBuf>,
    /// Library settings (CSV, chart, output format)
    pub settings: DominarConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set library settings
    #[must_use]
    pub fn with_settings(mut self, settings: DominarConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Load settings from `path`, or from [`DEFAULT_CONFIG_FILE`] in `dir` when present
    pub fn load_settings(self, path: Option<&Path>, dir: &Path) -> CliResult<Self> {
        let candidate = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(CliError::config(format!(
                        "config file {} does not exist",
                        explicit.display()
                    )));
                }
                Some(explicit.to_path_buf())
            }
            None => Some(dir.join(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
        };

        match candidate {
            Some(file) => {
                tracing::debug!(path = %file.display(), "loading config file");
                let settings = DominarConfig::from_yaml_file(&file)?;
                Ok(Self {
                    config_path: Some(file),
                    ..self.with_settings(settings)
                })
            }
            None => Ok(self),
        }
    }
}
