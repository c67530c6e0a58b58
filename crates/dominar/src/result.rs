//! Result and error types for Dominar.

use crate::mutant::MutantId;
use thiserror::Error;

/// Result type for Dominar operations
pub type DominarResult<T> = Result<T, DominarError>;

/// Errors that can occur in Dominar
#[derive(Debug, Error)]
pub enum DominarError {
    /// A dominator mutant has no entry in the coverage oracle
    #[error("No coverage recorded for dominator mutant '{mutant}'")]
    MissingCoverage {
        /// Mutant the oracle could not answer for
        mutant: MutantId,
    },

    /// Malformed kill-map row
    #[error("Kill map parse error at line {line}: {message}")]
    KillMapParse {
        /// 1-based line number in the input
        line: usize,
        /// Error message
        message: String,
    },

    /// A named column is absent from the kill-map header
    #[error("Kill map header has no column named '{column}'")]
    MissingColumn {
        /// Column name that was requested
        column: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Rendering error
    #[error("Render failed: {message}")]
    Render {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl DominarError {
    /// Create a missing coverage error
    #[must_use]
    pub fn missing_coverage(mutant: impl Into<MutantId>) -> Self {
        Self::MissingCoverage {
            mutant: mutant.into(),
        }
    }

    /// Create a kill-map parse error
    #[must_use]
    pub fn kill_map_parse(line: usize, message: impl Into<String>) -> Self {
        Self::KillMapParse {
            line,
            message: message.into(),
        }
    }

    /// Create a missing column error
    #[must_use]
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a render error
    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_coverage_names_mutant() {
        let err = DominarError::missing_coverage("m42");
        assert_eq!(
            err.to_string(),
            "No coverage recorded for dominator mutant 'm42'"
        );
    }

    #[test]
    fn test_kill_map_parse_carries_line() {
        let err = DominarError::kill_map_parse(7, "expected 2 fields");
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("expected 2 fields"));
    }

    #[test]
    fn test_missing_column() {
        let err = DominarError::missing_column("MutantNo");
        assert!(err.to_string().contains("MutantNo"));
    }

    #[test]
    fn test_config_error() {
        let err = DominarError::config("bad tick step");
        assert!(err.to_string().contains("Configuration"));
    }

    #[test]
    fn test_render_error() {
        let err = DominarError::render("empty curve");
        assert!(err.to_string().contains("Render failed"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DominarError = io_err.into();
        assert!(err.to_string().contains("I/O"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DominarError = json_err.into();
        assert!(err.to_string().contains("JSON"));
    }
}
