//! Command handlers - extracted from main.rs for testability
//!
//! Each handler module contains:
//! - The execution logic for a CLI command
//! - Pure helper functions
//! - Tests

pub mod config;
pub mod curve;
pub mod dominators;

use crate::commands::InputArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Reporter;
use dominar::{ColumnRef, CsvOptions};

pub use config::execute_config;
pub use curve::{chart_config, execute_curve};
pub use dominators::{execute_dominators, render_dominators_text};

/// Apply command-line input overrides on top of the configured CSV options
pub fn resolve_csv_options(base: &CsvOptions, input: &InputArgs) -> CliResult<CsvOptions> {
    if let Some(delimiter) = input.delimiter {
        if matches!(delimiter, '"' | '\n' | '\r') {
            return Err(CliError::invalid_argument(format!(
                "--delimiter cannot be {delimiter:?}"
            )));
        }
    }
    for (flag, value) in [
        ("--mutant-column", &input.mutant_column),
        ("--test-column", &input.test_column),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(CliError::invalid_argument(format!("{flag} cannot be empty")));
        }
    }

    let mut options = base.clone();
    if let Some(ref column) = input.mutant_column {
        options.mutant_column = ColumnRef::parse(column);
    }
    if let Some(ref column) = input.test_column {
        options.test_column = ColumnRef::parse(column);
    }
    if let Some(delimiter) = input.delimiter {
        options.delimiter = delimiter;
    }
    if input.no_header {
        options.has_header = false;
    }
    Ok(options)
}

pub(crate) fn reporter(config: &CliConfig) -> Reporter {
    Reporter::new(config.color.should_color(), config.verbosity.is_quiet())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn input() -> InputArgs {
        InputArgs {
            input: PathBuf::from("killMap.csv"),
            ..InputArgs::default()
        }
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let base = CsvOptions::default();
        assert_eq!(resolve_csv_options(&base, &input()).unwrap(), base);
    }

    #[test]
    fn test_overrides_apply() {
        let args = InputArgs {
            mutant_column: Some("mutant".to_string()),
            test_column: Some("3".to_string()),
            delimiter: Some(';'),
            no_header: true,
            ..input()
        };
        let options = resolve_csv_options(&CsvOptions::default(), &args).unwrap();
        assert_eq!(options.mutant_column, ColumnRef::Name("mutant".to_string()));
        assert_eq!(options.test_column, ColumnRef::Index(3));
        assert_eq!(options.delimiter, ';');
        assert!(!options.has_header);
    }

    #[test]
    fn test_quote_delimiter_rejected() {
        let args = InputArgs {
            delimiter: Some('"'),
            ..input()
        };
        let err = resolve_csv_options(&CsvOptions::default(), &args).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert!(err.to_string().contains("--delimiter"));
    }

    #[test]
    fn test_blank_column_rejected() {
        let args = InputArgs {
            test_column: Some("  ".to_string()),
            ..input()
        };
        let err = resolve_csv_options(&CsvOptions::default(), &args).unwrap_err();
        assert!(err.to_string().contains("--test-column cannot be empty"));
    }
}
