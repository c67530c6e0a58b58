//! Dominador CLI Library
//!
//! Command-line interface for the Dominar completeness analysis.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, CurveArgs, CurveFormatArg, DominatorsArgs, InputArgs, ListFormatArg,
};
pub use config::{CliConfig, ColorChoice, Verbosity, DEFAULT_CONFIG_FILE};
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LOG_ENV};
pub use output::Reporter;
