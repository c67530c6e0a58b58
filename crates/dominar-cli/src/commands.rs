//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Dominador: CLI for Dominar - test completeness curves from mutation kill maps
#[derive(Parser, Debug)]
#[command(name = "dominador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML config file (default: ./dominar.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the test completeness curve for a kill map
    Curve(CurveArgs),

    /// Show the dominator mutants of a kill map
    Dominators(DominatorsArgs),

    /// Show the effective configuration as YAML
    Config,
}

/// Kill-map CSV input options shared by subcommands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Kill-map CSV (one row per kill event)
    pub input: PathBuf,

    /// Mutant column: zero-based index or header name
    #[arg(long)]
    pub mutant_column: Option<String>,

    /// Test column: zero-based index or header name
    #[arg(long)]
    pub test_column: Option<String>,

    /// Field delimiter
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Treat the first row as data instead of a header
    #[arg(long)]
    pub no_header: bool,
}

/// Arguments for the curve command
#[derive(clap::Args, Debug)]
pub struct CurveArgs {
    /// Kill-map input
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long)]
    pub format: Option<CurveFormatArg>,

    /// Write the rendered curve to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write an SVG chart to this file
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,
}

/// Arguments for the dominators command
#[derive(clap::Args, Debug)]
pub struct DominatorsArgs {
    /// Kill-map input
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: ListFormatArg,

    /// List every member of each indistinguishable group
    #[arg(long)]
    pub groups: bool,
}

/// Curve output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveFormatArg {
    /// Aligned table
    Text,
    /// CSV rows
    Csv,
    /// JSON document
    Json,
}

impl From<CurveFormatArg> for dominar::CurveFormat {
    fn from(arg: CurveFormatArg) -> Self {
        match arg {
            CurveFormatArg::Text => Self::Text,
            CurveFormatArg::Csv => Self::Csv,
            CurveFormatArg::Json => Self::Json,
        }
    }
}

/// Dominator listing format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFormatArg {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_curve_command() {
        let cli = Cli::parse_from(["dominador", "curve", "killMap.csv"]);
        if let Commands::Curve(args) = cli.command {
            assert_eq!(args.input.input, PathBuf::from("killMap.csv"));
            assert!(args.format.is_none());
            assert!(args.svg.is_none());
            assert!(!args.input.no_header);
        } else {
            panic!("expected Curve command");
        }
    }

    #[test]
    fn test_parse_curve_with_options() {
        let cli = Cli::parse_from([
            "dominador",
            "curve",
            "kills.tsv",
            "--format",
            "csv",
            "--svg",
            "curve.svg",
            "--delimiter",
            "\t",
            "--mutant-column",
            "0",
            "--test-column",
            "Test",
            "--no-header",
            "--title",
            "Suite",
        ]);
        if let Commands::Curve(args) = cli.command {
            assert_eq!(args.format, Some(CurveFormatArg::Csv));
            assert_eq!(args.svg, Some(PathBuf::from("curve.svg")));
            assert_eq!(args.input.delimiter, Some('\t'));
            assert_eq!(args.input.mutant_column.as_deref(), Some("0"));
            assert_eq!(args.input.test_column.as_deref(), Some("Test"));
            assert!(args.input.no_header);
            assert_eq!(args.title.as_deref(), Some("Suite"));
        } else {
            panic!("expected Curve command");
        }
    }

    #[test]
    fn test_parse_dominators_command() {
        let cli = Cli::parse_from(["dominador", "dominators", "k.csv", "--format", "json", "--groups"]);
        if let Commands::Dominators(args) = cli.command {
            assert_eq!(args.format, ListFormatArg::Json);
            assert!(args.groups);
        } else {
            panic!("expected Dominators command");
        }
    }

    #[test]
    fn test_parse_config_command() {
        let cli = Cli::parse_from(["dominador", "config"]);
        assert!(matches!(cli.command, Commands::Config));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "dominador", "-vv", "--color", "never", "--config", "d.yaml", "config",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.color, ColorArg::Never));
        assert_eq!(cli.config, Some(PathBuf::from("d.yaml")));
    }

    #[test]
    fn test_curve_requires_input() {
        assert!(Cli::try_parse_from(["dominador", "curve"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(
            dominar::CurveFormat::from(CurveFormatArg::Json),
            dominar::CurveFormat::Json
        );
    }
}
