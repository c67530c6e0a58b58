//! Dominador: test completeness curves from mutation kill maps
//!
//! ## Usage
//!
//! ```bash
//! dominador curve killMap.csv                  # Curve as a text table
//! dominador curve killMap.csv -f csv -o c.csv  # Curve as CSV
//! dominador curve killMap.csv --svg curve.svg  # Also draw the chart
//! dominador dominators killMap.csv --groups    # List dominator mutants
//! dominador config                             # Show effective settings
//! ```

use clap::Parser;
use dominador::{
    handlers, init_logging, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    init_logging(config.verbosity, config.color.should_color());
    let config = config.load_settings(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Commands::Curve(args) => handlers::execute_curve(&config, &args),
        Commands::Dominators(args) => handlers::execute_dominators(&config, &args),
        Commands::Config => handlers::execute_config(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
