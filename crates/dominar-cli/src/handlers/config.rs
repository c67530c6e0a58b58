//! Config command handler

use super::reporter;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Execute the config command
pub fn execute_config(config: &CliConfig) -> CliResult<()> {
    reporter(config).result(&render_config(config)?)?;
    Ok(())
}

/// Effective settings as YAML, preceded by a comment naming their source
pub fn render_config(config: &CliConfig) -> CliResult<String> {
    let source = config
        .config_path
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    let yaml = config.settings.to_yaml()?;
    Ok(format!("# source: {source}\n{yaml}"))
}
