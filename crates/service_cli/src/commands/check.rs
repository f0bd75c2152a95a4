//! Check command implementation

use crate::config::{CliConfig, ConfigError};
use crate::Result;

/// Renders the effective configuration as TOML.
pub fn run(config: &CliConfig) -> Result<String> {
    let body = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::FileError(format!("Failed to render TOML: {}", e)))?;

    Ok(format!(
        "# mcprice {}\n# asian step policy: {:?}\n{}",
        env!("CARGO_PKG_VERSION"),
        config.step_policy(),
        body
    ))
}
