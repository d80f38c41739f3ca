//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.simulador/config.toml`
//! 3. **Project config** - `./.simulador/config.toml`

use std::fs;
use std::path::Path;

use simulador_paths::SimuladorPaths;

use crate::errors::ConfigError;
use crate::types::{SetupConfig, SimuladorConfig, UiConfig};
use crate::validation::validate_config;

/// Load configuration from the user home and the current directory.
///
/// # Errors
///
/// Returns an error if a config file cannot be parsed or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<SimuladorConfig, ConfigError> {
    let paths = SimuladorPaths::resolve()?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(&paths, &project_root)
}

/// Load configuration from explicit locations. Use in tests.
pub fn load_hierarchy_from(
    paths: &SimuladorPaths,
    project_root: &Path,
) -> Result<SimuladorConfig, ConfigError> {
    let mut config = SimuladorConfig::default();

    for path in [
        paths.user_config(),
        SimuladorPaths::project_config(project_root),
    ] {
        match load_config_file(&path) {
            Ok(layer) => {
                tracing::debug!(
                    event = "config.layer_loaded",
                    path = %path.display()
                );
                config = merge_configs(config, layer);
            }
            Err(e) if e.is_file_not_found() => {} // optional layer
            Err(e) => {
                tracing::warn!(
                    event = "config.layer_failed",
                    path = %path.display(),
                    error = %e
                );
                return Err(e);
            }
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<SimuladorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Override values replace base values only where present.
pub fn merge_configs(base: SimuladorConfig, override_config: SimuladorConfig) -> SimuladorConfig {
    SimuladorConfig {
        setup: SetupConfig::merge(&base.setup, &override_config.setup),
        ui: UiConfig::merge(&base.ui, &override_config.ui),
    }
}
