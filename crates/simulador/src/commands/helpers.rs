use tracing::warn;

use simulador_core::SimuladorConfig;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> SimuladorConfig {
    match SimuladorConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.simulador/config.toml and ./.simulador/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            SimuladorConfig::default()
        }
    }
}

/// "1 ano" / "N anos".
pub fn years_label(years: u32) -> String {
    if years == 1 {
        "1 ano".to_string()
    } else {
        format!("{} anos", years)
    }
}
