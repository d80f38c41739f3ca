//! # simulador-config
//!
//! TOML configuration types, loading, and validation for the Simulador Societário.
//!
//! Single source of truth for `SimuladorConfig` and the numeric limits shared by
//! the setup form and the config validator. Depends only on `simulador-paths`.

mod loading;
mod validation;

pub mod errors;
pub mod limits;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{load_hierarchy, load_hierarchy_from, merge_configs};
pub use types::{NavigationStyle, PartnerDefault, SetupConfig, SimuladorConfig, UiConfig};
pub use validation::validate_config;

impl SimuladorConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
