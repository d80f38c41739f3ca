//! simulador-core: Core library for the Simulador Societário
//!
//! Business logic shared by the desktop UI and the CLI: the partner setup form,
//! its validation, and the root shell that switches between the five pages.
//!
//! # Main Entry Points
//!
//! - [`setup`] - Partner rows, live total, validation, and submission
//! - [`state`] - Root shell store (current page, submitted configuration)
//! - [`pages`] - The five pages and their label/icon pairs
//! - [`types`] - `SimulationConfig` and the records it carries

pub mod errors;
pub mod logging;
pub mod pages;
pub mod setup;
pub mod state;
pub mod types;

// Re-export config types from simulador-config
pub use simulador_config::{
    ConfigError, NavigationStyle, PartnerDefault, SetupConfig, SimuladorConfig, UiConfig, limits,
};

pub use errors::{SimuladorError, SimuladorResult};
pub use pages::{Page, UnknownPage};
pub use setup::{
    FieldError, PartnerRow, RowErrors, RowKey, SetupError, SetupForm, ValidationErrors,
};
pub use state::{Command, DispatchError, Event, Shell, Store};
pub use types::{ContributionType, MonthlyData, Partner, PartnerContribution, SimulationConfig};

// Re-export logging initialization
pub use logging::init_logging;
