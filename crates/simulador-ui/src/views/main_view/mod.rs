//! Main view for simulador-ui.
//!
//! Root view that composes the navigation, the page header and the active page.
//! Owns the input widgets of the setup form and routes keyboard shortcuts.

mod main_view_def;
mod navigation;
mod rendering;
mod setup_handlers;
mod types;


pub use main_view_def::MainView;
pub(crate) use types::RowInputs;
