//! Application state for simulador-ui.
//!
//! `AppState` wraps the core shell store and setup form behind a facade so
//! views never mutate either directly.

pub mod app_state;

pub use app_state::AppState;
