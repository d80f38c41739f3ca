//! View components for simulador-ui.
//!
//! - `main_view` - Root view: navigation, active page, keyboard shortcuts
//! - `sidebar` - Vertical menu with logo header and footer
//! - `tab_bar` - Header banner with a horizontal tab strip
//! - `setup_view` - Partner setup form
//! - `placeholder_view` - The four pages that only show their name for now

pub mod main_view;
pub mod placeholder_view;
pub mod setup_view;
pub mod sidebar;
pub mod tab_bar;

pub use main_view::MainView;
