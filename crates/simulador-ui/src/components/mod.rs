//! Reusable UI components for simulador-ui.
//!
//! Styled components shared by the setup form and the page shell.

mod button;
mod total_indicator;

pub use button::{Button, ButtonVariant};
pub use total_indicator::TotalIndicator;
