use serde::{Deserialize, Serialize};

use crate::pages::Page;

/// State changes produced by a dispatched command.
///
/// Each variant describes _what happened_. Failures use the `Result` error
/// channel, never the event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// The current page changed (or was re-selected when `from == to`).
    PageChanged { from: Page, to: Page },
    /// A submitted setup was stored on the shell.
    SetupCompleted {
        partner_count: usize,
        simulation_years: u32,
    },
}
