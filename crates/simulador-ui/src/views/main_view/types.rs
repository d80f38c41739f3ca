//! Type definitions for the main view.

use gpui::{Entity, Subscription};
use gpui_component::input::InputState;
use simulador_core::RowKey;

/// Input widgets bound to one partner row.
///
/// Dropping this drops the change subscriptions with it.
pub(crate) struct RowInputs {
    pub key: RowKey,
    pub name: Entity<InputState>,
    pub percentage: Entity<InputState>,
    pub _subscriptions: Vec<Subscription>,
}
