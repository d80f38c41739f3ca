//! Setup form handlers for MainView.

use gpui::{Context, Entity, Window};
use gpui_component::input::InputState;
use simulador_core::RowKey;

use super::main_view_def::MainView;

impl MainView {
    pub(super) fn on_name_changed(&mut self, key: RowKey, value: &str, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.set_partner_name(key, value));
    }

    /// Store the typed percentage and, when the form clamped or normalized
    /// it, write the stored value back into the field.
    pub(super) fn on_percentage_changed(
        &mut self,
        key: RowKey,
        input: &Entity<InputState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let text = input.read(cx).value().to_string();
        let Some(stored) = self.state.set_partner_percentage(key, &text) else {
            return;
        };

        // An empty field stays empty while the user is typing
        let stored_text = stored.to_string();
        if !text.trim().is_empty() && text != stored_text {
            tracing::debug!(
                event = "ui.setup.percentage_normalized",
                typed = %text,
                stored = stored
            );
            input.update(cx, |state, cx| state.set_value(stored_text, window, cx));
        }
        cx.notify();
    }

    pub(crate) fn on_add_partner(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let key = self.state.add_partner();
        let percentage = self
            .state
            .form()
            .index_of(key)
            .map(|i| self.state.form().rows()[i].percentage())
            .unwrap_or_default();
        let inputs = Self::build_row_inputs(key, "", percentage, window, cx);
        self.row_inputs.push(inputs);
        cx.notify();
    }

    pub(crate) fn on_remove_partner(&mut self, key: RowKey, cx: &mut Context<Self>) {
        if self.state.remove_partner(key) {
            self.row_inputs.retain(|inputs| inputs.key != key);
        }
        cx.notify();
    }

    pub(crate) fn on_years_step(&mut self, delta: i32, cx: &mut Context<Self>) {
        let years = self.state.step_years(delta);
        tracing::debug!(event = "ui.setup.years_changed", years = years);
        cx.notify();
    }

    pub(crate) fn on_submit(&mut self, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.setup.submit_clicked", total = self.state.total());
        self.mutate_state(cx, |s| {
            s.submit();
        });
    }

    pub(crate) fn on_dismiss_errors(&mut self, cx: &mut Context<Self>) {
        self.mutate_state(cx, |s| s.dismiss_banner_errors());
    }
}
