//! MainView struct definition and core initialization.

use std::path::PathBuf;

use gpui::{Context, FocusHandle, Window, prelude::*};
use gpui_component::input::{InputEvent, InputState};
use simulador_core::RowKey;

use crate::state::AppState;

use super::types::RowInputs;

/// Main application view.
///
/// Owns application state and one pair of input widgets per setup row.
pub struct MainView {
    pub(super) state: AppState,
    pub(super) focus_handle: FocusHandle,
    /// Logo image for the sidebar header, if one was found.
    pub(super) logo: Option<PathBuf>,
    /// Input widgets in row order, kept in step with the form's rows.
    pub(super) row_inputs: Vec<RowInputs>,
}

impl MainView {
    pub fn new(
        state: AppState,
        logo: Option<PathBuf>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let mut view = Self {
            state,
            focus_handle: cx.focus_handle(),
            logo,
            row_inputs: Vec::new(),
        };

        let rows: Vec<(RowKey, String, u32)> = view
            .state
            .form()
            .rows()
            .iter()
            .map(|row| (row.key(), row.name().to_string(), row.percentage()))
            .collect();
        for (key, name, percentage) in rows {
            let inputs = Self::build_row_inputs(key, &name, percentage, window, cx);
            view.row_inputs.push(inputs);
        }

        view
    }

    /// Create the name and percentage inputs for a row and wire their change
    /// events back into the form.
    pub(super) fn build_row_inputs(
        key: RowKey,
        name: &str,
        percentage: u32,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> RowInputs {
        let name_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Ex: João Silva")
                .default_value(name.to_string())
        });

        // A zero percentage shows as an empty field
        let percentage_text = if percentage == 0 {
            String::new()
        } else {
            percentage.to_string()
        };
        let percentage_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("1")
                .default_value(percentage_text)
        });

        let name_subscription = cx.subscribe_in(
            &name_input,
            window,
            move |view, input, event: &InputEvent, _window, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    let value = input.read(cx).value().to_string();
                    view.on_name_changed(key, &value, cx);
                }
            },
        );

        let percentage_subscription = cx.subscribe_in(
            &percentage_input,
            window,
            move |view, input, event: &InputEvent, window, cx| {
                if matches!(event, InputEvent::Change { .. }) {
                    view.on_percentage_changed(key, input, window, cx);
                }
            },
        );

        RowInputs {
            key,
            name: name_input,
            percentage: percentage_input,
            _subscriptions: vec![name_subscription, percentage_subscription],
        }
    }

    /// Apply a state mutation and notify GPUI to re-render.
    ///
    /// Use for simple handlers where the entire body is a single state mutation.
    pub(super) fn mutate_state(&mut self, cx: &mut Context<Self>, f: impl FnOnce(&mut AppState)) {
        f(&mut self.state);
        cx.notify();
    }
}
