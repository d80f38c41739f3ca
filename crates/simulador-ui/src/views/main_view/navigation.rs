//! Page navigation handlers for MainView.

use gpui::{Context, Modifiers};
use simulador_core::Page;

use super::main_view_def::MainView;

/// Map Cmd/Ctrl + 1..5 to the page at that position in the menu.
pub(super) fn page_for_shortcut(key: &str, modifiers: &Modifiers) -> Option<Page> {
    if !(modifiers.platform || modifiers.control) || modifiers.shift || modifiers.alt {
        return None;
    }
    let digit = key.parse::<usize>().ok().filter(|d| *d >= 1)?;
    Page::from_index(digit - 1)
}

impl MainView {
    /// Handle a click on a navigation entry (sidebar item or tab).
    pub(crate) fn on_page_select(&mut self, page: Page, cx: &mut Context<Self>) {
        tracing::debug!(
            event = "ui.navigation.page_selected",
            from = %self.state.current_page(),
            to = %page
        );
        self.mutate_state(cx, |s| s.navigate(page));
    }
}
