//! Rendering, keyboard input, and GPUI trait implementations for MainView.

use gpui::{
    AnyElement, Context, Focusable, FontWeight, IntoElement, KeyDownEvent, Render, Window, div,
    prelude::*, px,
};
use simulador_core::{NavigationStyle, Page};

use crate::components::{Button, ButtonVariant};
use crate::theme;
use crate::views::{placeholder_view, setup_view, sidebar, tab_bar};

use super::main_view_def::MainView;
use super::navigation::page_for_shortcut;

impl MainView {
    pub(super) fn on_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let key_str = event.keystroke.key.to_string();

        if let Some(page) = page_for_shortcut(&key_str, &event.keystroke.modifiers) {
            tracing::debug!(event = "ui.navigation.shortcut", key = %key_str, page = %page);
            self.on_page_select(page, cx);
            return;
        }

        cx.propagate();
    }

    /// Render the page title bar used by the sidebar layout.
    fn render_page_header(&self) -> impl IntoElement {
        let page = self.state.current_page();
        div()
            .px(px(theme::SPACE_6))
            .py(px(theme::SPACE_4))
            .bg(theme::panel())
            .border_b_1()
            .border_color(theme::border_subtle())
            .flex()
            .flex_col()
            .child(
                div()
                    .text_size(px(theme::TEXT_2XL))
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme::text_bright())
                    .child(format!("{} {}", page.icon(), page.label())),
            )
            .child(
                div()
                    .text_size(px(theme::TEXT_SM))
                    .text_color(theme::text())
                    .child("Ferramenta de planejamento financeiro empresarial"),
            )
    }

    /// Render the active page's content.
    fn render_page_content(&self, cx: &mut Context<Self>) -> AnyElement {
        match self.state.current_page() {
            Page::Setup => {
                setup_view::render_setup_view(&self.state, &self.row_inputs, cx).into_any_element()
            }
            page => placeholder_view::render_placeholder(page, &self.state).into_any_element(),
        }
    }

    fn render_content_area(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("page-content")
            .flex_1()
            .overflow_y_scroll()
            .p(px(theme::SPACE_6))
            .child(self.render_page_content(cx))
    }

    fn render_sidebar_layout(&self, cx: &mut Context<Self>) -> AnyElement {
        div()
            .flex_1()
            .flex()
            .overflow_hidden()
            .child(sidebar::render_sidebar(&self.state, self.logo.as_ref(), cx))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.render_page_header())
                    .child(self.render_content_area(cx)),
            )
            .into_any_element()
    }

    fn render_tabs_layout(&self, cx: &mut Context<Self>) -> AnyElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .overflow_hidden()
            .child(tab_bar::render_banner())
            .child(tab_bar::render_tab_bar(&self.state, cx))
            .child(self.render_content_area(cx))
            .into_any_element()
    }

    fn render_error_banner(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let errors = self.state.banner_errors();
        div()
            .mx(px(theme::SPACE_4))
            .mt(px(theme::SPACE_2))
            .px(px(theme::SPACE_4))
            .py(px(theme::SPACE_2))
            .bg(theme::ruby_wash())
            .border_1()
            .border_color(theme::ruby_border())
            .rounded(px(theme::RADIUS_MD))
            .flex()
            .flex_col()
            .gap(px(theme::SPACE_1))
            .child(
                div()
                    .flex()
                    .justify_between()
                    .items_center()
                    .child(
                        div()
                            .text_color(theme::ruby_dim())
                            .font_weight(FontWeight::BOLD)
                            .child("Erro ao carregar a configuração:"),
                    )
                    .child(
                        Button::new("dismiss-errors", "×")
                            .variant(ButtonVariant::Danger)
                            .on_click(cx.listener(|view, _, _, cx| {
                                view.on_dismiss_errors(cx);
                            })),
                    ),
            )
            .children(errors.iter().map(|e| {
                div()
                    .text_size(px(theme::TEXT_SM))
                    .text_color(theme::ruby())
                    .child(format!("• {}", e))
            }))
    }
}

impl Focusable for MainView {
    fn focus_handle(&self, _cx: &gpui::App) -> gpui::FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let layout = match self.state.navigation_style() {
            NavigationStyle::Sidebar => self.render_sidebar_layout(cx),
            NavigationStyle::Tabs => self.render_tabs_layout(cx),
        };

        div()
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .flex()
            .flex_col()
            .bg(theme::canvas())
            .font_family(theme::FONT_UI)
            .when(self.state.has_banner_errors(), |this| {
                this.child(self.render_error_banner(cx))
            })
            .child(layout)
    }
}
