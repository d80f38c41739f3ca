//! Header banner and horizontal page tabs.
//!
//! Alternative to the sidebar, selected with `ui.navigation = "tabs"`.

use gpui::{Context, FontWeight, IntoElement, SharedString, div, prelude::*, px};
use simulador_core::Page;

use crate::state::AppState;
use crate::theme;
use crate::views::main_view::MainView;

/// Ruby banner with the app title and tagline.
pub fn render_banner() -> impl IntoElement {
    div()
        .px(px(theme::SPACE_6))
        .py(px(theme::SPACE_6))
        .bg(theme::ruby())
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_2))
        .child(
            div()
                .text_size(px(theme::TEXT_2XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text_white())
                .child("Simulador Societário"),
        )
        .child(
            div()
                .text_color(theme::ruby_wash())
                .child("Ferramenta de planejamento financeiro empresarial"),
        )
}

/// Render the tab strip: one tab per page, active one underlined.
pub fn render_tab_bar(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    let current = state.current_page();

    let mut bar = div()
        .flex()
        .items_center()
        .gap(px(theme::SPACE_6))
        .px(px(theme::SPACE_6))
        .bg(theme::panel())
        .border_b_1()
        .border_color(theme::border_subtle());

    for page in Page::ALL {
        let is_active = page == current;
        let tab_id = SharedString::from(format!("page-tab-{}", page.id()));

        bar = bar.child(
            div()
                .id(tab_id)
                .flex()
                .items_center()
                .gap(px(theme::SPACE_2))
                .py(px(theme::SPACE_4))
                .cursor_pointer()
                .text_size(px(theme::TEXT_SM))
                .font_weight(FontWeight::MEDIUM)
                .border_b_2()
                .when(is_active, |d| {
                    d.text_color(theme::ruby()).border_color(theme::ruby_bright())
                })
                .when(!is_active, |d| {
                    d.text_color(theme::text_subtle())
                        .border_color(theme::transparent())
                        .hover(|d| d.text_color(theme::text_strong()))
                })
                .on_mouse_up(
                    gpui::MouseButton::Left,
                    cx.listener(move |view, _, _, cx| {
                        view.on_page_select(page, cx);
                    }),
                )
                .child(page.icon())
                .child(page.label()),
        );
    }

    bar
}
