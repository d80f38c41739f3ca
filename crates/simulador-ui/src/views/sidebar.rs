//! Page navigation sidebar.
//!
//! Fixed left sidebar with the logo header, one entry per page and a footer
//! crediting the firm. The active entry is highlighted with a ruby left border.

use std::path::PathBuf;

use gpui::{Context, FontWeight, IntoElement, ParentElement, Styled, div, img, prelude::*, px};
use simulador_core::Page;

use crate::state::AppState;
use crate::theme;
use crate::views::main_view::MainView;

/// Width of the sidebar in pixels.
pub const SIDEBAR_WIDTH: f32 = 256.0;

/// Height of the logo image in the header.
const LOGO_HEIGHT: f32 = 48.0;

/// Width of the active entry's left border. Left padding shrinks by the same
/// amount so labels stay aligned.
const ACTIVE_BORDER_WIDTH: f32 = 4.0;

/// Render the navigation sidebar.
pub fn render_sidebar(
    state: &AppState,
    logo: Option<&PathBuf>,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let current = state.current_page();
    let brand = state.brand().to_string();

    div()
        .w(px(SIDEBAR_WIDTH))
        .h_full()
        .bg(theme::panel())
        .border_r_2()
        .border_color(theme::ruby_bright())
        .flex()
        .flex_col()
        // Header: logo, title, brand
        .child(
            div()
                .p(px(theme::SPACE_6))
                .border_b_1()
                .border_color(theme::border_subtle())
                .flex()
                .flex_col()
                .items_center()
                .gap(px(theme::SPACE_3))
                .when_some(logo.cloned(), |this, path| {
                    this.child(img(path).h(px(LOGO_HEIGHT)))
                })
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .items_center()
                        .child(
                            div()
                                .text_size(px(theme::TEXT_LG))
                                .font_weight(FontWeight::BOLD)
                                .text_color(theme::text_bright())
                                .child("Simulador"),
                        )
                        .child(
                            div()
                                .text_size(px(theme::TEXT_LG))
                                .font_weight(FontWeight::BOLD)
                                .text_color(theme::text_bright())
                                .child("Societário"),
                        )
                        .child(
                            div()
                                .mt(px(theme::SPACE_1))
                                .text_size(px(theme::TEXT_XS))
                                .text_color(theme::text_subtle())
                                .child(brand.clone()),
                        ),
                ),
        )
        // Page entries
        .child(
            div()
                .flex_1()
                .p(px(theme::SPACE_4))
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_2))
                .children(
                    Page::ALL
                        .iter()
                        .map(|page| render_nav_item(*page, *page == current, cx)),
                ),
        )
        // Footer
        .child(
            div()
                .p(px(theme::SPACE_4))
                .border_t_1()
                .border_color(theme::border_subtle())
                .flex()
                .flex_col()
                .items_center()
                .text_size(px(theme::TEXT_XS))
                .child(div().text_color(theme::text_muted()).child("Desenvolvido para"))
                .child(
                    div()
                        .text_color(theme::ruby_bright())
                        .font_weight(FontWeight::MEDIUM)
                        .child(short_brand(&brand)),
                ),
        )
}

fn render_nav_item(page: Page, is_active: bool, cx: &mut Context<MainView>) -> impl IntoElement + use<> {
    let left_padding = if is_active {
        theme::SPACE_4 - ACTIVE_BORDER_WIDTH
    } else {
        theme::SPACE_4
    };

    div()
        .id(("nav-item", page.index()))
        .w_full()
        .flex()
        .items_center()
        .gap(px(theme::SPACE_3))
        .pl(px(left_padding))
        .pr(px(theme::SPACE_4))
        .py(px(theme::SPACE_3))
        .rounded(px(theme::RADIUS_LG))
        .cursor_pointer()
        .when(is_active, |d| {
            d.bg(theme::ruby_wash())
                .text_color(theme::ruby_dim())
                .border_l_4()
                .border_color(theme::ruby_bright())
        })
        .when(!is_active, |d| {
            d.text_color(theme::text())
                .hover(|d| d.bg(theme::surface()).text_color(theme::text_bright()))
        })
        .on_mouse_up(
            gpui::MouseButton::Left,
            cx.listener(move |view, _, _, cx| {
                view.on_page_select(page, cx);
            }),
        )
        .child(div().text_size(px(theme::TEXT_XL)).child(page.icon()))
        .child(div().font_weight(FontWeight::MEDIUM).child(page.label()))
}

/// First word of the brand ("Joicont Contabilidade" -> "Joicont").
fn short_brand(brand: &str) -> String {
    brand.split_whitespace().next().unwrap_or(brand).to_string()
}
