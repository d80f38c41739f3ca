//! Partner setup page.
//!
//! Duration stepper, one card per partner row, the live total, and the submit
//! action. Field messages appear once a submit has been rejected and then
//! track every edit.

use gpui::{Context, FontWeight, IntoElement, SharedString, div, prelude::*, px};
use gpui_component::input::Input;
use simulador_core::{FieldError, PartnerRow, limits};

use crate::components::{Button, ButtonVariant, TotalIndicator};
use crate::state::AppState;
use crate::theme;
use crate::views::main_view::{MainView, RowInputs};

/// Width of the percentage field inside a partner card.
const PERCENTAGE_INPUT_WIDTH: f32 = 64.0;

pub fn render_setup_view(
    state: &AppState,
    row_inputs: &[RowInputs],
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let errors = state.errors();
    let years_error = errors.as_ref().and_then(|e| e.years);
    let form_errors: Vec<FieldError> = errors.map(|e| e.form).unwrap_or_default();

    div()
        .bg(theme::panel())
        .rounded(px(theme::RADIUS_LG))
        .border_1()
        .border_color(theme::border_subtle())
        .flex()
        .flex_col()
        .child(render_intro())
        .child(
            div()
                .p(px(theme::SPACE_6))
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_8))
                .child(render_duration(state, years_error, cx))
                .child(render_partners(state, row_inputs, form_errors, cx))
                .child(render_submit(state, cx)),
        )
}

fn render_intro() -> impl IntoElement {
    div()
        .p(px(theme::SPACE_6))
        .border_b_1()
        .border_color(theme::border_subtle())
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_1))
        .child(
            div()
                .text_size(px(theme::TEXT_2XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text_bright())
                .child("⚙️ Configuração Inicial"),
        )
        .child(
            div()
                .text_color(theme::text())
                .child("Configure a estrutura societária inicial e período de simulação"),
        )
        .child(
            div()
                .mt(px(theme::SPACE_3))
                .p(px(theme::SPACE_3))
                .bg(theme::sky_wash())
                .border_1()
                .border_color(theme::sky_border())
                .rounded(px(theme::RADIUS_LG))
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::sky())
                .child(
                    "💡 Importante: Esta é apenas a configuração inicial. Durante a simulação, \
                     os sócios poderão fazer aportes que alterarão os percentuais e o valor da empresa.",
                ),
        )
}

fn years_label(years: u32) -> String {
    if years == 1 {
        "1 ano".to_string()
    } else {
        format!("{} anos", years)
    }
}

fn render_duration(
    state: &AppState,
    error: Option<FieldError>,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let years = state.form().simulation_years();

    div()
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_3))
        .child(section_label("📅 Período de Simulação"))
        .child(
            div()
                .p(px(theme::SPACE_4))
                .bg(theme::surface())
                .rounded(px(theme::RADIUS_LG))
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_3))
                .child(
                    div()
                        .flex()
                        .items_center()
                        .justify_between()
                        .child(
                            div()
                                .text_size(px(theme::TEXT_SM))
                                .text_color(theme::text())
                                .child("Duração:"),
                        )
                        .child(
                            div()
                                .flex()
                                .items_center()
                                .gap(px(theme::SPACE_3))
                                .child(
                                    Button::new("years-decrement", "−")
                                        .variant(ButtonVariant::Secondary)
                                        .disabled(years <= limits::MIN_YEARS)
                                        .on_click(cx.listener(|view, _, _, cx| {
                                            view.on_years_step(-1, cx);
                                        })),
                                )
                                .child(
                                    div()
                                        .text_size(px(theme::TEXT_LG))
                                        .font_weight(FontWeight::BOLD)
                                        .text_color(theme::ruby())
                                        .child(years_label(years)),
                                )
                                .child(
                                    Button::new("years-increment", "+")
                                        .variant(ButtonVariant::Secondary)
                                        .disabled(years >= limits::MAX_YEARS)
                                        .on_click(cx.listener(|view, _, _, cx| {
                                            view.on_years_step(1, cx);
                                        })),
                                ),
                        ),
                )
                .child(scale_labels(&[
                    years_label(limits::MIN_YEARS),
                    years_label(5),
                    years_label(limits::MAX_YEARS),
                ])),
        )
        .when_some(error, |this, err| this.child(field_error(err, theme::TEXT_SM)))
}

fn render_partners(
    state: &AppState,
    row_inputs: &[RowInputs],
    form_errors: Vec<FieldError>,
    cx: &mut Context<MainView>,
) -> impl IntoElement {
    let can_remove = state.form().can_remove();
    let rows = state.form().rows();

    let mut cards = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let Some(inputs) = row_inputs.iter().find(|i| i.key == row.key()) else {
            tracing::error!(event = "ui.setup.row_inputs_missing", index = index);
            continue;
        };
        cards.push(render_partner_card(state, index, row, inputs, can_remove, cx));
    }

    div()
        .flex()
        .flex_col()
        .child(
            div()
                .mb(px(theme::SPACE_4))
                .flex()
                .items_center()
                .justify_between()
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap(px(theme::SPACE_1))
                        .child(section_label("👥 Estrutura Societária Inicial"))
                        .child(
                            div()
                                .text_size(px(theme::TEXT_XS))
                                .text_color(theme::text_subtle())
                                .child("Percentuais podem mudar durante a simulação conforme aportes"),
                        ),
                )
                .child(
                    Button::new("add-partner", "+ Adicionar Sócio").on_click(cx.listener(
                        |view, _, window, cx| {
                            view.on_add_partner(window, cx);
                        },
                    )),
                ),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap(px(theme::SPACE_4))
                .children(cards),
        )
        .child(TotalIndicator::new(state.total()))
        .children(
            form_errors
                .into_iter()
                // The total already has its own indicator
                .filter(|e| *e != FieldError::TotalNotHundred)
                .map(|e| div().mt(px(theme::SPACE_2)).child(field_error(e, theme::TEXT_SM))),
        )
}

fn render_partner_card(
    state: &AppState,
    index: usize,
    row: &PartnerRow,
    inputs: &RowInputs,
    can_remove: bool,
    cx: &mut Context<MainView>,
) -> impl IntoElement + use<> {
    let errors = state.row_errors(index);
    let key = row.key();

    div()
        .id(SharedString::from(format!("partner-card-{}", index)))
        .p(px(theme::SPACE_4))
        .bg(theme::surface())
        .rounded(px(theme::RADIUS_LG))
        .border_1()
        .border_color(theme::border_subtle())
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_2))
        .child(
            div()
                .flex()
                .gap(px(theme::SPACE_4))
                // Name column
                .child(
                    div()
                        .flex_1()
                        .flex()
                        .flex_col()
                        .gap(px(theme::SPACE_1))
                        .child(field_label("Nome do Sócio"))
                        .child(Input::new(&inputs.name))
                        .when_some(errors.name, |this, err| {
                            this.child(field_error(err, theme::TEXT_XS))
                        }),
                )
                // Percentage column
                .child(
                    div()
                        .flex_1()
                        .flex()
                        .flex_col()
                        .gap(px(theme::SPACE_1))
                        .child(field_label("Participação"))
                        .child(
                            div()
                                .p(px(theme::SPACE_4))
                                .bg(theme::panel())
                                .rounded(px(theme::RADIUS_SM))
                                .border_1()
                                .border_color(theme::border_subtle())
                                .flex()
                                .flex_col()
                                .gap(px(theme::SPACE_2))
                                .child(
                                    div()
                                        .flex()
                                        .items_center()
                                        .justify_between()
                                        .child(
                                            div()
                                                .text_size(px(theme::TEXT_XS))
                                                .text_color(theme::text_subtle())
                                                .child("Percentual:"),
                                        )
                                        .child(
                                            div()
                                                .flex()
                                                .items_center()
                                                .gap(px(theme::SPACE_2))
                                                .child(
                                                    div()
                                                        .w(px(PERCENTAGE_INPUT_WIDTH))
                                                        .child(Input::new(&inputs.percentage)),
                                                )
                                                .child(
                                                    div()
                                                        .text_size(px(theme::TEXT_SM))
                                                        .font_weight(FontWeight::BOLD)
                                                        .text_color(theme::ruby())
                                                        .child("%"),
                                                ),
                                        ),
                                )
                                .child(scale_labels(&[
                                    format!("{}%", limits::MIN_PERCENTAGE),
                                    "50%".to_string(),
                                    format!("{}%", limits::MAX_PERCENTAGE),
                                ])),
                        )
                        .when_some(errors.percentage, |this, err| {
                            this.child(field_error(err, theme::TEXT_XS))
                        }),
                ),
        )
        .when(can_remove, |this| {
            this.child(
                div().flex().justify_end().child(
                    Button::new(("remove-partner", index), "🗑️ Remover")
                        .variant(ButtonVariant::Danger)
                        .on_click(cx.listener(move |view, _, _, cx| {
                            view.on_remove_partner(key, cx);
                        })),
                ),
            )
        })
}

fn render_submit(state: &AppState, cx: &mut Context<MainView>) -> impl IntoElement {
    div()
        .pt(px(theme::SPACE_6))
        .border_t_1()
        .border_color(theme::border_subtle())
        .flex()
        .justify_end()
        .child(
            Button::new("start-simulation", "🚀 Iniciar Simulação")
                .large()
                .disabled(!state.can_submit())
                .on_click(cx.listener(|view, _, _, cx| {
                    view.on_submit(cx);
                })),
        )
}

fn section_label(text: &'static str) -> impl IntoElement {
    div()
        .text_size(px(theme::TEXT_SM))
        .font_weight(FontWeight::MEDIUM)
        .text_color(theme::text_strong())
        .child(text)
}

fn field_label(text: &'static str) -> impl IntoElement {
    div()
        .text_size(px(theme::TEXT_XS))
        .font_weight(FontWeight::MEDIUM)
        .text_color(theme::text_subtle())
        .child(text)
}

fn field_error(error: FieldError, size: f32) -> impl IntoElement {
    div()
        .text_size(px(size))
        .text_color(theme::ruby())
        .child(error.to_string())
}

fn scale_labels(labels: &[String]) -> impl IntoElement {
    div()
        .flex()
        .justify_between()
        .text_size(px(theme::TEXT_XS))
        .text_color(theme::text_muted())
        .children(labels.iter().map(|l| div().child(l.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_label_singular_and_plural() {
        assert_eq!(years_label(1), "1 ano");
        assert_eq!(years_label(5), "5 anos");
        assert_eq!(years_label(10), "10 anos");
    }
}
