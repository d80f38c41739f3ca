//! Content for the pages that have no behavior yet.
//!
//! Shows the page identity and, once setup has been completed, a read-only
//! summary of the submitted configuration.

use chrono::Local;
use gpui::{FontWeight, IntoElement, div, prelude::*, px};
use simulador_core::{Page, SimulationConfig};

use crate::state::AppState;
use crate::theme;

pub fn render_placeholder(page: Page, state: &AppState) -> impl IntoElement {
    div()
        .bg(theme::panel())
        .rounded(px(theme::RADIUS_LG))
        .border_1()
        .border_color(theme::border_subtle())
        .p(px(theme::SPACE_6))
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_4))
        .child(
            div()
                .text_size(px(theme::TEXT_XL))
                .font_weight(FontWeight::BOLD)
                .text_color(theme::text_bright())
                .child(format!("{} {}", page.icon(), page.label())),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text_subtle())
                .child(format!("Página atual: {}", page.id())),
        )
        .child(
            div()
                .p(px(theme::SPACE_3))
                .bg(theme::amber_wash())
                .border_1()
                .border_color(theme::amber_border())
                .rounded(px(theme::RADIUS_MD))
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::amber())
                .child("🚧 Esta página está em construção."),
        )
        .when_some(state.simulation_data(), |this, data| {
            this.child(render_config_summary(data))
        })
}

fn render_config_summary(data: &SimulationConfig) -> impl IntoElement {
    div()
        .p(px(theme::SPACE_4))
        .bg(theme::surface())
        .rounded(px(theme::RADIUS_LG))
        .flex()
        .flex_col()
        .gap(px(theme::SPACE_2))
        .child(
            div()
                .text_size(px(theme::TEXT_SM))
                .font_weight(FontWeight::MEDIUM)
                .text_color(theme::text_strong())
                .child("Configuração atual"),
        )
        .children(data.partners.iter().map(|p| {
            div()
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text())
                .child(format!("{} · {} · {}%", p.id, p.name, p.percentage))
        }))
        .child(
            div()
                .text_size(px(theme::TEXT_SM))
                .text_color(theme::text())
                .child(period_line(data)),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_XS))
                .text_color(theme::text_muted())
                .child(format!(
                    "Criado em {}",
                    data.created_at.with_timezone(&Local).format("%d/%m/%Y %H:%M")
                )),
        )
}

fn period_line(data: &SimulationConfig) -> String {
    match data.simulation_years {
        1 => "Período: 1 ano".to_string(),
        n => format!("Período: {} anos", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use simulador_core::Partner;

    fn config(years: u32) -> SimulationConfig {
        let now = Utc::now();
        SimulationConfig {
            partners: vec![Partner::at_position(0, "Ana", 100)],
            simulation_years: years,
            created_at: now,
            updated_at: now,
            monthly_data: Vec::new(),
        }
    }

    #[test]
    fn test_period_line_pluralizes() {
        assert_eq!(period_line(&config(1)), "Período: 1 ano");
        assert_eq!(period_line(&config(7)), "Período: 7 anos");
    }
}
