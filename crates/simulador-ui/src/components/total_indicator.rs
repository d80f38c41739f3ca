//! Live total of partner percentages with a pass/fail state.

use gpui::{FontWeight, IntoElement, RenderOnce, Rgba, Window, div, prelude::*, px};
use simulador_core::limits;

use crate::theme;

/// Whether the current total allows submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalStatus {
    Valid,
    Invalid,
}

impl TotalStatus {
    pub fn from_total(total: u32) -> Self {
        if total == limits::TOTAL_PERCENTAGE {
            TotalStatus::Valid
        } else {
            TotalStatus::Invalid
        }
    }

    fn background(&self) -> Rgba {
        match self {
            TotalStatus::Valid => theme::leaf_wash(),
            TotalStatus::Invalid => theme::ruby_wash(),
        }
    }

    fn border(&self) -> Rgba {
        match self {
            TotalStatus::Valid => theme::leaf_border(),
            TotalStatus::Invalid => theme::ruby_border(),
        }
    }

    fn figure(&self) -> Rgba {
        match self {
            TotalStatus::Valid => theme::leaf(),
            TotalStatus::Invalid => theme::ruby_dim(),
        }
    }

    /// Hint shown under the figure; `None` when the total is valid.
    pub fn hint(&self) -> Option<String> {
        match self {
            TotalStatus::Valid => None,
            TotalStatus::Invalid => Some(format!(
                "⚠️ A soma deve ser exatamente {}%",
                limits::TOTAL_PERCENTAGE
            )),
        }
    }
}

#[derive(IntoElement)]
pub struct TotalIndicator {
    total: u32,
}

impl TotalIndicator {
    pub fn new(total: u32) -> Self {
        Self { total }
    }
}

impl RenderOnce for TotalIndicator {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let status = TotalStatus::from_total(self.total);

        div()
            .mt(px(theme::SPACE_4))
            .p(px(theme::SPACE_4))
            .rounded(px(theme::RADIUS_LG))
            .border_1()
            .border_color(status.border())
            .bg(status.background())
            .flex()
            .flex_col()
            .gap(px(theme::SPACE_1))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme::text_strong())
                            .child("Total de Participação:"),
                    )
                    .child(
                        div()
                            .font_weight(FontWeight::BOLD)
                            .text_color(status.figure())
                            .child(format!("{}%", self.total)),
                    ),
            )
            .when_some(status.hint(), |this, hint| {
                this.child(
                    div()
                        .text_size(px(theme::TEXT_SM))
                        .text_color(theme::ruby())
                        .child(hint),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_hundred_is_valid() {
        assert_eq!(TotalStatus::from_total(100), TotalStatus::Valid);
        assert_eq!(TotalStatus::from_total(90), TotalStatus::Invalid);
        assert_eq!(TotalStatus::from_total(101), TotalStatus::Invalid);
        assert_eq!(TotalStatus::from_total(0), TotalStatus::Invalid);
    }

    #[test]
    fn test_hint_only_when_invalid() {
        assert_eq!(TotalStatus::Valid.hint(), None);
        assert_eq!(
            TotalStatus::Invalid.hint().as_deref(),
            Some("⚠️ A soma deve ser exatamente 100%")
        );
    }
}
