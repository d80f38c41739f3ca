//! Button component with themed variants.
//!
//! All colors come from the theme module.

use gpui::{
    ClickEvent, ElementId, FontWeight, IntoElement, RenderOnce, Rgba, SharedString, Window, div,
    prelude::*, px,
};

use crate::theme;

/// Click handler type for buttons.
type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Ruby background, used for the main actions (add partner, start simulation)
    #[default]
    Primary,
    /// White background with border (duration stepper)
    Secondary,
    /// Red text on transparent background (remove partner)
    Danger,
}

impl ButtonVariant {
    fn bg_color(&self, disabled: bool) -> Rgba {
        match self {
            ButtonVariant::Primary if disabled => theme::with_alpha(theme::ruby(), 0.5),
            ButtonVariant::Primary => theme::ruby(),
            ButtonVariant::Secondary => theme::panel(),
            ButtonVariant::Danger => theme::transparent(),
        }
    }

    fn hover_color(&self) -> Rgba {
        match self {
            ButtonVariant::Primary => theme::ruby_dim(),
            ButtonVariant::Secondary => theme::elevated(),
            ButtonVariant::Danger => theme::ruby_wash(),
        }
    }

    fn text_color(&self, disabled: bool) -> Rgba {
        match self {
            ButtonVariant::Primary => theme::text_white(),
            ButtonVariant::Secondary if disabled => theme::text_muted(),
            ButtonVariant::Secondary => theme::text_strong(),
            ButtonVariant::Danger if disabled => theme::text_muted(),
            ButtonVariant::Danger => theme::ruby_bright(),
        }
    }

    fn border_color(&self) -> Option<Rgba> {
        match self {
            ButtonVariant::Secondary => Some(theme::border()),
            _ => None,
        }
    }
}

/// A styled button component.
///
/// # Example
///
/// ```ignore
/// Button::new("add-partner", "+ Adicionar Sócio")
///     .on_click(cx.listener(|view, _, window, cx| {
///         view.on_add_partner(window, cx);
///     }))
/// ```
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    large: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::default(),
            disabled: false,
            large: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Disabled buttons render dimmed and ignore clicks.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Wider padding and larger text, for the form's submit action.
    pub fn large(mut self) -> Self {
        self.large = true;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut gpui::App) -> impl IntoElement {
        let bg = self.variant.bg_color(self.disabled);
        let hover_bg = self.variant.hover_color();
        let text = self.variant.text_color(self.disabled);
        let border = self.variant.border_color();
        let on_click = self.on_click;

        let (pad_x, pad_y, text_size) = if self.large {
            (theme::SPACE_8, theme::SPACE_3, theme::TEXT_LG)
        } else {
            (theme::SPACE_4, theme::SPACE_2, theme::TEXT_SM)
        };

        let mut button = div()
            .id(self.id)
            .px(px(pad_x))
            .py(px(pad_y))
            .bg(bg)
            .rounded(px(theme::RADIUS_MD))
            .child(
                div()
                    .text_size(px(text_size))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(text)
                    .child(self.label),
            );

        if let Some(border_color) = border {
            button = button.border_1().border_color(border_color);
        }

        // Hover and click only when enabled
        if !self.disabled {
            button = button.hover(|style| style.bg(hover_bg)).cursor_pointer();

            if let Some(handler) = on_click {
                button = button.on_click(handler);
            }
        }

        button
    }
}
