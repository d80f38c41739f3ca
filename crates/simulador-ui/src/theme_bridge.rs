//! Bridge between the Joicont palette and gpui-component's theme system.
//!
//! Maps the brand colors to gpui-component theme tokens so that library
//! components (Input, Button) render in the same light red-accented style.

use std::rc::Rc;

use gpui::{App, SharedString};
use gpui_component::theme::{Theme, ThemeConfig, ThemeConfigColors, ThemeMode};

/// Apply the Joicont light theme to gpui-component's global theme.
pub fn apply_joicont_theme(cx: &mut App) {
    let config = Rc::new(ThemeConfig {
        name: SharedString::from("Joicont"),
        mode: ThemeMode::Light,
        is_default: true,
        font_family: Some("Inter".into()),
        mono_font_family: Some("JetBrains Mono".into()),
        font_size: Some(14.0),
        mono_font_size: Some(13.0),
        radius: Some(6),
        radius_lg: Some(8),
        shadow: Some(true),
        colors: joicont_colors(),
        highlight: None,
    });

    Theme::global_mut(cx).apply_config(&config);
}

fn joicont_colors() -> ThemeConfigColors {
    // ThemeConfigColors has private base color fields, so it is built from JSON.
    let json = r##"{
        "background": "#FFFFFF",
        "foreground": "#111827",
        "border": "#D1D5DB",
        "input.border": "#D1D5DB",
        "accent.background": "#F3F4F6",
        "accent.foreground": "#111827",
        "primary.background": "#DC2626",
        "primary.hover.background": "#B91C1C",
        "primary.active.background": "#991B1B",
        "primary.foreground": "#FFFFFF",
        "secondary.background": "#F9FAFB",
        "secondary.hover.background": "#F3F4F6",
        "secondary.active.background": "#E5E7EB",
        "secondary.foreground": "#374151",
        "success.background": "#16A34A",
        "success.hover.background": "#15803D",
        "success.active.background": "#166534",
        "success.foreground": "#FFFFFF",
        "danger.background": "#EF4444",
        "danger.hover.background": "#DC2626",
        "danger.active.background": "#B91C1C",
        "danger.foreground": "#FFFFFF",
        "warning.background": "#FBBF24",
        "warning.hover.background": "#F59E0B",
        "warning.active.background": "#D97706",
        "warning.foreground": "#111827",
        "info.background": "#3B82F6",
        "info.hover.background": "#2563EB",
        "info.active.background": "#1D4ED8",
        "info.foreground": "#FFFFFF",
        "muted.background": "#F3F4F6",
        "muted.foreground": "#6B7280",
        "ring": "#EF4444",
        "overlay": "#11182766",
        "popover.background": "#FFFFFF",
        "popover.foreground": "#111827",
        "sidebar.background": "#FFFFFF",
        "sidebar.foreground": "#4B5563",
        "sidebar.accent.background": "#FEF2F2",
        "sidebar.accent.foreground": "#B91C1C",
        "sidebar.primary.background": "#DC2626",
        "sidebar.primary.foreground": "#FFFFFF",
        "sidebar.border": "#E5E7EB",
        "list.background": "#FFFFFF",
        "list.hover.background": "#F9FAFB",
        "list.active.background": "#FEF2F2",
        "list.active.border": "#EF4444",
        "list.even.background": "#F9FAFB",
        "list.head.background": "#FFFFFF",
        "tab.background": "#FFFFFF",
        "tab.active.background": "#FFFFFF",
        "tab.active.foreground": "#B91C1C",
        "tab.foreground": "#6B7280",
        "tab_bar.background": "#FFFFFF",
        "scrollbar.background": "#F9FAFB",
        "scrollbar.thumb.background": "#D1D5DB",
        "scrollbar.thumb.hover.background": "#9CA3AF",
        "selection.background": "#FECACA",
        "caret": "#DC2626",
        "title_bar.background": "#FFFFFF",
        "title_bar.border": "#E5E7EB",
        "window.border": "#E5E7EB",
        "link": "#DC2626",
        "link.hover": "#B91C1C",
        "link.active": "#991B1B",
        "skeleton.background": "#F3F4F6",
        "progress.bar.background": "#DC2626",
        "drag.border": "#EF4444",
        "drop_target.background": "#FEF2F2"
    }"##;
    serde_json::from_str(json).expect("Joicont theme colors are valid")
}
