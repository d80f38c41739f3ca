//! Theme constants for the Simulador UI.
//!
//! Light palette with the Joicont red as the brand accent.
//! All colors are GPUI Rgba values for direct use in styling.
//!
//! # Usage
//!
//! ```ignore
//! use crate::theme;
//!
//! div()
//!     .bg(theme::panel())
//!     .text_color(theme::text_bright())
//!     .border_color(theme::ruby())
//! ```

#![allow(dead_code)]

use gpui::Rgba;

// =============================================================================
// COLOR PALETTE - Joicont (Light Theme)
// =============================================================================

// Base surfaces
// - canvas: app background behind every panel
// - panel: sidebar, header, cards
// - surface: inset areas inside cards (partner rows, duration box)
// - elevated: hover backgrounds
pub fn canvas() -> Rgba {
    gpui::rgb(0xF9FAFB)
}
pub fn panel() -> Rgba {
    gpui::rgb(0xFFFFFF)
}
pub fn surface() -> Rgba {
    gpui::rgb(0xF9FAFB)
}
pub fn elevated() -> Rgba {
    gpui::rgb(0xF3F4F6)
}

// Borders (subtle to strong)
pub fn border_subtle() -> Rgba {
    gpui::rgb(0xE5E7EB)
}
pub fn border() -> Rgba {
    gpui::rgb(0xD1D5DB)
}

// Text (muted to brightest)
pub fn text_muted() -> Rgba {
    gpui::rgb(0x9CA3AF)
}
pub fn text_subtle() -> Rgba {
    gpui::rgb(0x6B7280)
}
pub fn text() -> Rgba {
    gpui::rgb(0x4B5563)
}
pub fn text_strong() -> Rgba {
    gpui::rgb(0x374151)
}
pub fn text_bright() -> Rgba {
    gpui::rgb(0x111827)
}
pub fn text_white() -> Rgba {
    gpui::rgb(0xFFFFFF)
}

// Brand accent - Ruby (primary actions, active page, figures)
pub fn ruby() -> Rgba {
    gpui::rgb(0xDC2626)
}
pub fn ruby_bright() -> Rgba {
    gpui::rgb(0xEF4444)
}
pub fn ruby_dim() -> Rgba {
    gpui::rgb(0xB91C1C)
}
pub fn ruby_wash() -> Rgba {
    gpui::rgb(0xFEF2F2)
}
pub fn ruby_border() -> Rgba {
    gpui::rgb(0xFECACA)
}

// Status - Leaf (valid total)
pub fn leaf() -> Rgba {
    gpui::rgb(0x15803D)
}
pub fn leaf_wash() -> Rgba {
    gpui::rgb(0xF0FDF4)
}
pub fn leaf_border() -> Rgba {
    gpui::rgb(0xBBF7D0)
}

// Notice - Sky (informational callouts)
pub fn sky() -> Rgba {
    gpui::rgb(0x1E40AF)
}
pub fn sky_wash() -> Rgba {
    gpui::rgb(0xEFF6FF)
}
pub fn sky_border() -> Rgba {
    gpui::rgb(0xBFDBFE)
}

// Notice - Amber (hints)
pub fn amber() -> Rgba {
    gpui::rgb(0x854D0E)
}
pub fn amber_wash() -> Rgba {
    gpui::rgb(0xFEFCE8)
}
pub fn amber_border() -> Rgba {
    gpui::rgb(0xFEF08A)
}

pub fn transparent() -> Rgba {
    with_alpha(panel(), 0.0)
}

/// Create a color with alpha.
///
/// Alpha is clamped to the valid range 0.0-1.0.
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Rgba {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

// =============================================================================
// TYPOGRAPHY SCALE
// =============================================================================

pub const TEXT_XS: f32 = 11.0;
pub const TEXT_SM: f32 = 12.0;
pub const TEXT_BASE: f32 = 14.0;
pub const TEXT_LG: f32 = 16.0;
pub const TEXT_XL: f32 = 20.0;
pub const TEXT_2XL: f32 = 24.0;

pub const FONT_UI: &str = "Inter";

// =============================================================================
// SPACING SCALE
// =============================================================================

pub const SPACE_1: f32 = 4.0;
pub const SPACE_2: f32 = 8.0;
pub const SPACE_3: f32 = 12.0;
pub const SPACE_4: f32 = 16.0;
pub const SPACE_6: f32 = 24.0;
pub const SPACE_8: f32 = 32.0;

// =============================================================================
// BORDER RADII
// =============================================================================

pub const RADIUS_SM: f32 = 4.0;
pub const RADIUS_MD: f32 = 6.0;
pub const RADIUS_LG: f32 = 8.0;
