//! CLI color helpers using the Joicont palette.
//!
//! Every function respects `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`. `--no-color` sets an in-process flag
//! that bypasses owo-colors entirely.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use simulador_core::limits;

/// Set by `--no-color`; forces plain output.
static NO_COLOR_FLAG: AtomicBool = AtomicBool::new(false);

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    NO_COLOR_FLAG.store(true, Ordering::Relaxed);
}

#[derive(Debug, Clone, Copy)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }
}

const RUBY: Rgb = Rgb::from_hex(0xDC2626); // Brand accent, errors
const LEAF: Rgb = Rgb::from_hex(0x16A34A); // Valid total
const AMBER: Rgb = Rgb::from_hex(0xD97706); // Warnings
const MUTED: Rgb = Rgb::from_hex(0x6B7280); // Borders, hints

fn no_color() -> bool {
    NO_COLOR_FLAG.load(Ordering::Relaxed)
}

fn paint(text: &str, rgb: Rgb) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.truecolor(rgb.r, rgb.g, rgb.b))
        .to_string()
}

/// Ruby red (partner ids, errors).
pub fn ruby(text: &str) -> String {
    paint(text, RUBY)
}

/// Leaf green (success).
pub fn leaf(text: &str) -> String {
    paint(text, LEAF)
}

/// Amber (warnings).
pub fn amber(text: &str) -> String {
    paint(text, AMBER)
}

/// Muted gray (table borders, secondary info).
pub fn muted(text: &str) -> String {
    paint(text, MUTED)
}

/// Bold (headers).
pub fn bold(text: &str) -> String {
    if no_color() {
        return text.to_string();
    }
    text.if_supports_color(Stdout, |t| t.bold()).to_string()
}

/// Green when `total` is exactly 100, red otherwise.
pub fn total(text: &str, total: u32) -> String {
    if total == limits::TOTAL_PERCENTAGE {
        leaf(text)
    } else {
        ruby(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_returns_plain_text() {
        set_no_color();
        assert_eq!(ruby("partner-1"), "partner-1");
        assert_eq!(leaf("100%"), "100%");
        assert_eq!(amber("aviso"), "aviso");
        assert_eq!(muted("│"), "│");
        assert_eq!(bold("Nome"), "Nome");
        assert_eq!(total("90%", 90), "90%");
    }
}
