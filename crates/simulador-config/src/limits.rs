//! Numeric limits of the setup form.
//!
//! Shared by the form validator in `simulador-core` and by config validation,
//! so a config file can never seed the form with values the form rejects.

pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 10;

pub const MIN_PERCENTAGE: u32 = 1;
pub const MAX_PERCENTAGE: u32 = 100;

/// Required sum of all partner percentages.
pub const TOTAL_PERCENTAGE: u32 = 100;

/// Maximum partner name length, in characters (not bytes).
pub const MAX_NAME_CHARS: usize = 50;

/// Strict rules require two partners; the loose rules accept a single one.
pub const STRICT_MIN_PARTNERS: usize = 2;
pub const LOOSE_MIN_PARTNERS: usize = 1;
