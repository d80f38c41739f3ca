//! Configuration validation logic.
//!
//! Rejects config values that would seed the setup form with a state the form
//! itself can never produce or accept.

use crate::errors::ConfigError;
use crate::limits;
use crate::types::SimuladorConfig;

/// Validate a SimuladorConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `min_partners` must be 1 or 2
/// - `new_partner_percentage` must be within 0..=100
/// - `default_years` must be within 1..=10
/// - Default partners must number at least `min_partners`, with names of
///   1..=50 characters and percentages within 1..=100
///
/// Default partners are not required to sum to 100: the live total shows the
/// mismatch and the submit control stays disabled until the user fixes it.
pub fn validate_config(config: &SimuladorConfig) -> Result<(), ConfigError> {
    let setup = &config.setup;

    let min_partners = setup.min_partners();
    if !(limits::LOOSE_MIN_PARTNERS..=limits::STRICT_MIN_PARTNERS).contains(&min_partners) {
        return Err(invalid(format!(
            "setup.min_partners must be {} or {}, got {}",
            limits::LOOSE_MIN_PARTNERS,
            limits::STRICT_MIN_PARTNERS,
            min_partners
        )));
    }

    let new_percentage = setup.new_partner_percentage();
    if new_percentage > limits::MAX_PERCENTAGE {
        return Err(invalid(format!(
            "setup.new_partner_percentage must be at most {}, got {}",
            limits::MAX_PERCENTAGE,
            new_percentage
        )));
    }

    let years = setup.default_years();
    if !(limits::MIN_YEARS..=limits::MAX_YEARS).contains(&years) {
        return Err(invalid(format!(
            "setup.default_years must be within {}..={}, got {}",
            limits::MIN_YEARS,
            limits::MAX_YEARS,
            years
        )));
    }

    let partners = setup.default_partners();
    if partners.len() < min_partners {
        return Err(invalid(format!(
            "setup.default_partners needs at least {} entries, got {}",
            min_partners,
            partners.len()
        )));
    }

    for (index, partner) in partners.iter().enumerate() {
        let name_chars = partner.name.chars().count();
        if name_chars == 0 || name_chars > limits::MAX_NAME_CHARS {
            return Err(invalid(format!(
                "setup.default_partners[{}].name must have 1..={} characters",
                index,
                limits::MAX_NAME_CHARS
            )));
        }
        if !(limits::MIN_PERCENTAGE..=limits::MAX_PERCENTAGE).contains(&partner.percentage) {
            return Err(invalid(format!(
                "setup.default_partners[{}].percentage must be within {}..={}, got {}",
                index,
                limits::MIN_PERCENTAGE,
                limits::MAX_PERCENTAGE,
                partner.percentage
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidConfiguration { message }
}
