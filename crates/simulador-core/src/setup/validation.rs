//! Field rules applied on submit.
//!
//! Every rule runs on every pass so the form can show all messages at once.

use simulador_config::limits;

use super::errors::{FieldError, RowErrors, ValidationErrors};
use super::form::PartnerRow;

pub fn validate_years(years: u32) -> Option<FieldError> {
    if years < limits::MIN_YEARS {
        Some(FieldError::YearsTooLow)
    } else if years > limits::MAX_YEARS {
        Some(FieldError::YearsTooHigh)
    } else {
        None
    }
}

/// Only an empty name is missing; blanks count as characters. Length is
/// measured in characters.
pub fn validate_name(name: &str) -> Option<FieldError> {
    if name.is_empty() {
        Some(FieldError::NameRequired)
    } else if name.chars().count() > limits::MAX_NAME_CHARS {
        Some(FieldError::NameTooLong)
    } else {
        None
    }
}

pub fn validate_percentage(percentage: u32) -> Option<FieldError> {
    if percentage < limits::MIN_PERCENTAGE {
        Some(FieldError::PercentageTooLow)
    } else if percentage > limits::MAX_PERCENTAGE {
        Some(FieldError::PercentageTooHigh)
    } else {
        None
    }
}

/// Sum of row percentages. Saturates instead of wrapping on absurd input.
pub fn total_percentage(rows: &[PartnerRow]) -> u32 {
    rows.iter()
        .fold(0u32, |acc, row| acc.saturating_add(row.percentage()))
}

pub fn validate_form(rows: &[PartnerRow], years: u32, min_partners: usize) -> ValidationErrors {
    let partners = rows
        .iter()
        .map(|row| RowErrors {
            name: validate_name(row.name()),
            percentage: validate_percentage(row.percentage()),
        })
        .collect();

    let mut form = Vec::new();
    if rows.len() < min_partners {
        form.push(FieldError::TooFewPartners { min: min_partners });
    }
    if total_percentage(rows) != limits::TOTAL_PERCENTAGE {
        form.push(FieldError::TotalNotHundred);
    }

    ValidationErrors {
        years: validate_years(years),
        partners,
        form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_bounds() {
        assert_eq!(validate_years(0), Some(FieldError::YearsTooLow));
        assert_eq!(validate_years(1), None);
        assert_eq!(validate_years(10), None);
        assert_eq!(validate_years(11), Some(FieldError::YearsTooHigh));
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(validate_name(""), Some(FieldError::NameRequired));
        assert_eq!(validate_name("   "), None);
        assert_eq!(validate_name("Ana"), None);
        assert_eq!(validate_name(&"x".repeat(50)), None);
        assert_eq!(validate_name(&"x".repeat(51)), Some(FieldError::NameTooLong));
        // Multi-byte names are measured in characters, not bytes
        assert_eq!(validate_name(&"ç".repeat(50)), None);
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(validate_percentage(0), Some(FieldError::PercentageTooLow));
        assert_eq!(validate_percentage(1), None);
        assert_eq!(validate_percentage(100), None);
        assert_eq!(validate_percentage(101), Some(FieldError::PercentageTooHigh));
    }
}
