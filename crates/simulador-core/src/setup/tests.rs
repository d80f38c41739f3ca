use chrono::{TimeZone, Utc};
use simulador_config::{PartnerDefault, SetupConfig};

use super::form::parse_leading_int;
use super::*;

fn strict() -> SetupConfig {
    SetupConfig::default()
}

fn loose() -> SetupConfig {
    SetupConfig {
        min_partners: Some(1),
        new_partner_percentage: Some(1),
        ..Default::default()
    }
}

fn form_with(partners: &[(&str, u32)], years: u32) -> SetupForm {
    let partners = partners
        .iter()
        .map(|(name, pct)| PartnerDefault::new(*name, *pct))
        .collect();
    SetupForm::with_rows(&strict(), partners, years)
}

#[test]
fn test_default_form_matches_canonical_start() {
    let form = SetupForm::from_config(&strict());
    let rows: Vec<(&str, u32)> = form.rows().iter().map(|r| (r.name(), r.percentage())).collect();
    assert_eq!(rows, vec![("João da Silva", 50), ("Pedro Souza", 50)]);
    assert_eq!(form.simulation_years(), 5);
    assert_eq!(form.total(), 100);
    assert!(form.can_submit());
    assert!(!form.can_remove());
}

#[test]
fn test_submit_two_equal_partners() {
    let form = form_with(&[("João", 50), ("Pedro", 50)], 5);
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();

    let config = form.submit_at(at).unwrap();

    assert_eq!(config.partners.len(), 2);
    assert_eq!(config.partners[0].id, "partner-1");
    assert_eq!(config.partners[0].name, "João");
    assert_eq!(config.partners[0].percentage, 50);
    assert_eq!(config.partners[1].id, "partner-2");
    assert_eq!(config.partners[1].name, "Pedro");
    assert_eq!(config.simulation_years, 5);
    assert!(config.monthly_data.is_empty());
    assert_eq!(config.created_at, at);
    assert_eq!(config.updated_at, at);
    assert_eq!(config.total_percentage(), 100);
}

#[test]
fn test_total_below_hundred_blocks_submit() {
    let form = form_with(&[("A", 60), ("B", 30)], 5);
    assert_eq!(form.total(), 90);
    assert!(!form.is_total_valid());
    assert!(!form.can_submit());

    let err = form.submit().unwrap_err();
    let SetupError::Invalid(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.form, vec![FieldError::TotalNotHundred]);
    assert!(errors.partners.iter().all(RowErrors::is_empty));
}

#[test]
fn test_three_partners_summing_to_hundred() {
    let form = form_with(&[("Ana", 33), ("Bia", 33), ("Caio", 34)], 3);
    let config = form.submit().unwrap();
    let ids: Vec<&str> = config.partners.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["partner-1", "partner-2", "partner-3"]);
}

#[test]
fn test_years_above_ten_fails() {
    let form = form_with(&[("João", 50), ("Pedro", 50)], 11);
    assert!(form.can_submit(), "total alone does not disable submit");

    let Err(SetupError::Invalid(errors)) = form.submit() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.years, Some(FieldError::YearsTooHigh));
    assert_eq!(errors.years.map(|e| e.to_string()).as_deref(), Some("Máximo 10 anos"));
}

#[test]
fn test_years_zero_fails() {
    let form = form_with(&[("João", 50), ("Pedro", 50)], 0);
    let Err(SetupError::Invalid(errors)) = form.submit() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.years, Some(FieldError::YearsTooLow));
}

#[test]
fn test_add_partner_appends_blank_row() {
    let mut form = SetupForm::from_config(&strict());
    let key = form.add_partner();

    assert_eq!(form.row_count(), 3);
    let row = &form.rows()[2];
    assert_eq!(row.key(), key);
    assert_eq!(row.name(), "");
    assert_eq!(row.percentage(), 0);
    assert_eq!(form.total(), 100);
}

#[test]
fn test_new_row_is_reported_until_edited() {
    let mut form = SetupForm::from_config(&strict());
    form.add_partner();

    let Err(SetupError::Invalid(errors)) = form.submit() else {
        panic!("expected validation failure");
    };
    let row = errors.row(2).unwrap();
    assert_eq!(row.name, Some(FieldError::NameRequired));
    assert_eq!(row.percentage, Some(FieldError::PercentageTooLow));
    // Total is still 100, so no form-level error
    assert!(errors.form.is_empty());
}

#[test]
fn test_loose_rules_start_new_rows_at_one_percent() {
    let mut form = SetupForm::with_rows(&loose(), vec![PartnerDefault::new("Ana", 100)], 5);
    form.add_partner();
    assert_eq!(form.rows()[1].percentage(), 1);
    assert_eq!(form.total(), 101);
    assert!(!form.can_submit());
}

#[test]
fn test_remove_at_minimum_is_noop() {
    let mut form = SetupForm::from_config(&strict());
    assert!(!form.remove_partner(0).unwrap());
    assert_eq!(form.row_count(), 2);
}

#[test]
fn test_remove_above_minimum() {
    let mut form = SetupForm::from_config(&strict());
    let added = form.add_partner();
    assert!(form.can_remove());

    assert!(form.remove_partner(0).unwrap());
    assert_eq!(form.row_count(), 2);
    assert_eq!(form.rows()[0].name(), "Pedro Souza");
    // Keys survive the shift
    assert_eq!(form.index_of(added), Some(1));
    assert!(!form.can_remove());
}

#[test]
fn test_loose_rules_allow_single_row() {
    let mut form = SetupForm::from_config(&loose());
    assert!(form.remove_partner(1).unwrap());
    assert!(!form.remove_partner(0).unwrap());
    assert_eq!(form.row_count(), 1);

    form.set_percentage(0, 100).unwrap();
    form.set_name(0, "Ana").unwrap();
    let config = form.submit().unwrap();
    assert_eq!(config.partners.len(), 1);
}

#[test]
fn test_too_few_rows_reported_with_minimum_message() {
    let form = form_with(&[("Ana", 100)], 5);
    let Err(SetupError::Invalid(errors)) = form.submit() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.form, vec![FieldError::TooFewPartners { min: 2 }]);
    assert_eq!(
        errors.form[0].to_string(),
        "Pelo menos dois sócios são necessários para a simulação"
    );
}

#[test]
fn test_row_index_out_of_range() {
    let mut form = SetupForm::from_config(&strict());
    assert!(matches!(
        form.remove_partner(5),
        Err(SetupError::RowNotFound { index: 5, len: 2 })
    ));
    assert!(form.set_name(2, "X").is_err());
    assert!(form.set_percentage(2, 10).is_err());
}

#[test]
fn test_set_percentage_clamps() {
    let mut form = SetupForm::from_config(&strict());
    assert_eq!(form.set_percentage(0, 0).unwrap(), 1);
    assert_eq!(form.set_percentage(0, -20).unwrap(), 1);
    assert_eq!(form.set_percentage(0, 150).unwrap(), 100);
    assert_eq!(form.set_percentage(0, 42).unwrap(), 42);
    assert_eq!(form.rows()[0].percentage(), 42);
}

#[test]
fn test_set_percentage_input_parses_leading_integer() {
    let mut form = SetupForm::from_config(&strict());
    assert_eq!(form.set_percentage_input(0, "35").unwrap(), 35);
    assert_eq!(form.set_percentage_input(0, "  12abc").unwrap(), 12);
    assert_eq!(form.set_percentage_input(0, "7.9").unwrap(), 7);
    assert_eq!(form.set_percentage_input(0, "").unwrap(), 1);
    assert_eq!(form.set_percentage_input(0, "abc").unwrap(), 1);
    assert_eq!(form.set_percentage_input(0, "0").unwrap(), 1);
    assert_eq!(form.set_percentage_input(0, "250").unwrap(), 100);
    assert_eq!(form.set_percentage_input(0, "-5").unwrap(), 1);
}

#[test]
fn test_set_name_keeps_text_verbatim() {
    let mut form = SetupForm::from_config(&strict());
    form.set_name(0, "  Maria  ").unwrap();
    assert_eq!(form.rows()[0].name(), "  Maria  ");
    let config = form.submit().unwrap();
    assert_eq!(config.partners[0].name, "  Maria  ");
}

#[test]
fn test_long_name_rejected() {
    let mut form = SetupForm::from_config(&strict());
    form.set_name(1, "x".repeat(51)).unwrap();
    let Err(SetupError::Invalid(errors)) = form.submit() else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.row(1).and_then(|r| r.name), Some(FieldError::NameTooLong));
}

#[test]
fn test_set_years_input() {
    let mut form = SetupForm::from_config(&strict());
    assert_eq!(form.set_years_input("8"), 8);
    assert_eq!(form.simulation_years(), 8);
    assert_eq!(form.set_years_input(""), 0);
    assert_eq!(form.set_years_input("-3"), 0);
    assert_eq!(form.set_years_input("12"), 12);
    assert!(form.validate().is_err());
}

#[test]
fn test_validation_collects_everything_at_once() {
    let form = form_with(&[("", 0), ("B", 150)], 11);
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.years, Some(FieldError::YearsTooHigh));
    assert_eq!(errors.row(0).and_then(|r| r.name), Some(FieldError::NameRequired));
    assert_eq!(
        errors.row(0).and_then(|r| r.percentage),
        Some(FieldError::PercentageTooLow)
    );
    assert_eq!(
        errors.row(1).and_then(|r| r.percentage),
        Some(FieldError::PercentageTooHigh)
    );
    assert_eq!(errors.form, vec![FieldError::TotalNotHundred]);
}

#[test]
fn test_parse_leading_int() {
    assert_eq!(parse_leading_int("42"), Some(42));
    assert_eq!(parse_leading_int("+3"), Some(3));
    assert_eq!(parse_leading_int("-3x"), Some(-3));
    assert_eq!(parse_leading_int(" 9 "), Some(9));
    assert_eq!(parse_leading_int("x9"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
}

#[test]
fn test_blank_name_is_kept_verbatim() {
    let config = form_with(&[("   ", 50), ("Pedro", 50)], 5).submit().unwrap();
    assert_eq!(config.partners[0].name, "   ");
    assert_eq!(config.partners[0].id, "partner-1");
}
