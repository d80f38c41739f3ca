use std::fmt;

use simulador_config::limits;

use crate::errors::SimuladorError;

/// A single field-level validation failure, displayed in the form's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    YearsTooLow,
    YearsTooHigh,
    NameRequired,
    NameTooLong,
    PercentageTooLow,
    PercentageTooHigh,
    TooFewPartners { min: usize },
    TotalNotHundred,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::YearsTooLow => write!(f, "Mínimo {} ano", limits::MIN_YEARS),
            FieldError::YearsTooHigh => write!(f, "Máximo {} anos", limits::MAX_YEARS),
            FieldError::NameRequired => f.write_str("Nome obrigatório"),
            FieldError::NameTooLong => f.write_str("Nome muito longo"),
            FieldError::PercentageTooLow => write!(f, "Mínimo {}%", limits::MIN_PERCENTAGE),
            FieldError::PercentageTooHigh => write!(f, "Máximo {}%", limits::MAX_PERCENTAGE),
            FieldError::TooFewPartners { min } if *min <= 1 => {
                f.write_str("Pelo menos um sócio é necessário para a simulação")
            }
            FieldError::TooFewPartners { .. } => {
                f.write_str("Pelo menos dois sócios são necessários para a simulação")
            }
            FieldError::TotalNotHundred => write!(
                f,
                "A soma dos percentuais deve ser exatamente {}%",
                limits::TOTAL_PERCENTAGE
            ),
        }
    }
}

/// Errors attached to one partner row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowErrors {
    pub name: Option<FieldError>,
    pub percentage: Option<FieldError>,
}

impl RowErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.percentage.is_none()
    }
}

/// Every validation failure found in one pass over the form.
///
/// `partners` is indexed by row position and has one entry per row, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub years: Option<FieldError>,
    pub partners: Vec<RowErrors>,
    pub form: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.years.is_none() && self.form.is_empty() && self.partners.iter().all(RowErrors::is_empty)
    }

    pub fn row(&self, index: usize) -> Option<&RowErrors> {
        self.partners.get(index)
    }

    /// Flattened `(field path, message)` pairs in form order.
    pub fn messages(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Some(err) = self.years {
            out.push(("simulationYears".to_string(), err.to_string()));
        }
        for (index, row) in self.partners.iter().enumerate() {
            if let Some(err) = row.name {
                out.push((format!("partners[{}].name", index), err.to_string()));
            }
            if let Some(err) = row.percentage {
                out.push((format!("partners[{}].percentage", index), err.to_string()));
            }
        }
        for err in &self.form {
            out.push(("partners".to_string(), err.to_string()));
        }
        out
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .messages()
            .into_iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("Invalid setup: {0}")]
    Invalid(ValidationErrors),

    #[error("Partner row {index} not found (form has {len} rows)")]
    RowNotFound { index: usize, len: usize },
}

impl SimuladorError for SetupError {
    fn error_code(&self) -> &'static str {
        match self {
            SetupError::Invalid(_) => "SETUP_INVALID",
            SetupError::RowNotFound { .. } => "SETUP_ROW_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, SetupError::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_messages() {
        assert_eq!(FieldError::YearsTooLow.to_string(), "Mínimo 1 ano");
        assert_eq!(FieldError::YearsTooHigh.to_string(), "Máximo 10 anos");
        assert_eq!(FieldError::NameRequired.to_string(), "Nome obrigatório");
        assert_eq!(FieldError::NameTooLong.to_string(), "Nome muito longo");
        assert_eq!(FieldError::PercentageTooLow.to_string(), "Mínimo 1%");
        assert_eq!(FieldError::PercentageTooHigh.to_string(), "Máximo 100%");
        assert_eq!(
            FieldError::TotalNotHundred.to_string(),
            "A soma dos percentuais deve ser exatamente 100%"
        );
    }

    #[test]
    fn test_too_few_partners_message_follows_minimum() {
        assert_eq!(
            FieldError::TooFewPartners { min: 2 }.to_string(),
            "Pelo menos dois sócios são necessários para a simulação"
        );
        assert_eq!(
            FieldError::TooFewPartners { min: 1 }.to_string(),
            "Pelo menos um sócio é necessário para a simulação"
        );
    }

    #[test]
    fn test_validation_errors_messages_in_form_order() {
        let errors = ValidationErrors {
            years: Some(FieldError::YearsTooHigh),
            partners: vec![
                RowErrors::default(),
                RowErrors {
                    name: Some(FieldError::NameRequired),
                    percentage: Some(FieldError::PercentageTooLow),
                },
            ],
            form: vec![FieldError::TotalNotHundred],
        };
        let fields: Vec<String> = errors.messages().into_iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                "simulationYears",
                "partners[1].name",
                "partners[1].percentage",
                "partners",
            ]
        );
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_empty_rows_do_not_count_as_errors() {
        let errors = ValidationErrors {
            years: None,
            partners: vec![RowErrors::default(), RowErrors::default()],
            form: vec![],
        };
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "");
    }

    #[test]
    fn test_setup_error_codes() {
        let invalid = SetupError::Invalid(ValidationErrors::default());
        assert_eq!(invalid.error_code(), "SETUP_INVALID");
        assert!(invalid.is_user_error());

        let missing = SetupError::RowNotFound { index: 4, len: 2 };
        assert_eq!(missing.error_code(), "SETUP_ROW_NOT_FOUND");
        assert!(!missing.is_user_error());
        assert_eq!(
            missing.to_string(),
            "Partner row 4 not found (form has 2 rows)"
        );
    }
}
