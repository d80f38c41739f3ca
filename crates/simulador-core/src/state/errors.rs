use crate::errors::SimuladorError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Rejected setup: partner percentages sum to {total}%, expected 100%")]
    TotalNotHundred { total: u32 },

    #[error("Rejected setup: {partner_id} has {percentage}%, expected 1..=100")]
    PercentageOutOfRange { partner_id: String, percentage: u32 },

    #[error("Rejected setup: {message}")]
    InvalidSetup { message: String },
}

impl SimuladorError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::TotalNotHundred { .. } => "DISPATCH_TOTAL_NOT_HUNDRED",
            DispatchError::PercentageOutOfRange { .. } => "DISPATCH_PERCENTAGE_OUT_OF_RANGE",
            DispatchError::InvalidSetup { .. } => "DISPATCH_INVALID_SETUP",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error_display() {
        let err = DispatchError::TotalNotHundred { total: 90 };
        assert_eq!(
            err.to_string(),
            "Rejected setup: partner percentages sum to 90%, expected 100%"
        );
        assert_eq!(err.error_code(), "DISPATCH_TOTAL_NOT_HUNDRED");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_percentage_out_of_range_display() {
        let err = DispatchError::PercentageOutOfRange {
            partner_id: "partner-2".to_string(),
            percentage: 0,
        };
        assert_eq!(
            err.to_string(),
            "Rejected setup: partner-2 has 0%, expected 1..=100"
        );
        assert_eq!(err.error_code(), "DISPATCH_PERCENTAGE_OUT_OF_RANGE");
    }
}
