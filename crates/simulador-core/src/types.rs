//! Records produced by the setup step and consumed by the later pages.
//!
//! Field names serialize in camelCase (`simulationYears`, `createdAt`, ...)
//! so exported JSON matches the shape the rest of the app expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A partner as handed to the simulation: id assigned at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    /// `partner-N`, 1-based, in row order.
    pub id: String,
    pub name: String,
    pub percentage: u32,
}

impl Partner {
    /// Build the partner at 0-based `position` in the submitted row order.
    pub fn at_position(position: usize, name: impl Into<String>, percentage: u32) -> Self {
        Self {
            id: format!("partner-{}", position + 1),
            name: name.into(),
            percentage,
        }
    }
}

/// How a partner funded a given month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionType {
    Investment,
    Cash,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContribution {
    pub partner_id: String,
    pub investment_amount: f64,
    pub cash_amount: f64,
    pub contribution_type: ContributionType,
}

/// One simulated month. Nothing produces these yet; the setup step always
/// hands over an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyData {
    pub month: u32,
    pub year: u32,
    pub total_cash: f64,
    pub profit: f64,
    pub partner_contributions: Vec<PartnerContribution>,
    pub company_value: f64,
}

/// Validated output of the setup step.
///
/// Built once per successful submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    pub partners: Vec<Partner>,
    pub simulation_years: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub monthly_data: Vec<MonthlyData>,
}

impl SimulationConfig {
    /// Sum of all partner percentages. Saturates instead of overflowing.
    pub fn total_percentage(&self) -> u32 {
        self.partners
            .iter()
            .fold(0u32, |acc, p| acc.saturating_add(p.percentage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> SimulationConfig {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        SimulationConfig {
            partners: vec![
                Partner::at_position(0, "João", 50),
                Partner::at_position(1, "Pedro", 50),
            ],
            simulation_years: 5,
            created_at: at,
            updated_at: at,
            monthly_data: vec![],
        }
    }

    #[test]
    fn test_partner_ids_are_one_based() {
        assert_eq!(Partner::at_position(0, "A", 10).id, "partner-1");
        assert_eq!(Partner::at_position(9, "J", 10).id, "partner-10");
    }

    #[test]
    fn test_total_percentage() {
        assert_eq!(sample().total_percentage(), 100);
    }

    #[test]
    fn test_total_percentage_saturates() {
        let mut config = sample();
        config.partners = vec![
            Partner::at_position(0, "A", u32::MAX),
            Partner::at_position(1, "B", 101),
        ];
        assert_eq!(config.total_percentage(), u32::MAX);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["simulationYears"], 5);
        assert_eq!(json["monthlyData"], serde_json::json!([]));
        assert_eq!(json["partners"][0]["id"], "partner-1");
        assert_eq!(json["partners"][1]["name"], "Pedro");
        assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");
        assert!(json.get("simulation_years").is_none());
    }

    #[test]
    fn test_contribution_type_lowercase() {
        let contribution = PartnerContribution {
            partner_id: "partner-1".to_string(),
            investment_amount: 1000.0,
            cash_amount: 0.0,
            contribution_type: ContributionType::Investment,
        };
        let json = serde_json::to_value(&contribution).unwrap();
        assert_eq!(json["contributionType"], "investment");
        assert_eq!(json["partnerId"], "partner-1");
    }
}
