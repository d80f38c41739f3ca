use chrono::{DateTime, Utc};
use simulador_config::{PartnerDefault, SetupConfig, limits};
use tracing::{debug, info, warn};

use super::errors::{SetupError, ValidationErrors};
use super::validation;
use crate::types::{Partner, SimulationConfig};

/// Stable identity of a row for as long as the form lives.
///
/// Positions shift when a row is removed; keys never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerRow {
    key: RowKey,
    name: String,
    percentage: u32,
}

impl PartnerRow {
    pub fn key(&self) -> RowKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn percentage(&self) -> u32 {
        self.percentage
    }
}

/// Editable state of the partner setup step.
///
/// Rows built from configuration or CLI arguments keep their values as given
/// so that out-of-range input is reported on submit. Edits made through
/// [`SetupForm::set_percentage`] are clamped into range.
#[derive(Debug, Clone)]
pub struct SetupForm {
    rows: Vec<PartnerRow>,
    simulation_years: u32,
    min_partners: usize,
    new_partner_percentage: u32,
    next_key: u64,
}

impl SetupForm {
    /// Start from the configured default partners and duration.
    pub fn from_config(config: &SetupConfig) -> Self {
        Self::with_rows(config, config.default_partners(), config.default_years())
    }

    /// Rules from `config`, initial values from the caller.
    pub fn with_rows(
        config: &SetupConfig,
        partners: Vec<PartnerDefault>,
        simulation_years: u32,
    ) -> Self {
        let mut form = Self {
            rows: Vec::with_capacity(partners.len()),
            simulation_years,
            min_partners: config.min_partners(),
            new_partner_percentage: config.new_partner_percentage(),
            next_key: 0,
        };
        for partner in partners {
            form.push_row(partner.name, partner.percentage);
        }
        form
    }

    fn push_row(&mut self, name: String, percentage: u32) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.push(PartnerRow {
            key,
            name,
            percentage,
        });
        key
    }

    pub fn rows(&self) -> &[PartnerRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn simulation_years(&self) -> u32 {
        self.simulation_years
    }

    pub fn min_partners(&self) -> usize {
        self.min_partners
    }

    pub fn index_of(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    /// Append an empty row with the configured starting percentage.
    pub fn add_partner(&mut self) -> RowKey {
        let key = self.push_row(String::new(), self.new_partner_percentage);
        debug!(
            event = "core.setup.partner_added",
            rows = self.rows.len(),
            percentage = self.new_partner_percentage
        );
        key
    }

    /// Whether a row may be removed without dropping below the minimum.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > self.min_partners
    }

    /// Remove the row at `index`.
    ///
    /// Returns `Ok(false)` and leaves the form untouched when the removal would
    /// drop below the minimum row count.
    pub fn remove_partner(&mut self, index: usize) -> Result<bool, SetupError> {
        self.check_index(index)?;
        if !self.can_remove() {
            debug!(
                event = "core.setup.remove_skipped",
                index = index,
                rows = self.rows.len(),
                min = self.min_partners
            );
            return Ok(false);
        }
        self.rows.remove(index);
        debug!(
            event = "core.setup.partner_removed",
            index = index,
            rows = self.rows.len()
        );
        Ok(true)
    }

    /// Store the name verbatim. Length and emptiness are checked on submit.
    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> Result<(), SetupError> {
        self.check_index(index)?;
        self.rows[index].name = name.into();
        Ok(())
    }

    /// Store a percentage clamped to 1..=100. Returns the stored value.
    pub fn set_percentage(&mut self, index: usize, value: i64) -> Result<u32, SetupError> {
        self.check_index(index)?;
        let clamped = clamp_percentage(value);
        self.rows[index].percentage = clamped;
        Ok(clamped)
    }

    /// Store a percentage typed as text.
    ///
    /// Leading integer digits are used; text with no number (or a zero) counts
    /// as 1. The result is clamped like [`SetupForm::set_percentage`].
    pub fn set_percentage_input(&mut self, index: usize, text: &str) -> Result<u32, SetupError> {
        let value = match parse_leading_int(text) {
            Some(0) | None => 1,
            Some(n) => n,
        };
        self.set_percentage(index, value)
    }

    /// Store the duration as given; range is checked on submit.
    pub fn set_years(&mut self, years: u32) {
        self.simulation_years = years;
    }

    /// Store a duration typed as text. Anything without a positive number is
    /// stored as 0 so that submit reports it.
    pub fn set_years_input(&mut self, text: &str) -> u32 {
        let years = parse_leading_int(text)
            .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
            .unwrap_or(0);
        self.simulation_years = years;
        years
    }

    /// Live sum of all row percentages.
    pub fn total(&self) -> u32 {
        validation::total_percentage(&self.rows)
    }

    pub fn is_total_valid(&self) -> bool {
        self.total() == limits::TOTAL_PERCENTAGE
    }

    /// The submit control is enabled only when the total is exactly 100.
    pub fn can_submit(&self) -> bool {
        self.is_total_valid()
    }

    /// Run every rule and collect all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors =
            validation::validate_form(&self.rows, self.simulation_years, self.min_partners);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn submit(&self) -> Result<SimulationConfig, SetupError> {
        self.submit_at(Utc::now())
    }

    /// Build the configuration, stamping both timestamps with `now`.
    pub fn submit_at(&self, now: DateTime<Utc>) -> Result<SimulationConfig, SetupError> {
        info!(
            event = "core.setup.submit_started",
            rows = self.rows.len(),
            total = self.total(),
            years = self.simulation_years
        );

        if let Err(errors) = self.validate() {
            warn!(
                event = "core.setup.submit_rejected",
                errors = %errors
            );
            return Err(SetupError::Invalid(errors));
        }

        let partners = self
            .rows
            .iter()
            .enumerate()
            .map(|(position, row)| Partner::at_position(position, row.name.clone(), row.percentage))
            .collect();

        let config = SimulationConfig {
            partners,
            simulation_years: self.simulation_years,
            created_at: now,
            updated_at: now,
            monthly_data: Vec::new(),
        };

        info!(
            event = "core.setup.submit_completed",
            partners = config.partners.len(),
            years = config.simulation_years
        );

        Ok(config)
    }

    fn check_index(&self, index: usize) -> Result<(), SetupError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(SetupError::RowNotFound {
                index,
                len: self.rows.len(),
            })
        }
    }
}

fn clamp_percentage(value: i64) -> u32 {
    value.clamp(
        i64::from(limits::MIN_PERCENTAGE),
        i64::from(limits::MAX_PERCENTAGE),
    ) as u32
}

/// Parse an optional sign followed by digits at the start of `text`,
/// ignoring leading whitespace and whatever follows the digits.
pub(crate) fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    // Overlong digit strings saturate rather than fail.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
