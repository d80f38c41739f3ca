use simulador_config::limits;
use tracing::{debug, info, warn};

use super::errors::DispatchError;
use super::events::Event;
use super::store::Store;
use super::types::Command;
use crate::pages::Page;
use crate::types::SimulationConfig;

/// Root shell state: which page is showing and what setup produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shell {
    current_page: Page,
    simulation_data: Option<SimulationConfig>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    /// `None` until a setup has been completed.
    pub fn simulation_data(&self) -> Option<&SimulationConfig> {
        self.simulation_data.as_ref()
    }

    fn navigate(&mut self, page: Page) -> Event {
        let from = self.current_page;
        self.current_page = page;
        Event::PageChanged { from, to: page }
    }

    fn complete_setup(&mut self, config: SimulationConfig) -> Result<Vec<Event>, DispatchError> {
        check_config(&config)?;

        let partner_count = config.partners.len();
        let simulation_years = config.simulation_years;
        self.simulation_data = Some(config);

        let mut events = vec![Event::SetupCompleted {
            partner_count,
            simulation_years,
        }];
        if let Some(next) = Page::Setup.next() {
            events.push(self.navigate(next));
        }
        Ok(events)
    }
}

/// A produced configuration must satisfy the same invariants the form enforces.
fn check_config(config: &SimulationConfig) -> Result<(), DispatchError> {
    if config.partners.is_empty() {
        return Err(DispatchError::InvalidSetup {
            message: "no partners".to_string(),
        });
    }
    for partner in &config.partners {
        if !(limits::MIN_PERCENTAGE..=limits::MAX_PERCENTAGE).contains(&partner.percentage) {
            return Err(DispatchError::PercentageOutOfRange {
                partner_id: partner.id.clone(),
                percentage: partner.percentage,
            });
        }
    }
    let total = config.total_percentage();
    if total != limits::TOTAL_PERCENTAGE {
        return Err(DispatchError::TotalNotHundred { total });
    }
    if !(limits::MIN_YEARS..=limits::MAX_YEARS).contains(&config.simulation_years) {
        return Err(DispatchError::InvalidSetup {
            message: format!(
                "simulation years must be within {}..={}, got {}",
                limits::MIN_YEARS,
                limits::MAX_YEARS,
                config.simulation_years
            ),
        });
    }
    Ok(())
}

impl Store for Shell {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::Navigate { page } => Ok(vec![self.navigate(page)]),
            Command::CompleteSetup { config } => self.complete_setup(config),
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                page = %self.current_page,
                events = events.len()
            ),
            Err(e) => warn!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
