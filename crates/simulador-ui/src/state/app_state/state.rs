use simulador_core::{
    Command, Event, NavigationStyle, Page, RowErrors, RowKey, SetupError, SetupForm, Shell,
    SimulationConfig, SimuladorConfig, Store, ValidationErrors, limits,
};

/// Main application state.
///
/// All fields are private - access state through the facade methods below so
/// that page changes always go through the shell store and form edits always
/// go through the setup form's rules.
pub struct AppState {
    /// Current page and the configuration handed over by setup.
    pub(super) shell: Shell,

    /// Editable setup rows and duration.
    pub(super) form: SetupForm,

    /// Loaded configuration (navigation style, brand).
    pub(super) config: SimuladorConfig,

    /// Set by a rejected submit. From then on errors follow every edit.
    pub(super) show_errors: bool,

    /// Problems found while starting up (config load failures).
    pub(super) startup_errors: Vec<String>,
}

impl AppState {
    pub fn new(config: SimuladorConfig, startup_errors: Vec<String>) -> Self {
        Self {
            shell: Shell::new(),
            form: SetupForm::from_config(&config.setup),
            config,
            show_errors: false,
            startup_errors,
        }
    }

    #[cfg(test)]
    pub fn test_new() -> Self {
        Self::new(SimuladorConfig::default(), Vec::new())
    }

    // --- Shell ---

    pub fn current_page(&self) -> Page {
        self.shell.current_page()
    }

    /// Switch to `page`. Any page may be selected at any time.
    pub fn navigate(&mut self, page: Page) {
        match self.shell.dispatch(Command::Navigate { page }) {
            Ok(events) => self.apply_events(&events),
            // Navigation cannot be rejected by the shell
            Err(e) => tracing::error!(event = "ui.navigation.dispatch_failed", error = %e),
        }
    }

    pub fn simulation_data(&self) -> Option<&SimulationConfig> {
        self.shell.simulation_data()
    }

    fn apply_events(&mut self, events: &[Event]) {
        for ev in events {
            tracing::debug!(event = "ui.state.event_applied", event_type = ?ev);
            match ev {
                Event::PageChanged { from, to } => {
                    tracing::info!(event = "ui.navigation.page_changed", from = %from, to = %to);
                }
                Event::SetupCompleted { .. } => {
                    self.show_errors = false;
                }
            }
        }
    }

    // --- Configuration ---

    pub fn navigation_style(&self) -> NavigationStyle {
        self.config.ui.navigation()
    }

    pub fn brand(&self) -> &str {
        self.config.ui.brand()
    }

    // --- Setup form ---

    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    pub fn add_partner(&mut self) -> RowKey {
        let key = self.form.add_partner();
        tracing::info!(event = "ui.setup.partner_added", rows = self.form.row_count());
        key
    }

    /// Remove the row identified by `key`. Returns whether a row was removed.
    pub fn remove_partner(&mut self, key: RowKey) -> bool {
        let Some(index) = self.form.index_of(key) else {
            tracing::warn!(event = "ui.setup.remove_unknown_row", key = ?key);
            return false;
        };
        match self.form.remove_partner(index) {
            Ok(removed) => {
                if removed {
                    tracing::info!(
                        event = "ui.setup.partner_removed",
                        rows = self.form.row_count()
                    );
                }
                removed
            }
            Err(e) => {
                tracing::warn!(event = "ui.setup.remove_failed", error = %e);
                false
            }
        }
    }

    pub fn set_partner_name(&mut self, key: RowKey, name: &str) {
        let Some(index) = self.form.index_of(key) else {
            tracing::warn!(event = "ui.setup.edit_unknown_row", key = ?key);
            return;
        };
        if let Err(e) = self.form.set_name(index, name) {
            tracing::warn!(event = "ui.setup.name_edit_failed", error = %e);
        }
    }

    /// Store typed percentage text and return the value the row now holds.
    pub fn set_partner_percentage(&mut self, key: RowKey, text: &str) -> Option<u32> {
        let Some(index) = self.form.index_of(key) else {
            tracing::warn!(event = "ui.setup.edit_unknown_row", key = ?key);
            return None;
        };
        match self.form.set_percentage_input(index, text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(event = "ui.setup.percentage_edit_failed", error = %e);
                None
            }
        }
    }

    /// Move the duration by `delta` years, staying within 1..=10.
    pub fn step_years(&mut self, delta: i32) -> u32 {
        let current = i64::from(self.form.simulation_years());
        let next = (current + i64::from(delta)).clamp(
            i64::from(limits::MIN_YEARS),
            i64::from(limits::MAX_YEARS),
        ) as u32;
        self.form.set_years(next);
        next
    }

    pub fn total(&self) -> u32 {
        self.form.total()
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit()
    }

    /// Current validation errors, once a submit has been attempted.
    pub fn errors(&self) -> Option<ValidationErrors> {
        if !self.show_errors {
            return None;
        }
        self.form.validate().err()
    }

    pub fn row_errors(&self, index: usize) -> RowErrors {
        self.errors()
            .and_then(|errors| errors.row(index).cloned())
            .unwrap_or_default()
    }

    /// Validate and hand the configuration to the shell.
    ///
    /// Returns `true` when the shell accepted it and moved past setup.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            tracing::debug!(event = "ui.setup.submit_blocked", total = self.total());
            return false;
        }

        let config = match self.form.submit() {
            Ok(config) => config,
            Err(SetupError::Invalid(errors)) => {
                tracing::info!(event = "ui.setup.submit_invalid", errors = %errors);
                self.show_errors = true;
                return false;
            }
            Err(e) => {
                tracing::error!(event = "ui.setup.submit_failed", error = %e);
                return false;
            }
        };

        match self.shell.dispatch(Command::CompleteSetup { config }) {
            Ok(events) => {
                self.apply_events(&events);
                tracing::info!(
                    event = "ui.setup.submit_completed",
                    page = %self.current_page()
                );
                true
            }
            Err(e) => {
                tracing::error!(event = "ui.setup.dispatch_failed", error = %e);
                self.startup_errors.push(e.to_string());
                false
            }
        }
    }

    // --- Banner errors ---

    pub fn banner_errors(&self) -> &[String] {
        &self.startup_errors
    }

    pub fn has_banner_errors(&self) -> bool {
        !self.startup_errors.is_empty()
    }

    pub fn dismiss_banner_errors(&mut self) {
        self.startup_errors.clear();
    }
}
