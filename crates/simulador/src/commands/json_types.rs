use serde::Serialize;

use simulador_core::{Page, ValidationErrors};

/// One rejected field in `setup --json` output.
#[derive(Debug, Serialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

/// `setup --json` output when validation fails.
#[derive(Debug, Serialize)]
pub struct RejectedSetup {
    pub valid: bool,
    pub total_percentage: u32,
    pub errors: Vec<FieldMessage>,
}

impl RejectedSetup {
    pub fn new(total_percentage: u32, errors: &ValidationErrors) -> Self {
        Self {
            valid: false,
            total_percentage,
            errors: errors
                .messages()
                .into_iter()
                .map(|(field, message)| FieldMessage { field, message })
                .collect(),
        }
    }
}

/// One page in `pages --json` output.
#[derive(Debug, Serialize)]
pub struct PageEntry {
    pub index: usize,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<Page> for PageEntry {
    fn from(page: Page) -> Self {
        Self {
            index: page.index(),
            id: page.id(),
            label: page.label(),
            icon: page.icon(),
        }
    }
}
