//! The partner setup form: rows, live total, validation and submission.

pub mod errors;
pub mod form;
pub mod validation;

pub use errors::{FieldError, RowErrors, SetupError, ValidationErrors};
pub use form::{PartnerRow, RowKey, SetupForm};

#[cfg(test)]
mod tests;
