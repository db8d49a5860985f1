//! Error and diagnostic types.

use formdom::SelectorError;
use thiserror::Error;

/// A mismatch between the configuration and the element tree.
///
/// Defects never abort an operation. The affected step becomes a no-op, the
/// defect is logged and collected into a [`ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationDefect {
    #[error("invalid selector '{selector}': {source}")]
    InvalidSelector {
        selector: String,
        source: SelectorError,
    },

    #[error("no form matches '{0}'")]
    NoFormsFound(String),

    #[error("form '{0}' not found")]
    FormNotFound(String),

    #[error("form '{form_id}' has no fields matching '{selector}'")]
    FieldsNotFound { form_id: String, selector: String },

    #[error("form '{form_id}' has no submit control matching '{selector}'")]
    SubmitControlNotFound { form_id: String, selector: String },

    #[error("field '{field_id}' has no error element '{error_id}'")]
    ErrorElementNotFound { field_id: String, error_id: String },

    #[error("element '{0}' not found")]
    ElementNotFound(String),
}

/// Errors from loading a [`ValidationConfig`](crate::ValidationConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config option '{0}' must not be empty")]
    Empty(&'static str),
}

/// Defects collected while running one validation operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    defects: Vec<ConfigurationDefect>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn defects(&self) -> &[ConfigurationDefect] {
        &self.defects
    }

    /// Log and keep a defect.
    pub fn record(&mut self, defect: ConfigurationDefect) {
        log::warn!("validation defect: {defect}");
        self.defects.push(defect);
    }

    /// Record the error of `result`, if any, and return its value.
    pub fn check<T>(&mut self, result: Result<T, ConfigurationDefect>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(defect) => {
                self.record(defect);
                None
            }
        }
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.defects.extend(other.defects);
    }
}
