//! Validation configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Selectors and class names the engine works with.
///
/// Built once at startup and only read afterwards. Missing keys in a JSON
/// config fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationConfig {
    /// Selects every form to validate.
    pub form_selector: String,

    /// Selects the fields inside a form.
    pub input_selector: String,

    /// Selects the submit control inside a form.
    pub submit_button_selector: String,

    /// Added to the submit control while the form is invalid.
    pub inactive_button_class: String,

    /// Added to a field's error element while it shows a message.
    pub error_class: String,

    /// Added to the field itself while it is invalid.
    pub input_error_class: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            form_selector: ".popup__form".to_string(),
            input_selector: ".popup__input".to_string(),
            submit_button_selector: ".popup__button".to_string(),
            inactive_button_class: "popup__button_disabled".to_string(),
            error_class: "popup__error_visible".to_string(),
            input_error_class: "popup__input_type_error".to_string(),
        }
    }
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON, e.g. `{"formSelector": ".form"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reject empty selectors and class names.
    pub fn check(&self) -> Result<(), ConfigError> {
        let entries = [
            ("formSelector", &self.form_selector),
            ("inputSelector", &self.input_selector),
            ("submitButtonSelector", &self.submit_button_selector),
            ("inactiveButtonClass", &self.inactive_button_class),
            ("errorClass", &self.error_class),
            ("inputErrorClass", &self.input_error_class),
        ];
        match entries.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((key, _)) => Err(ConfigError::Empty(*key)),
            None => Ok(()),
        }
    }

    pub fn form_selector(mut self, selector: impl Into<String>) -> Self {
        self.form_selector = selector.into();
        self
    }

    pub fn input_selector(mut self, selector: impl Into<String>) -> Self {
        self.input_selector = selector.into();
        self
    }

    pub fn submit_button_selector(mut self, selector: impl Into<String>) -> Self {
        self.submit_button_selector = selector.into();
        self
    }

    pub fn inactive_button_class(mut self, class: impl Into<String>) -> Self {
        self.inactive_button_class = class.into();
        self
    }

    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    pub fn input_error_class(mut self, class: impl Into<String>) -> Self {
        self.input_error_class = class.into();
        self
    }
}
