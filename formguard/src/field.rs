//! Field metadata as seen by the evaluator.

use formdom::{Element, InputType};

/// Dataset key holding a field's own message for the name rule.
pub const ERROR_MESSAGE_KEY: &str = "error-message";

/// Dataset key naming a rule explicitly (`data-rule="name"`).
pub const RULE_KEY: &str = "rule";

/// Custom validation applied on top of the required check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleKind {
    /// Accept anything.
    #[default]
    None,
    /// Latin or Cyrillic letters, whitespace and hyphens only.
    NameLike,
    /// A syntactically valid absolute URL.
    Url,
}

/// Snapshot of one field, derived from its element on every evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_required: bool,
    pub rule_kind: RuleKind,
    pub custom_message: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl FieldState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Read value and metadata from an input element.
    ///
    /// `type="url"` selects [`RuleKind::Url`]. A non-blank
    /// `data-error-message` or `data-rule="name"` selects
    /// [`RuleKind::NameLike`]. A blank `data-error-message` is ignored.
    pub fn from_element(element: &Element) -> Self {
        let custom_message = element
            .get_data(ERROR_MESSAGE_KEY)
            .filter(|message| !message.trim().is_empty())
            .cloned();

        let rule_kind = if element.input_type == InputType::Url {
            RuleKind::Url
        } else if custom_message.is_some()
            || element.get_data(RULE_KEY).is_some_and(|rule| rule == "name")
        {
            RuleKind::NameLike
        } else {
            RuleKind::None
        };

        Self {
            value: element.value().to_string(),
            is_required: element.required,
            rule_kind,
            custom_message,
            min_length: element.min_length,
            max_length: element.max_length,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.is_required = required;
        self
    }

    pub fn rule(mut self, rule_kind: RuleKind) -> Self {
        self.rule_kind = rule_kind;
        self
    }

    pub fn custom_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    pub fn length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }
}
