//! Field verdicts.

/// Fallback message for an invalid verdict built without one.
pub const INVALID_VALUE_MESSAGE: &str = "Введите допустимое значение.";

/// Outcome of evaluating one field.
///
/// The message is empty exactly when the verdict is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    valid: bool,
    message: String,
}

impl Verdict {
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// An invalid verdict. An empty message is replaced with
    /// [`INVALID_VALUE_MESSAGE`].
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            INVALID_VALUE_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// The error text, `""` when valid.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::valid()
    }
}
