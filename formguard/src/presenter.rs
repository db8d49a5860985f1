//! Showing and hiding field errors.

use formdom::Document;

use crate::config::ValidationConfig;
use crate::error::ConfigurationDefect;
use crate::verdict::Verdict;

/// Id of the element that displays errors for `field_id`.
pub fn error_element_id(field_id: &str) -> String {
    format!("{field_id}-error")
}

/// Reflects verdicts onto fields and their error elements.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPresenter<'a> {
    config: &'a ValidationConfig,
}

impl<'a> ErrorPresenter<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self { config }
    }

    /// Show or hide the error of `field_id`, a field of `form_id`.
    ///
    /// The error element is looked up inside the form. If it is missing the
    /// field class is still updated and the defect is returned.
    pub fn present(
        &self,
        doc: &mut Document,
        form_id: &str,
        field_id: &str,
        verdict: &Verdict,
    ) -> Result<(), ConfigurationDefect> {
        let field = doc
            .get_mut(field_id)
            .ok_or_else(|| ConfigurationDefect::ElementNotFound(field_id.to_string()))?;
        field.toggle_class(&self.config.input_error_class, verdict.is_invalid());

        let error_id = error_element_id(field_id);
        let Some(error) = doc.get_within_mut(form_id, &error_id) else {
            return Err(ConfigurationDefect::ErrorElementNotFound {
                field_id: field_id.to_string(),
                error_id,
            });
        };
        error.set_text_content(verdict.message());
        error.toggle_class(&self.config.error_class, verdict.is_invalid());

        Ok(())
    }

    /// Present a synthetic valid verdict.
    pub fn hide(
        &self,
        doc: &mut Document,
        form_id: &str,
        field_id: &str,
    ) -> Result<(), ConfigurationDefect> {
        self.present(doc, form_id, field_id, &Verdict::valid())
    }
}
