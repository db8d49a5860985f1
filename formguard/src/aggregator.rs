//! Form-level validity and the submit control.

use formdom::Document;

use crate::config::ValidationConfig;
use crate::error::ConfigurationDefect;
use crate::verdict::Verdict;

/// True iff every verdict is valid. An empty form is valid.
pub fn aggregate(verdicts: &[Verdict]) -> bool {
    verdicts.iter().all(Verdict::is_valid)
}

/// Enable the submit control when the form is valid, disable it otherwise.
pub fn apply_button_state(
    doc: &mut Document,
    button_id: &str,
    form_valid: bool,
    config: &ValidationConfig,
) -> Result<(), ConfigurationDefect> {
    if form_valid {
        enable_button(doc, button_id, config)
    } else {
        disable_button(doc, button_id, config)
    }
}

pub fn disable_button(
    doc: &mut Document,
    button_id: &str,
    config: &ValidationConfig,
) -> Result<(), ConfigurationDefect> {
    let button = doc
        .get_mut(button_id)
        .ok_or_else(|| ConfigurationDefect::ElementNotFound(button_id.to_string()))?;
    button.add_class(config.inactive_button_class.as_str());
    button.disabled = true;
    Ok(())
}

pub fn enable_button(
    doc: &mut Document,
    button_id: &str,
    config: &ValidationConfig,
) -> Result<(), ConfigurationDefect> {
    let button = doc
        .get_mut(button_id)
        .ok_or_else(|| ConfigurationDefect::ElementNotFound(button_id.to_string()))?;
    button.remove_class(&config.inactive_button_class);
    button.disabled = false;
    Ok(())
}
