//! Wiring forms for live validation.
//!
//! [`enable_validation`] binds every form once and returns a [`FormValidation`]
//! that the host feeds events into. [`clear_validation`] and
//! [`reset_validation`] are called when a form is opened, empty or
//! pre-filled.

use std::collections::HashMap;

use formdom::{Document, Event, SelectorError};

use crate::aggregator::{aggregate, apply_button_state, disable_button};
use crate::config::ValidationConfig;
use crate::error::{ConfigurationDefect, ValidationReport};
use crate::evaluator::evaluate;
use crate::field::FieldState;
use crate::presenter::ErrorPresenter;
use crate::verdict::Verdict;

/// The fields and submit control of one form, by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinding {
    pub form_id: String,
    pub field_ids: Vec<String>,
    pub button_id: Option<String>,
}

impl FormBinding {
    /// Collect the fields and submit control of `form_id`.
    ///
    /// Returns `None` only when the form itself is missing or a selector does
    /// not parse. A form without fields or without a button is still bound.
    pub fn collect(
        doc: &Document,
        form_id: &str,
        config: &ValidationConfig,
        report: &mut ValidationReport,
    ) -> Option<Self> {
        if doc.get(form_id).is_none() {
            report.record(ConfigurationDefect::FormNotFound(form_id.to_string()));
            return None;
        }

        let field_ids = report.check(
            doc.query_selector_all_within(form_id, &config.input_selector)
                .map_err(|e| invalid_selector(&config.input_selector, e)),
        )?;
        if field_ids.is_empty() {
            report.record(ConfigurationDefect::FieldsNotFound {
                form_id: form_id.to_string(),
                selector: config.input_selector.clone(),
            });
        }

        let button_id = report.check(
            doc.query_selector_within(form_id, &config.submit_button_selector)
                .map_err(|e| invalid_selector(&config.submit_button_selector, e)),
        )?;
        if button_id.is_none() {
            report.record(ConfigurationDefect::SubmitControlNotFound {
                form_id: form_id.to_string(),
                selector: config.submit_button_selector.clone(),
            });
        }

        Some(Self {
            form_id: form_id.to_string(),
            field_ids,
            button_id,
        })
    }

    /// Evaluate every field without touching the tree.
    ///
    /// A field that passes its rules but still carries a custom validity
    /// message counts as invalid with that message.
    pub fn verdicts(&self, doc: &Document) -> Vec<Verdict> {
        self.field_ids
            .iter()
            .filter_map(|id| doc.get(id))
            .map(|element| {
                let verdict = evaluate(&FieldState::from_element(element));
                if verdict.is_valid() && !element.is_custom_valid() {
                    Verdict::invalid(element.custom_validity.as_str())
                } else {
                    verdict
                }
            })
            .collect()
    }

    pub fn is_valid(&self, doc: &Document) -> bool {
        aggregate(&self.verdicts(doc))
    }
}

/// Validation wired to the forms of one document.
///
/// Holds one listener per field, keyed by field id. Only
/// [`Event::Input`] events reach a listener.
#[derive(Debug, Clone)]
pub struct FormValidation {
    config: ValidationConfig,
    forms: Vec<FormBinding>,
    listeners: HashMap<String, usize>,
    report: ValidationReport,
}

/// Bind every form matching `config.form_selector` and set each submit
/// control to the form's current validity.
pub fn enable_validation(doc: &mut Document, config: &ValidationConfig) -> FormValidation {
    let mut validation = FormValidation {
        config: config.clone(),
        forms: Vec::new(),
        listeners: HashMap::new(),
        report: ValidationReport::new(),
    };
    let report = &mut validation.report;

    let form_ids = report
        .check(
            doc.query_selector_all(&config.form_selector)
                .map_err(|e| invalid_selector(&config.form_selector, e)),
        )
        .unwrap_or_default();
    if form_ids.is_empty() && report.is_clean() {
        report.record(ConfigurationDefect::NoFormsFound(
            config.form_selector.clone(),
        ));
    }

    for form_id in form_ids {
        let Some(binding) = FormBinding::collect(doc, &form_id, config, report) else {
            continue;
        };
        toggle_button_state(doc, &binding, config, report);

        let index = validation.forms.len();
        for field_id in &binding.field_ids {
            if validation.listeners.contains_key(field_id) {
                log::warn!("field '{field_id}' belongs to more than one form, keeping the first");
                continue;
            }
            validation.listeners.insert(field_id.clone(), index);
        }
        log::debug!(
            "validation enabled for form '{}' ({} fields)",
            binding.form_id,
            binding.field_ids.len()
        );
        validation.forms.push(binding);
    }

    validation
}

impl FormValidation {
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn forms(&self) -> &[FormBinding] {
        &self.forms
    }

    /// Defects found while binding forms.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The form a field was wired into.
    pub fn form_of(&self, field_id: &str) -> Option<&FormBinding> {
        self.listeners
            .get(field_id)
            .and_then(|&index| self.forms.get(index))
    }

    pub fn form(&self, form_id: &str) -> Option<&FormBinding> {
        self.forms.iter().find(|form| form.form_id == form_id)
    }

    /// Run the listener for `event`, if it is an input on a wired field.
    ///
    /// Re-checks that field, then recomputes the submit control of its form
    /// only.
    pub fn handle_event(&self, doc: &mut Document, event: &Event) -> ValidationReport {
        let mut report = ValidationReport::new();
        let Event::Input { target, .. } = event else {
            return report;
        };
        let Some(binding) = self.form_of(target) else {
            return report;
        };

        let presenter = ErrorPresenter::new(&self.config);
        check_field(doc, &binding.form_id, target, &presenter, &mut report);
        toggle_button_state(doc, binding, &self.config, &mut report);
        report
    }

    pub fn handle_events(&self, doc: &mut Document, events: &[Event]) -> ValidationReport {
        let mut report = ValidationReport::new();
        for event in events {
            report.merge(self.handle_event(doc, event));
        }
        report
    }
}

/// Hide every error of `form_id` and disable its submit control.
///
/// Used when a form opens empty: it starts untouched and unsubmittable
/// whatever its fields currently hold.
pub fn clear_validation(
    doc: &mut Document,
    form_id: &str,
    config: &ValidationConfig,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    let Some(binding) = FormBinding::collect(doc, form_id, config, &mut report) else {
        return report;
    };

    let presenter = ErrorPresenter::new(config);
    for field_id in &binding.field_ids {
        if let Some(field) = doc.get_mut(field_id) {
            field.set_custom_validity("");
        }
        report.check(presenter.hide(doc, form_id, field_id));
    }

    if let Some(button_id) = &binding.button_id {
        report.check(disable_button(doc, button_id, config));
    }
    log::debug!("validation cleared for form '{form_id}'");
    report
}

/// Re-check every field of `form_id` and set its submit control from the
/// result.
///
/// Used after fields were filled programmatically, so the button reflects the
/// pre-filled values instead of being forced off.
pub fn reset_validation(
    doc: &mut Document,
    form_id: &str,
    config: &ValidationConfig,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    let Some(binding) = FormBinding::collect(doc, form_id, config, &mut report) else {
        return report;
    };

    let presenter = ErrorPresenter::new(config);
    let mut verdicts = Vec::with_capacity(binding.field_ids.len());
    for field_id in &binding.field_ids {
        if let Some(field) = doc.get_mut(field_id) {
            field.set_custom_validity("");
        }
        if let Some(verdict) = check_field(doc, form_id, field_id, &presenter, &mut report) {
            verdicts.push(verdict);
        }
    }

    if let Some(button_id) = &binding.button_id {
        report.check(apply_button_state(
            doc,
            button_id,
            aggregate(&verdicts),
            config,
        ));
    }
    log::debug!("validation reset for form '{form_id}'");
    report
}

/// Evaluate one field, record the verdict as its custom validity and
/// present it.
fn check_field(
    doc: &mut Document,
    form_id: &str,
    field_id: &str,
    presenter: &ErrorPresenter<'_>,
    report: &mut ValidationReport,
) -> Option<Verdict> {
    let Some(field) = doc.get_mut(field_id) else {
        report.record(ConfigurationDefect::ElementNotFound(field_id.to_string()));
        return None;
    };
    let verdict = evaluate(&FieldState::from_element(field));
    field.set_custom_validity(verdict.message());
    log::debug!(
        "field '{field_id}' checked: valid={} message={:?}",
        verdict.is_valid(),
        verdict.message()
    );

    report.check(presenter.present(doc, form_id, field_id, &verdict));
    Some(verdict)
}

fn toggle_button_state(
    doc: &mut Document,
    binding: &FormBinding,
    config: &ValidationConfig,
    report: &mut ValidationReport,
) {
    if let Some(button_id) = &binding.button_id {
        let form_valid = binding.is_valid(doc);
        report.check(apply_button_state(doc, button_id, form_valid, config));
    }
}

fn invalid_selector(selector: &str, source: SelectorError) -> ConfigurationDefect {
    ConfigurationDefect::InvalidSelector {
        selector: selector.to_string(),
        source,
    }
}
