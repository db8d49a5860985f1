//! Live form validation for `formdom` documents.
//!
//! Each field is evaluated against its rules, errors are shown next to
//! invalid fields, and a form's submit control is enabled only while every
//! field is valid.
//!
//! # Example
//!
//! ```
//! use formdom::{Document, Element, Event};
//! use formguard::{enable_validation, ValidationConfig};
//!
//! let mut doc = Document::new(
//!     Element::div().child(
//!         Element::form()
//!             .id("profile")
//!             .class("popup__form")
//!             .child(Element::input("").id("name").class("popup__input").required(true))
//!             .child(Element::span("").id("name-error"))
//!             .child(Element::button("Save").id("save").class("popup__button")),
//!     ),
//! );
//!
//! let config = ValidationConfig::default();
//! let validation = enable_validation(&mut doc, &config);
//! assert!(doc.get("save").unwrap().disabled);
//!
//! doc.get_mut("name").unwrap().set_value("Жак-Ив Кусто");
//! validation.handle_event(&mut doc, &Event::Input {
//!     target: "name".into(),
//!     value: "Жак-Ив Кусто".into(),
//! });
//! assert!(!doc.get("save").unwrap().disabled);
//! ```

pub mod aggregator;
pub mod config;
pub mod controller;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod presenter;
pub mod verdict;

pub use aggregator::{aggregate, apply_button_state};
pub use config::ValidationConfig;
pub use controller::{
    clear_validation, enable_validation, reset_validation, FormBinding, FormValidation,
};
pub use error::{ConfigError, ConfigurationDefect, ValidationReport};
pub use evaluator::evaluate;
pub use field::{FieldState, RuleKind};
pub use presenter::ErrorPresenter;
pub use verdict::Verdict;
