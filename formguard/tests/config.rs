use formguard::{ConfigError, ValidationConfig};

#[test]
fn test_default_config() {
    let config = ValidationConfig::default();
    assert_eq!(config.form_selector, ".popup__form");
    assert_eq!(config.input_selector, ".popup__input");
    assert_eq!(config.submit_button_selector, ".popup__button");
    assert_eq!(config.inactive_button_class, "popup__button_disabled");
    assert_eq!(config.error_class, "popup__error_visible");
    assert_eq!(config.input_error_class, "popup__input_type_error");
    assert!(config.check().is_ok());
}

#[test]
fn test_builder() {
    let config = ValidationConfig::new()
        .form_selector("form")
        .input_selector("input")
        .submit_button_selector("button")
        .inactive_button_class("off")
        .error_class("shown")
        .input_error_class("bad");
    assert_eq!(config.form_selector, "form");
    assert_eq!(config.input_error_class, "bad");
}

#[test]
fn test_from_json_full() {
    let json = r#"{
        "formSelector": ".form",
        "inputSelector": ".form__input",
        "submitButtonSelector": ".form__submit",
        "inactiveButtonClass": "form__submit_inactive",
        "errorClass": "form__input-error_active",
        "inputErrorClass": "form__input_type_error"
    }"#;
    let config = ValidationConfig::from_json(json).unwrap();
    assert_eq!(config.form_selector, ".form");
    assert_eq!(config.submit_button_selector, ".form__submit");
    assert_eq!(config.error_class, "form__input-error_active");
}

#[test]
fn test_from_json_partial_uses_defaults() {
    let config = ValidationConfig::from_json(r#"{"errorClass": "visible"}"#).unwrap();
    assert_eq!(config.error_class, "visible");
    assert_eq!(config.form_selector, ".popup__form");
}

#[test]
fn test_from_json_rejects_unknown_keys() {
    let err = ValidationConfig::from_json(r#"{"formSelektor": ".form"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_from_json_rejects_empty_values() {
    let err = ValidationConfig::from_json(r#"{"inputSelector": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty("inputSelector")));
    assert_eq!(err.to_string(), "config option 'inputSelector' must not be empty");
}
