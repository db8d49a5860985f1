//! Per-field rule evaluation.
//!
//! Checks run in a fixed order and the first failure wins:
//! required, then the field's [`RuleKind`], then the length bounds.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::field::{FieldState, RuleKind};
use crate::verdict::Verdict;

pub const REQUIRED_MESSAGE: &str = "Заполните это поле.";

pub const NAME_MESSAGE: &str =
    "Разрешены только латинские, кириллические буквы, знаки дефиса и пробелы.";

pub const URL_MESSAGE: &str = "Введите корректный URL.";

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s-]+$").expect("Invalid name pattern"));

/// Evaluate one field.
pub fn evaluate(field: &FieldState) -> Verdict {
    let value = field.value.trim();

    if value.is_empty() {
        return if field.is_required {
            Verdict::invalid(REQUIRED_MESSAGE)
        } else {
            Verdict::valid()
        };
    }

    match field.rule_kind {
        RuleKind::NameLike if !is_name_like(value) => {
            let message = field.custom_message.as_deref().unwrap_or(NAME_MESSAGE);
            return Verdict::invalid(message);
        }
        RuleKind::Url if !is_absolute_url(value) => return Verdict::invalid(URL_MESSAGE),
        _ => {}
    }

    let len = value.chars().count();
    if let Some(min) = field.min_length.filter(|&min| len < min) {
        return Verdict::invalid(format!(
            "Минимально допустимое количество символов: {min}. Длина текста сейчас: {len}."
        ));
    }
    if let Some(max) = field.max_length.filter(|&max| len > max) {
        return Verdict::invalid(format!(
            "Максимально допустимое количество символов: {max}. Длина текста сейчас: {len}."
        ));
    }

    Verdict::valid()
}

/// Whole-string match of Latin/Cyrillic letters, whitespace and hyphens.
pub fn is_name_like(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Schemes the URL standard treats as special. Their authority is written
/// after `//`.
const SPECIAL_SCHEMES: [&str; 6] = ["ftp", "file", "http", "https", "ws", "wss"];

/// Whether `value` parses as an absolute URL.
///
/// Any scheme is accepted (`mailto:`, `urn:`, `data:`, ...). A special scheme
/// must be followed by `//`: WHATWG parsing repairs `ftp:/broken` into
/// `ftp://broken/`, but that input is rejected.
pub fn is_absolute_url(value: &str) -> bool {
    let value = value.trim();
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !SPECIAL_SCHEMES.contains(&url.scheme()) {
        return true;
    }

    value
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"))
}
