//! A small CSS selector subset for querying the element tree.
//!
//! Supported: tag names, `*`, `#id`, `.class`, `[attr]`, `[attr=value]`,
//! descendant combinators (whitespace) and selector lists (`,`).

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use crate::element::{Element, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character '{ch}' in '{compound}'")]
    UnexpectedChar { compound: String, ch: char },

    #[error("unknown tag '{0}'")]
    UnknownTag(String),

    #[error("unterminated attribute selector in '{0}'")]
    UnterminatedAttribute(String),
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Complex>,
}

/// Compounds joined by descendant combinators. The last one is the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<Tag>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatch {
    name: String,
    value: Option<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let mut alternatives = Vec::new();

        for part in split_outside_brackets(input, |c| c == ',') {
            let mut compounds = Vec::new();
            for word in split_outside_brackets(part, char::is_whitespace) {
                if word.is_empty() {
                    continue;
                }
                compounds.push(parse_compound(input, word)?);
            }
            if compounds.is_empty() {
                return Err(SelectorError::Empty);
            }
            alternatives.push(Complex { compounds });
        }

        Ok(Self { alternatives })
    }

    /// Check whether `element` matches. `ancestors` runs from the root down to
    /// the element's parent.
    pub fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        self.alternatives
            .iter()
            .any(|complex| complex.matches(element, ancestors))
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Complex {
    fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some((subject, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(element) {
            return false;
        }

        // Greedy nearest-ancestor matching is exact for descendant-only chains.
        let mut remaining = ancestors.iter().rev();
        'compounds: for compound in rest.iter().rev() {
            for ancestor in remaining.by_ref() {
                if compound.matches(ancestor) {
                    continue 'compounds;
                }
            }
            return false;
        }
        true
    }
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if self.tag.is_some_and(|tag| tag != element.tag) {
            return false;
        }
        if self.id.as_ref().is_some_and(|id| *id != element.id) {
            return false;
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attributes.iter().all(|attr| {
            match (attribute(element, &attr.name), &attr.value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == *expected,
                (None, _) => false,
            }
        })
    }
}

/// Read an attribute the way a selector sees it.
fn attribute(element: &Element, name: &str) -> Option<String> {
    if let Some(key) = name.strip_prefix("data-") {
        return element.get_data(key).cloned();
    }
    match name {
        "id" => Some(element.id.clone()),
        "type" if element.tag == Tag::Input => Some(element.input_type.as_str().to_string()),
        "required" => element.required.then(String::new),
        "disabled" => element.disabled.then(String::new),
        "minlength" => element.min_length.map(|n| n.to_string()),
        "maxlength" => element.max_length.map(|n| n.to_string()),
        _ => None,
    }
}

/// Split `input` at characters matching `sep` outside `[...]` and quoted
/// attribute values. Empty pieces are kept.
fn split_outside_brackets(input: &str, sep: impl Fn(char) -> bool) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_brackets = false;
    let mut quote: Option<char> = None;

    for (i, c) in input.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if in_brackets && (c == '"' || c == '\'') => quote = Some(c),
            None if c == '[' => in_brackets = true,
            None if c == ']' => in_brackets = false,
            None if !in_brackets && sep(c) => {
                pieces.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            None => {}
        }
    }
    pieces.push(&input[start..]);
    pieces
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut ident = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    ident
}

fn parse_compound(selector: &str, word: &str) -> Result<Compound, SelectorError> {
    let unexpected = |ch: char| SelectorError::UnexpectedChar {
        compound: word.to_string(),
        ch,
    };

    let mut compound = Compound::default();
    let mut chars = word.char_indices().peekable();

    match chars.peek() {
        Some(&(_, '*')) => {
            chars.next();
        }
        Some(&(_, c)) if is_ident_char(c) => {
            let name = take_ident(&mut chars);
            let tag = Tag::parse(&name).ok_or(SelectorError::UnknownTag(name))?;
            compound.tag = Some(tag);
        }
        _ => {}
    }

    while let Some((_, c)) = chars.next() {
        match c {
            '#' | '.' => {
                let ident = take_ident(&mut chars);
                if ident.is_empty() {
                    return Err(unexpected(c));
                }
                if c == '#' {
                    compound.id = Some(ident);
                } else {
                    compound.classes.push(ident);
                }
            }
            '[' => compound.attributes.push(parse_attribute(selector, word, &mut chars)?),
            other => return Err(unexpected(other)),
        }
    }

    Ok(compound)
}

fn parse_attribute(
    selector: &str,
    word: &str,
    chars: &mut Peekable<CharIndices<'_>>,
) -> Result<AttributeMatch, SelectorError> {
    let name = take_ident(chars);
    let unterminated = || SelectorError::UnterminatedAttribute(selector.to_string());

    match chars.next() {
        Some((_, ']')) if !name.is_empty() => Ok(AttributeMatch { name, value: None }),
        Some((_, '=')) if !name.is_empty() => {
            let quote = match chars.peek() {
                Some(&(_, q @ ('"' | '\''))) => {
                    chars.next();
                    Some(q)
                }
                _ => None,
            };
            let mut value = String::new();
            loop {
                match (chars.next(), quote) {
                    (Some((_, c)), Some(q)) if c == q => break,
                    (Some((_, ']')), None) => {
                        return Ok(AttributeMatch {
                            name,
                            value: Some(value),
                        });
                    }
                    (Some((_, c)), _) => value.push(c),
                    (None, _) => return Err(unterminated()),
                }
            }
            match chars.next() {
                Some((_, ']')) => Ok(AttributeMatch {
                    name,
                    value: Some(value),
                }),
                _ => Err(unterminated()),
            }
        }
        Some((_, ch)) => Err(SelectorError::UnexpectedChar {
            compound: word.to_string(),
            ch,
        }),
        None => Err(unterminated()),
    }
}
