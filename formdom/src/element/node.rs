use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element kind, matched by tag selectors (`form`, `input`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Div,
    Form,
    Input,
    Button,
    Span,
    Label,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Form => "form",
            Tag::Input => "input",
            Tag::Button => "button",
            Tag::Span => "span",
            Tag::Label => "label",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "div" => Some(Tag::Div),
            "form" => Some(Tag::Form),
            "input" => Some(Tag::Input),
            "button" => Some(Tag::Button),
            "span" => Some(Tag::Span),
            "label" => Some(Tag::Label),
            _ => None,
        }
    }
}

/// The `type` attribute of an input element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputType {
    #[default]
    Text,
    Url,
    Email,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Url => "url",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Input attributes
    pub input_type: InputType,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,

    // State
    /// Disabled elements don't receive input.
    pub disabled: bool,
    /// Message set through [`Element::set_custom_validity`]. Empty means valid.
    pub custom_validity: String,

    /// Dataset entries (`data-*` attributes without the prefix).
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            classes: Vec::new(),
            content: Content::None,
            input_type: InputType::Text,
            required: false,
            min_length: None,
            max_length: None,
            disabled: false,
            custom_validity: String::new(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn div() -> Self {
        Self {
            id: generate_id("div"),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            tag: Tag::Form,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            id: generate_id("input"),
            tag: Tag::Input,
            content: Content::TextInput {
                value,
                cursor,
                placeholder: None,
            },
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            tag: Tag::Button,
            content: Content::Text(label.into()),
            ..Default::default()
        }
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self {
            id: generate_id("span"),
            tag: Tag::Span,
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    // Input attributes
    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Class list

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Adding a class that is already present does nothing.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // Text and values

    /// Text content of a text element. Inputs and containers have none.
    pub fn text_content(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            _ => "",
        }
    }

    /// Replace the text content. Children, if any, are dropped.
    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Current value of a text input, or `""` for any other element.
    pub fn value(&self) -> &str {
        match &self.content {
            Content::TextInput { value, .. } => value,
            _ => "",
        }
    }

    /// Replace the value of a text input and move the cursor to its end.
    /// Returns false if this element is not a text input.
    pub fn set_value(&mut self, new_value: impl Into<String>) -> bool {
        match &mut self.content {
            Content::TextInput { value, cursor, .. } => {
                *value = new_value.into();
                *cursor = value.chars().count();
                true
            }
            _ => false,
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self.content, Content::TextInput { .. })
    }

    // Validity

    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        self.custom_validity = message.into();
    }

    /// Whether no custom validity message is set.
    pub fn is_custom_valid(&self) -> bool {
        self.custom_validity.is_empty()
    }
}
