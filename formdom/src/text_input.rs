use crate::document::Document;
use crate::element::Content;
use crate::event::{Event, Key, Modifiers};

/// Apply key events to the text inputs they target.
///
/// Edits that change a value are replaced by [`Event::Input`], Enter by
/// [`Event::Submit`]. Cursor movement is swallowed. Everything else, including
/// keys aimed at disabled or non-input elements, is passed through unchanged.
pub fn process_events(doc: &mut Document, events: &[Event]) -> Vec<Event> {
    let mut output = Vec::new();

    for event in events {
        let Event::Key {
            target: Some(target),
            key,
            modifiers,
        } = event
        else {
            output.push(event.clone());
            continue;
        };

        let Some(element) = doc.get_mut(target) else {
            output.push(event.clone());
            continue;
        };
        if element.disabled {
            output.push(event.clone());
            continue;
        }
        let Content::TextInput { value, cursor, .. } = &mut element.content else {
            output.push(event.clone());
            continue;
        };

        match handle_key(value, cursor, *key, *modifiers) {
            TextEditResult::Changed => {
                log::trace!("input {target} changed to {value:?}");
                output.push(Event::Input {
                    target: target.clone(),
                    value: value.clone(),
                });
            }
            TextEditResult::Submitted => output.push(Event::Submit {
                target: target.clone(),
            }),
            TextEditResult::Handled => {}
            TextEditResult::Ignored => output.push(event.clone()),
        }
    }

    output
}

/// Key events that type `text` into `target`, one character at a time.
pub fn type_text(target: &str, text: &str) -> Vec<Event> {
    text.chars()
        .map(|c| Event::Key {
            target: Some(target.to_string()),
            key: Key::Char(c),
            modifiers: Modifiers::new(),
        })
        .collect()
}

/// Handle a key press for text editing.
fn handle_key(
    value: &mut String,
    cursor: &mut usize,
    key: Key,
    modifiers: Modifiers,
) -> TextEditResult {
    let char_count = value.chars().count();
    *cursor = (*cursor).min(char_count);

    match key {
        Key::Char('\0') => TextEditResult::Ignored,

        Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
            value.insert(char_to_byte_index(value, *cursor), c);
            *cursor += 1;
            TextEditResult::Changed
        }

        Key::Backspace if modifiers.none() => {
            if *cursor == 0 {
                return TextEditResult::Handled;
            }
            let at = char_to_byte_index(value, *cursor - 1);
            value.remove(at);
            *cursor -= 1;
            TextEditResult::Changed
        }

        Key::Delete if modifiers.none() => {
            if *cursor >= char_count {
                return TextEditResult::Handled;
            }
            let at = char_to_byte_index(value, *cursor);
            value.remove(at);
            TextEditResult::Changed
        }

        // Ctrl+U clears the field
        Key::Char('u') if modifiers.ctrl => {
            if value.is_empty() {
                return TextEditResult::Handled;
            }
            value.clear();
            *cursor = 0;
            TextEditResult::Changed
        }

        Key::Left => {
            *cursor = cursor.saturating_sub(1);
            TextEditResult::Handled
        }

        Key::Right => {
            *cursor = (*cursor + 1).min(char_count);
            TextEditResult::Handled
        }

        Key::Home => {
            *cursor = 0;
            TextEditResult::Handled
        }

        Key::End => {
            *cursor = char_count;
            TextEditResult::Handled
        }

        Key::Enter => TextEditResult::Submitted,

        _ => TextEditResult::Ignored,
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
