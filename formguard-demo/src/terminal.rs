//! Raw-mode editing of one form with live key input.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute, terminal,
};
use formdom::{Document, Event, Key};
use formguard::{FormValidation, ValidationReport};

struct RawMode {
    stdout: io::Stdout,
}

impl RawMode {
    fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self {
            stdout: io::stdout(),
        })
    }

    /// Replace the current line with `line`.
    fn status(&mut self, line: &str) -> io::Result<()> {
        execute!(
            self.stdout,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine)
        )?;
        write!(self.stdout, "{line}")?;
        self.stdout.flush()
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = writeln!(self.stdout);
    }
}

fn field_line(doc: &Document, field_id: &str) -> String {
    let value = doc.get(field_id).map(|field| field.value()).unwrap_or("");
    let error = doc
        .get(&formguard::presenter::error_element_id(field_id))
        .map(|error| error.text_content())
        .unwrap_or("");
    if error.is_empty() {
        format!("{field_id}: {value}")
    } else {
        format!("{field_id}: {value}  ! {error}")
    }
}

/// Edit the fields of `form_id` key by key until Escape or Ctrl+C.
///
/// Tab and Down move to the next field, BackTab and Up to the previous one.
/// Enter submits the form if it is valid.
pub fn edit_form(
    doc: &mut Document,
    validation: &FormValidation,
    form_id: &str,
) -> io::Result<ValidationReport> {
    let mut report = ValidationReport::new();
    let Some(form) = validation.form(form_id) else {
        println!("no form '{form_id}'");
        return Ok(report);
    };
    let fields = form.field_ids.clone();
    if fields.is_empty() {
        println!("form '{form_id}' has no fields");
        return Ok(report);
    }

    println!("editing '{form_id}': tab/arrows switch fields, enter submits, esc leaves");
    let mut raw = RawMode::new()?;
    let mut focused = 0;
    report.merge(validation.handle_event(
        doc,
        &Event::Focus {
            target: fields[focused].clone(),
        },
    ));
    raw.status(&field_line(doc, &fields[focused]))?;

    loop {
        let CrosstermEvent::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let key = Event::from_crossterm_key(Some(fields[focused].clone()), key_event);
        let mut next = focused;
        let mut note = None;
        for event in formdom::process_events(doc, &[key]) {
            match &event {
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(report),
                Event::Key {
                    key: Key::Char('c'),
                    modifiers,
                    ..
                } if modifiers.ctrl => return Ok(report),
                Event::Key {
                    key: Key::Tab | Key::Down,
                    ..
                } => next = (focused + 1) % fields.len(),
                Event::Key {
                    key: Key::BackTab | Key::Up,
                    ..
                } => next = (focused + fields.len() - 1) % fields.len(),
                Event::Submit { target } => note = super::submit_message(doc, validation, target),
                _ => {}
            }
            report.merge(validation.handle_event(doc, &event));
        }

        if next != focused {
            let blur = Event::Blur {
                target: fields[focused].clone(),
            };
            let focus = Event::Focus {
                target: fields[next].clone(),
            };
            report.merge(validation.handle_events(doc, &[blur, focus]));
            focused = next;
        }

        let line = field_line(doc, &fields[focused]);
        match note {
            Some(note) => raw.status(&format!("{line}  [{note}]"))?,
            None => raw.status(&line)?,
        }
    }
}
