mod page;
mod paths;
mod terminal;

use std::fs::{self, File};
use std::io::{self, BufRead, Write};

use formdom::{Document, Event, Key, Modifiers};
use formguard::{
    clear_validation, enable_validation, reset_validation, FormValidation, ValidationConfig,
    ValidationReport,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use page::{UserInfo, PLACE_FORM, PROFILE_FORM};

const HELP: &str = "\
commands:
  open profile        open the profile form pre-filled with the current user
  open place          open the new-place form empty
  type <field> <text> type text into a field key by key
  set <field> <text>  replace a field's value
  key <field> <key>   press backspace, delete, left, right, home, end or enter
  edit profile|place  edit a form with live key input
  show                print both forms
  help                print this message
  quit                exit";

fn init_logging() {
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Cannot create log directory {}: {e}", dir.display());
            return;
        }
    }
    match File::create(&path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
        }
        Err(e) => eprintln!("Cannot create log file {}: {e}", path.display()),
    }
}

fn load_config() -> ValidationConfig {
    let Some(path) = paths::config_file().filter(|path| path.exists()) else {
        return ValidationConfig::default();
    };
    let loaded = fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| ValidationConfig::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => {
            log::info!("loaded validation config from {}", path.display());
            config
        }
        Err(e) => {
            eprintln!("Ignoring {}: {e}", path.display());
            ValidationConfig::default()
        }
    }
}

fn parse_key(name: &str) -> Option<Key> {
    match name.to_ascii_lowercase().as_str() {
        "backspace" => Some(Key::Backspace),
        "delete" => Some(Key::Delete),
        "left" => Some(Key::Left),
        "right" => Some(Key::Right),
        "home" => Some(Key::Home),
        "end" => Some(Key::End),
        "enter" => Some(Key::Enter),
        _ => None,
    }
}

/// Feed key events one at a time so every keystroke is validated against the
/// value it produced.
fn send_keys(
    doc: &mut Document,
    validation: &FormValidation,
    keys: Vec<Event>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for key in keys {
        for event in formdom::process_events(doc, &[key]) {
            if let Event::Submit { target } = &event {
                if let Some(message) = submit_message(doc, validation, target) {
                    println!("{message}");
                }
            }
            report.merge(validation.handle_event(doc, &event));
        }
    }
    report
}

fn submit_message(doc: &Document, validation: &FormValidation, field_id: &str) -> Option<String> {
    let form = validation.form_of(field_id)?;
    if form.is_valid(doc) {
        Some(format!("form '{}' submitted", form.form_id))
    } else {
        Some(format!("form '{}' is invalid, not submitted", form.form_id))
    }
}

fn open_profile(
    doc: &mut Document,
    config: &ValidationConfig,
    user: &UserInfo,
) -> ValidationReport {
    for (id, value) in [("profile-name", &user.name), ("profile-about", &user.about)] {
        if let Some(field) = doc.get_mut(id) {
            field.set_value(value.as_str());
        }
    }
    reset_validation(doc, PROFILE_FORM, config)
}

fn open_place(doc: &mut Document, config: &ValidationConfig) -> ValidationReport {
    for id in ["place-name", "place-link"] {
        if let Some(field) = doc.get_mut(id) {
            field.set_value("");
        }
    }
    clear_validation(doc, PLACE_FORM, config)
}

fn print_forms(doc: &Document, validation: &FormValidation) {
    for form in validation.forms() {
        let button = form.button_id.as_deref().and_then(|id| doc.get(id));
        let state = match button {
            Some(button) if button.disabled => "disabled",
            Some(_) => "enabled",
            None => "missing",
        };
        println!("[{}] submit {state}", form.form_id);

        for field_id in &form.field_ids {
            let Some(field) = doc.get(field_id) else {
                continue;
            };
            let error = doc
                .get(&formguard::presenter::error_element_id(field_id))
                .map(|error| error.text_content())
                .unwrap_or("");
            if error.is_empty() {
                println!("  {field_id} = {:?}", field.value());
            } else {
                println!("  {field_id} = {:?}  ! {error}", field.value());
            }
        }
    }
}

fn print_report(report: &ValidationReport) {
    for defect in report.defects() {
        println!("warning: {defect}");
    }
}

fn main() {
    init_logging();

    let config = load_config();
    let user = UserInfo::default();
    let mut doc = page::build();
    let validation = enable_validation(&mut doc, &config);
    print_report(validation.report());

    println!("{HELP}");
    print_forms(&doc, &validation);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let (target, text) = rest.split_once(' ').unwrap_or((rest, ""));

        let report = match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                continue;
            }
            "show" => ValidationReport::new(),
            "open" if target == "profile" => open_profile(&mut doc, &config, &user),
            "open" if target == "place" => open_place(&mut doc, &config),
            "edit" => {
                let form_id = match target {
                    "profile" => PROFILE_FORM,
                    "place" => PLACE_FORM,
                    other => other,
                };
                match terminal::edit_form(&mut doc, &validation, form_id) {
                    Ok(report) => report,
                    Err(e) => {
                        eprintln!("Terminal error: {e}");
                        continue;
                    }
                }
            }
            "type" => send_keys(&mut doc, &validation, formdom::type_text(target, text)),
            "key" => match parse_key(text) {
                Some(key) => {
                    let event = Event::Key {
                        target: Some(target.to_string()),
                        key,
                        modifiers: Modifiers::new(),
                    };
                    send_keys(&mut doc, &validation, vec![event])
                }
                None => {
                    println!("unknown key '{text}'");
                    continue;
                }
            },
            "set" => {
                let updated = doc
                    .get_mut(target)
                    .is_some_and(|field| field.set_value(text));
                if !updated {
                    println!("no text field '{target}'");
                    continue;
                }
                let event = Event::Input {
                    target: target.to_string(),
                    value: text.to_string(),
                };
                validation.handle_event(&mut doc, &event)
            }
            _ => {
                println!("unknown command, try 'help'");
                continue;
            }
        };

        print_report(&report);
        print_forms(&doc, &validation);
    }
}
