//! The demo page: a profile popup and a new-place popup.

use formdom::{Document, Element, InputType};

pub const PROFILE_FORM: &str = "edit-profile";
pub const PLACE_FORM: &str = "new-place";

/// Profile data the profile form is pre-filled with when opened.
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub name: String,
    pub about: String,
}

impl Default for UserInfo {
    fn default() -> Self {
        Self {
            name: "Жак-Ив Кусто".to_string(),
            about: "Исследователь океана".to_string(),
        }
    }
}

fn field(id: &str) -> Element {
    Element::input("").id(id).class("popup__input")
}

fn error_for(id: &str) -> Element {
    Element::span("")
        .id(format!("{id}-error"))
        .class("popup__error")
}

fn popup(form: Element) -> Element {
    Element::div().class("popup").child(form)
}

pub fn build() -> Document {
    let profile = Element::form()
        .id(PROFILE_FORM)
        .class("popup__form")
        .child(
            field("profile-name")
                .placeholder("Имя")
                .required(true)
                .min_length(2)
                .max_length(40)
                .data(
                    "error-message",
                    "Имя может содержать только латинские и кириллические буквы, дефисы и пробелы",
                ),
        )
        .child(error_for("profile-name"))
        .child(
            field("profile-about")
                .placeholder("О себе")
                .required(true)
                .min_length(2)
                .max_length(200),
        )
        .child(error_for("profile-about"))
        .child(Element::button("Сохранить").id("profile-save").class("popup__button"));

    let place = Element::form()
        .id(PLACE_FORM)
        .class("popup__form")
        .child(
            field("place-name")
                .placeholder("Название")
                .required(true)
                .min_length(2)
                .max_length(30)
                .data("rule", "name"),
        )
        .child(error_for("place-name"))
        .child(
            field("place-link")
                .placeholder("Ссылка на картинку")
                .required(true)
                .input_type(InputType::Url),
        )
        .child(error_for("place-link"))
        .child(Element::button("Создать").id("place-save").class("popup__button"));

    Document::new(
        Element::div()
            .id("page")
            .child(popup(profile))
            .child(popup(place)),
    )
}
