use formdom::{Document, Element, InputType, Selector, SelectorError};

fn sample() -> Document {
    Document::new(
        Element::div()
            .id("page")
            .child(
                Element::form()
                    .id("profile")
                    .class("popup__form")
                    .child(Element::input("Жак").id("name").class("popup__input").required(true))
                    .child(Element::span("").id("name-error").class("popup__error"))
                    .child(
                        Element::input("")
                            .id("about")
                            .class("popup__input")
                            .data("rule", "name"),
                    )
                    .child(Element::button("Save").id("save").class("popup__button")),
            )
            .child(
                Element::form()
                    .id("place")
                    .class("popup__form")
                    .class("popup__form_type_place")
                    .child(
                        Element::div().id("row").child(
                            Element::input("")
                                .id("link")
                                .class("popup__input")
                                .input_type(InputType::Url),
                        ),
                    )
                    .child(Element::button("Create").id("create").class("popup__button")),
            ),
    )
}

// ============================================================================
// Selector parsing
// ============================================================================

#[test]
fn test_parse_errors() {
    assert_eq!(Selector::parse(""), Err(SelectorError::Empty));
    assert_eq!(Selector::parse(".a,"), Err(SelectorError::Empty));
    assert_eq!(
        Selector::parse("table"),
        Err(SelectorError::UnknownTag("table".into()))
    );
    assert!(matches!(
        Selector::parse(".a > .b"),
        Err(SelectorError::UnexpectedChar { ch: '>', .. })
    ));
    assert!(matches!(
        Selector::parse("."),
        Err(SelectorError::UnexpectedChar { ch: '.', .. })
    ));
    assert!(matches!(
        Selector::parse("[data-rule"),
        Err(SelectorError::UnterminatedAttribute(_))
    ));
}

#[test]
fn test_parse_valid_forms() {
    for selector in [
        "*",
        "form",
        "#profile",
        ".popup__form.popup__form_type_place",
        "input[type=url]",
        "input[data-rule=\"name\"]",
        "[required]",
        "form .popup__input, button",
    ] {
        assert!(selector.parse::<Selector>().is_ok(), "{selector}");
    }
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_query_by_class_in_document_order() {
    let doc = sample();
    assert_eq!(
        doc.query_selector_all(".popup__input").unwrap(),
        vec!["name", "about", "link"]
    );
    assert_eq!(
        doc.query_selector_all(".popup__form").unwrap(),
        vec!["profile", "place"]
    );
}

#[test]
fn test_query_compound_and_tag() {
    let doc = sample();
    assert_eq!(
        doc.query_selector_all("form.popup__form_type_place").unwrap(),
        vec!["place"]
    );
    assert_eq!(doc.query_selector_all("button").unwrap(), vec!["save", "create"]);
    assert_eq!(doc.query_selector("#link").unwrap().as_deref(), Some("link"));
    assert_eq!(doc.query_selector("#missing").unwrap(), None);
}

#[test]
fn test_query_attributes() {
    let doc = sample();
    assert_eq!(doc.query_selector_all("[type=url]").unwrap(), vec!["link"]);
    assert_eq!(doc.query_selector_all("input[type='text']").unwrap(), vec!["name", "about"]);
    assert_eq!(doc.query_selector_all("[required]").unwrap(), vec!["name"]);
    assert_eq!(doc.query_selector_all("[data-rule=name]").unwrap(), vec!["about"]);
}

#[test]
fn test_query_descendant_and_list() {
    let doc = sample();
    assert_eq!(doc.query_selector_all("#place input").unwrap(), vec!["link"]);
    assert_eq!(doc.query_selector_all("div form div input").unwrap(), vec!["link"]);
    assert!(doc.query_selector_all("#profile #row").unwrap().is_empty());
    assert_eq!(
        doc.query_selector_all("#save, #link").unwrap(),
        vec!["save", "link"]
    );
}

#[test]
fn test_query_within_scope() {
    let doc = sample();
    assert_eq!(
        doc.query_selector_all_within("profile", ".popup__input").unwrap(),
        vec!["name", "about"]
    );
    assert_eq!(
        doc.query_selector_within("place", ".popup__button").unwrap().as_deref(),
        Some("create")
    );
    // The scope itself is not part of the result, but it still counts as an ancestor.
    assert!(doc.query_selector_all_within("place", ".popup__form").unwrap().is_empty());
    assert_eq!(
        doc.query_selector_all_within("place", ".popup__form input").unwrap(),
        vec!["link"]
    );
    assert!(doc.query_selector_all_within("nope", "input").unwrap().is_empty());
}

#[test]
fn test_query_quoted_attribute_values() {
    let doc = Document::new(
        Element::form()
            .id("form")
            .child(Element::input("").id("a").data("hint", "a b"))
            .child(Element::input("").id("b").data("hint", "x,y"))
            .child(Element::input("").id("c").data("hint", "a")),
    );

    assert_eq!(doc.query_selector_all(r#"[data-hint="a b"]"#).unwrap(), vec!["a"]);
    assert_eq!(doc.query_selector_all("form [data-hint='a b']").unwrap(), vec!["a"]);
    assert_eq!(
        doc.query_selector_all(r#"[data-hint="x,y"], #c"#).unwrap(),
        vec!["b", "c"]
    );
    assert!(matches!(
        Selector::parse(r#"[data-hint="a b"#),
        Err(SelectorError::UnterminatedAttribute(_))
    ));
}

// ============================================================================
// Lookup and mutation
// ============================================================================

#[test]
fn test_get_within() {
    let mut doc = sample();
    assert!(doc.contains_within("profile", "name-error"));
    assert!(!doc.contains_within("place", "name-error"));
    assert!(!doc.contains_within("profile", "profile"));

    doc.get_within_mut("profile", "name-error")
        .unwrap()
        .set_text_content("oops");
    assert_eq!(doc.get("name-error").unwrap().text_content(), "oops");
    assert!(doc.get_within_mut("place", "name-error").is_none());
}

#[test]
fn test_class_list_is_a_set() {
    let mut element = Element::span("").class("a");
    element.add_class("b");
    element.add_class("a");
    element.add_class("");
    assert_eq!(element.classes, vec!["a", "b"]);

    element.toggle_class("b", false);
    element.toggle_class("c", true);
    element.toggle_class("c", true);
    assert_eq!(element.classes, vec!["a", "c"]);
    assert!(element.has_class("c"));
    element.remove_class("missing");
    assert_eq!(element.classes.len(), 2);
}

#[test]
fn test_values_and_validity() {
    let mut doc = sample();
    let name = doc.get_mut("name").unwrap();
    assert_eq!(name.value(), "Жак");
    assert!(name.set_value("Жак-Ив"));
    assert_eq!(name.value(), "Жак-Ив");

    name.set_custom_validity("bad");
    assert!(!name.is_custom_valid());
    name.set_custom_validity("");
    assert!(name.is_custom_valid());

    let button = doc.get_mut("save").unwrap();
    assert!(!button.set_value("x"));
    assert_eq!(button.value(), "");
    assert_eq!(button.text_content(), "Save");
}
