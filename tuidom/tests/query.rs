use regex::Regex;
use tuidom::{By, Element, QueryError, Role, Screen, TextMatch};

fn sample_tree() -> Element {
    Element::col()
        .id("root")
        .role(Role::Form)
        .child(Element::text("Sign Up").id("title").role(Role::Heading))
        .child(Element::text("Name*").id("name-label").label_for("name"))
        .child(Element::text_input("Ada").id("name").placeholder("Your name"))
        .child(Element::text("Notes").id("notes-label").label_for("notes"))
        .child(Element::text_area("hello there").id("notes"))
        .child(Element::text("Error: too short").test_id("error"))
        .child(Element::text("Error: required").test_id("error"))
        .child(Element::button("Send").id("send"))
        .child(Element::text_input("").id("search").aria_label("Search"))
}

// ============================================================================
// By Text
// ============================================================================

#[test]
fn test_get_by_text_exact() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    assert_eq!(screen.get_by_text("Sign Up").unwrap().id, "title");
}

#[test]
fn test_text_includes_text_area_but_not_input_values() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    assert_eq!(screen.get_by_text("hello there").unwrap().id, "notes");
    assert!(screen.query_by_text("Ada").unwrap().is_none());
}

#[test]
fn test_get_by_text_fails_on_several_matches() {
    let root = sample_tree();
    let screen = Screen::new(&root);
    let pattern = Regex::new("^Error").unwrap();

    let err = screen.get_by_text(&pattern).unwrap_err();
    assert!(matches!(err, QueryError::Multiple { count: 2, .. }));
    assert_eq!(screen.query_all_by_text(&pattern).len(), 2);
}

#[test]
fn test_get_by_text_fails_when_missing() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    let err = screen.get_by_text("Nope").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unable to find an element with the text \"Nope\""
    );
}

// ============================================================================
// By Placeholder / Label
// ============================================================================

#[test]
fn test_get_by_placeholder_text() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    assert_eq!(screen.get_by_placeholder_text("Your name").unwrap().id, "name");
}

#[test]
fn test_get_by_label_text_follows_label_for() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    let name = screen.get_by_label_text(Regex::new("(?i)name").unwrap()).unwrap();
    assert_eq!(name.id, "name");
}

#[test]
fn test_get_by_label_text_uses_aria_label() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    assert_eq!(screen.get_by_label_text("Search").unwrap().id, "search");
}

// ============================================================================
// By Role / Test Id
// ============================================================================

#[test]
fn test_get_by_role_with_name() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    assert_eq!(screen.get_by_role(Role::Button, "Send").unwrap().id, "send");
    assert!(screen.get_by_role(Role::Button, "Cancel").is_err());
}

#[test]
fn test_role_without_name_matches_every_element_of_role() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    let boxes = screen.query_all(&By::Role(Role::TextBox, None));
    let ids: Vec<&str> = boxes.iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["name", "notes", "search"]);
}

#[test]
fn test_accessible_name_prefers_label() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    let notes = screen.get(&By::Role(Role::TextBox, Some(TextMatch::from("Notes"))));
    assert_eq!(notes.unwrap().id, "notes");
}

#[test]
fn test_query_all_by_test_id() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    assert_eq!(screen.query_all_by_test_id("error").len(), 2);
    assert!(screen.query_all_by_test_id("missing").is_empty());
}

#[test]
fn test_get_all_requires_a_match() {
    let root = sample_tree();
    let screen = Screen::new(&root);

    assert!(screen.get_all(&By::TestId("missing".to_string())).is_err());
    assert_eq!(
        screen
            .get_all(&By::TestId("error".to_string()))
            .unwrap()
            .len(),
        2
    );
}
