use tuidom::{
    collect_focusable, hit_test, hit_test_focusable, Element, Event, FocusState,
    Key, LayoutResult, Modifiers, MouseButton, Rect, TextInputState,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    elements
        .iter()
        .map(|(id, rect)| (id.to_string(), *rect))
        .collect()
}

fn key(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
        modifiers: Modifiers::new(),
    }
}

fn type_into(inputs: &mut TextInputState, root: &Element, id: &str, text: &str) -> Vec<Event> {
    let events: Vec<Event> = text.chars().map(|c| key(id, Key::Char(c))).collect();
    inputs.process_events(&events, root)
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_prefers_deepest_clickable() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::button("Send").id("btn"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 10)),
        ("btn", Rect::new(5, 5, 6, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 6, 5), Some("btn".to_string()));
    assert_eq!(hit_test(&layout, &root, 1, 1), Some("root".to_string()));
    assert_eq!(hit_test(&layout, &root, 50, 50), None);
}

#[test]
fn test_hit_test_skips_disabled() {
    let root = Element::col()
        .id("root")
        .child(Element::button("Send").id("btn").disabled(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 10)),
        ("btn", Rect::new(0, 0, 4, 1)),
    ]);

    assert_eq!(hit_test(&layout, &root, 1, 0), None);
    assert_eq!(hit_test_focusable(&layout, &root, 1, 0), None);
}

#[test]
fn test_hit_test_focusable_finds_inputs() {
    let root = Element::col()
        .id("root")
        .child(Element::text_input("").id("name"))
        .child(Element::text("Label").id("label"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 10)),
        ("name", Rect::new(0, 0, 20, 1)),
        ("label", Rect::new(0, 1, 20, 1)),
    ]);

    assert_eq!(
        hit_test_focusable(&layout, &root, 3, 0),
        Some("name".to_string())
    );
    assert_eq!(hit_test_focusable(&layout, &root, 3, 1), None);
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();
    assert_eq!(focus.focused(), None);

    assert!(focus.focus("first"));
    assert!(!focus.focus("first"));
    assert!(focus.focus("second"));
    assert_eq!(focus.focused(), Some("second"));

    assert!(focus.blur());
    assert!(!focus.blur());
}

#[test]
fn test_focus_cycles_in_document_order() {
    let root = Element::col()
        .child(Element::text_input("").id("a"))
        .child(Element::col().child(Element::text_area("").id("b")))
        .child(Element::button("Go").id("c"));

    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root), Some("b".to_string()));
    assert_eq!(focus.focus_next(&root), Some("c".to_string()));
    assert_eq!(focus.focus_next(&root), Some("a".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("c".to_string()));
}

#[test]
fn test_focus_single_element_does_not_move() {
    let root = Element::col().child(Element::button("Only").id("only"));
    let mut focus = FocusState::new();

    assert_eq!(focus.focus_next(&root), Some("only".to_string()));
    assert_eq!(focus.focus_next(&root), None);
    assert_eq!(focus.focus_prev(&root), None);
}

#[test]
fn test_tab_emits_blur_then_focus() {
    let root = Element::col()
        .child(Element::text_input("").id("a"))
        .child(Element::text_input("").id("b"));
    let mut focus = FocusState::new();
    focus.focus("a");

    let events = focus.key_events(Key::Tab, Modifiers::new(), &root);

    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "a".to_string(),
                new_target: Some("b".to_string()),
            },
            Event::Focus {
                target: "b".to_string()
            },
        ]
    );
}

#[test]
fn test_shift_tab_moves_back() {
    let root = Element::col()
        .child(Element::text_input("").id("a"))
        .child(Element::text_input("").id("b"));
    let mut focus = FocusState::new();
    focus.focus("a");

    focus.key_events(Key::BackTab, Modifiers::shift(), &root);
    assert_eq!(focus.focused(), Some("b"));
}

#[test]
fn test_other_keys_target_focused_element() {
    let root = Element::col().child(Element::text_input("").id("a"));
    let mut focus = FocusState::new();
    focus.focus("a");

    let events = focus.key_events(Key::Char('x'), Modifiers::new(), &root);
    assert_eq!(events, vec![key("a", Key::Char('x'))]);
}

#[test]
fn test_click_focuses_and_targets_button() {
    let root = Element::col()
        .id("root")
        .child(Element::button("Send").id("btn"));
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 40, 10)),
        ("btn", Rect::new(0, 2, 4, 1)),
    ]);
    let mut focus = FocusState::new();

    let events = focus.click_events(1, 2, MouseButton::Left, &root, &layout);

    assert_eq!(focus.focused(), Some("btn"));
    assert!(matches!(
        events.last(),
        Some(Event::Click { target: Some(t), .. }) if t == "btn"
    ));
}

#[test]
fn test_collect_focusable_skips_disabled() {
    let root = Element::col()
        .child(Element::text_input("").id("a"))
        .child(Element::text_input("").id("b").disabled(true))
        .child(Element::text("plain"));

    assert_eq!(collect_focusable(&root), vec!["a"]);
}

// ============================================================================
// Text Input
// ============================================================================

#[test]
fn test_typing_emits_change_per_key() {
    let root = Element::col().child(Element::text_input("").id("name"));
    let mut inputs = TextInputState::new();

    let events = type_into(&mut inputs, &root, "name", "Ed");

    assert_eq!(
        events,
        vec![
            Event::Change {
                target: "name".to_string(),
                text: "E".to_string()
            },
            Event::Change {
                target: "name".to_string(),
                text: "Ed".to_string()
            },
        ]
    );
    assert_eq!(inputs.get("name"), "Ed");
}

#[test]
fn test_keys_for_non_inputs_pass_through() {
    let root = Element::col().child(Element::button("Go").id("go"));
    let mut inputs = TextInputState::new();

    let events = inputs.process_events(&[key("go", Key::Enter)], &root);
    assert_eq!(events, vec![key("go", Key::Enter)]);
}

#[test]
fn test_enter_submits_single_line_input() {
    let root = Element::col().child(Element::text_input("").id("name"));
    let mut inputs = TextInputState::new();

    let events = inputs.process_events(&[key("name", Key::Enter)], &root);
    assert_eq!(
        events,
        vec![Event::Submit {
            target: "name".to_string()
        }]
    );
}

#[test]
fn test_enter_inserts_newline_in_text_area() {
    let root = Element::col().child(Element::text_area("").id("notes"));
    let mut inputs = TextInputState::new();

    type_into(&mut inputs, &root, "notes", "a");
    inputs.process_events(&[key("notes", Key::Enter)], &root);
    type_into(&mut inputs, &root, "notes", "b");

    assert_eq!(inputs.get("notes"), "a\nb");
}

#[test]
fn test_backspace_and_delete_respect_cursor() {
    let root = Element::col().child(Element::text_input("").id("name"));
    let mut inputs = TextInputState::new();
    inputs.set("name", "héllo");

    inputs.process_events(
        &[
            key("name", Key::Home),
            key("name", Key::Right),
            key("name", Key::Delete),
            key("name", Key::End),
            key("name", Key::Backspace),
        ],
        &root,
    );

    assert_eq!(inputs.get("name"), "hll");
    assert_eq!(inputs.get_data("name").unwrap().cursor, 3);
}

#[test]
fn test_select_all_then_type_replaces_text() {
    let root = Element::col().child(Element::text_input("").id("name"));
    let mut inputs = TextInputState::new();
    inputs.set("name", "old");

    inputs.process_events(
        &[Event::Key {
            target: Some("name".to_string()),
            key: Key::Char('a'),
            modifiers: Modifiers::ctrl(),
        }],
        &root,
    );
    assert!(inputs.get_data("name").unwrap().has_selection());

    type_into(&mut inputs, &root, "name", "new");
    assert_eq!(inputs.get("name"), "new");
}

#[test]
fn test_shift_arrow_selection_is_deleted_by_backspace() {
    let root = Element::col().child(Element::text_input("").id("name"));
    let mut inputs = TextInputState::new();
    inputs.set("name", "abcd");

    let shift_left = Event::Key {
        target: Some("name".to_string()),
        key: Key::Left,
        modifiers: Modifiers::shift(),
    };
    inputs.process_events(
        &[shift_left.clone(), shift_left, key("name", Key::Backspace)],
        &root,
    );

    assert_eq!(inputs.get("name"), "ab");
}

#[test]
fn test_disabled_input_ignores_typing() {
    let root = Element::col().child(Element::text_input("").id("name").disabled(true));
    let mut inputs = TextInputState::new();

    let events = type_into(&mut inputs, &root, "name", "x");
    assert_eq!(events, vec![key("name", Key::Char('x'))]);
    assert_eq!(inputs.get("name"), "");
}
