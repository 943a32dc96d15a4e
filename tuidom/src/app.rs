//! Component trait and the blocking terminal event loop.

use std::io;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::element::Element;
use crate::event::Event;
use crate::focus::FocusState;
use crate::terminal::Terminal;
use crate::text_input::{TextInputData, TextInputState};

/// A piece of UI that renders itself to an element tree and reacts to events.
pub trait Component {
    /// Build the element tree for the current state.
    fn element(&self, view: &View<'_>) -> Element;

    /// React to one high-level event (after focus and text editing ran).
    fn on_event(&mut self, event: &Event);
}

/// Per-frame state a component needs while building its tree.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    inputs: &'a TextInputState,
    focused: Option<&'a str>,
}

impl<'a> View<'a> {
    pub fn new(inputs: &'a TextInputState, focused: Option<&'a str>) -> Self {
        Self { inputs, focused }
    }

    pub fn focused(&self) -> Option<&'a str> {
        self.focused
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused == Some(id)
    }

    /// A single-line input with its current text, cursor and focus filled in.
    pub fn text_input(&self, id: &str) -> Element {
        Element::text_input("").id(id).input_state(self.input_data(id), self.is_focused(id))
    }

    /// A multi-line input with its current text, cursor and focus filled in.
    pub fn text_area(&self, id: &str) -> Element {
        Element::text_area("").id(id).input_state(self.input_data(id), self.is_focused(id))
    }

    pub fn button(&self, id: &str, label: &str) -> Element {
        Element::button(label).id(id).focused(self.is_focused(id))
    }

    fn input_data(&self, id: &str) -> &'a TextInputData {
        static EMPTY: TextInputData = TextInputData {
            text: String::new(),
            cursor: 0,
            anchor: None,
        };
        self.inputs.get_data(id).unwrap_or(&EMPTY)
    }
}

/// Run text editing over `events` and hand the results to the component.
pub(crate) fn deliver<C: Component + ?Sized>(
    component: &mut C,
    inputs: &mut TextInputState,
    root: &Element,
    events: &[Event],
) {
    for event in inputs.process_events(events, root) {
        log::trace!("[app] deliver {event:?}");
        component.on_event(&event);
    }
}

/// Esc or Ctrl+C leaves the event loop.
fn is_quit(event: &CrosstermEvent) -> bool {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            key.code == KeyCode::Esc
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

/// Drive a component in the terminal until the user quits.
///
/// Focus starts on the first focusable element.
pub fn run<C: Component + ?Sized>(component: &mut C) -> io::Result<()> {
    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();
    let mut inputs = TextInputState::new();

    let first = component.element(&View::new(&inputs, None));
    focus.focus_next(&first);

    loop {
        let root = component.element(&View::new(&inputs, focus.focused()));
        term.render(&root)?;

        let raw = term.poll(None)?;
        if raw.iter().any(is_quit) {
            log::info!("[app] quit requested");
            return Ok(());
        }

        let events = focus.process_events(&raw, &root, term.layout());
        deliver(component, &mut inputs, &root, &events);
    }
}
