//! Headless driver for components: type, click and inspect without a terminal.

use crate::app::{deliver, Component, View};
use crate::buffer::Buffer;
use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::focus::FocusState;
use crate::layout::{layout, LayoutResult, Rect};
use crate::query::{QueryError, Screen};
use crate::render::render_to_buffer;
use crate::text_input::TextInputState;

pub struct Harness<C: Component> {
    component: C,
    focus: FocusState,
    inputs: TextInputState,
    root: Element,
    layout: LayoutResult,
    size: (u16, u16),
}

impl<C: Component> Harness<C> {
    pub fn new(component: C) -> Self {
        Self::with_size(component, 100, 60)
    }

    pub fn with_size(component: C, width: u16, height: u16) -> Self {
        let inputs = TextInputState::new();
        let root = component.element(&View::new(&inputs, None));
        let mut harness = Self {
            component,
            focus: FocusState::new(),
            inputs,
            root,
            layout: LayoutResult::new(),
            size: (width, height),
        };
        harness.rebuild();
        harness
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn screen(&self) -> Screen<'_> {
        Screen::new(&self.root)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to an element, delivering Blur/Focus events.
    pub fn focus(&mut self, id: &str) -> Result<(), QueryError> {
        let element = self.find(id)?;
        if !element.focusable {
            return Ok(());
        }
        let old = self.focus.focused().map(str::to_string);
        if self.focus.focus(id) {
            let mut events = Vec::new();
            if let Some(old) = old {
                events.push(Event::Blur {
                    target: old,
                    new_target: Some(id.to_string()),
                });
            }
            events.push(Event::Focus {
                target: id.to_string(),
            });
            self.dispatch(&events);
        }
        Ok(())
    }

    /// Focus a text input and type into it one keystroke per char.
    /// `\n` is sent as Enter.
    pub fn type_text(&mut self, id: &str, text: &str) -> Result<(), QueryError> {
        if !self.find(id)?.captures_input {
            return Err(QueryError::NotEditable(id.to_string()));
        }
        self.focus(id)?;
        for ch in text.chars() {
            let key = if ch == '\n' { Key::Enter } else { Key::Char(ch) };
            self.press(key);
        }
        Ok(())
    }

    /// Click an element at the center of its layout rect.
    pub fn click(&mut self, id: &str) -> Result<(), QueryError> {
        let element = self.find(id)?;
        if !element.clickable || element.disabled {
            return Err(QueryError::NotClickable(id.to_string()));
        }
        self.focus(id)?;
        let (x, y) = self.layout.get(id).map(Rect::center).unwrap_or((0, 0));
        self.dispatch(&[Event::Click {
            target: Some(id.to_string()),
            x,
            y,
            button: MouseButton::Left,
        }]);
        Ok(())
    }

    /// Press a key as the terminal would deliver it.
    pub fn press(&mut self, key: Key) {
        self.press_with(key, Modifiers::new());
    }

    pub fn press_with(&mut self, key: Key, modifiers: Modifiers) {
        let events = self.focus.key_events(key, modifiers, &self.root);
        self.dispatch(&events);
    }

    /// Render the current tree and return the screen contents as text.
    pub fn render_text(&self) -> String {
        self.render().to_text()
    }

    pub fn render(&self) -> Buffer {
        let mut buf = Buffer::new(self.size.0, self.size.1);
        render_to_buffer(&self.root, &self.layout, &mut buf);
        buf
    }

    fn find(&self, id: &str) -> Result<&Element, QueryError> {
        find_element(&self.root, id).ok_or_else(|| QueryError::NotFound {
            query: format!("with the id {id:?}"),
        })
    }

    fn dispatch(&mut self, events: &[Event]) {
        deliver(&mut self.component, &mut self.inputs, &self.root, events);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let view = View::new(&self.inputs, self.focus.focused());
        self.root = self.component.element(&view);
        self.layout = layout(&self.root, Rect::from_size(self.size.0, self.size.1));
    }
}
