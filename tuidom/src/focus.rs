use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{walk, Element};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[focus] {:?} -> {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let next = match self.current_index(&focusable) {
            Some(i) => focusable.get((i + 1) % focusable.len()),
            None => focusable.first(),
        }?
        .clone();
        self.focus(&next).then_some(next)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        let prev = match self.current_index(&focusable) {
            Some(0) | None => focusable.last(),
            Some(i) => focusable.get(i - 1),
        }?
        .clone();
        self.focus(&prev).then_some(prev)
    }

    fn current_index(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_deref()?;
        focusable.iter().position(|id| id == current)
    }

    /// Turn a key press into targeted events.
    /// Tab and Shift+Tab move focus; everything else goes to the focused element.
    pub fn key_events(&mut self, key: Key, modifiers: Modifiers, root: &Element) -> Vec<Event> {
        let old = self.focused.clone();
        let moved = match key {
            Key::Tab if !modifiers.shift => Some(self.focus_next(root)),
            Key::Tab | Key::BackTab => Some(self.focus_prev(root)),
            _ => None,
        };

        match moved {
            Some(Some(new)) => focus_change_events(old, new),
            Some(None) => Vec::new(),
            None => vec![Event::Key {
                target: self.focused.clone(),
                key,
                modifiers,
            }],
        }
    }

    /// Turn a mouse press at (x, y) into events.
    /// Focusable elements under the pointer take focus; clickable ones get a Click.
    pub fn click_events(
        &mut self,
        x: u16,
        y: u16,
        button: MouseButton,
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some(id) = hit_test_focusable(layout, root, x, y) {
            let old = self.focused.clone();
            if self.focus(&id) {
                events.extend(focus_change_events(old, id));
            }
        }

        events.push(Event::Click {
            target: hit_test(layout, root, x, y),
            x,
            y,
            button,
        });
        events
    }

    /// Process raw crossterm events and produce high-level events.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    events.extend(self.key_events(
                        key_event.code.into(),
                        key_event.modifiers.into(),
                        root,
                    ));
                }
                CrosstermEvent::Mouse(mouse) => {
                    if let MouseEventKind::Down(button) = mouse.kind {
                        events.extend(self.click_events(
                            mouse.column,
                            mouse.row,
                            button.into(),
                            root,
                            layout,
                        ));
                    }
                }
                CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                    width: *width,
                    height: *height,
                }),
                _ => {}
            }
        }

        events
    }
}

fn focus_change_events(old: Option<String>, new: String) -> Vec<Event> {
    let mut events = Vec::with_capacity(2);
    if let Some(old) = old {
        events.push(Event::Blur {
            target: old,
            new_target: Some(new.clone()),
        });
    }
    events.push(Event::Focus { target: new });
    events
}

/// Collect the IDs of all focusable, enabled elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut ids = Vec::new();
    walk(root, &mut |element| {
        if element.focusable && !element.disabled {
            ids.push(element.id.clone());
        }
    });
    ids
}
