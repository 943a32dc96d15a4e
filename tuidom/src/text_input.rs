use std::collections::HashMap;

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};

/// Data for a single text input: text content and cursor state.
///
/// `cursor` and `anchor` are char indices, not byte offsets.
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
    /// Anchor position for selection. When Some and != cursor, text is selected.
    pub anchor: Option<usize>,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            anchor: None,
        }
    }

    /// Get the selection range as (start, end) where start <= end.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.anchor.and_then(|a| {
            if a != self.cursor {
                Some(if a < self.cursor {
                    (a, self.cursor)
                } else {
                    (self.cursor, a)
                })
            } else {
                None
            }
        })
    }

    /// Check if there's an active selection.
    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    /// Clear the selection anchor.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }

    /// Select all text.
    pub fn select_all(&mut self) {
        if !self.text.is_empty() {
            self.anchor = Some(0);
            self.cursor = self.text.chars().count();
        }
    }

    /// Remove the selected range, leaving the cursor at its start.
    /// Returns true if anything was removed.
    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            return false;
        };
        let start_byte = char_to_byte_index(&self.text, start);
        let end_byte = char_to_byte_index(&self.text, end);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor = start;
        self.clear_selection();
        true
    }
}

/// Tracks text input state for multiple elements.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs
            .get(id)
            .map(|d| d.text.as_str())
            .unwrap_or("")
    }

    /// Get the full input data (text, cursor, selection).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Get mutable access to input data.
    pub fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Set the text value for an input, placing cursor at end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    /// Process events and handle text input.
    /// Returns events that were generated (Change, Submit) or passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                let editable = find_element(root, target)
                    .filter(|element| element.captures_input && !element.disabled);
                if let Some(element) = editable {
                    match self.handle_key(target, *key, *modifiers, element.is_multiline()) {
                        TextEditResult::Changed => {
                            output.push(Event::Change {
                                target: target.clone(),
                                text: self.get(target).to_string(),
                            });
                            continue;
                        }
                        TextEditResult::Submitted => {
                            output.push(Event::Submit {
                                target: target.clone(),
                            });
                            continue;
                        }
                        TextEditResult::Handled => continue,
                        TextEditResult::Ignored => {}
                    }
                }
            }
            output.push(event.clone());
        }

        output
    }

    /// Handle a key press for text editing.
    fn handle_key(
        &mut self,
        id: &str,
        key: Key,
        modifiers: Modifiers,
        multiline: bool,
    ) -> TextEditResult {
        match key {
            Key::Char('a') if modifiers.ctrl => {
                self.get_data_mut(id).select_all();
                TextEditResult::Handled
            }

            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(id, c);
                TextEditResult::Changed
            }

            Key::Enter if multiline => {
                self.insert_char(id, '\n');
                TextEditResult::Changed
            }

            Key::Enter => TextEditResult::Submitted,

            Key::Backspace if modifiers.none() => {
                if self.delete_back(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.move_cursor(id, -1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.move_cursor(id, 1, modifiers.shift);
                TextEditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                self.move_to(id, 0, modifiers.shift);
                TextEditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                let end = self.get(id).chars().count();
                self.move_to(id, end, modifiers.shift);
                TextEditResult::Handled
            }

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at cursor, replacing selection if any.
    fn insert_char(&mut self, id: &str, c: char) {
        let data = self.get_data_mut(id);
        data.delete_selection();
        let byte_pos = char_to_byte_index(&data.text, data.cursor);
        data.text.insert(byte_pos, c);
        data.cursor += 1;
    }

    /// Delete character before cursor or delete selection.
    /// Returns true if text changed.
    fn delete_back(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        if data.delete_selection() {
            return true;
        }
        if data.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&data.text, data.cursor - 1);
        let end = char_to_byte_index(&data.text, data.cursor);
        data.text.replace_range(start..end, "");
        data.cursor -= 1;
        true
    }

    /// Delete character after cursor or delete selection.
    /// Returns true if text changed.
    fn delete_forward(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        if data.delete_selection() {
            return true;
        }
        if data.cursor >= data.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&data.text, data.cursor);
        let end = char_to_byte_index(&data.text, data.cursor + 1);
        data.text.replace_range(start..end, "");
        true
    }

    /// Move cursor by delta characters.
    fn move_cursor(&mut self, id: &str, delta: i32, extend_selection: bool) {
        let data = self.get_data_mut(id);
        let char_count = data.text.chars().count();

        if extend_selection && data.anchor.is_none() {
            data.anchor = Some(data.cursor);
        } else if !extend_selection {
            // Collapse an existing selection to the edge in the direction of travel
            if let Some((start, end)) = data.selection() {
                data.cursor = if delta < 0 { start } else { end };
                data.clear_selection();
                return;
            }
            data.clear_selection();
        }

        data.cursor = (data.cursor as i32 + delta).clamp(0, char_count as i32) as usize;
    }

    /// Move cursor to an absolute char position.
    fn move_to(&mut self, id: &str, position: usize, extend_selection: bool) {
        let data = self.get_data_mut(id);

        if extend_selection && data.anchor.is_none() {
            data.anchor = Some(data.cursor);
        } else if !extend_selection {
            data.clear_selection();
        }

        data.cursor = position;
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed in a single-line input.
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
