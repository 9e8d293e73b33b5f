//! Line editor state machine.
//!
//! [`LineEditor`] is a value: [`LineEditor::apply`] consumes it together with
//! a [`KeyInput`] and returns the next editor plus what, if anything, the key
//! completed. No operation fails; every key is total over every state.
//!
//! Cursor positions count `char`s, not bytes, so edits never split a UTF-8
//! sequence.

use crate::KeyInput;

/// What a key produced besides the new buffer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Buffer edited (or left alone); nothing to hand off.
    Editing,
    /// A non-blank line was submitted. Contains the untrimmed text.
    Submitted(String),
    /// The user asked to end the session.
    Interrupted,
}

/// Editable command line.
///
/// Invariant: `cursor <= text.chars().count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    text: String,
    cursor: usize,
}

impl LineEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor holding `text` with the cursor clamped into range.
    pub fn with_text(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        Self { text, cursor }
    }

    /// Current buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Buffer length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply one key and return the resulting editor.
    pub fn apply(mut self, key: KeyInput) -> (Self, EditOutcome) {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            },
            KeyInput::Paste(s) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert_str(at, &s);
                self.cursor += s.chars().count();
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.text.remove(at);
                }
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            },
            KeyInput::Right => {
                if self.cursor < self.len() {
                    self.cursor += 1;
                }
            },
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.len(),
            KeyInput::KillToStart => {
                let at = self.byte_offset(self.cursor);
                self.text.replace_range(..at, "");
                self.cursor = 0;
            },
            KeyInput::KillToEnd => {
                let at = self.byte_offset(self.cursor);
                self.text.truncate(at);
            },
            KeyInput::Enter => {
                // Blank submits leave the buffer exactly as it was.
                if self.text.trim().is_empty() {
                    return (self, EditOutcome::Editing);
                }
                let line = std::mem::take(&mut self.text);
                self.cursor = 0;
                return (self, EditOutcome::Submitted(line));
            },
            KeyInput::Interrupt => return (self, EditOutcome::Interrupted),
        }
        (self, EditOutcome::Editing)
    }

    /// Byte offset of the char at `index`, or the buffer length past the end.
    fn byte_offset(&self, index: usize) -> usize {
        self.text.char_indices().nth(index).map_or(self.text.len(), |(offset, _)| offset)
    }
}
