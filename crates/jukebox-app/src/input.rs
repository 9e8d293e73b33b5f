//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the line editor from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Pasted text, inserted as one unit.
    Paste(String),
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Home key or Ctrl-A (cursor to start).
    Home,
    /// End key or Ctrl-E (cursor to end).
    End,
    /// Ctrl-U (delete everything before the cursor).
    KillToStart,
    /// Ctrl-K (delete everything from the cursor on).
    KillToEnd,
    /// Enter/Return key (submit the line).
    Enter,
    /// Ctrl-C (end the session).
    Interrupt,
}
