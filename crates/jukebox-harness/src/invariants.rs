//! Session invariants.
//!
//! Invariants capture behavioral properties that must hold after every
//! processed event. They verify WHAT must be true across the observed history
//! of a session, not specific scenarios.

use std::fmt;

use jukebox_app::App;

/// Observable session state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Buffer contents.
    pub text: String,
    /// Cursor position in chars.
    pub cursor: usize,
    /// Buffer length in chars.
    pub len: usize,
    /// A dispatch is outstanding.
    pub busy: bool,
    /// The session is ending.
    pub quitting: bool,
}

impl SessionSnapshot {
    /// Capture the observable state of `app`.
    pub fn from_app(app: &App) -> Self {
        let editor = app.editor();
        Self {
            text: editor.text().to_string(),
            cursor: editor.cursor(),
            len: editor.len(),
            busy: app.is_busy(),
            quitting: app.is_quitting(),
        }
    }
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// What went wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

/// Result of one invariant check.
pub type InvariantResult = Result<(), Violation>;

/// A property over the session history.
pub trait Invariant: Send + Sync {
    /// Short name used in violation reports.
    fn name(&self) -> &'static str;

    /// Check the property. `history` is ordered oldest first and non-empty.
    fn check(&self, history: &[SessionSnapshot]) -> InvariantResult;
}

/// Cursor never leaves `[0, len]`.
pub struct CursorInBounds;

impl Invariant for CursorInBounds {
    fn name(&self) -> &'static str {
        "cursor_in_bounds"
    }

    fn check(&self, history: &[SessionSnapshot]) -> InvariantResult {
        match history.last() {
            Some(s) if s.cursor > s.len => Err(Violation {
                invariant: self.name(),
                message: format!("cursor {} past buffer length {} ({:?})", s.cursor, s.len, s.text),
            }),
            _ => Ok(()),
        }
    }
}

/// While a dispatch is outstanding the buffer stays empty.
///
/// Submitting clears the buffer and keys are dropped until the result
/// arrives, so a non-empty buffer while busy means a key leaked through.
pub struct BusyBufferEmpty;

impl Invariant for BusyBufferEmpty {
    fn name(&self) -> &'static str {
        "busy_buffer_empty"
    }

    fn check(&self, history: &[SessionSnapshot]) -> InvariantResult {
        match history.last() {
            Some(s) if s.busy && s.len > 0 => Err(Violation {
                invariant: self.name(),
                message: format!("buffer {:?} edited while dispatch outstanding", s.text),
            }),
            _ => Ok(()),
        }
    }
}

/// Once quitting, always quitting.
pub struct QuittingIsTerminal;

impl Invariant for QuittingIsTerminal {
    fn name(&self) -> &'static str {
        "quitting_is_terminal"
    }

    fn check(&self, history: &[SessionSnapshot]) -> InvariantResult {
        for (i, pair) in history.windows(2).enumerate() {
            if let [before, after] = pair
                && before.quitting
                && !after.quitting
            {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("quitting reset at step {}", i + 1),
                });
            }
        }
        Ok(())
    }
}

/// Collection of invariants checked together.
#[derive(Default)]
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl InvariantRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every session invariant.
    pub fn standard() -> Self {
        Self::new().with(CursorInBounds).with(BusyBufferEmpty).with(QuittingIsTerminal)
    }

    /// Add an invariant.
    #[must_use]
    pub fn with(mut self, invariant: impl Invariant + 'static) -> Self {
        self.invariants.push(Box::new(invariant));
        self
    }

    /// Check every invariant, collecting all violations.
    pub fn check_all(&self, history: &[SessionSnapshot]) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(history).err()).collect();
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl fmt::Debug for InvariantRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.invariants.iter().map(|inv| inv.name())).finish()
    }
}
