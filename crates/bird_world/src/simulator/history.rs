//! ActionHistory: append-only action log with pop-last undo.

use serde::{Deserialize, Serialize};

use super::types::ActionKind;

/// Ordered log of executed action names, used as a stack.
///
/// Entries record only the action kind. Popping an entry does not touch the
/// state the action produced; callers that want that semantic must not look
/// for it here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ActionHistory {
    entries: Vec<ActionKind>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: ActionKind) {
        self.entries.push(kind);
    }

    /// Removes and returns the most recent entry, or `None` when empty.
    pub fn undo(&mut self) -> Option<ActionKind> {
        self.entries.pop()
    }

    pub fn entries(&self) -> &[ActionKind] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
