//! Stack of hidden boxes.
//!
//! Hiding pushes, undo pops. Strictly LIFO with no redo branch; an id is
//! in the stack at most once, and only while its box is hidden.

use crate::id::BoxId;

/// Boxes hidden during this page session, most recent last.
#[derive(Debug, Clone, Default)]
pub struct HiddenStack {
    entries: Vec<BoxId>,
}

impl HiddenStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hidden box. Returns `false` (and does nothing) if it is
    /// already on the stack.
    pub fn push(&mut self, id: BoxId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push(id);
        true
    }

    /// Remove and return the most recently hidden box.
    pub fn pop(&mut self) -> Option<BoxId> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<BoxId> {
        self.entries.last().copied()
    }

    pub fn contains(&self, id: BoxId) -> bool {
        self.entries.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.entries.iter().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
