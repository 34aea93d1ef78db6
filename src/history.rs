//! Undo/Redo History
//!
//! A bounded, linear timeline of owned tree snapshots plus a cursor. Recording
//! after an undo discards the abandoned future; undo and redo only move the
//! cursor and never record.

use crate::tree::Tree;
use crate::types::DEFAULT_HISTORY_LIMIT;
use std::collections::VecDeque;
use tracing::debug;

/// Bounded snapshot timeline
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<Tree>,
    position: usize,
    limit: usize,
}

impl History {
    /// Start a timeline anchored at `initial` with the default bound
    pub fn new(initial: &Tree) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    /// Start a timeline with an explicit bound (at least one entry is always kept)
    pub fn with_limit(initial: &Tree, limit: usize) -> Self {
        let limit = limit.max(1);
        let mut entries = VecDeque::with_capacity(limit);
        entries.push_back(initial.clone());
        Self {
            entries,
            position: 0,
            limit,
        }
    }

    /// Append a snapshot after the cursor, dropping any redo entries
    pub fn record(&mut self, snapshot: &Tree) {
        self.entries.truncate(self.position + 1);
        self.entries.push_back(snapshot.clone());
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.position = self.entries.len() - 1;
        debug!(
            entries = self.entries.len(),
            position = self.position,
            "Recorded history snapshot"
        );
    }

    /// Step back one entry; `None` when already at the oldest
    pub fn undo(&mut self) -> Option<&Tree> {
        if !self.can_undo() {
            return None;
        }
        self.position -= 1;
        self.entries.get(self.position)
    }

    /// Step forward one entry; `None` when already at the newest
    pub fn redo(&mut self) -> Option<&Tree> {
        if !self.can_redo() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position)
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Collapse the timeline to a single entry
    pub fn reset(&mut self, anchor: &Tree) {
        self.entries.clear();
        self.entries.push_back(anchor.clone());
        self.position = 0;
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&Tree> {
        self.entries.get(self.position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(&Tree::empty())
    }
}
