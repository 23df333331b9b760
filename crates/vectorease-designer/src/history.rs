//! Linear undo/redo over full line-list snapshots.
//!
//! The history always holds at least one snapshot and a cursor pointing at
//! the active one. Committing truncates everything after the cursor before
//! appending. Snapshots are whole [`LineStore`] values, so undo followed by
//! redo restores the exact list, ids included.

use crate::line_store::LineStore;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<LineStore>,
    cursor: usize,
    max_depth: Option<usize>,
}

impl History {
    /// Starts a history whose only snapshot is `initial`.
    pub fn new(initial: LineStore) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_depth: None,
        }
    }

    /// Caps the number of snapshots kept. Oldest snapshots are dropped first.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth.map(|depth| depth.max(1));
        self.enforce_depth();
        self
    }

    /// The active snapshot.
    pub fn current(&self) -> &LineStore {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots held, never zero.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Records `store` as the new active snapshot, discarding any redo tail.
    pub fn commit(&mut self, store: LineStore) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(store);
        self.cursor = self.snapshots.len() - 1;
        self.enforce_depth();
        tracing::debug!(
            "History commit: {} snapshots, cursor {}",
            self.snapshots.len(),
            self.cursor
        );
    }

    /// Steps back one snapshot. No-op at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps forward one snapshot. No-op at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Replaces the whole history with a single snapshot at cursor 0.
    pub fn reset(&mut self, store: LineStore) {
        self.snapshots = vec![store];
        self.cursor = 0;
    }

    fn enforce_depth(&mut self) {
        let Some(max) = self.max_depth else {
            return;
        };
        if self.snapshots.len() > max {
            let excess = self.snapshots.len() - max;
            self.snapshots.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(LineStore::new())
    }
}
