//! Ordered line storage with stable identifiers.
//!
//! Draw order is the storage order. Every line carries a [`LineId`] that
//! survives insertions and removals, and an id-to-position lookup keeps
//! access by id constant time.

use std::collections::HashMap;
use std::fmt;

use vectorease_core::Line;

/// Stable identifier of a line. Never reused within one editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_id: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    pub fn allocate(&mut self) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// A committed line together with its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnLine {
    pub id: LineId,
    pub line: Line,
}

impl DrawnLine {
    pub fn new(id: LineId, line: Line) -> Self {
        Self { id, line }
    }
}

/// The draw list.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    lines: Vec<DrawnLine>,
    positions: HashMap<LineId, usize>,
}

impl PartialEq for LineStore {
    fn eq(&self, other: &Self) -> bool {
        self.lines == other.lines
    }
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from lines already carrying ids. Later duplicates of an
    /// id are dropped.
    pub fn from_lines(lines: impl IntoIterator<Item = DrawnLine>) -> Self {
        let mut store = Self::new();
        for drawn in lines {
            if !store.contains(drawn.id) {
                store.push(drawn);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Current draw-order position of `id`.
    pub fn position(&self, id: LineId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.position(id).map(|pos| &self.lines[pos].line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawnLine> {
        self.lines.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = LineId> + '_ {
        self.lines.iter().map(|drawn| drawn.id)
    }

    /// Appends a line at the top of the draw order.
    pub fn push(&mut self, drawn: DrawnLine) {
        self.positions.insert(drawn.id, self.lines.len());
        self.lines.push(drawn);
    }

    /// Swaps in a new geometry/style for an existing line. Returns false when
    /// the id is unknown.
    pub fn replace(&mut self, id: LineId, line: Line) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.lines[pos].line = line;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: LineId) -> Option<Line> {
        let pos = self.positions.remove(&id)?;
        let removed = self.lines.remove(pos);
        self.reindex();
        Some(removed.line)
    }

    /// Keeps only lines for which `keep` returns true. Returns how many were
    /// removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&DrawnLine) -> bool) -> usize {
        let before = self.lines.len();
        self.lines.retain(|drawn| keep(drawn));
        let removed = before - self.lines.len();
        if removed > 0 {
            self.reindex();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.positions.clear();
    }

    /// Plain lines in draw order, as persisted.
    pub fn to_lines(&self) -> Vec<Line> {
        self.lines.iter().map(|drawn| drawn.line.clone()).collect()
    }

    fn reindex(&mut self) {
        self.positions = self
            .lines
            .iter()
            .enumerate()
            .map(|(pos, drawn)| (drawn.id, pos))
            .collect();
    }
}
