use serde::{Deserialize, Serialize};

use crate::line_store::{LineId, LineStore};
use vectorease_core::{does_line_intersect_rect, is_line_fully_inside, SelectionBox};

/// Attribute compared by [`SelectionManager::select_same`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectSameCriterion {
    Color,
    StrokeWidth,
    Both,
}

/// Manages line selection state and selection operations.
///
/// # Selection Model
///
/// - Selection is an ordered list of unique [`LineId`]s.
/// - Order matters only for "select same": the first entry is the reference.
/// - Ids are stable, so the selection survives structural edits; ids whose
///   line no longer exists are pruned with [`SelectionManager::retain_existing`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: Vec<LineId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use vectorease_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[LineId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: LineId) -> bool {
        self.selected.contains(&id)
    }

    /// The reference entry for "select same".
    pub fn first(&self) -> Option<LineId> {
        self.selected.first().copied()
    }

    /// Replaces the selection with exactly `id`.
    pub fn select_only(&mut self, id: LineId) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Appends `id` unless it is already selected.
    pub fn add(&mut self, id: LineId) {
        if !self.contains(id) {
            self.selected.push(id);
        }
    }

    pub fn remove(&mut self, id: LineId) {
        self.selected.retain(|selected| *selected != id);
    }

    /// Flips membership of `id`. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, id: LineId) -> bool {
        if self.contains(id) {
            self.remove(id);
            false
        } else {
            self.selected.push(id);
            true
        }
    }

    /// Replaces the selection, dropping duplicates while keeping first-seen order.
    pub fn set(&mut self, ids: impl IntoIterator<Item = LineId>) {
        self.selected.clear();
        for id in ids {
            self.add(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops ids that no longer name a line in `store`.
    pub fn retain_existing(&mut self, store: &LineStore) {
        self.selected.retain(|id| store.contains(*id));
    }

    /// Box selection.
    ///
    /// A box dragged left-to-right (`width >= 0`) selects fully enclosed lines;
    /// a box dragged right-to-left selects anything it touches. With
    /// `additive` the hits are merged into the current selection, otherwise
    /// they replace it.
    pub fn select_in_box(&mut self, store: &LineStore, rect: &SelectionBox, additive: bool) {
        let crossing = rect.is_crossing();
        let hits: Vec<LineId> = store
            .iter()
            .filter(|drawn| {
                if crossing {
                    does_line_intersect_rect(&drawn.line, rect)
                } else {
                    is_line_fully_inside(&drawn.line, rect)
                }
            })
            .map(|drawn| drawn.id)
            .collect();

        if !additive {
            self.selected.clear();
        }
        for id in hits {
            self.add(id);
        }
    }

    /// Selects every line matching the first selected line on `criterion`.
    ///
    /// Returns false and leaves the selection untouched when nothing is
    /// selected or the reference line no longer exists.
    pub fn select_same(&mut self, store: &LineStore, criterion: SelectSameCriterion) -> bool {
        let Some(reference) = self.first().and_then(|id| store.get(id)).cloned() else {
            return false;
        };

        let matches = store
            .iter()
            .filter(|drawn| {
                let color = drawn.line.color == reference.color;
                let width = drawn.line.stroke_width == reference.stroke_width;
                match criterion {
                    SelectSameCriterion::Color => color,
                    SelectSameCriterion::StrokeWidth => width,
                    SelectSameCriterion::Both => color && width,
                }
            })
            .map(|drawn| drawn.id)
            .collect::<Vec<_>>();

        self.selected = matches;
        true
    }
}
