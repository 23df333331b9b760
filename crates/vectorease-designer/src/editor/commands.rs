//! Command operations: tool and style changes, toggles, undo/redo and
//! structural edits of the selection.
//!
//! Commands that touch the committed line list are ignored while a gesture
//! is in flight, so a gesture's draft is never committed on top of a
//! concurrent edit.

use vectorease_core::{Line, Tool};

use super::Editor;
use crate::line_store::{DrawnLine, LineId};
use crate::selection_manager::SelectSameCriterion;

/// What [`Editor::clear`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Strokes,
    Image,
    All,
}

impl Editor {
    /// Switches the active tool. The image tool needs a tracing image.
    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if tool == Tool::Image && self.image.is_none() {
            tracing::debug!("Image tool requested without a tracing image");
            return false;
        }
        self.active_tool = tool;
        true
    }

    /// Sets the colour for new lines and restyles the selection.
    pub fn set_active_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.active_color = color.clone();
        self.restyle_selection(|line| line.color = color.clone());
    }

    /// Sets the width for new lines and restyles the selection. Widths that
    /// are not positive finite numbers are ignored.
    pub fn set_active_width(&mut self, width: f64) -> bool {
        if !width.is_finite() || width <= 0.0 {
            tracing::warn!("Ignored stroke width {}", width);
            return false;
        }
        self.active_width = width;
        self.restyle_selection(|line| line.stroke_width = width);
        true
    }

    pub fn set_snap_to_angle(&mut self, enabled: bool) {
        self.snap_to_angle = enabled;
    }

    pub fn toggle_snap_to_angle(&mut self) -> bool {
        self.snap_to_angle = !self.snap_to_angle;
        self.snap_to_angle
    }

    pub fn set_ortho_mode(&mut self, enabled: bool) {
        self.ortho_mode = enabled;
    }

    pub fn toggle_ortho_mode(&mut self) -> bool {
        self.ortho_mode = !self.ortho_mode;
        self.ortho_mode
    }

    /// Replaces the selection. Unknown ids are dropped.
    pub fn select(&mut self, ids: impl IntoIterator<Item = LineId>) {
        let lines = self.history.current();
        let ids: Vec<LineId> = ids.into_iter().filter(|id| lines.contains(*id)).collect();
        self.selection.set(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Steps back one history entry. No-op at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.arbiter.is_active() || !self.history.undo() {
            return false;
        }
        self.selection.retain_existing(self.history.current());
        tracing::debug!("Undo to snapshot {}", self.history.cursor());
        true
    }

    /// Steps forward one history entry. No-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.arbiter.is_active() || !self.history.redo() {
            return false;
        }
        self.selection.retain_existing(self.history.current());
        tracing::debug!("Redo to snapshot {}", self.history.cursor());
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.arbiter.is_active() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.arbiter.is_active() && self.history.can_redo()
    }

    /// Removes the selected lines as one history entry.
    pub fn delete_selected(&mut self) -> bool {
        if self.arbiter.is_active() || self.selection.is_empty() {
            return false;
        }
        let mut store = self.history.current().clone();
        let selection = &self.selection;
        store.retain(|drawn| !selection.contains(drawn.id));
        self.selection.clear();
        self.commit_lines(store)
    }

    /// Appends offset copies of the selected lines as one history entry and
    /// selects the copies, in selection order.
    pub fn duplicate_selected(&mut self) -> bool {
        if self.arbiter.is_active() || self.selection.is_empty() {
            return false;
        }
        let offset = self.config.interaction.duplicate_offset;
        let mut store = self.history.current().clone();
        let mut copies = Vec::with_capacity(self.selection.len());

        for &id in self.selection.ids() {
            if let Some(line) = self.history.current().get(id) {
                let copy = self.ids.allocate();
                store.push(DrawnLine::new(copy, line.translated(offset, offset)));
                copies.push(copy);
            }
        }
        if copies.is_empty() {
            return false;
        }

        self.commit_lines(store);
        self.selection.set(copies);
        true
    }

    /// Selects every line matching the first selected line on `criterion`.
    pub fn select_same(&mut self, criterion: SelectSameCriterion) -> bool {
        if self.arbiter.is_active() {
            return false;
        }
        self.selection.select_same(self.history.current(), criterion)
    }

    pub fn clear(&mut self, target: ClearTarget) {
        if self.arbiter.is_active() {
            return;
        }
        if matches!(target, ClearTarget::Strokes | ClearTarget::All) {
            self.selection.clear();
            if !self.history.current().is_empty() {
                self.commit_lines(Default::default());
            }
        }
        if matches!(target, ClearTarget::Image | ClearTarget::All) {
            self.delete_image();
        }
    }

    fn restyle_selection(&mut self, restyle: impl Fn(&mut Line)) {
        if self.arbiter.is_active() || self.selection.is_empty() {
            return;
        }
        let mut store = self.history.current().clone();
        for &id in self.selection.ids() {
            if let Some(line) = store.get(id) {
                let mut line = line.clone();
                restyle(&mut line);
                store.replace(id, line);
            }
        }
        self.commit_lines(store);
    }
}
