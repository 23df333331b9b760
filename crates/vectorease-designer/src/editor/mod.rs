//! Editor state for host integration.
//!
//! [`Editor`] owns the committed line history, the selection, the tracing
//! image, the active tool and style, and the single in-flight gesture. Hosts
//! feed it pointer events and command calls, and read back a per-frame view
//! for rendering.
//!
//! Line edits made by a gesture go to a draft copy of the committed list.
//! The renderer sees the draft while the gesture runs; the draft is committed
//! to history once, when the gesture ends, and only if it differs.

mod commands;
mod file_io;
mod image;
mod pointer;

pub use commands::ClearTarget;

use vectorease_core::{Line, Point, SelectionBox, Tool, TracingImage};
use vectorease_settings::EditorConfig;

use crate::gesture::{GestureArbiter, GestureKind, InteractionState};
use crate::history::History;
use crate::line_store::{IdAllocator, LineId, LineStore};
use crate::selection_manager::SelectionManager;
use crate::transform::SnapOptions;

/// One line as the renderer should draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedLine<'a> {
    pub id: LineId,
    pub line: &'a Line,
    pub selected: bool,
}

/// The interaction engine.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    history: History,
    draft: Option<LineStore>,
    selection: SelectionManager,
    ids: IdAllocator,
    image: Option<TracingImage>,
    active_tool: Tool,
    active_color: String,
    active_width: f64,
    snap_to_angle: bool,
    ortho_mode: bool,
    arbiter: GestureArbiter,
}

impl Editor {
    /// Creates an empty editor with the given configuration.
    pub fn new(config: EditorConfig) -> Self {
        let history = History::default().with_max_depth(config.history.max_depth);
        Self {
            config,
            history,
            draft: None,
            selection: SelectionManager::new(),
            ids: IdAllocator::new(),
            image: None,
            active_tool: Tool::default(),
            active_color: vectorease_core::constants::DEFAULT_COLOR.to_string(),
            active_width: vectorease_core::constants::DEFAULT_STROKE_WIDTH,
            snap_to_angle: false,
            ortho_mode: false,
            arbiter: GestureArbiter::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The committed line list at the history cursor.
    pub fn committed_lines(&self) -> &LineStore {
        self.history.current()
    }

    /// The line list the renderer should show: the gesture draft if one
    /// exists, otherwise the committed list.
    pub fn lines(&self) -> &LineStore {
        self.draft.as_ref().unwrap_or_else(|| self.history.current())
    }

    /// Visible lines in draw order with their selection flag.
    pub fn rendered_lines(&self) -> Vec<RenderedLine<'_>> {
        self.lines()
            .iter()
            .map(|drawn| RenderedLine {
                id: drawn.id,
                line: &drawn.line,
                selected: self.selection.contains(drawn.id),
            })
            .collect()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selected_ids(&self) -> &[LineId] {
        self.selection.ids()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tracing_image(&self) -> Option<&TracingImage> {
        self.image.as_ref()
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn active_color(&self) -> &str {
        &self.active_color
    }

    pub fn active_width(&self) -> f64 {
        self.active_width
    }

    pub fn snap_to_angle(&self) -> bool {
        self.snap_to_angle
    }

    pub fn ortho_mode(&self) -> bool {
        self.ortho_mode
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.arbiter.state()
    }

    pub fn is_gesture_active(&self) -> bool {
        self.arbiter.is_active()
    }

    /// The line being drawn, if a draw gesture is in flight.
    pub fn drawing_line(&self) -> Option<&Line> {
        match self.arbiter.current().map(|gesture| &gesture.kind) {
            Some(GestureKind::Drawing { line }) => Some(line),
            _ => None,
        }
    }

    /// The selection rectangle, if a box-select gesture is in flight.
    pub fn selection_box(&self) -> Option<SelectionBox> {
        match self.arbiter.current().map(|gesture| &gesture.kind) {
            Some(GestureKind::BoxSelecting { rect, .. }) => Some(*rect),
            _ => None,
        }
    }

    /// Image transform handles are shown while the image tool is active.
    pub fn show_image_handles(&self) -> bool {
        self.active_tool == Tool::Image && self.image.is_some()
    }

    /// Local-space anchor of the floating toolbar: horizontally centered
    /// above the bounding box of the selected lines.
    pub fn toolbar_anchor(&self) -> Option<Point> {
        let lines = self.lines();
        let (min_x, min_y, max_x) = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| lines.get(*id))
            .map(Line::bounds)
            .fold(None, |acc: Option<(f64, f64, f64)>, (x0, y0, x1, _)| {
                Some(match acc {
                    Some((min_x, min_y, max_x)) => (min_x.min(x0), min_y.min(y0), max_x.max(x1)),
                    None => (x0, y0, x1),
                })
            })?;

        Some(Point::new(
            (min_x + max_x) / 2.0,
            min_y - self.config.interaction.toolbar_offset,
        ))
    }

    fn snap_options(&self) -> SnapOptions {
        SnapOptions {
            ortho: self.ortho_mode,
            snap_to_angle: self.snap_to_angle,
            angle_step_degrees: self.config.snapping.angle_step_degrees,
        }
    }

    /// Commits `store` as a new history entry if it differs from the current
    /// one, then prunes the selection to surviving ids.
    fn commit_lines(&mut self, store: LineStore) -> bool {
        let changed = store != *self.history.current();
        if changed {
            self.history.commit(store);
        }
        self.selection.retain_existing(self.history.current());
        changed
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
