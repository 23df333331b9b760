//! # VectorEase Designer
//!
//! The pointer-driven interaction engine of the VectorEase line editor. It
//! turns pointer gestures into edits of a line list over an optional
//! tracing image, with linear undo/redo.
//!
//! ## Core Components
//!
//! - **Line store**: ordered draw list with stable line ids
//! - **Selection**: ordered selection, box select, select-same
//! - **Hit testing**: grips, endpoints, line bodies, image handles
//! - **History**: snapshot-based undo/redo
//! - **Transform engine**: snapping, drag/resize, image pan/resize/rotate
//! - **Gestures**: pointer events and single-pointer capture
//! - **Editor**: the owned state object tying everything together
//!
//! ## Architecture
//!
//! ```text
//! PointerEvent ─► Editor (state machine)
//!                   ├── hit_test ─► geometry kernel
//!                   ├── transform
//!                   ├── SelectionManager
//!                   └── History ◄── draft committed at gesture end
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vectorease_core::Tool;
//! use vectorease_designer::{Editor, IdentityMapper, PointerEvent};
//!
//! let mut editor = Editor::default();
//! editor.set_tool(Tool::Line);
//! editor.handle_pointer(&PointerEvent::down(1, 0.0, 0.0), &IdentityMapper);
//! editor.handle_pointer(&PointerEvent::moved(1, 80.0, 20.0), &IdentityMapper);
//! editor.handle_pointer(&PointerEvent::up(1, 80.0, 20.0), &IdentityMapper);
//! assert_eq!(editor.lines().len(), 1);
//! ```

pub mod editor;
pub mod gesture;
pub mod history;
pub mod line_store;
pub mod selection_manager;
pub mod serialization;
pub mod transform;
pub mod viewport;

pub use editor::{ClearTarget, Editor, RenderedLine};
pub use gesture::{
    Gesture, GestureArbiter, GestureKind, InteractionState, Modifiers, PointerButton,
    PointerEvent, PointerId, PointerKind, PointerPhase,
};
pub use hit_test::{HitTarget, ImageHit};
pub use history::History;
pub use line_store::{DrawnLine, IdAllocator, LineId, LineStore};
pub use selection_manager::{SelectSameCriterion, SelectionManager};
pub use serialization::{DocumentMetadata, EditorDocument};
pub use transform::{Axis, DragContext, ResizeInfo, SnapOptions};
pub use viewport::{CoordinateMapper, IdentityMapper, Viewport};
