//! Pointer events and the single-gesture arbiter.
//!
//! Only one input device drives a gesture at a time. The first accepted
//! pointer-down captures its pointer id; events from other ids are rejected
//! until the gesture ends, at which point capture is released unconditionally.

use std::fmt;

use vectorease_core::{Corner, Line, Point, SelectionBox, TracingImage};

use crate::transform::{DragContext, ResizeInfo};

/// Input device identifier, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
    Leave,
}

impl PointerPhase {
    /// Up, cancel and leave all end the gesture the same way.
    pub fn is_end(self) -> bool {
        matches!(self, Self::Up | Self::Cancel | Self::Leave)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Auxiliary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
}

/// One pointer event in device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
    pub button: PointerButton,
    pub kind: PointerKind,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(pointer_id: u64, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            pointer_id: PointerId(pointer_id),
            phase,
            position: Point::new(x, y),
            button: PointerButton::Primary,
            kind: PointerKind::Mouse,
            modifiers: Modifiers::default(),
        }
    }

    pub fn down(pointer_id: u64, x: f64, y: f64) -> Self {
        Self::new(pointer_id, PointerPhase::Down, x, y)
    }

    pub fn moved(pointer_id: u64, x: f64, y: f64) -> Self {
        Self::new(pointer_id, PointerPhase::Move, x, y)
    }

    pub fn up(pointer_id: u64, x: f64, y: f64) -> Self {
        Self::new(pointer_id, PointerPhase::Up, x, y)
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mice must press the primary button; pens and touches always qualify.
    pub fn is_primary(&self) -> bool {
        self.kind != PointerKind::Mouse || self.button == PointerButton::Primary
    }
}

/// Coarse interaction state, as exposed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Drawing,
    BoxSelecting,
    Dragging,
    Resizing,
    Erasing,
    ImagePanning,
    ImageResizing,
    ImageRotating,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Drawing => "drawing",
            Self::BoxSelecting => "box-selecting",
            Self::Dragging => "dragging",
            Self::Resizing => "resizing",
            Self::Erasing => "erasing",
            Self::ImagePanning => "image-panning",
            Self::ImageResizing => "image-resizing",
            Self::ImageRotating => "image-rotating",
        };
        write!(f, "{name}")
    }
}

/// The gesture-specific context captured at pointer-down.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureKind {
    Drawing { line: Line },
    BoxSelecting { rect: SelectionBox, additive: bool },
    Dragging { context: DragContext },
    Resizing { info: ResizeInfo },
    Erasing,
    ImagePanning,
    ImageResizing { corner: Corner, original: TracingImage },
    ImageRotating { original: TracingImage },
}

impl GestureKind {
    pub fn state(&self) -> InteractionState {
        match self {
            Self::Drawing { .. } => InteractionState::Drawing,
            Self::BoxSelecting { .. } => InteractionState::BoxSelecting,
            Self::Dragging { .. } => InteractionState::Dragging,
            Self::Resizing { .. } => InteractionState::Resizing,
            Self::Erasing => InteractionState::Erasing,
            Self::ImagePanning => InteractionState::ImagePanning,
            Self::ImageResizing { .. } => InteractionState::ImageResizing,
            Self::ImageRotating { .. } => InteractionState::ImageRotating,
        }
    }
}

/// An in-flight gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub pointer_id: PointerId,
    /// Local-space position of the pointer-down.
    pub start: Point,
    /// Local-space position of the latest accepted event.
    pub last: Point,
    pub kind: GestureKind,
}

impl Gesture {
    pub fn new(pointer_id: PointerId, start: Point, kind: GestureKind) -> Self {
        Self {
            pointer_id,
            start,
            last: start,
            kind,
        }
    }
}

/// Owns at most one in-flight gesture, keyed by pointer id.
#[derive(Debug, Clone, Default)]
pub struct GestureArbiter {
    active: Option<Gesture>,
}

impl GestureArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// True when `pointer_id` may start a gesture: nothing is captured, or
    /// the capture already belongs to it.
    pub fn accepts(&self, pointer_id: PointerId) -> bool {
        self.active
            .as_ref()
            .is_none_or(|gesture| gesture.pointer_id == pointer_id)
    }

    /// True when `pointer_id` currently holds the capture.
    pub fn owns(&self, pointer_id: PointerId) -> bool {
        self.active
            .as_ref()
            .is_some_and(|gesture| gesture.pointer_id == pointer_id)
    }

    pub fn begin(&mut self, gesture: Gesture) {
        tracing::debug!(
            "Gesture {} started by pointer {}",
            gesture.kind.state(),
            gesture.pointer_id.0
        );
        self.active = Some(gesture);
    }

    pub fn current(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Gesture> {
        self.active.as_mut()
    }

    /// Ends the gesture and releases capture.
    pub fn release(&mut self) -> Option<Gesture> {
        let gesture = self.active.take();
        if let Some(gesture) = &gesture {
            tracing::debug!("Gesture {} released", gesture.kind.state());
        }
        gesture
    }

    pub fn state(&self) -> InteractionState {
        self.active
            .as_ref()
            .map_or(InteractionState::Idle, |gesture| gesture.kind.state())
    }
}
