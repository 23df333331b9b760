//! Pointer handling: the interaction state machine.

use vectorease_core::{Endpoint, Error, Line, Point, SelectionBox, Tool};

use super::Editor;
use crate::gesture::{Gesture, GestureKind, PointerEvent, PointerPhase};
use crate::hit_test::{hit_test_image, hit_test_lines, lines_near, HitTarget, ImageHit};
use crate::line_store::{DrawnLine, LineId, LineStore};
use crate::transform::{
    pan_image, resize_image, rotation_towards, snapped_point, DragContext, ResizeInfo,
};
use crate::viewport::CoordinateMapper;

impl Editor {
    /// Feeds one pointer event through the state machine.
    ///
    /// Returns false when the event was ignored: a non-primary mouse button,
    /// a pointer other than the captured one, a non-finite mapped position,
    /// or a move/up with no gesture in flight.
    pub fn handle_pointer(&mut self, event: &PointerEvent, mapper: &impl CoordinateMapper) -> bool {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event, mapper),
            PointerPhase::Move => self.pointer_move(event, mapper),
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave => {
                self.pointer_up(event, mapper)
            }
        }
    }

    fn pointer_down(&mut self, event: &PointerEvent, mapper: &impl CoordinateMapper) -> bool {
        if !event.is_primary() || !self.arbiter.accepts(event.pointer_id) {
            return false;
        }
        let Some(point) = map_point(event, mapper) else {
            return false;
        };

        // A second down from the captured pointer closes the previous gesture.
        if let Some(previous) = self.arbiter.release() {
            let end = previous.last;
            self.finish(previous, end);
        }

        let shift = event.modifiers.shift;
        let kind = match self.active_tool {
            Tool::Line | Tool::Marker => {
                let kind = self.active_tool.line_kind().unwrap_or_default();
                Some(GestureKind::Drawing {
                    line: Line::new(point, point, self.active_color.clone(), self.active_width, kind),
                })
            }
            Tool::Select => self.begin_select(point, shift),
            Tool::Erase => {
                let mut draft = self.history.current().clone();
                erase_at(&mut draft, &point, self.config.interaction.hit_threshold);
                self.draft = Some(draft);
                Some(GestureKind::Erasing)
            }
            Tool::Image => self.begin_image(point),
        };

        match kind {
            Some(kind) => {
                self.arbiter.begin(Gesture::new(event.pointer_id, point, kind));
                true
            }
            None => false,
        }
    }

    fn begin_select(&mut self, point: Point, shift: bool) -> Option<GestureKind> {
        let hit = hit_test_lines(
            &point,
            self.history.current(),
            &self.selection,
            &self.config.interaction,
        );

        match hit {
            HitTarget::SelectedGrip { id, endpoint } => self.begin_resize(id, endpoint),
            HitTarget::UnselectedEndpoint { id, endpoint } => {
                if shift {
                    self.selection.add(id);
                } else {
                    self.selection.select_only(id);
                }
                self.begin_resize(id, endpoint)
            }
            HitTarget::LineBody { id } => {
                let was_selected = self.selection.contains(id);
                if shift {
                    if was_selected {
                        self.selection.remove(id);
                        return None;
                    }
                    self.selection.add(id);
                } else if !was_selected {
                    self.selection.select_only(id);
                }

                let drag_ids = if was_selected {
                    self.selection.ids().to_vec()
                } else {
                    vec![id]
                };
                let context = DragContext::capture(self.history.current(), &drag_ids);
                self.draft = Some(self.history.current().clone());
                Some(GestureKind::Dragging { context })
            }
            HitTarget::Empty => {
                if !shift {
                    self.selection.clear();
                }
                Some(GestureKind::BoxSelecting {
                    rect: SelectionBox::new(point.x, point.y, 0.0, 0.0),
                    additive: shift,
                })
            }
        }
    }

    fn begin_resize(&mut self, id: LineId, endpoint: Endpoint) -> Option<GestureKind> {
        let original = self.history.current().get(id)?.clone();
        self.draft = Some(self.history.current().clone());
        Some(GestureKind::Resizing {
            info: ResizeInfo {
                id,
                endpoint,
                original,
            },
        })
    }

    fn begin_image(&mut self, point: Point) -> Option<GestureKind> {
        let image = self.image.as_ref()?;
        let hit = hit_test_image(
            &point,
            image,
            &self.config.interaction,
            self.config.image.rotate_handle_offset,
        );
        match hit {
            ImageHit::RotateHandle => Some(GestureKind::ImageRotating {
                original: image.clone(),
            }),
            ImageHit::Corner(corner) => Some(GestureKind::ImageResizing {
                corner,
                original: image.clone(),
            }),
            ImageHit::Body => Some(GestureKind::ImagePanning),
            ImageHit::Miss => None,
        }
    }

    fn pointer_move(&mut self, event: &PointerEvent, mapper: &impl CoordinateMapper) -> bool {
        if !self.arbiter.owns(event.pointer_id) {
            return false;
        }
        let Some(point) = map_point(event, mapper) else {
            return false;
        };

        let options = self.snap_options();
        let hit_threshold = self.config.interaction.hit_threshold;
        let min_size = self.config.image.min_size;
        let Some(gesture) = self.arbiter.current_mut() else {
            return false;
        };
        let start = gesture.start;
        let last = gesture.last;
        gesture.last = point;

        match &mut gesture.kind {
            GestureKind::Drawing { line } => {
                line.p2 = snapped_point(point, line.p1, &options);
            }
            GestureKind::BoxSelecting { rect, .. } => {
                *rect = SelectionBox::from_corners(start, point);
            }
            GestureKind::Dragging { context } => {
                let (dx, dy) = context.constrain(point.x - start.x, point.y - start.y, options.ortho);
                if let Some(draft) = self.draft.as_mut() {
                    context.apply(draft, dx, dy);
                }
            }
            GestureKind::Resizing { info } => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.replace(info.id, info.resized(point, &options));
                }
            }
            GestureKind::Erasing => {
                if let Some(draft) = self.draft.as_mut() {
                    erase_at(draft, &point, hit_threshold);
                }
            }
            GestureKind::ImagePanning => {
                if let Some(image) = self.image.as_mut() {
                    pan_image(image, point.x - last.x, point.y - last.y);
                }
            }
            GestureKind::ImageResizing { corner, original } => {
                if let Some(image) = self.image.as_mut() {
                    let resized = resize_image(original, *corner, start, point, min_size);
                    image.x = resized.x;
                    image.y = resized.y;
                    image.width = resized.width;
                    image.height = resized.height;
                }
            }
            GestureKind::ImageRotating { original } => {
                if let Some(image) = self.image.as_mut() {
                    image.rotation = rotation_towards(original, point);
                }
            }
        }
        true
    }

    fn pointer_up(&mut self, event: &PointerEvent, mapper: &impl CoordinateMapper) -> bool {
        if !self.arbiter.owns(event.pointer_id) {
            return false;
        }
        let Some(gesture) = self.arbiter.release() else {
            return false;
        };
        let end = map_point(event, mapper).unwrap_or(gesture.last);
        self.finish(gesture, end);
        true
    }

    /// Commits a released gesture's result and clears all transient state.
    fn finish(&mut self, gesture: Gesture, end: Point) {
        let click_threshold = self.config.interaction.click_threshold;
        let is_click = (end.x - gesture.start.x).abs() < click_threshold
            && (end.y - gesture.start.y).abs() < click_threshold;

        match gesture.kind {
            GestureKind::Drawing { mut line } => {
                if is_click {
                    tracing::debug!("Discarded click-length stroke");
                } else {
                    line.p2 = snapped_point(end, line.p1, &self.snap_options());
                    let mut store = self.history.current().clone();
                    store.push(DrawnLine::new(self.ids.allocate(), line));
                    self.commit_lines(store);
                }
            }
            GestureKind::BoxSelecting { additive, .. } => {
                if is_click {
                    if !additive {
                        self.selection.clear();
                    }
                } else {
                    let rect = SelectionBox::from_corners(gesture.start, end);
                    self.selection
                        .select_in_box(self.history.current(), &rect, additive);
                }
            }
            GestureKind::Dragging { .. } | GestureKind::Resizing { .. } | GestureKind::Erasing => {
                if let Some(draft) = self.draft.take() {
                    self.commit_lines(draft);
                }
            }
            GestureKind::ImagePanning
            | GestureKind::ImageResizing { .. }
            | GestureKind::ImageRotating { .. } => {}
        }

        self.draft = None;
    }
}

/// Maps the event position to local space, discarding non-finite results.
fn map_point(event: &PointerEvent, mapper: &impl CoordinateMapper) -> Option<Point> {
    let point = mapper.to_local(event.position);
    if point.is_finite() {
        Some(point)
    } else {
        let err = Error::NonFiniteCoordinate {
            x: point.x,
            y: point.y,
        };
        tracing::warn!("Discarded pointer {:?} event: {}", event.phase, err);
        None
    }
}

fn erase_at(draft: &mut LineStore, point: &Point, threshold: f64) {
    let hits = lines_near(point, draft, threshold);
    if !hits.is_empty() {
        draft.retain(|drawn| !hits.contains(&drawn.id));
    }
}
