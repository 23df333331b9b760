use vectorease_core::{Line, Point, Tool};
use vectorease_designer::{
    Editor, IdentityMapper, InteractionState, LineId, PointerButton, PointerEvent, PointerKind,
    PointerPhase, Viewport,
};

fn draw(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) -> LineId {
    let tool = editor.active_tool();
    editor.set_tool(Tool::Line);
    editor.handle_pointer(&PointerEvent::down(1, from.0, from.1), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::moved(1, to.0, to.1), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::up(1, to.0, to.1), &IdentityMapper);
    editor.set_tool(tool);
    editor.lines().ids().last().unwrap()
}

fn gesture(editor: &mut Editor, points: &[(f64, f64)]) {
    let (first, rest) = points.split_first().unwrap();
    editor.handle_pointer(&PointerEvent::down(1, first.0, first.1), &IdentityMapper);
    for p in rest {
        editor.handle_pointer(&PointerEvent::moved(1, p.0, p.1), &IdentityMapper);
    }
    let last = points.last().unwrap();
    editor.handle_pointer(&PointerEvent::up(1, last.0, last.1), &IdentityMapper);
}

fn line(editor: &Editor, id: LineId) -> Line {
    editor.lines().get(id).cloned().unwrap()
}

#[test]
fn test_ortho_draw_snaps_to_anchor_axis() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Line);
    editor.set_ortho_mode(true);

    gesture(&mut editor, &[(0.0, 0.0), (97.0, 4.0)]);

    let lines = editor.lines().to_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].p1, Point::new(0.0, 0.0));
    assert_eq!(lines[0].p2, Point::new(97.0, 0.0));
}

#[test]
fn test_click_length_stroke_is_discarded() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Marker);
    gesture(&mut editor, &[(10.0, 10.0), (13.0, 14.0)]);
    assert!(editor.lines().is_empty());
    assert_eq!(editor.history().snapshot_count(), 1);
    assert_eq!(editor.interaction_state(), InteractionState::Idle);
}

#[test]
fn test_reverse_box_selects_straddling_lines() {
    let mut editor = Editor::default();
    let left = draw(&mut editor, (0.0, 100.0), (100.0, 100.0));
    let right = draw(&mut editor, (150.0, 120.0), (250.0, 120.0));
    let _outside = draw(&mut editor, (300.0, 300.0), (400.0, 300.0));

    editor.set_tool(Tool::Select);
    gesture(&mut editor, &[(200.0, 200.0), (120.0, 120.0), (50.0, 50.0)]);

    assert_eq!(editor.selected_ids(), &[left, right]);
}

#[test]
fn test_forward_box_requires_containment() {
    let mut editor = Editor::default();
    let _left = draw(&mut editor, (0.0, 100.0), (100.0, 100.0));
    let inside = draw(&mut editor, (80.0, 150.0), (120.0, 150.0));

    editor.set_tool(Tool::Select);
    gesture(&mut editor, &[(50.0, 50.0), (200.0, 200.0)]);

    assert_eq!(editor.selected_ids(), &[inside]);
}

#[test]
fn test_box_click_clears_selection() {
    let mut editor = Editor::default();
    let id = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    editor.select([id]);

    gesture(&mut editor, &[(300.0, 300.0), (302.0, 301.0)]);
    assert!(editor.selected_ids().is_empty());
}

#[test]
fn test_duplicate_offsets_and_selects_copies() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let b = draw(&mut editor, (0.0, 50.0), (100.0, 80.0));
    editor.select([b, a]);

    assert!(editor.duplicate_selected());

    assert_eq!(editor.lines().len(), 4);
    let copies = editor.selected_ids().to_vec();
    assert_eq!(copies.len(), 2);
    assert!(!copies.contains(&a) && !copies.contains(&b));
    assert_eq!(line(&editor, copies[0]), line(&editor, b).translated(10.0, 10.0));
    assert_eq!(line(&editor, copies[1]), line(&editor, a).translated(10.0, 10.0));
}

#[test]
fn test_drag_is_one_history_entry() {
    let mut editor = Editor::default();
    let id = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let before = editor.history().snapshot_count();

    editor.handle_pointer(&PointerEvent::down(1, 50.0, 2.0), &IdentityMapper);
    assert_eq!(editor.interaction_state(), InteractionState::Dragging);
    for step in 1..=10 {
        let x = 50.0 + step as f64 * 3.0;
        editor.handle_pointer(&PointerEvent::moved(1, x, 2.0 + step as f64), &IdentityMapper);
        // The renderer sees the draft; history is untouched until release.
        assert_eq!(editor.history().snapshot_count(), before);
    }
    editor.handle_pointer(&PointerEvent::up(1, 80.0, 12.0), &IdentityMapper);

    assert_eq!(editor.history().snapshot_count(), before + 1);
    let moved = line(&editor, id);
    assert_eq!(moved.p1, Point::new(30.0, 10.0));
    assert_eq!(moved.p2, Point::new(130.0, 10.0));
    assert_eq!(editor.selected_ids(), &[id]);
}

#[test]
fn test_ortho_drag_keeps_initial_axis() {
    let mut editor = Editor::default();
    let id = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    editor.set_ortho_mode(true);

    gesture(&mut editor, &[(50.0, 0.0), (80.0, 5.0), (82.0, 90.0)]);

    let moved = line(&editor, id);
    assert_eq!(moved.p1, Point::new(32.0, 0.0));
    assert_eq!(moved.p2, Point::new(132.0, 0.0));
}

#[test]
fn test_drag_moves_whole_selection() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let b = draw(&mut editor, (0.0, 60.0), (100.0, 60.0));
    editor.select([a, b]);

    gesture(&mut editor, &[(50.0, 60.0), (50.0, 100.0)]);

    assert_eq!(line(&editor, a).p1, Point::new(0.0, 40.0));
    assert_eq!(line(&editor, b).p1, Point::new(0.0, 100.0));
}

#[test]
fn test_shift_click_on_selected_line_deselects_without_drag() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let b = draw(&mut editor, (0.0, 60.0), (100.0, 60.0));
    editor.select([a, b]);

    let accepted = editor.handle_pointer(&PointerEvent::down(1, 50.0, 0.0).with_shift(), &IdentityMapper);

    assert!(!accepted);
    assert_eq!(editor.interaction_state(), InteractionState::Idle);
    assert_eq!(editor.selected_ids(), &[b]);
}

#[test]
fn test_grab_unselected_endpoint_resizes() {
    let mut editor = Editor::default();
    let id = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));

    editor.handle_pointer(&PointerEvent::down(1, 103.0, 2.0), &IdentityMapper);
    assert_eq!(editor.interaction_state(), InteractionState::Resizing);
    assert_eq!(editor.selected_ids(), &[id]);

    editor.handle_pointer(&PointerEvent::moved(1, 150.0, 40.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::up(1, 150.0, 40.0), &IdentityMapper);

    let resized = line(&editor, id);
    assert_eq!(resized.p1, Point::new(0.0, 0.0));
    assert_eq!(resized.p2, Point::new(150.0, 40.0));
}

#[test]
fn test_selected_grip_resize_with_angle_snap() {
    let mut editor = Editor::default();
    let id = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    editor.select([id]);
    editor.set_snap_to_angle(true);

    // 88° from p1 rounds to 90°.
    let angle = 88f64.to_radians();
    gesture(&mut editor, &[(100.0, 0.0), (50.0 * angle.cos(), 50.0 * angle.sin())]);

    let resized = line(&editor, id);
    assert!(resized.p2.x.abs() < 1e-9);
    assert!((resized.p2.y - 50.0).abs() < 1e-9);
}

#[test]
fn test_erase_gesture_commits_once() {
    let mut editor = Editor::default();
    let _a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let _b = draw(&mut editor, (0.0, 100.0), (100.0, 100.0));
    let c = draw(&mut editor, (300.0, 0.0), (300.0, 100.0));
    let before = editor.history().snapshot_count();

    editor.set_tool(Tool::Erase);
    gesture(&mut editor, &[(50.0, 0.0), (50.0, 50.0), (50.0, 100.0)]);

    assert_eq!(editor.lines().ids().collect::<Vec<_>>(), vec![c]);
    assert_eq!(editor.history().snapshot_count(), before + 1);
}

#[test]
fn test_erase_miss_adds_no_history() {
    let mut editor = Editor::default();
    draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let before = editor.history().snapshot_count();

    editor.set_tool(Tool::Erase);
    gesture(&mut editor, &[(50.0, 200.0), (60.0, 210.0)]);

    assert_eq!(editor.history().snapshot_count(), before);
}

#[test]
fn test_second_pointer_is_ignored_while_captured() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Line);

    assert!(editor.handle_pointer(&PointerEvent::down(1, 0.0, 0.0), &IdentityMapper));
    assert!(!editor.handle_pointer(&PointerEvent::down(2, 500.0, 500.0), &IdentityMapper));
    assert!(!editor.handle_pointer(&PointerEvent::moved(2, 600.0, 600.0), &IdentityMapper));
    assert!(editor.handle_pointer(&PointerEvent::moved(1, 40.0, 30.0), &IdentityMapper));
    assert!(!editor.handle_pointer(&PointerEvent::up(2, 600.0, 600.0), &IdentityMapper));
    assert_eq!(editor.interaction_state(), InteractionState::Drawing);

    assert!(editor.handle_pointer(&PointerEvent::up(1, 40.0, 30.0), &IdentityMapper));
    assert_eq!(editor.lines().to_lines()[0].p2, Point::new(40.0, 30.0));

    // Capture is released after the gesture.
    assert!(editor.handle_pointer(&PointerEvent::down(2, 0.0, 200.0), &IdentityMapper));
}

#[test]
fn test_cancel_commits_like_up() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Line);
    editor.handle_pointer(&PointerEvent::down(7, 0.0, 0.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::moved(7, 60.0, 0.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::new(7, PointerPhase::Cancel, 60.0, 0.0), &IdentityMapper);

    assert_eq!(editor.lines().len(), 1);
    assert_eq!(editor.interaction_state(), InteractionState::Idle);
}

#[test]
fn test_leave_commits_drag_like_up() {
    let mut editor = Editor::default();
    let id = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    editor.select([id]);

    editor.handle_pointer(&PointerEvent::down(3, 50.0, 0.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::moved(3, 50.0, 30.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::new(3, PointerPhase::Leave, 50.0, 30.0), &IdentityMapper);

    assert_eq!(line(&editor, id).p1, Point::new(0.0, 30.0));
    assert_eq!(editor.history().snapshot_count(), 3);
    assert_eq!(editor.interaction_state(), InteractionState::Idle);
    assert!(!editor.is_gesture_active());
}

#[test]
fn test_zoomed_viewport_maps_device_points() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Line);
    let viewport = Viewport::new(2.0, 100.0, 50.0);

    editor.handle_pointer(&PointerEvent::down(1, 100.0, 50.0), &viewport);
    editor.handle_pointer(&PointerEvent::moved(1, 300.0, 50.0), &viewport);
    editor.handle_pointer(&PointerEvent::up(1, 300.0, 50.0), &viewport);

    let lines = editor.lines().to_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].p1, Point::new(0.0, 0.0));
    assert_eq!(lines[0].p2, Point::new(100.0, 0.0));
    assert_eq!(viewport.to_device(lines[0].p2), Point::new(300.0, 50.0));
}

#[test]
fn test_secondary_mouse_button_is_ignored() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Line);
    let right_click = PointerEvent::down(1, 0.0, 0.0).with_button(PointerButton::Secondary);
    assert!(!editor.handle_pointer(&right_click, &IdentityMapper));
    assert_eq!(editor.interaction_state(), InteractionState::Idle);

    let pen = right_click.with_kind(PointerKind::Pen);
    assert!(editor.handle_pointer(&pen, &IdentityMapper));
}

#[test]
fn test_non_finite_points_are_discarded() {
    let mut editor = Editor::default();
    editor.set_tool(Tool::Line);
    let broken = |_: Point| Point::new(f64::NAN, 0.0);

    assert!(!editor.handle_pointer(&PointerEvent::down(1, 0.0, 0.0), &broken));
    assert_eq!(editor.interaction_state(), InteractionState::Idle);

    editor.handle_pointer(&PointerEvent::down(1, 0.0, 0.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::moved(1, 70.0, 0.0), &IdentityMapper);
    assert!(!editor.handle_pointer(&PointerEvent::moved(1, 0.0, 0.0), &broken));
    // Up with an unmappable position ends at the last good point.
    assert!(editor.handle_pointer(&PointerEvent::up(1, 0.0, 0.0), &broken));

    assert_eq!(editor.lines().to_lines()[0].p2, Point::new(70.0, 0.0));
}

#[test]
fn test_rendered_lines_flag_selection() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let _b = draw(&mut editor, (0.0, 60.0), (100.0, 60.0));
    editor.select([a]);

    let flags: Vec<bool> = editor.rendered_lines().iter().map(|r| r.selected).collect();
    assert_eq!(flags, vec![true, false]);
}
