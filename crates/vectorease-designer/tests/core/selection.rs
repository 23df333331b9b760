use vectorease_core::{Point, Tool};
use vectorease_designer::{ClearTarget, Editor, IdentityMapper, LineId, PointerEvent, SelectSameCriterion};

fn draw(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) -> LineId {
    editor.set_tool(Tool::Line);
    editor.handle_pointer(&PointerEvent::down(1, from.0, from.1), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::moved(1, to.0, to.1), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::up(1, to.0, to.1), &IdentityMapper);
    editor.set_tool(Tool::Select);
    editor.lines().ids().last().unwrap()
}

fn click(editor: &mut Editor, x: f64, y: f64, shift: bool) {
    let down = PointerEvent::down(1, x, y);
    let down = if shift { down.with_shift() } else { down };
    editor.handle_pointer(&down, &IdentityMapper);
    editor.handle_pointer(&PointerEvent::up(1, x, y), &IdentityMapper);
}

#[test]
fn test_click_selects_and_shift_click_extends() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let b = draw(&mut editor, (0.0, 60.0), (100.0, 60.0));

    click(&mut editor, 50.0, 1.0, false);
    assert_eq!(editor.selected_ids(), &[a]);

    click(&mut editor, 50.0, 61.0, true);
    assert_eq!(editor.selected_ids(), &[a, b]);

    click(&mut editor, 50.0, 1.0, false);
    assert_eq!(editor.selected_ids(), &[a, b]);
}

#[test]
fn test_shift_drag_of_new_line_moves_only_that_line() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let b = draw(&mut editor, (0.0, 60.0), (100.0, 60.0));
    editor.select([a]);

    editor.handle_pointer(&PointerEvent::down(1, 50.0, 60.0).with_shift(), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::moved(1, 50.0, 80.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::up(1, 50.0, 80.0), &IdentityMapper);

    assert_eq!(editor.selected_ids(), &[a, b]);
    assert_eq!(editor.lines().get(a).unwrap().p1, Point::new(0.0, 0.0));
    assert_eq!(editor.lines().get(b).unwrap().p1, Point::new(0.0, 80.0));
}

#[test]
fn test_additive_box_keeps_existing_selection() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let b = draw(&mut editor, (0.0, 200.0), (100.0, 200.0));
    editor.select([a]);

    editor.handle_pointer(&PointerEvent::down(1, -50.0, 150.0).with_shift(), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::moved(1, 150.0, 250.0), &IdentityMapper);
    editor.handle_pointer(&PointerEvent::up(1, 150.0, 250.0), &IdentityMapper);

    assert_eq!(editor.selected_ids(), &[a, b]);
}

#[test]
fn test_select_same_color() {
    let mut editor = Editor::default();
    editor.set_active_color("red");
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    editor.set_active_color("blue");
    let _b = draw(&mut editor, (0.0, 60.0), (100.0, 60.0));
    editor.set_active_color("red");
    let c = draw(&mut editor, (0.0, 120.0), (100.0, 120.0));

    editor.select([c]);
    assert!(editor.select_same(SelectSameCriterion::Color));
    assert_eq!(editor.selected_ids(), &[a, c]);
}

#[test]
fn test_selection_survives_deleting_other_lines() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    let b = draw(&mut editor, (0.0, 60.0), (100.0, 60.0));
    let c = draw(&mut editor, (0.0, 120.0), (100.0, 120.0));

    editor.select([a]);
    editor.delete_selected();
    editor.select([c]);
    assert_eq!(editor.lines().position(c), Some(1));

    // Stable ids: undo brings `a` back and `c` stays selected.
    editor.undo();
    assert_eq!(editor.selected_ids(), &[c]);
    assert!(editor.lines().contains(b));
}

#[test]
fn test_clear_all() {
    let mut editor = Editor::default();
    let a = draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    editor.select([a]);
    editor
        .load_image("", 100.0, 100.0, 400.0, 400.0)
        .unwrap();

    editor.clear(ClearTarget::All);

    assert!(editor.lines().is_empty());
    assert!(editor.selected_ids().is_empty());
    assert!(editor.tracing_image().is_none());
    assert_eq!(editor.active_tool(), Tool::Select);
    assert!(editor.undo());
    assert_eq!(editor.lines().len(), 1);
}
