use vectorease_core::{Line, LineKind, Point, Tool};
use vectorease_designer::{Editor, EditorDocument, IdentityMapper, PointerEvent};

fn editor_with_lines() -> Editor {
    let mut editor = Editor::default();
    editor.set_active_color("#ff0000");
    editor.set_active_width(3.0);
    editor.set_tool(Tool::Marker);
    for y in [0.0, 40.0] {
        editor.handle_pointer(&PointerEvent::down(1, 0.0, y), &IdentityMapper);
        editor.handle_pointer(&PointerEvent::moved(1, 90.0, y), &IdentityMapper);
        editor.handle_pointer(&PointerEvent::up(1, 90.0, y), &IdentityMapper);
    }
    editor
}

#[test]
fn test_save_and_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("drawing.json");

    let editor = editor_with_lines();
    editor.save_to_file(&path).unwrap();

    let mut restored = Editor::default();
    restored.load_from_file(&path).unwrap();

    assert_eq!(restored.lines().to_lines(), editor.lines().to_lines());
    assert_eq!(restored.active_tool(), Tool::Marker);
    assert_eq!(restored.active_color(), "#ff0000");
    assert_eq!(restored.active_width(), 3.0);
    assert_eq!(restored.lines().to_lines()[0].kind, LineKind::Marker);
}

#[test]
fn test_load_resets_history_and_selection() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("drawing.json");
    editor_with_lines().save_to_file(&path).unwrap();

    let mut editor = editor_with_lines();
    let first = editor.lines().ids().next().unwrap();
    editor.select([first]);
    editor.load_from_file(&path).unwrap();

    assert_eq!(editor.history().snapshot_count(), 1);
    assert_eq!(editor.history().cursor(), 0);
    assert!(!editor.can_undo());
    assert!(editor.selected_ids().is_empty());
}

#[test]
fn test_saved_file_uses_persisted_field_names() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("drawing.json");
    editor_with_lines().save_to_file(&path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["activeTool"], "marker");
    assert_eq!(json["activeColor"], "#ff0000");
    assert_eq!(json["lines"][0]["type"], "marker");
    assert_eq!(json["lines"][0]["strokeWidth"], 3.0);
    assert_eq!(json["metadata"]["version"], "1.0");
}

#[test]
fn test_minimal_document_uses_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{"lines": [{"p1": {"x": 0, "y": 0}, "p2": {"x": 10, "y": 0}, "color": "blue", "strokeWidth": 2}]}"#,
    )
    .unwrap();

    let mut editor = Editor::default();
    editor.load_from_file(&path).unwrap();

    assert_eq!(editor.active_tool(), Tool::Select);
    assert_eq!(editor.active_width(), 1.0);
    assert!(editor.tracing_image().is_none());
    assert_eq!(editor.lines().to_lines()[0].kind, LineKind::Line);
}

#[test]
fn test_non_finite_document_is_rejected() {
    let mut editor = editor_with_lines();
    let document = EditorDocument {
        lines: vec![Line::segment(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0))],
        ..Default::default()
    };

    assert!(editor.load_document(document).is_err());
    assert_eq!(editor.lines().len(), 2);
}

#[test]
fn test_image_tool_without_image_falls_back_to_select() {
    let mut editor = Editor::default();
    let document = EditorDocument {
        active_tool: Tool::Image,
        ..Default::default()
    };
    editor.load_document(document).unwrap();
    assert_eq!(editor.active_tool(), Tool::Select);
}

#[test]
fn test_missing_file_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut editor = Editor::default();
    let err = editor
        .load_from_file(temp_dir.path().join("missing.json"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read document file"));
}

#[test]
fn test_zero_width_document_loads_with_default_width() {
    let mut editor = Editor::default();
    let document = EditorDocument {
        active_width: 0.0,
        lines: vec![Line::segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0))],
        ..Default::default()
    };

    editor.load_document(document).unwrap();
    assert_eq!(editor.active_width(), 1.0);
    assert_eq!(editor.lines().len(), 1);
}
