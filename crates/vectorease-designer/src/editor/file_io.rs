//! File I/O operations (save, load) for editor state.

use std::path::Path;

use super::Editor;
use crate::line_store::{DrawnLine, LineStore};
use crate::serialization::EditorDocument;

impl Editor {
    /// Snapshot of the committed state in persisted form.
    pub fn to_document(&self) -> EditorDocument {
        EditorDocument {
            lines: self.history.current().to_lines(),
            active_tool: self.active_tool,
            active_color: self.active_color.clone(),
            active_width: self.active_width,
            tracing_image: self.image.clone(),
            metadata: None,
        }
    }

    /// Replaces the whole editor state with `document`.
    ///
    /// History collapses to a single snapshot at cursor 0; the selection and
    /// any in-flight gesture are dropped. Invalid documents leave the editor
    /// untouched.
    pub fn load_document(&mut self, mut document: EditorDocument) -> vectorease_core::Result<()> {
        document.normalize();
        document.validate()?;

        let store = LineStore::from_lines(
            document
                .lines
                .into_iter()
                .map(|line| DrawnLine::new(self.ids.allocate(), line)),
        );

        self.arbiter.release();
        self.draft = None;
        self.selection.clear();
        self.history.reset(store);
        self.image = document.tracing_image;
        self.active_color = document.active_color;
        self.active_width = document.active_width;
        self.active_tool = document.active_tool;
        if self.active_tool == vectorease_core::Tool::Image && self.image.is_none() {
            self.active_tool = vectorease_core::Tool::Select;
        }
        Ok(())
    }

    /// Save editor state to file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.to_document().save_to_file(path)
    }

    /// Load editor state from file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let document = EditorDocument::load_from_file(&path)?;
        self.load_document(document)?;
        tracing::info!(
            "Loaded {} lines from {}",
            self.history.current().len(),
            path.as_ref().display()
        );
        Ok(())
    }
}
