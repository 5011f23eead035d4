//! In-memory host implementation.
//!
//! Stands in for a real host in the test suite: leaves can be opened (loaded
//! or deferred), closed, and reordered, and the editor records enough about
//! what was done to it that tests can observe restore decisions.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::types::position::{CursorPosition, ScrollOffset};

use super::{EditorSurface, HostWorkspace, TextLeaf};

/// A scroll-into-view request as received by [`MemoryEditor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub from: CursorPosition,
    pub to: CursorPosition,
    pub center: bool,
}

#[derive(Debug, Default)]
struct EditorState {
    cursor: CursorPosition,
    scroll: ScrollOffset,
    set_cursor_calls: u32,
    last_scroll_request: Option<ScrollRequest>,
}

/// Editing surface backed by plain in-memory state.
#[derive(Debug, Default)]
pub struct MemoryEditor {
    state: Mutex<EditorState>,
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the cursor without counting it as a restore-driven set,
    /// simulating the host (or the user) moving it.
    pub fn place_cursor(&self, pos: CursorPosition) {
        self.state.lock().unwrap().cursor = pos;
    }

    pub fn place_scroll(&self, scroll: ScrollOffset) {
        self.state.lock().unwrap().scroll = scroll;
    }

    /// Number of times `set_cursor` was invoked through the trait.
    pub fn set_cursor_calls(&self) -> u32 {
        self.state.lock().unwrap().set_cursor_calls
    }

    /// The most recent scroll-into-view request, if any.
    pub fn last_scroll_request(&self) -> Option<ScrollRequest> {
        self.state.lock().unwrap().last_scroll_request.clone()
    }
}

impl EditorSurface for MemoryEditor {
    fn cursor(&self) -> CursorPosition {
        self.state.lock().unwrap().cursor
    }

    fn set_cursor(&self, pos: CursorPosition) {
        let mut state = self.state.lock().unwrap();
        state.cursor = pos;
        state.set_cursor_calls += 1;
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.state.lock().unwrap().scroll
    }

    fn scroll_into_view(&self, from: CursorPosition, to: CursorPosition, center: bool) {
        self.state.lock().unwrap().last_scroll_request = Some(ScrollRequest { from, to, center });
    }
}

/// A text leaf whose editor may start out deferred.
pub struct MemoryLeaf {
    id: String,
    display_name: String,
    editor: Mutex<Option<Arc<MemoryEditor>>>,
}

impl MemoryLeaf {
    fn new(display_name: &str, loaded: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            display_name: display_name.to_string(),
            editor: Mutex::new(loaded.then(|| Arc::new(MemoryEditor::new()))),
        }
    }

    /// The concrete editor, for test inspection. `None` while deferred.
    pub fn memory_editor(&self) -> Option<Arc<MemoryEditor>> {
        self.editor.lock().unwrap().clone()
    }

    /// Attach an editor to a deferred leaf, as the host would when the tab's
    /// content finishes loading. No-op if already loaded.
    pub fn load_contents(&self) -> Arc<MemoryEditor> {
        let mut editor = self.editor.lock().unwrap();
        editor
            .get_or_insert_with(|| Arc::new(MemoryEditor::new()))
            .clone()
    }
}

impl TextLeaf for MemoryLeaf {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn display_name(&self) -> String {
        self.display_name.clone()
    }

    fn editor(&self) -> Option<Arc<dyn EditorSurface>> {
        self.editor
            .lock()
            .unwrap()
            .clone()
            .map(|e| e as Arc<dyn EditorSurface>)
    }
}

/// In-memory workspace holding an ordered list of leaves.
#[derive(Default)]
pub struct MemoryWorkspace {
    leaves: Mutex<Vec<Arc<MemoryLeaf>>>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a leaf with a loaded editor. Returns the leaf for inspection.
    pub fn open_leaf(&self, display_name: &str) -> Arc<MemoryLeaf> {
        let leaf = Arc::new(MemoryLeaf::new(display_name, true));
        self.leaves.lock().unwrap().push(leaf.clone());
        leaf
    }

    /// Open a leaf whose content is deferred (no editor yet).
    pub fn open_deferred(&self, display_name: &str) -> Arc<MemoryLeaf> {
        let leaf = Arc::new(MemoryLeaf::new(display_name, false));
        self.leaves.lock().unwrap().push(leaf.clone());
        leaf
    }

    pub fn close_leaf(&self, id: &str) {
        self.leaves.lock().unwrap().retain(|l| l.id != id);
    }

    /// Move a leaf to a new position in display order.
    pub fn reorder_leaf(&self, id: &str, new_index: usize) {
        let mut leaves = self.leaves.lock().unwrap();
        if let Some(current) = leaves.iter().position(|l| l.id == id) {
            let leaf = leaves.remove(current);
            let insert = new_index.min(leaves.len());
            leaves.insert(insert, leaf);
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.lock().unwrap().len()
    }
}

impl HostWorkspace for MemoryWorkspace {
    fn text_leaves(&self) -> Vec<Arc<dyn TextLeaf>> {
        self.leaves
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.clone() as Arc<dyn TextLeaf>)
            .collect()
    }
}
