// tabrecall host abstraction
// The host application owns the tabs and the editing surfaces; these traits
// are the narrow slice of it the view-state service consumes. All methods
// take `&self`: the host dispatches events single-threaded, implementations
// use interior mutability.

use std::sync::Arc;

use crate::types::position::{CursorPosition, ScrollOffset};

pub mod memory;

/// Editing surface exposed by the host for one loaded tab.
pub trait EditorSurface {
    fn cursor(&self) -> CursorPosition;
    fn set_cursor(&self, pos: CursorPosition);
    /// Current viewport offset. Host-defined units; see [`ScrollOffset`].
    fn scroll_offset(&self) -> ScrollOffset;
    /// Ask the host to bring the given range into view, optionally centering
    /// the viewport on it.
    fn scroll_into_view(&self, from: CursorPosition, to: CursorPosition, center: bool);
}

/// One host-managed pane displaying a text document.
pub trait TextLeaf {
    /// Host-assigned identifier, stable across restarts within a session
    /// persistence file. Opaque; must not be assumed to survive tab
    /// re-creation.
    fn id(&self) -> String;
    fn display_name(&self) -> String;
    /// The editing surface, or `None` while the tab's content is deferred.
    fn editor(&self) -> Option<Arc<dyn EditorSurface>>;
}

/// The host's tab registry, narrowed to text-document leaves.
pub trait HostWorkspace {
    /// All currently open text leaves, in display order. Includes deferred
    /// leaves; callers filter on [`TextLeaf::editor`] where eligibility
    /// matters.
    fn text_leaves(&self) -> Vec<Arc<dyn TextLeaf>>;
}
