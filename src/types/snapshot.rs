use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::position::{CursorPosition, ScrollOffset};

/// Saved view state for one tracked tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSnapshot {
    /// Host-assigned stable identifier. Opaque; may stop matching anything
    /// once the tab is closed or the layout is rebuilt.
    pub id: String,
    /// Informational only, never used for identity.
    pub display_name: String,
    /// Last-known position among open tabs. Informational only.
    pub order_index: usize,
    pub cursor: CursorPosition,
    pub scroll: ScrollOffset,
}

/// The entire persisted document: a map from tab id to its saved state.
///
/// No schema version field exists; unknown or missing fields merge over
/// defaults on load, with persisted values winning.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ViewSettings {
    pub tabs: HashMap<String, TabSnapshot>,
}
