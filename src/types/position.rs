use serde::{Deserialize, Serialize};

/// Cursor position within a document: zero-based line and character offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: u32,
    pub ch: u32,
}

impl CursorPosition {
    pub fn new(line: u32, ch: u32) -> Self {
        Self { line, ch }
    }
}

/// Viewport offset as reported by the host.
///
/// Units and coordinate space are host-defined and not guaranteed to be
/// re-appliable at restore time; restore only brings the cursor line back
/// into view rather than replaying this offset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct ScrollOffset {
    pub top: f64,
    pub left: f64,
}
