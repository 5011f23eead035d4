use std::fmt;

// === StoreError ===

/// Errors related to loading and saving the view-state document.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the store file failed.
    Io(String),
    /// The store file could not be serialized or deserialized.
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Store I/O failed: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Store serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
