// tabrecall state store
// Owns the persisted view-state document: loading, saving, and pruning the
// per-tab snapshot map. The document is stored as a JSON file, by default
// under the platform data directory.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::platform;
use crate::types::errors::StoreError;
use crate::types::snapshot::{TabSnapshot, ViewSettings};

const STORE_FILE_NAME: &str = "view-state.json";

/// Durable store for the tab snapshot map.
///
/// `load` is effectively once per process lifetime; every `save` overwrites
/// the file in full, so the last writer wins and no merge ever happens.
pub struct SettingsStore {
    store_path: PathBuf,
    settings: ViewSettings,
    loaded: bool,
}

impl SettingsStore {
    /// Creates a new SettingsStore.
    ///
    /// If `path_override` is `Some`, uses that path for the store file.
    /// Otherwise, uses the platform-specific data directory with
    /// `view-state.json`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let store_path =
            path_override.unwrap_or_else(|| platform::get_data_dir().join(STORE_FILE_NAME));

        Self {
            store_path,
            settings: ViewSettings::default(),
            loaded: false,
        }
    }

    /// Loads the persisted document, or defaults if no file exists.
    ///
    /// Persisted values win over defaults. A repeated call is a logged no-op,
    /// not an error. A malformed file is a serialization error.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        if self.loaded {
            debug!(path = %self.store_path.display(), "Store already loaded, skipping");
            return Ok(());
        }

        if !self.store_path.exists() {
            self.settings = ViewSettings::default();
            self.loaded = true;
            return Ok(());
        }

        let content = fs::read_to_string(&self.store_path)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to read store file: {}", e)))?;

        // serde(default) on ViewSettings merges a partial document over
        // defaults, persisted values winning.
        self.settings = serde_json::from_str(&content).map_err(|e| {
            StoreError::Serialization(format!("Failed to parse store file: {}", e))
        })?;
        self.loaded = true;

        debug!(
            path = %self.store_path.display(),
            tabs = self.settings.tabs.len(),
            "Loaded view-state store"
        );
        Ok(())
    }

    /// Writes the current in-memory document to disk in full.
    ///
    /// Creates parent directories if they don't exist. Overwrites any
    /// concurrent external modification to the file.
    pub async fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Io(format!("Failed to create store directory: {}", e)))?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            StoreError::Serialization(format!("Failed to serialize view state: {}", e))
        })?;

        fs::write(&self.store_path, json)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write store file: {}", e)))?;

        debug!(tabs = self.settings.tabs.len(), "Saved view-state store");
        Ok(())
    }

    /// Removes every entry whose id is not in `live_ids`.
    ///
    /// Opportunistic: skipping it only lets orphan entries accumulate, they
    /// are never matched again.
    pub fn prune(&mut self, live_ids: &HashSet<String>) {
        let before = self.settings.tabs.len();
        self.settings.tabs.retain(|id, _| live_ids.contains(id));
        let dropped = before - self.settings.tabs.len();
        if dropped > 0 {
            debug!(dropped, "Pruned orphan tab entries");
        }
    }

    /// Replaces the tab map wholesale.
    pub fn replace_tabs(&mut self, tabs: HashMap<String, TabSnapshot>) {
        self.settings.tabs = tabs;
    }

    pub fn get(&self, id: &str) -> Option<&TabSnapshot> {
        self.settings.tabs.get(id)
    }

    pub fn tabs(&self) -> &HashMap<String, TabSnapshot> {
        &self.settings.tabs
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }
}
