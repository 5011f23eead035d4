//! View-state service.
//!
//! Decides when to save vs. restore per-tab cursor/scroll state and keeps the
//! store reconciled against the host's mutable tab list. One instance per
//! process; the host's event dispatch is the only caller, so no locking is
//! needed. The host wires two events in:
//!
//! - the one-time "layout ready" signal → [`ViewStateService::on_layout_ready`]
//! - every active-tab change → [`ViewStateService::on_active_leaf_change`]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::host::{HostWorkspace, TextLeaf};
use crate::managers::state_store::SettingsStore;
use crate::types::errors::StoreError;
use crate::types::snapshot::TabSnapshot;

/// Stateful service combining the restore and save paths.
///
/// The session flags (`initialized`, `restored_tabs`) live here, tied to this
/// instance's lifetime; they are never persisted.
pub struct ViewStateService {
    workspace: Arc<dyn HostWorkspace>,
    store: SettingsStore,
    /// Becomes true exactly once, after the first load-and-restore pass.
    /// Gates all save/restore work triggered by activation events.
    initialized: bool,
    /// Tab ids that already received a restore attempt this process lifetime.
    restored_tabs: HashSet<String>,
}

impl ViewStateService {
    pub fn new(workspace: Arc<dyn HostWorkspace>, store: SettingsStore) -> Self {
        Self {
            workspace,
            store,
            initialized: false,
            restored_tabs: HashSet::new(),
        }
    }

    /// Startup restore pass. Invoke once, after the host signals its layout
    /// is fully initialized; a repeated call is a logged no-op.
    ///
    /// Loads the store, marks the session initialized, restores every
    /// currently open eligible tab (order is irrelevant), then prunes store
    /// entries that match no open tab.
    pub async fn on_layout_ready(&mut self) -> Result<(), StoreError> {
        if self.initialized {
            debug!("Already initialized, skipping");
            return Ok(());
        }

        self.store.load().await?;
        // Flip the flag before touching tabs: if a per-tab restore fails we
        // bail out rather than rerun the whole pass later.
        self.initialized = true;

        let leaves = self.workspace.text_leaves();
        let mut applied = 0;
        for leaf in &leaves {
            if self.restore_one(leaf.as_ref()) {
                applied += 1;
            }
        }

        // Orphan entries match no open tab and would never be hit again.
        let live: HashSet<String> = leaves.iter().map(|l| l.id()).collect();
        self.store.prune(&live);

        info!(open = leaves.len(), applied, "Startup restore pass complete");
        Ok(())
    }

    /// Applies the saved cursor to one tab, if there is anything meaningful
    /// to apply. Returns whether the cursor was actually set.
    ///
    /// Tabs without a loaded editor are filtered out here and stay
    /// unrestored, so a later activation can pick them up. For everything
    /// else the tab id is recorded as restored regardless of which branch
    /// runs, keeping redundant activation notifications from re-triggering
    /// first-open logic.
    pub fn restore_one(&mut self, leaf: &dyn TextLeaf) -> bool {
        let editor = match leaf.editor() {
            Some(editor) => editor,
            None => return false,
        };
        let id = leaf.id();

        let applied = match self.store.get(&id) {
            None => false,
            Some(saved) => {
                let current = editor.cursor();
                // Skip when the host already placed the cursor somewhere
                // non-trivial, or the saved line matches where it already is.
                // Reapplying would discard legitimate host behavior.
                if current.line != 0 || saved.cursor.line == current.line {
                    debug!(
                        tab = %leaf.display_name(),
                        current_line = current.line,
                        saved_line = saved.cursor.line,
                        "Nothing meaningful to restore, skipping"
                    );
                    false
                } else {
                    let cursor = saved.cursor;
                    editor.set_cursor(cursor);
                    // Exact scroll-offset restoration is not guaranteed; the
                    // contract is "cursor line visible, roughly centered".
                    editor.scroll_into_view(cursor, cursor, true);
                    debug!(
                        tab = %leaf.display_name(),
                        line = cursor.line,
                        ch = cursor.ch,
                        "Restored cursor"
                    );
                    true
                }
            }
        };

        self.restored_tabs.insert(id);
        applied
    }

    /// Activation-change handler. Fires on every host-reported change of the
    /// focused tab.
    ///
    /// Before the startup pass has run this is a no-op. Otherwise it gives
    /// lazily-initialized tabs a late first restore, then re-snapshots every
    /// open eligible tab into the store wholesale and persists it. Tabs whose
    /// cursor sits at line 0 are excluded: that position is
    /// indistinguishable from "never interacted with".
    pub async fn on_active_leaf_change(&mut self, leaf: &dyn TextLeaf) -> Result<(), StoreError> {
        if !self.initialized {
            return Ok(());
        }

        let id = leaf.id();
        if !self.restored_tabs.contains(&id) && self.store.get(&id).is_some() {
            // The tab had no live editor at startup and only became
            // restorable now that it is focused.
            self.restore_one(leaf);
        }

        let mut tabs = HashMap::new();
        for (index, open) in self.workspace.text_leaves().iter().enumerate() {
            let editor = match open.editor() {
                Some(editor) => editor,
                None => continue,
            };
            let cursor = editor.cursor();
            if cursor.line == 0 {
                continue;
            }
            tabs.insert(
                open.id(),
                TabSnapshot {
                    id: open.id(),
                    display_name: open.display_name(),
                    order_index: index,
                    cursor,
                    scroll: editor.scroll_offset(),
                },
            );
        }

        debug!(tabs = tabs.len(), "Snapshotting open tabs");
        // Full resync instead of incremental update: tab ids are not
        // guaranteed stable across host reorder/recreate, and replacing the
        // map wholesale avoids accumulating stale entries.
        self.store.replace_tabs(tabs);
        self.store.save().await
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the given tab id already received a restore attempt this
    /// process lifetime.
    pub fn was_restored(&self, id: &str) -> bool {
        self.restored_tabs.contains(id)
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }
}
