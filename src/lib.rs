//! tabrecall — per-tab cursor and scroll state persistence for text-editing hosts.
//!
//! The host owns the tabs; this crate only remembers where the cursor and
//! viewport were in each of them and puts them back after a restart. Wire it
//! up by forwarding two host events to a
//! [`services::view_state::ViewStateService`]: the one-time "layout ready"
//! signal to `on_layout_ready`, and every active-tab change to
//! `on_active_leaf_change`.

pub mod host;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
