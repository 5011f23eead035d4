// tabrecall state managers
// Managers own durable state: the tab-to-snapshot map and its on-disk form.

pub mod state_store;
