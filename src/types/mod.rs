// tabrecall shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod position;
pub mod snapshot;
