//! snapvault - An in-memory, branching version-history store for named files
//!
//! Every file owns a tree of versions. Edits mutate the active draft;
//! editing a snapshot branches a fresh child instead. Files are looked up
//! through an open-addressing registry, versions through a per-file
//! integer-keyed index, and ranking queries drain a binary max-heap.

pub mod cli;
pub mod clock;
pub mod observability;
pub mod ranking;
pub mod registry;
pub mod store;
pub mod table;
pub mod version;
