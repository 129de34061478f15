//! Syncorder - deterministic dependency ordering for batch sync
//!
//! A library for ordering interdependent resources before a batch
//! synchronization/write operation:
//! - Topological sorting with a stable `(type, id)` pre-sort, so the same
//!   input always yields the same output and same-typed resources are
//!   grouped for batched writes
//! - Cycle detection with the unresolved resources attached
//! - Dependency closure helpers (transitive parents, transitive dependents)
//! - TOML catalog loading for embedding tools and tests

pub mod catalog;
pub mod error;
pub mod graph;
pub mod resource;

pub use catalog::Catalog;
pub use error::{SortError, SortResult};
pub use graph::{collect_with_parents, dependents_of, topological_sort, topological_sort_strict};
pub use resource::{Resource, ResourceId, SyncRecord};
