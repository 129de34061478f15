//! Graph module for resource dependency resolution
//!
//! Provides:
//! - Deterministic topological sorting (Kahn's algorithm)
//! - Dependency closure helpers

pub mod deps;
pub mod toposort;

pub use deps::{collect_with_parents, dependents_of};
pub use toposort::{topological_sort, topological_sort_strict};
