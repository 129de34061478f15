//! Error types for sort and closure operations

use thiserror::Error;

/// Result type for sort and closure operations
pub type SortResult<T> = Result<T, SortError>;

/// Errors that can occur while ordering resources
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortError {
    /// A cycle prevented a full ordering
    ///
    /// Carries the uri of every resource still unresolved when the cycle was
    /// detected, in their pre-sort order. Identifying the exact cycle edges
    /// is left to the caller.
    #[error("Circular dependency detected among {} resources: {}", .remaining.len(), .remaining.join(", "))]
    CycleDetected {
        /// Uris of the resources that could not be ordered
        remaining: Vec<String>,
    },

    /// A resource declares a parent that is not present in the input set
    ///
    /// Only raised by the strict sort variant; the default sort ignores
    /// parents outside the input set.
    #[error("Resource '{uri}' declares parent '{parent}' which is not in the input set")]
    DanglingParent {
        /// The resource declaring the parent
        uri: String,
        /// The parent uri that was not found
        parent: String,
    },

    /// A requested resource does not exist in the record set
    #[error("Resource '{uri}' not found")]
    UnknownResource {
        /// The uri that was not found
        uri: String,
    },
}
