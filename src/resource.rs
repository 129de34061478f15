//! Resource descriptors consumed by the sorter
//!
//! A resource is an opaque item with a type, an id, and a set of parent
//! references. The sorter only needs those four attributes, so they are
//! expressed as a trait; `SyncRecord` is the concrete record type used by
//! the catalog and by embedding tools that do not have their own.

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// Ordering key for a resource id
///
/// Ids coming out of real backends are sometimes numeric and sometimes
/// textual. Variant order is meaningful: all integer ids sort before all
/// text ids, then naturally within each variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Int(n) => write!(f, "{}", n),
            ResourceId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(n: i64) -> Self {
        ResourceId::Int(n)
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::Text(s.to_string())
    }
}

/// The attribute surface the sorter needs from a resource
///
/// `uri` must be unique across the whole input set; that is a caller
/// invariant, not something the sorter enforces (the catalog checks it at
/// load time). `parents` holds uris this resource depends on.
pub trait Resource {
    /// The resource type, used as the primary ordering key
    fn kind(&self) -> &str;

    /// The resource id, used as the secondary ordering key
    fn id(&self) -> &ResourceId;

    /// Unique identifier used as the graph node key
    fn uri(&self) -> &str;

    /// Uris of the resources this resource depends on
    fn parents(&self) -> &HashSet<String>;

    /// The `(type, id)` pre-sort key
    fn sort_key(&self) -> (&str, &ResourceId) {
        (self.kind(), self.id())
    }
}

/// A concrete resource record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SyncRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: ResourceId,
    pub uri: String,
    #[serde(default)]
    pub parents: HashSet<String>,
}

impl SyncRecord {
    /// Creates a record with no parents
    pub fn new(kind: impl Into<String>, id: impl Into<ResourceId>, uri: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
            uri: uri.into(),
            parents: HashSet::new(),
        }
    }

    /// Adds parent uris to the record
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parents.extend(parents.into_iter().map(Into::into));
        self
    }
}

impl Resource for SyncRecord {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn uri(&self) -> &str {
        &self.uri
    }

    fn parents(&self) -> &HashSet<String> {
        &self.parents
    }
}
