//! Dependency closure helpers
//!
//! Used by embedding tools to decide what subset of a record set actually
//! needs to be handed to the sorter: expanding selected resources to include
//! their transitive parents, and finding everything downstream of a resource.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{SortError, SortResult};
use crate::resource::Resource;

/// Expand a set of root uris to include every transitive parent present in
/// the record set
///
/// Unknown roots are an error. Parents of a known record that are absent
/// from the record set are ignored, matching the sorter's partial-graph
/// policy.
pub fn collect_with_parents<R: Resource>(
    records: &[R],
    roots: &[&str],
) -> SortResult<HashSet<String>> {
    let by_uri: HashMap<&str, &R> = records.iter().map(|r| (r.uri(), r)).collect();

    let mut required: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = roots.iter().map(|&s| s.to_string()).collect();

    while let Some(uri) = queue.pop_front() {
        if required.contains(&uri) {
            continue;
        }

        match by_uri.get(uri.as_str()) {
            Some(record) => {
                required.insert(uri.clone());
                for parent in record.parents() {
                    if !required.contains(parent) && by_uri.contains_key(parent.as_str()) {
                        queue.push_back(parent.clone());
                    }
                }
            }
            None => return Err(SortError::UnknownResource { uri }),
        }
    }

    Ok(required)
}

/// Get all resources that depend on the given uri (directly or indirectly)
pub fn dependents_of<R: Resource>(records: &[R], uri: &str) -> HashSet<String> {
    let mut dependents: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(uri.to_string());

    while let Some(current) = queue.pop_front() {
        for record in records {
            if record.parents().contains(&current) && !dependents.contains(record.uri()) {
                dependents.insert(record.uri().to_string());
                queue.push_back(record.uri().to_string());
            }
        }
    }

    dependents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::SyncRecord;

    fn create_test_records() -> Vec<SyncRecord> {
        vec![
            SyncRecord::new("org", 1, "org1"),
            SyncRecord::new("user", 1, "u1").with_parents(["org1"]),
            SyncRecord::new("user", 2, "u2").with_parents(["org1"]),
            SyncRecord::new("group", 1, "g1").with_parents(["u1", "u2"]),
            SyncRecord::new("group", 2, "g2"),
        ]
    }

    #[test]
    fn test_collect_with_parents() {
        let records = create_test_records();
        let required = collect_with_parents(&records, &["g1"]).unwrap();

        assert!(required.contains("g1"));
        assert!(required.contains("u1"));
        assert!(required.contains("u2"));
        assert!(required.contains("org1"));
        assert!(!required.contains("g2"));
    }

    #[test]
    fn test_collect_unknown_root() {
        let records = create_test_records();
        let err = collect_with_parents(&records, &["nope"]).unwrap_err();

        assert_eq!(
            err,
            SortError::UnknownResource {
                uri: "nope".to_string(),
            }
        );
    }

    #[test]
    fn test_collect_ignores_absent_parents() {
        let records = vec![SyncRecord::new("user", 1, "u1").with_parents(["elsewhere"])];
        let required = collect_with_parents(&records, &["u1"]).unwrap();

        assert_eq!(required.len(), 1);
        assert!(required.contains("u1"));
    }

    #[test]
    fn test_dependents_of() {
        let records = create_test_records();
        let dependents = dependents_of(&records, "org1");

        assert!(dependents.contains("u1"));
        assert!(dependents.contains("u2"));
        assert!(dependents.contains("g1"));
        assert!(!dependents.contains("g2"));
        assert!(!dependents.contains("org1"));
    }

    #[test]
    fn test_dependents_of_leaf() {
        let records = create_test_records();
        assert!(dependents_of(&records, "g1").is_empty());
    }
}
