//! Deterministic write ordering using topological sort (Kahn's algorithm)
//!
//! The input is pre-sorted by `(type, id)` before any dependency processing.
//! That fixed pre-sort is the only source of ordering among resources with no
//! constraint between them, which makes the output deterministic and clusters
//! same-typed resources so a downstream batch writer can coalesce them.
//!
//! Kahn's algorithm is required here, not merely convenient: it consumes a
//! working list that preserves the established order among unblocked entries,
//! so the pre-sort survives into the final order for every don't-care tie.
//! A DFS-based sort would impose traversal order instead.

use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

use crate::error::{SortError, SortResult};
use crate::resource::Resource;

/// Orders resources so every parent appears strictly before its dependents
///
/// Returns a permutation of the input: nothing is added or dropped. Parents
/// referencing uris outside the input set are not ordering constraints and
/// are ignored (partial graphs are valid input). On a cycle no output is
/// produced and the error carries the unresolved uris in pre-sort order.
pub fn topological_sort<R: Resource>(resources: Vec<R>) -> SortResult<Vec<R>> {
    let mut working = presort(resources);
    let (mut incoming, outgoing) = build_edges(&working);

    let mut result = Vec::with_capacity(working.len());
    let mut passes = 0usize;

    while !working.is_empty() {
        passes += 1;
        let mut blocked = Vec::new();
        let mut emitted = 0usize;

        for resource in working {
            // Incoming edges may already have been cleared by an emission
            // earlier in this same pass.
            let ready = incoming
                .get(resource.uri())
                .map_or(true, |pending| pending.is_empty());

            if ready {
                if let Some(dependents) = outgoing.get(resource.uri()) {
                    for dependent in dependents {
                        if let Some(pending) = incoming.get_mut(dependent.as_str()) {
                            pending.remove(resource.uri());
                        }
                    }
                }
                emitted += 1;
                result.push(resource);
            } else {
                blocked.push(resource);
            }
        }

        if emitted == 0 {
            let remaining: Vec<String> = blocked.iter().map(|r| r.uri().to_string()).collect();
            debug!(unresolved = remaining.len(), "cycle detected in resource graph");
            return Err(SortError::CycleDetected { remaining });
        }

        trace!(pass = passes, emitted, blocked = blocked.len(), "sort pass complete");
        working = blocked;
    }

    debug!(resources = result.len(), passes, "resource ordering complete");
    Ok(result)
}

/// Like [`topological_sort`], but fails on parents outside the input set
///
/// Opt-in variant for callers that consider a dangling parent reference a
/// bug in their input rather than a partial graph.
pub fn topological_sort_strict<R: Resource>(resources: Vec<R>) -> SortResult<Vec<R>> {
    let present: HashSet<&str> = resources.iter().map(|r| r.uri()).collect();

    for resource in &resources {
        // Report the smallest missing parent so the error is stable across runs
        let mut missing: Vec<&String> = resource
            .parents()
            .iter()
            .filter(|p| !present.contains(p.as_str()))
            .collect();
        missing.sort();

        if let Some(parent) = missing.first() {
            return Err(SortError::DanglingParent {
                uri: resource.uri().to_string(),
                parent: (*parent).clone(),
            });
        }
    }

    topological_sort(resources)
}

/// Pre-sort by `(type, id)` ascending
fn presort<R: Resource>(mut resources: Vec<R>) -> Vec<R> {
    resources.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    resources
}

type EdgeMaps = (HashMap<String, HashSet<String>>, HashMap<String, Vec<String>>);

/// Build the per-call edge maps
///
/// `incoming[uri]` is the subset of declared parents actually present in the
/// input set; `outgoing[uri]` lists the resources that declare `uri` as a
/// parent. Both are working copies owned by this call; the input resources
/// are never mutated and nothing is cached across calls.
fn build_edges<R: Resource>(resources: &[R]) -> EdgeMaps {
    let present: HashSet<&str> = resources.iter().map(|r| r.uri()).collect();

    let mut incoming: HashMap<String, HashSet<String>> = HashMap::new();
    let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();

    for resource in resources {
        let deps: HashSet<String> = resource
            .parents()
            .iter()
            .filter(|p| present.contains(p.as_str()))
            .cloned()
            .collect();

        for parent in &deps {
            outgoing
                .entry(parent.clone())
                .or_default()
                .push(resource.uri().to_string());
        }
        incoming.insert(resource.uri().to_string(), deps);
    }

    (incoming, outgoing)
}
