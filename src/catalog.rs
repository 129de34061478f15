//! TOML resource catalogs
//!
//! A catalog is the file-backed input boundary used by tests and by tools
//! that keep their resource set in a manifest rather than fetching it from a
//! backend. Loading validates the one invariant the sorter itself does not
//! check: uri uniqueness.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::SortResult;
use crate::graph::topological_sort;
use crate::resource::SyncRecord;

/// A set of resource records loaded from a manifest
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "resource")]
    pub resources: Vec<SyncRecord>,
}

impl Catalog {
    /// Load and validate a catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let catalog: Catalog =
            toml::from_str(&content).with_context(|| "Failed to parse resource catalog")?;

        catalog.validate()?;

        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        // Validate that uris are unique across the catalog
        let mut seen: HashSet<&str> = HashSet::new();
        for record in &self.resources {
            if !seen.insert(&record.uri) {
                anyhow::bail!("Duplicate resource uri '{}' in catalog", record.uri);
            }
        }

        Ok(())
    }

    /// The order in which the catalog's resources should be written
    pub fn sync_order(&self) -> SortResult<Vec<SyncRecord>> {
        topological_sort(self.resources.clone())
    }

    pub fn get(&self, uri: &str) -> Option<&SyncRecord> {
        self.resources.iter().find(|r| r.uri == uri)
    }

    pub fn uris(&self) -> Vec<&str> {
        self.resources.iter().map(|r| r.uri.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let toml_content = r#"
[[resource]]
type = "user"
id = 1
uri = "u1"

[[resource]]
type = "group"
id = 1
uri = "g1"
parents = ["u1"]
"#;

        let catalog: Catalog = toml::from_str(toml_content).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("g1").unwrap().kind, "group");
        assert!(catalog.get("g1").unwrap().parents.contains("u1"));
    }

    #[test]
    fn test_text_ids_parse() {
        let toml_content = r#"
[[resource]]
type = "user"
id = "alice"
uri = "u-alice"
"#;

        let catalog: Catalog = toml::from_str(toml_content).unwrap();
        assert_eq!(
            catalog.get("u-alice").unwrap().id,
            crate::resource::ResourceId::Text("alice".to_string())
        );
    }

    #[test]
    fn test_duplicate_uri_rejected() {
        let toml_content = r#"
[[resource]]
type = "user"
id = 1
uri = "u1"

[[resource]]
type = "user"
id = 2
uri = "u1"
"#;

        let catalog: Catalog = toml::from_str(toml_content).unwrap();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.toml");

        fs::write(
            &path,
            r#"
[[resource]]
type = "user"
id = 2
uri = "u2"

[[resource]]
type = "user"
id = 1
uri = "u1"

[[resource]]
type = "group"
id = 1
uri = "g1"
parents = ["u1", "u2"]
"#,
        )
        .unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);

        let ordered = catalog.sync_order().unwrap();
        let uris: Vec<&str> = ordered.iter().map(|r| r.uri.as_str()).collect();
        assert_eq!(uris, vec!["u1", "u2", "g1"]);
    }
}
