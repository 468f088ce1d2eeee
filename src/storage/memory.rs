//! In-process listing implementation.
//!
//! Serves the same two listing primitives as the S3 backend from a fixed key
//! list. Selected with `storage.backend = "memory"` for local development;
//! also the substrate for deterministic tests.

use async_trait::async_trait;

use crate::storage::store::{ObjectLister, StorageError};

/// Object store holding a static list of keys in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    keys: Vec<String>,
}

impl MemoryStore {
    /// Create a store from a list of object keys.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectLister for MemoryStore {
    async fn list_common_prefixes(
        &self,
        delimiter: &str,
        prefix: &str,
        _label: &str,
    ) -> Result<Vec<String>, StorageError> {
        // S3 delimiter semantics: group keys by the first delimiter occurrence
        // after the prefix; keys without one are plain objects, not prefixes.
        let mut prefixes: Vec<String> = Vec::new();
        for key in &self.keys {
            if let Some(rest) = key.strip_prefix(prefix) {
                if let Some(pos) = rest.find(delimiter) {
                    let common = format!("{prefix}{}{delimiter}", &rest[..pos]);
                    if !prefixes.contains(&common) {
                        prefixes.push(common);
                    }
                }
            }
        }
        Ok(prefixes)
    }

    async fn list_objects(&self, prefix: &str, _label: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .keys
            .iter()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}
