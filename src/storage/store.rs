//! Listing interface consumed by the catalog.

use async_trait::async_trait;
use thiserror::Error;

/// Error type for object-store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A listing request failed at the backend.
    #[error("object store listing failed ({label}): {source}")]
    List {
        /// Diagnostic label of the failed operation.
        label: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Read-only listing operations over the image bucket.
///
/// `label` tags each call with the operation that issued it (for example
/// `listSubBreeds:boxer`). It is a diagnostic/cache key for the backend;
/// the catalog attaches it but implements no caching policy of its own.
#[async_trait]
pub trait ObjectLister: Send + Sync {
    /// One-level "directory" listing: keys under `prefix` truncated at the
    /// next `delimiter`, deduplicated, in backend order.
    async fn list_common_prefixes(
        &self,
        delimiter: &str,
        prefix: &str,
        label: &str,
    ) -> Result<Vec<String>, StorageError>;

    /// Full-key listing of every object under `prefix`, in backend order.
    async fn list_objects(&self, prefix: &str, label: &str) -> Result<Vec<String>, StorageError>;
}
