//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the breed image service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Object-storage bucket settings.
    pub storage: StorageConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Which listing backend serves the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// aws-sdk-s3 against a real bucket (or an S3-compatible endpoint).
    S3,
    /// In-process key list seeded from `seed_keys`; local development only.
    Memory,
}

/// Object-storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Listing backend to use.
    pub backend: StorageBackend,

    /// Bucket holding the `breeds/` key tree.
    pub bucket: String,

    /// Bucket region.
    pub region: String,

    /// Custom endpoint URL (MinIO, localstack). None = AWS.
    pub endpoint_url: Option<String>,

    /// Static access key id.
    pub access_key_id: String,

    /// Static secret access key.
    pub secret_access_key: String,

    /// Use path-style addressing (required by most S3-compatible servers).
    pub force_path_style: bool,

    /// Keys preloaded into the memory backend.
    pub seed_keys: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::S3,
            bucket: String::new(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
            access_key_id: String::new(),
            secret_access_key: String::new(),
            force_path_style: false,
            seed_keys: Vec::new(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout in seconds, enforced by middleware.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Expose a Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Address for the metrics exporter.
    pub metrics_address: String,

    /// Default tracing filter when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
            log_filter: "doghouse=info,tower_http=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_deserializes_with_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            bucket = "dog-images"
            "#,
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.storage.bucket, "dog-images");
        assert_eq!(config.storage.backend, StorageBackend::S3);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_memory_backend_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            backend = "memory"
            seed_keys = ["breeds/boxer/a.jpg"]
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.seed_keys, vec!["breeds/boxer/a.jpg"]);
    }
}
