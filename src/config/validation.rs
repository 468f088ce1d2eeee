//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and endpoint URLs actually parse
//! - Require bucket/credentials for the S3 backend
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::{AppConfig, StorageBackend};

/// A single semantic problem found in the configuration.
#[derive(Debug)]
pub enum ValidationError {
    /// Listener bind address does not parse as a socket address.
    InvalidBindAddress(String),
    /// S3 backend selected without a bucket name.
    MissingBucket,
    /// S3 backend selected without static credentials.
    MissingCredentials,
    /// Endpoint URL does not parse.
    InvalidEndpointUrl(String),
    /// Metrics exporter address does not parse.
    InvalidMetricsAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBindAddress(addr) => write!(f, "invalid bind address {addr:?}"),
            Self::MissingBucket => write!(f, "storage.bucket is required for the s3 backend"),
            Self::MissingCredentials => {
                write!(f, "storage credentials are required for the s3 backend")
            }
            Self::InvalidEndpointUrl(url) => write!(f, "invalid endpoint URL {url:?}"),
            Self::InvalidMetricsAddress(addr) => write!(f, "invalid metrics address {addr:?}"),
        }
    }
}

/// Check every semantic rule, collecting all failures.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.storage.backend == StorageBackend::S3 {
        if config.storage.bucket.is_empty() {
            errors.push(ValidationError::MissingBucket);
        }
        if config.storage.access_key_id.is_empty() || config.storage.secret_access_key.is_empty() {
            errors.push(ValidationError::MissingCredentials);
        }
    }

    if let Some(endpoint) = &config.storage.endpoint_url {
        if Url::parse(endpoint).is_err() {
            errors.push(ValidationError::InvalidEndpointUrl(endpoint.clone()));
        }
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::StorageConfig;

    fn s3_config() -> AppConfig {
        AppConfig {
            storage: StorageConfig {
                bucket: "dog-images".to_string(),
                access_key_id: "key".to_string(),
                secret_access_key: "secret".to_string(),
                ..StorageConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_valid_s3_config_passes() {
        assert!(validate_config(&s3_config()).is_ok());
    }

    #[test]
    fn test_s3_without_bucket_or_creds_collects_all_errors() {
        let config = AppConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_memory_backend_needs_no_bucket() {
        let config = AppConfig {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                ..StorageConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_bad_endpoint_url_is_rejected() {
        let mut config = s3_config();
        config.storage.endpoint_url = Some("not a url".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_bad_bind_address_is_rejected() {
        let mut config = s3_config();
        config.listener.bind_address = "nowhere".to_string();
        assert!(validate_config(&config).is_err());
    }
}
