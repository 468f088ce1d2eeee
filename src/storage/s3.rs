//! S3-backed listing implementation.
//!
//! # Responsibilities
//! - Build the aws-sdk-s3 client from [`StorageConfig`]
//! - Issue ListObjectsV2 requests with prefix/delimiter
//! - Drain continuation-token pagination into flat key/prefix vectors
//!
//! # Design Decisions
//! - Path-style addressing is configurable so MinIO/localstack endpoints work
//! - Credentials are static from config; no provider chain lookup at runtime

use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::Client;

use crate::config::StorageConfig;
use crate::storage::store::{ObjectLister, StorageError};

/// Listing client over one S3 bucket.
///
/// Constructed once at startup and shared read-only via `Arc`; the inner SDK
/// client is cheaply cloneable and safe for concurrent use.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build the SDK client from configuration.
    pub fn new(config: &StorageConfig) -> Self {
        let creds = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "doghouse-config",
        );

        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(creds)
            .force_path_style(config.force_path_style);

        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectLister for S3ObjectStore {
    async fn list_common_prefixes(
        &self,
        delimiter: &str,
        prefix: &str,
        label: &str,
    ) -> Result<Vec<String>, StorageError> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .delimiter(delimiter)
            .into_paginator()
            .send();

        let mut prefixes = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| StorageError::List {
                label: label.to_string(),
                source: Box::new(e),
            })?;
            for common in page.common_prefixes() {
                if let Some(p) = common.prefix() {
                    prefixes.push(p.to_string());
                }
            }
        }

        tracing::debug!(
            label = %label,
            prefix = %prefix,
            count = prefixes.len(),
            "common-prefix listing completed"
        );
        Ok(prefixes)
    }

    async fn list_objects(&self, prefix: &str, label: &str) -> Result<Vec<String>, StorageError> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .into_paginator()
            .send();

        let mut keys = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| StorageError::List {
                label: label.to_string(),
                source: Box::new(e),
            })?;
            for object in page.contents() {
                if let Some(key) = object.key() {
                    keys.push(key.to_string());
                }
            }
        }

        tracing::debug!(
            label = %label,
            prefix = %prefix,
            count = keys.len(),
            "object listing completed"
        );
        Ok(keys)
    }
}
