//! Object storage subsystem.
//!
//! # Data Flow
//! ```text
//! catalog / image resolver
//!     → ObjectLister trait (store.rs)
//!         → s3.rs      (aws-sdk-s3 ListObjectsV2, production)
//!         → memory.rs  (in-process key list, dev & tests)
//! ```
//!
//! # Design Decisions
//! - The catalog only needs two listing primitives: one-level common-prefix
//!   listing and full-key listing under a prefix. Everything else stays out
//!   of the trait.
//! - The S3 client is built once at startup and shared read-only via Arc;
//!   handlers never construct clients.
//! - Listing order is whatever the backend returns; callers must not assume
//!   sorted output.
//! - No retries here. A failed listing surfaces as StorageError and the
//!   request fails.

pub mod memory;
pub mod s3;
pub mod store;

pub use memory::MemoryStore;
pub use s3::S3ObjectStore;
pub use store::{ObjectLister, StorageError};
