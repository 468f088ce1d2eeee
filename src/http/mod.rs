//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs   (Axum setup, catch-all route, middleware)
//!     → routing     (ordered template table, first match wins)
//!     → handlers.rs (endpoint dispatch into catalog/image calls)
//!     → response.rs (JSON envelopes, error shapes)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
