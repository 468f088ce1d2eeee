//! Doghouse library — dog breed image API over object storage.

pub mod catalog;
pub mod config;
pub mod http;
pub mod observability;
pub mod routing;
pub mod storage;

pub use config::AppConfig;
pub use http::HttpServer;
