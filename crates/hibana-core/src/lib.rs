//! Shared domain models, configuration, and the core error type for the
//! Hibana anime/manga tracking hub.

pub mod config;
pub mod error;
pub mod models;

pub use config::AppConfig;
pub use error::HibanaError;
