//! Request/response contract of the application's own list endpoints:
//! per-user tracking entries for anime and manga.
//!
//! Persistence lives behind those endpoints; this crate only speaks their
//! documented shapes, it never touches the document store directly.

pub mod client;
pub mod error;
pub mod types;

pub use client::ListStoreClient;
pub use error::ListStoreError;
pub use types::AuthContext;
