//! Client for the remote media catalog (AniList GraphQL).
//!
//! Builds parameterized query documents for the two media kinds, executes
//! them against the catalog endpoint, translates the filter vocabulary in
//! both directions, and projects remote records into the application's
//! display model. Stateless request/response only: no retries, no caching,
//! no authentication.

pub mod client;
pub mod error;
pub mod mapper;
pub mod normalize;
pub mod query;
pub mod session;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use query::SearchParams;
