use thiserror::Error;

/// Errors from the catalog client.
///
/// None of these are recovered locally; every failure is returned to the
/// caller for direct user-facing display.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed identifier or out-of-range paging parameter, detected
    /// before any network call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network failure (DNS, connection refused, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint reported an application-level error or answered with
    /// a non-success status. Carries the first remote error message.
    #[error("{0}")]
    Remote(String),

    /// HTTP success but no usable payload.
    #[error("Respuesta vacía del catálogo")]
    EmptyResponse,

    #[error("parse error: {0}")]
    Parse(String),
}
