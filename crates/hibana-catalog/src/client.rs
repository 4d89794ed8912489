use reqwest::Client;
use serde::de::DeserializeOwned;

use hibana_core::models::{DisplayDetail, MediaKind, SearchPage};

use crate::error::CatalogError;
use crate::normalize;
use crate::query::{self, QueryDocument, SearchParams};
use crate::types::{DetailData, GraphQLResponse, SearchData};

pub const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co";

/// Fallback when the endpoint reports an error without a message.
const GENERIC_REMOTE_ERROR: &str = "Error consultando el catálogo";

/// Remote catalog client. One POST per operation; no retry, no timeout
/// override beyond transport defaults, no authentication, no caching.
pub struct CatalogClient {
    endpoint: String,
    http: Client,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Point the client at a different endpoint (configuration, tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        doc: &QueryDocument,
    ) -> Result<T, CatalogError> {
        tracing::debug!(operation, "catalog GraphQL request");

        let resp = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(doc)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status.as_u16(), "catalog API error");
            return Err(CatalogError::Remote(first_error_message(&body)));
        }

        tracing::debug!(operation, status = %status, "catalog response received");
        let envelope: GraphQLResponse<T> = resp
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        unwrap_envelope(envelope)
    }

    /// Fetch one page of search results, normalized. `PageInfo` is passed
    /// through from the remote envelope unchanged.
    pub async fn search(
        &self,
        kind: MediaKind,
        params: &SearchParams,
    ) -> Result<SearchPage, CatalogError> {
        let doc = query::build_search(kind, params)?;
        let operation = match kind {
            MediaKind::Anime => "SearchAnime",
            MediaKind::Manga => "SearchManga",
        };
        let data: SearchData = self.execute(operation, &doc).await?;
        Ok(SearchPage {
            page_info: data.page.page_info,
            items: data
                .page
                .media
                .into_iter()
                .map(|record| normalize::normalize(kind, record))
                .collect(),
        })
    }

    /// Fetch one record by identifier, normalized for the detail view.
    /// The identifier is validated before anything goes on the wire.
    pub async fn get_by_id(&self, kind: MediaKind, id: &str) -> Result<DisplayDetail, CatalogError> {
        let doc = query::build_detail(kind, id)?;
        let operation = match kind {
            MediaKind::Anime => "AnimeDetail",
            MediaKind::Manga => "MangaDetail",
        };
        let data: DetailData = self.execute(operation, &doc).await?;
        Ok(normalize::normalize_detail(kind, data.media))
    }

    // Thin per-kind accessors, matching the four routes the application
    // exposes.

    pub async fn search_anime(&self, params: &SearchParams) -> Result<SearchPage, CatalogError> {
        self.search(MediaKind::Anime, params).await
    }

    pub async fn search_manga(&self, params: &SearchParams) -> Result<SearchPage, CatalogError> {
        self.search(MediaKind::Manga, params).await
    }

    pub async fn anime_by_id(&self, id: &str) -> Result<DisplayDetail, CatalogError> {
        self.get_by_id(MediaKind::Anime, id).await
    }

    pub async fn manga_by_id(&self, id: &str) -> Result<DisplayDetail, CatalogError> {
        self.get_by_id(MediaKind::Manga, id).await
    }
}

/// Apply the envelope policy: non-empty `errors` wins over `data`, and a
/// success response without `data` is its own failure.
fn unwrap_envelope<T>(envelope: GraphQLResponse<T>) -> Result<T, CatalogError> {
    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            let message = errors
                .into_iter()
                .next()
                .and_then(|e| e.message)
                .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string());
            return Err(CatalogError::Remote(message));
        }
    }
    envelope.data.ok_or(CatalogError::EmptyResponse)
}

/// Best-effort extraction of the first remote error message from a
/// non-success body; the body may not even be JSON.
fn first_error_message(body: &str) -> String {
    serde_json::from_str::<GraphQLResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.errors)
        .and_then(|errors| errors.into_iter().next())
        .and_then(|e| e.message)
        .unwrap_or_else(|| GENERIC_REMOTE_ERROR.to_string())
}
