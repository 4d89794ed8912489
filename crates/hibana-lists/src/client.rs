use reqwest::Client;

use crate::error::ListStoreError;
use crate::types::{
    AnimeEntryUpdate, AnimeListEntry, AnimeListResponse, ApiErrorBody, AuthContext,
    MangaEntryUpdate, MangaListEntry, MangaListResponse, NewAnimeEntry, NewMangaEntry,
    ReadStatus, WatchStatus,
};

/// Client for the application's own list endpoints.
///
/// Every call carries the caller's [`AuthContext`]; there is no ambient
/// session state.
pub struct ListStoreClient {
    base_url: String,
    http: Client,
}

impl ListStoreClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    fn auth_header(auth: &AuthContext) -> String {
        format!("Bearer {}", auth.session_token)
    }

    /// Non-success responses carry `{"error": …}`; fall back to the raw
    /// body when they don't.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ListStoreError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or(body);
            Err(ListStoreError::Api { status, message })
        }
    }

    // ── Anime list ───────────────────────────────────────────────

    /// Fetch the caller's anime entries, optionally filtered by status.
    pub async fn anime_entries(
        &self,
        auth: &AuthContext,
        status: Option<WatchStatus>,
    ) -> Result<Vec<AnimeListEntry>, ListStoreError> {
        let mut req = self
            .http
            .get(format!("{}/api/anime/list", self.base_url))
            .header("Authorization", Self::auth_header(auth));
        if let Some(status) = status {
            req = req.query(&[("status", status.as_str())]);
        }

        let resp = Self::check_response(req.send().await?).await?;
        let body: AnimeListResponse = resp
            .json()
            .await
            .map_err(|e| ListStoreError::Parse(e.to_string()))?;
        Ok(body.anime_list)
    }

    pub async fn add_anime(
        &self,
        auth: &AuthContext,
        entry: &NewAnimeEntry,
    ) -> Result<(), ListStoreError> {
        tracing::debug!(anime_id = %entry.anime_id, "adding anime list entry");
        let resp = self
            .http
            .post(format!("{}/api/anime/list", self.base_url))
            .header("Authorization", Self::auth_header(auth))
            .json(entry)
            .send()
            .await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    pub async fn update_anime(
        &self,
        auth: &AuthContext,
        entry_id: &str,
        update: &AnimeEntryUpdate,
    ) -> Result<(), ListStoreError> {
        let resp = self
            .http
            .put(format!("{}/api/anime/list/{entry_id}", self.base_url))
            .header("Authorization", Self::auth_header(auth))
            .json(update)
            .send()
            .await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    pub async fn remove_anime(
        &self,
        auth: &AuthContext,
        entry_id: &str,
    ) -> Result<(), ListStoreError> {
        let resp = self
            .http
            .delete(format!("{}/api/anime/list/{entry_id}", self.base_url))
            .header("Authorization", Self::auth_header(auth))
            .send()
            .await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    // ── Manga list ───────────────────────────────────────────────

    /// Fetch the caller's manga entries, optionally filtered by status.
    pub async fn manga_entries(
        &self,
        auth: &AuthContext,
        status: Option<ReadStatus>,
    ) -> Result<Vec<MangaListEntry>, ListStoreError> {
        let mut req = self
            .http
            .get(format!("{}/api/manga/list", self.base_url))
            .header("Authorization", Self::auth_header(auth));
        if let Some(status) = status {
            req = req.query(&[("status", status.as_str())]);
        }

        let resp = Self::check_response(req.send().await?).await?;
        let body: MangaListResponse = resp
            .json()
            .await
            .map_err(|e| ListStoreError::Parse(e.to_string()))?;
        Ok(body.manga_list)
    }

    pub async fn add_manga(
        &self,
        auth: &AuthContext,
        entry: &NewMangaEntry,
    ) -> Result<(), ListStoreError> {
        tracing::debug!(manga_id = %entry.manga_id, "adding manga list entry");
        let resp = self
            .http
            .post(format!("{}/api/manga/list", self.base_url))
            .header("Authorization", Self::auth_header(auth))
            .json(entry)
            .send()
            .await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    pub async fn update_manga(
        &self,
        auth: &AuthContext,
        entry_id: &str,
        update: &MangaEntryUpdate,
    ) -> Result<(), ListStoreError> {
        let resp = self
            .http
            .put(format!("{}/api/manga/list/{entry_id}", self.base_url))
            .header("Authorization", Self::auth_header(auth))
            .json(update)
            .send()
            .await?;
        Self::check_response(resp).await?;
        Ok(())
    }

    pub async fn remove_manga(
        &self,
        auth: &AuthContext,
        entry_id: &str,
    ) -> Result<(), ListStoreError> {
        let resp = self
            .http
            .delete(format!("{}/api/manga/list/{entry_id}", self.base_url))
            .header("Authorization", Self::auth_header(auth))
            .send()
            .await?;
        Self::check_response(resp).await?;
        Ok(())
    }
}
