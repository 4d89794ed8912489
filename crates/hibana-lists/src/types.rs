use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller identity, injected explicitly into every list-store call.
/// The list endpoints authenticate the session; this crate only carries
/// the token.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub session_token: String,
}

// ── Tracking status vocabularies ─────────────────────────────────

/// Per-user tracking status for an anime entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    Watching,
    Completed,
    PlanToWatch,
    Dropped,
    OnHold,
}

impl WatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Watching => "watching",
            Self::Completed => "completed",
            Self::PlanToWatch => "plan-to-watch",
            Self::Dropped => "dropped",
            Self::OnHold => "on-hold",
        }
    }
}

impl std::str::FromStr for WatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watching" => Ok(Self::Watching),
            "completed" => Ok(Self::Completed),
            "plan-to-watch" => Ok(Self::PlanToWatch),
            "dropped" => Ok(Self::Dropped),
            "on-hold" => Ok(Self::OnHold),
            other => Err(format!("unknown watch status: {other}")),
        }
    }
}

/// Per-user tracking status for a manga entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadStatus {
    Reading,
    Completed,
    PlanToRead,
    Dropped,
    OnHold,
}

impl ReadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Completed => "completed",
            Self::PlanToRead => "plan-to-read",
            Self::Dropped => "dropped",
            Self::OnHold => "on-hold",
        }
    }
}

impl std::str::FromStr for ReadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" => Ok(Self::Reading),
            "completed" => Ok(Self::Completed),
            "plan-to-read" => Ok(Self::PlanToRead),
            "dropped" => Ok(Self::Dropped),
            "on-hold" => Ok(Self::OnHold),
            other => Err(format!("unknown read status: {other}")),
        }
    }
}

// ── Anime list entries ───────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeListEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub anime_id: String,
    pub status: WatchStatus,
    pub rating: Option<f32>,
    pub episodes_watched: Option<u32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimeEntry {
    pub anime_id: String,
    pub status: WatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes_watched: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes_watched: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ── Manga list entries ───────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaListEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub manga_id: String,
    pub status: ReadStatus,
    pub rating: Option<f32>,
    pub chapters_read: Option<u32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMangaEntry {
    pub manga_id: String,
    pub status: ReadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters_read: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MangaEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters_read: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ── Response envelopes ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnimeListResponse {
    #[serde(rename = "animeList")]
    pub anime_list: Vec<AnimeListEntry>,
}

#[derive(Debug, Deserialize)]
pub struct MangaListResponse {
    #[serde(rename = "mangaList")]
    pub manga_list: Vec<MangaListEntry>,
}

/// Error body shape shared by all list endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&WatchStatus::PlanToWatch).unwrap(),
            "\"plan-to-watch\""
        );
        assert_eq!(
            serde_json::to_string(&ReadStatus::OnHold).unwrap(),
            "\"on-hold\""
        );
        let status: WatchStatus = serde_json::from_str("\"watching\"").unwrap();
        assert_eq!(status, WatchStatus::Watching);
        assert_eq!(ReadStatus::PlanToRead.as_str(), "plan-to-read");
        assert_eq!("on-hold".parse::<WatchStatus>().unwrap(), WatchStatus::OnHold);
        assert!("watching".parse::<ReadStatus>().is_err());
    }

    #[test]
    fn test_deserialize_anime_list_response() {
        let json = r#"{
            "animeList": [
                {
                    "_id": "64f1c0ffee0a1b2c3d4e5f60",
                    "animeId": "20",
                    "status": "watching",
                    "rating": 8.5,
                    "episodesWatched": 112,
                    "notes": "rewatch",
                    "createdAt": "2024-03-01T12:00:00.000Z",
                    "updatedAt": "2024-06-15T09:30:00.000Z"
                }
            ]
        }"#;

        let resp: AnimeListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.anime_list.len(), 1);
        let entry = &resp.anime_list[0];
        assert_eq!(entry.anime_id, "20");
        assert_eq!(entry.status, WatchStatus::Watching);
        assert_eq!(entry.episodes_watched, Some(112));
    }

    #[test]
    fn test_new_entry_omits_absent_fields() {
        let body = serde_json::to_value(NewMangaEntry {
            manga_id: "30013".into(),
            status: ReadStatus::Reading,
            rating: None,
            chapters_read: Some(120),
            notes: None,
        })
        .unwrap();

        assert_eq!(body["mangaId"], "30013");
        assert_eq!(body["status"], "reading");
        assert_eq!(body["chaptersRead"], 120);
        assert!(body.get("rating").is_none());
        assert!(body.get("notes").is_none());
    }

    #[test]
    fn test_update_defaults_to_empty_object() {
        let body = serde_json::to_value(AnimeEntryUpdate::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }
}
