use serde::{Deserialize, Serialize};

// ── Media kind ───────────────────────────────────────────────────

/// Discriminator between the two supported media categories.
///
/// Anime and manga carry different field sets (episodes vs. chapters,
/// studios vs. staff) and different status vocabularies, so every
/// catalog operation is parameterized by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Anime,
    Manga,
}

impl MediaKind {
    /// Convert to the remote catalog's GraphQL `MediaType` enum value.
    pub fn to_remote_str(self) -> &'static str {
        match self {
            Self::Anime => "ANIME",
            Self::Manga => "MANGA",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anime => write!(f, "anime"),
            Self::Manga => write!(f, "manga"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anime" => Ok(Self::Anime),
            "manga" => Ok(Self::Manga),
            other => Err(format!("unknown media kind: {other}")),
        }
    }
}

// ── Application status vocabulary ────────────────────────────────

/// Application-facing release status of a catalog item.
///
/// Anime use `airing`/`completed`/`upcoming`; manga use
/// `ongoing`/`completed`/`hiatus`. The remote vocabulary is wider; the
/// mapper in the catalog crate folds it into these tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaStatus {
    Airing,
    Upcoming,
    Ongoing,
    Hiatus,
    Completed,
}

impl MediaStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Airing => "airing",
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Hiatus => "hiatus",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for MediaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Display models ───────────────────────────────────────────────

/// Normalized, UI-ready projection of one remote catalog record.
///
/// This is the only catalog value callers retain; the raw remote shapes
/// are discarded after normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayItem {
    pub id: String,
    pub kind: MediaKind,
    pub title: String,
    pub cover_image: String,
    /// 0–10 scale (remote score divided by 10); 0.0 when absent.
    pub rating: f64,
    pub year: u32,
    /// Episode count for anime, chapter count for manga; 0 when unknown.
    pub count: u32,
    pub status: MediaStatus,
    pub genres: Vec<String>,
}

/// One related character (anime) or staff member (manga) on a detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditEntry {
    pub name: String,
    /// Character role for anime, primary occupation for manga.
    pub role: Option<String>,
    /// Entries without an image are still listed, just without a thumbnail.
    pub image: Option<String>,
}

/// Detail-view projection: a [`DisplayItem`] plus the fields only the
/// by-id query requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayDetail {
    #[serde(flatten)]
    pub item: DisplayItem,
    pub description: Option<String>,
    pub banner_image: Option<String>,
    pub popularity: Option<u32>,
    /// Minutes per episode; anime only.
    pub duration: Option<u32>,
    /// Manga only.
    pub volumes: Option<u32>,
    /// Main studio names joined by ", "; anime only.
    pub studios: Option<String>,
    /// Staff names joined by ", "; manga only.
    pub authors: Option<String>,
    pub characters: Vec<CreditEntry>,
    pub staff: Vec<CreditEntry>,
}

/// Pagination summary, passed through unchanged from the remote envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub has_next_page: bool,
}

/// One page of normalized search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub page_info: PageInfo,
    pub items: Vec<DisplayItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_round_trip() {
        assert_eq!("anime".parse::<MediaKind>().unwrap(), MediaKind::Anime);
        assert_eq!("manga".parse::<MediaKind>().unwrap(), MediaKind::Manga);
        assert!("novel".parse::<MediaKind>().is_err());
        assert_eq!(MediaKind::Anime.to_remote_str(), "ANIME");
        assert_eq!(MediaKind::Manga.to_remote_str(), "MANGA");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&MediaStatus::Upcoming).unwrap();
        assert_eq!(json, "\"upcoming\"");
        let back: MediaStatus = serde_json::from_str("\"hiatus\"").unwrap();
        assert_eq!(back, MediaStatus::Hiatus);
    }

    #[test]
    fn test_page_info_defaults_on_missing_fields() {
        let info: PageInfo = serde_json::from_str(r#"{"total": 500}"#).unwrap();
        assert_eq!(info.total, 500);
        assert_eq!(info.current_page, 0);
        assert!(!info.has_next_page);
    }
}
