//! Remote-shaped response types. Every field the catalog may omit is an
//! `Option`; nothing beyond the envelope shape is assumed until the
//! normalizer applies its defaults.

use serde::Deserialize;

use hibana_core::models::PageInfo;

// ── GraphQL envelope ─────────────────────────────────────────────

/// Raw response envelope: `{data?, errors?}`.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: Option<String>,
}

// ── Search / detail payloads ─────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchData {
    #[serde(rename = "Page")]
    pub page: PageData,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub media: Vec<MediaRecord>,
}

#[derive(Debug, Deserialize)]
pub struct DetailData {
    #[serde(rename = "Media")]
    pub media: MediaRecord,
}

// ── Media record ─────────────────────────────────────────────────

/// One remote media record, shared by both kinds; kind-specific fields
/// (episodes/duration vs. chapters/volumes, characters vs. staff) are
/// simply absent for the other kind.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    pub id: i64,
    pub title: Option<MediaTitle>,
    pub cover_image: Option<CoverImage>,
    pub banner_image: Option<String>,
    pub format: Option<String>,
    pub status: Option<String>,
    pub episodes: Option<u32>,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    /// Minutes per episode; anime detail only.
    pub duration: Option<u32>,
    /// 0–100 scale.
    pub average_score: Option<u32>,
    pub popularity: Option<u32>,
    pub genres: Option<Vec<String>>,
    pub description: Option<String>,
    pub season_year: Option<u32>,
    pub start_date: Option<FuzzyDate>,
    pub studios: Option<StudioConnection>,
    pub characters: Option<CharacterConnection>,
    pub staff: Option<StaffConnection>,
}

#[derive(Debug, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct StudioConnection {
    pub nodes: Option<Vec<StudioNode>>,
}

#[derive(Debug, Deserialize)]
pub struct StudioNode {
    pub name: String,
}

// ── Characters (anime detail) ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CharacterConnection {
    pub edges: Option<Vec<CharacterEdge>>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterEdge {
    pub role: Option<String>,
    pub node: Option<CharacterNode>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterNode {
    pub id: Option<i64>,
    pub name: Option<FullName>,
    pub image: Option<CharacterImage>,
}

#[derive(Debug, Deserialize)]
pub struct FullName {
    pub full: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CharacterImage {
    pub large: Option<String>,
}

// ── Staff (manga detail) ─────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StaffConnection {
    pub nodes: Option<Vec<StaffNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffNode {
    pub id: Option<i64>,
    pub name: Option<FullName>,
    pub primary_occupations: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_page() {
        let json = r##"{
            "Page": {
                "pageInfo": { "total": 240, "currentPage": 1, "lastPage": 20, "hasNextPage": true },
                "media": [
                    {
                        "id": 20,
                        "title": { "romaji": "Naruto", "english": "Naruto", "native": "ナルト" },
                        "coverImage": { "large": "https://img.example/20.jpg", "color": "#e4a15d" },
                        "format": "TV",
                        "status": "FINISHED",
                        "episodes": 220,
                        "averageScore": 79,
                        "genres": ["Action", "Adventure"],
                        "description": "Naruto Uzumaki...",
                        "seasonYear": 2002
                    }
                ]
            }
        }"##;

        let data: SearchData = serde_json::from_str(json).unwrap();
        assert_eq!(data.page.page_info.total, 240);
        assert!(data.page.page_info.has_next_page);
        assert_eq!(data.page.media.len(), 1);
        let record = &data.page.media[0];
        assert_eq!(record.id, 20);
        assert_eq!(record.episodes, Some(220));
        assert_eq!(record.average_score, Some(79));
        assert!(record.chapters.is_none());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        // Only id is guaranteed; everything else may be null or missing.
        let json = r#"{ "id": 1, "title": null, "status": null }"#;
        let record: MediaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert!(record.title.is_none());
        assert!(record.genres.is_none());
    }

    #[test]
    fn test_deserialize_detail_with_characters() {
        let json = r#"{
            "Media": {
                "id": 21,
                "title": { "romaji": "One Piece" },
                "coverImage": { "extraLarge": "https://img.example/xl.jpg", "large": "https://img.example/l.jpg" },
                "bannerImage": "https://img.example/banner.jpg",
                "episodes": null,
                "duration": 24,
                "status": "RELEASING",
                "averageScore": 88,
                "popularity": 500000,
                "studios": { "nodes": [ { "name": "Toei Animation" } ] },
                "characters": {
                    "edges": [
                        {
                            "role": "MAIN",
                            "node": { "id": 40, "name": { "full": "Monkey D. Luffy" }, "image": { "large": "https://img.example/luffy.jpg" } }
                        },
                        {
                            "role": "SUPPORTING",
                            "node": { "id": 41, "name": { "full": "Roronoa Zoro" }, "image": null }
                        }
                    ]
                }
            }
        }"#;

        let data: DetailData = serde_json::from_str(json).unwrap();
        let media = data.media;
        assert_eq!(media.duration, Some(24));
        let edges = media.characters.unwrap().edges.unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].role.as_deref(), Some("MAIN"));
        assert!(edges[1].node.as_ref().unwrap().image.is_none());
    }

    #[test]
    fn test_deserialize_envelope_with_errors() {
        let json = r#"{ "errors": [ { "message": "Invalid ID" } ] }"#;
        let envelope: GraphQLResponse<SearchData> = serde_json::from_str(json).unwrap();
        assert!(envelope.data.is_none());
        let errors = envelope.errors.unwrap();
        assert_eq!(errors[0].message.as_deref(), Some("Invalid ID"));
    }
}
