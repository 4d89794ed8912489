//! Projection of remote records into the application display model.
//! Pure and stateless: same record in, same item out.

use hibana_core::models::{CreditEntry, DisplayDetail, DisplayItem, MediaKind};

use crate::mapper;
use crate::types::{MediaRecord, MediaTitle};

const FALLBACK_TITLE: &str = "Sin título";
const UNKNOWN_CREDIT: &str = "Desconocido";
const ANIME_LIST_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=Anime";
const MANGA_LIST_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=Manga";
const DETAIL_PLACEHOLDER: &str = "https://via.placeholder.com/300x450";

/// At most this many related characters/staff are kept on a detail view.
const MAX_CREDITS: usize = 12;

fn resolve_title(title: Option<&MediaTitle>) -> String {
    title
        .and_then(|t| {
            t.english
                .clone()
                .or_else(|| t.romaji.clone())
                .or_else(|| t.native.clone())
        })
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}

fn rating(record: &MediaRecord) -> f64 {
    // averageScore is 0-100; the display scale is 0-10, exact division.
    record.average_score.map(|s| f64::from(s) / 10.0).unwrap_or(0.0)
}

/// Normalize one search-page record into a [`DisplayItem`].
///
/// The list query only requests `coverImage.large`; the kind-specific
/// placeholder covers records without one.
pub fn normalize(kind: MediaKind, record: MediaRecord) -> DisplayItem {
    let title = resolve_title(record.title.as_ref());
    let cover_image = record
        .cover_image
        .as_ref()
        .and_then(|c| c.large.clone())
        .unwrap_or_else(|| {
            match kind {
                MediaKind::Anime => ANIME_LIST_PLACEHOLDER,
                MediaKind::Manga => MANGA_LIST_PLACEHOLDER,
            }
            .to_string()
        });
    let count = match kind {
        MediaKind::Anime => record.episodes,
        MediaKind::Manga => record.chapters,
    }
    .unwrap_or(0);

    DisplayItem {
        id: record.id.to_string(),
        kind,
        title,
        cover_image,
        rating: rating(&record),
        year: record.season_year.unwrap_or(0),
        count,
        status: mapper::status_from_remote(kind, record.status.as_deref().unwrap_or("")),
        genres: record.genres.unwrap_or_default(),
    }
}

/// Normalize one by-id record into a [`DisplayDetail`].
///
/// The detail view prefers `extraLarge` covers, falls back to the manga
/// start date when `seasonYear` is absent, and keeps at most
/// [`MAX_CREDITS`] related characters/staff. Entries without an image are
/// listed anyway, just without a thumbnail.
pub fn normalize_detail(kind: MediaKind, record: MediaRecord) -> DisplayDetail {
    let title = resolve_title(record.title.as_ref());
    let cover_image = record
        .cover_image
        .as_ref()
        .and_then(|c| c.extra_large.clone().or_else(|| c.large.clone()))
        .unwrap_or_else(|| DETAIL_PLACEHOLDER.to_string());
    let year = record
        .season_year
        .or_else(|| record.start_date.as_ref().and_then(|d| d.year))
        .unwrap_or(0);
    let count = match kind {
        MediaKind::Anime => record.episodes,
        MediaKind::Manga => record.chapters,
    }
    .unwrap_or(0);
    let rating = rating(&record);
    let status = mapper::status_from_remote(kind, record.status.as_deref().unwrap_or(""));

    let studio_names: Vec<String> = record
        .studios
        .and_then(|s| s.nodes)
        .unwrap_or_default()
        .into_iter()
        .map(|n| n.name)
        .collect();
    let staff_nodes = record.staff.and_then(|s| s.nodes).unwrap_or_default();

    let studios = match kind {
        MediaKind::Anime => Some(join_or_unknown(studio_names)),
        MediaKind::Manga => None,
    };
    let author_names: Vec<String> = staff_nodes
        .iter()
        .filter_map(|n| n.name.as_ref().and_then(|name| name.full.clone()))
        .collect();
    let authors = match kind {
        MediaKind::Anime => None,
        MediaKind::Manga => Some(join_or_unknown(author_names)),
    };

    let characters: Vec<CreditEntry> = record
        .characters
        .and_then(|c| c.edges)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|edge| {
            let node = edge.node?;
            Some(CreditEntry {
                name: node
                    .name
                    .and_then(|n| n.full)
                    .unwrap_or_else(|| UNKNOWN_CREDIT.to_string()),
                role: edge.role,
                image: node.image.and_then(|i| i.large),
            })
        })
        .take(MAX_CREDITS)
        .collect();

    let staff: Vec<CreditEntry> = staff_nodes
        .into_iter()
        .map(|node| CreditEntry {
            name: node
                .name
                .and_then(|n| n.full)
                .unwrap_or_else(|| UNKNOWN_CREDIT.to_string()),
            role: node
                .primary_occupations
                .and_then(|occ| occ.into_iter().next()),
            image: None,
        })
        .take(MAX_CREDITS)
        .collect();

    DisplayDetail {
        item: DisplayItem {
            id: record.id.to_string(),
            kind,
            title,
            cover_image,
            rating,
            year,
            count,
            status,
            genres: record.genres.unwrap_or_default(),
        },
        description: record.description,
        banner_image: record.banner_image,
        popularity: record.popularity,
        duration: record.duration,
        volumes: record.volumes,
        studios,
        authors,
        characters,
        staff,
    }
}

fn join_or_unknown(names: Vec<String>) -> String {
    if names.is_empty() {
        UNKNOWN_CREDIT.to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hibana_core::models::MediaStatus;

    fn record(json: serde_json::Value) -> MediaRecord {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_title_resolution_order() {
        let full = record(serde_json::json!({
            "id": 1,
            "title": { "romaji": "Shingeki no Kyojin", "english": "Attack on Titan", "native": "進撃の巨人" }
        }));
        assert_eq!(normalize(MediaKind::Anime, full).title, "Attack on Titan");

        let romaji_only = record(serde_json::json!({
            "id": 1, "title": { "romaji": "Berserk" }
        }));
        assert_eq!(normalize(MediaKind::Manga, romaji_only).title, "Berserk");

        let native_only = record(serde_json::json!({
            "id": 1, "title": { "native": "ベルセルク" }
        }));
        assert_eq!(normalize(MediaKind::Manga, native_only).title, "ベルセルク");

        let none = record(serde_json::json!({ "id": 1 }));
        assert_eq!(normalize(MediaKind::Anime, none).title, "Sin título");
    }

    #[test]
    fn test_rating_rescale() {
        for score in [0u32, 1, 50, 85, 93, 100] {
            let item = normalize(
                MediaKind::Anime,
                record(serde_json::json!({ "id": 1, "averageScore": score })),
            );
            assert_eq!(item.rating, f64::from(score) / 10.0);
        }
        let absent = normalize(MediaKind::Anime, record(serde_json::json!({ "id": 1 })));
        assert_eq!(absent.rating, 0.0);
    }

    #[test]
    fn test_list_cover_placeholder_per_kind() {
        let anime = normalize(MediaKind::Anime, record(serde_json::json!({ "id": 1 })));
        assert_eq!(anime.cover_image, ANIME_LIST_PLACEHOLDER);
        let manga = normalize(MediaKind::Manga, record(serde_json::json!({ "id": 1 })));
        assert_eq!(manga.cover_image, MANGA_LIST_PLACEHOLDER);
    }

    #[test]
    fn test_detail_prefers_extra_large_cover() {
        let detail = normalize_detail(
            MediaKind::Anime,
            record(serde_json::json!({
                "id": 1,
                "coverImage": { "extraLarge": "xl.jpg", "large": "l.jpg" }
            })),
        );
        assert_eq!(detail.item.cover_image, "xl.jpg");

        let large_only = normalize_detail(
            MediaKind::Anime,
            record(serde_json::json!({ "id": 1, "coverImage": { "large": "l.jpg" } })),
        );
        assert_eq!(large_only.item.cover_image, "l.jpg");

        let bare = normalize_detail(MediaKind::Anime, record(serde_json::json!({ "id": 1 })));
        assert_eq!(bare.item.cover_image, DETAIL_PLACEHOLDER);
    }

    #[test]
    fn test_count_is_kind_specific() {
        let rec = serde_json::json!({ "id": 1, "episodes": 26, "chapters": 364 });
        assert_eq!(normalize(MediaKind::Anime, record(rec.clone())).count, 26);
        assert_eq!(normalize(MediaKind::Manga, record(rec)).count, 364);
        assert_eq!(
            normalize(MediaKind::Anime, record(serde_json::json!({ "id": 1 }))).count,
            0
        );
    }

    #[test]
    fn test_manga_detail_year_falls_back_to_start_date() {
        let detail = normalize_detail(
            MediaKind::Manga,
            record(serde_json::json!({ "id": 1, "startDate": { "year": 1989 } })),
        );
        assert_eq!(detail.item.year, 1989);

        let none = normalize_detail(MediaKind::Manga, record(serde_json::json!({ "id": 1 })));
        assert_eq!(none.item.year, 0);
    }

    #[test]
    fn test_status_defaults_to_completed() {
        let item = normalize(
            MediaKind::Anime,
            record(serde_json::json!({ "id": 1, "status": "RELEASING" })),
        );
        assert_eq!(item.status, MediaStatus::Airing);

        let missing = normalize(MediaKind::Anime, record(serde_json::json!({ "id": 1 })));
        assert_eq!(missing.status, MediaStatus::Completed);
    }

    #[test]
    fn test_studios_joined_or_unknown() {
        let detail = normalize_detail(
            MediaKind::Anime,
            record(serde_json::json!({
                "id": 1,
                "studios": { "nodes": [ { "name": "Toei Animation" }, { "name": "Bones" } ] }
            })),
        );
        assert_eq!(detail.studios.as_deref(), Some("Toei Animation, Bones"));
        assert!(detail.authors.is_none());

        let empty = normalize_detail(
            MediaKind::Anime,
            record(serde_json::json!({ "id": 1, "studios": { "nodes": [] } })),
        );
        assert_eq!(empty.studios.as_deref(), Some("Desconocido"));
    }

    #[test]
    fn test_manga_authors_from_staff() {
        let detail = normalize_detail(
            MediaKind::Manga,
            record(serde_json::json!({
                "id": 1,
                "staff": { "nodes": [
                    { "name": { "full": "Kentarou Miura" }, "primaryOccupations": ["Mangaka"] }
                ] }
            })),
        );
        assert_eq!(detail.authors.as_deref(), Some("Kentarou Miura"));
        assert!(detail.studios.is_none());
        assert_eq!(detail.staff.len(), 1);
        assert_eq!(detail.staff[0].role.as_deref(), Some("Mangaka"));

        let bare = normalize_detail(MediaKind::Manga, record(serde_json::json!({ "id": 1 })));
        assert_eq!(bare.authors.as_deref(), Some("Desconocido"));
    }

    #[test]
    fn test_characters_truncated_and_imageless_kept() {
        let edges: Vec<serde_json::Value> = (0..15)
            .map(|i| {
                serde_json::json!({
                    "role": "SUPPORTING",
                    "node": { "name": { "full": format!("Character {i}") }, "image": null }
                })
            })
            .collect();
        let detail = normalize_detail(
            MediaKind::Anime,
            record(serde_json::json!({ "id": 1, "characters": { "edges": edges } })),
        );
        assert_eq!(detail.characters.len(), 12);
        assert!(detail.characters.iter().all(|c| c.image.is_none()));
        assert_eq!(detail.characters[0].name, "Character 0");
    }
}
