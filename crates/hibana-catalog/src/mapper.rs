//! Fixed lookup tables between the application filter vocabulary and the
//! remote catalog's status/sort enumerations.

use hibana_core::models::{MediaKind, MediaStatus};

/// Map an application status filter token to the remote `MediaStatus`
/// enum value. Unknown tokens yield `None` and no status filter is
/// applied server-side.
pub fn status_to_remote(kind: MediaKind, status: &str) -> Option<&'static str> {
    match kind {
        MediaKind::Anime => match status {
            "airing" => Some("RELEASING"),
            "completed" => Some("FINISHED"),
            "upcoming" => Some("NOT_YET_RELEASED"),
            _ => None,
        },
        MediaKind::Manga => match status {
            "ongoing" => Some("RELEASING"),
            "completed" => Some("FINISHED"),
            "hiatus" => Some("HIATUS"),
            _ => None,
        },
    }
}

/// Map a remote status token back to the application vocabulary.
///
/// Unrecognized tokens fall back to `completed` (manga additionally folds
/// NOT_YET_RELEASED into `hiatus`). The guessed default is carried over
/// from the original behavior as-is; whether unknown statuses should
/// instead surface an explicit "unknown" variant is an open question.
pub fn status_from_remote(kind: MediaKind, status: &str) -> MediaStatus {
    match kind {
        MediaKind::Anime => match status {
            "RELEASING" => MediaStatus::Airing,
            "NOT_YET_RELEASED" => MediaStatus::Upcoming,
            "FINISHED" => MediaStatus::Completed,
            "CANCELLED" => MediaStatus::Completed,
            _ => MediaStatus::Completed,
        },
        MediaKind::Manga => match status {
            "RELEASING" => MediaStatus::Ongoing,
            "HIATUS" => MediaStatus::Hiatus,
            "NOT_YET_RELEASED" => MediaStatus::Hiatus,
            "FINISHED" => MediaStatus::Completed,
            "CANCELLED" => MediaStatus::Completed,
            _ => MediaStatus::Completed,
        },
    }
}

/// Map an application sort token to the remote `MediaSort` enum value,
/// shared by both kinds. Unknown tokens yield `None` and the query falls
/// back to the server default ordering (popularity).
pub fn sort_to_remote(sort: &str) -> Option<&'static str> {
    match sort {
        "popularity" => Some("POPULARITY_DESC"),
        "score" => Some("SCORE_DESC"),
        "year" => Some("START_DATE_DESC"),
        _ => None,
    }
}
