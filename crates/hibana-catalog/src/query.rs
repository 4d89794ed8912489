//! Query document construction for the remote catalog, per media kind and
//! per mode (search-by-criteria, fetch-by-identifier).

use serde::Serialize;

use hibana_core::models::MediaKind;

use crate::error::CatalogError;
use crate::mapper;

// Unset variables are omitted from the variables object; the remote
// treats them as null, and the declared defaults (page 1, perPage 10,
// popularity ordering) apply.
const ANIME_SEARCH_QUERY: &str = r#"
query ($search: String, $page: Int = 1, $perPage: Int = 10, $genre: String,
       $status: MediaStatus, $seasonYear: Int, $sort: [MediaSort] = [POPULARITY_DESC]) {
    Page(page: $page, perPage: $perPage) {
        pageInfo { total currentPage lastPage hasNextPage }
        media(search: $search, type: ANIME, genre: $genre, status: $status,
              seasonYear: $seasonYear, sort: $sort) {
            id
            title { romaji english native }
            coverImage { large color }
            format
            status
            episodes
            averageScore
            genres
            description(asHtml: false)
            seasonYear
        }
    }
}
"#;

const MANGA_SEARCH_QUERY: &str = r#"
query ($search: String, $page: Int = 1, $perPage: Int = 10, $genre: String,
       $status: MediaStatus, $seasonYear: Int, $sort: [MediaSort] = [POPULARITY_DESC]) {
    Page(page: $page, perPage: $perPage) {
        pageInfo { total currentPage lastPage hasNextPage }
        media(search: $search, type: MANGA, genre: $genre, status: $status,
              seasonYear: $seasonYear, sort: $sort) {
            id
            title { romaji english native }
            coverImage { large color }
            format
            status
            chapters
            volumes
            averageScore
            genres
            description(asHtml: false)
            seasonYear
        }
    }
}
"#;

const ANIME_DETAIL_QUERY: &str = r#"
query ($id: Int) {
    Media(id: $id, type: ANIME) {
        id
        title { romaji english native }
        coverImage { extraLarge large color }
        bannerImage
        description(asHtml: false)
        episodes
        duration
        format
        status
        season
        seasonYear
        averageScore
        popularity
        genres
        studios(isMain: true) { nodes { name } }
        characters(page: 1, perPage: 6) {
            edges {
                role
                node {
                    id
                    name { full }
                    image { large }
                }
            }
        }
    }
}
"#;

const MANGA_DETAIL_QUERY: &str = r#"
query ($id: Int) {
    Media(id: $id, type: MANGA) {
        id
        title { romaji english native }
        coverImage { extraLarge large color }
        bannerImage
        description(asHtml: false)
        chapters
        volumes
        format
        status
        averageScore
        popularity
        genres
        startDate { year }
        staff(page: 1, perPage: 6) {
            nodes {
                id
                name { full }
                primaryOccupations
            }
        }
    }
}
"#;

/// Search criteria for one catalog page.
///
/// `status` and `sort` carry the application-facing tokens; they are
/// translated to the remote vocabulary at build time. Tokens the mapper
/// does not know are dropped, leaving the server default behavior.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub text: Option<String>,
    pub page: u32,
    pub per_page: u32,
    pub genre: Option<String>,
    pub status: Option<String>,
    pub season_year: Option<u32>,
    pub sort: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            text: None,
            page: 1,
            per_page: 10,
            genre: None,
            status: None,
            season_year: None,
            sort: None,
        }
    }
}

/// A ready-to-send GraphQL request body: `{"query": …, "variables": …}`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDocument {
    pub query: &'static str,
    pub variables: serde_json::Value,
}

/// Build the search document for one kind.
///
/// Fails with [`CatalogError::InvalidArgument`] on out-of-range paging
/// before anything is sent.
pub fn build_search(kind: MediaKind, params: &SearchParams) -> Result<QueryDocument, CatalogError> {
    if params.page == 0 {
        return Err(CatalogError::InvalidArgument("page must be >= 1".into()));
    }
    if params.per_page == 0 {
        return Err(CatalogError::InvalidArgument("perPage must be > 0".into()));
    }

    let mut variables = serde_json::json!({
        "page": params.page,
        "perPage": params.per_page,
    });

    if let Some(text) = params.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        variables["search"] = serde_json::json!(text);
    }
    if let Some(genre) = params.genre.as_deref().filter(|g| !g.is_empty()) {
        variables["genre"] = serde_json::json!(genre.to_lowercase());
    }
    if let Some(status) = params
        .status
        .as_deref()
        .and_then(|s| mapper::status_to_remote(kind, s))
    {
        variables["status"] = serde_json::json!(status);
    }
    if let Some(year) = params.season_year {
        variables["seasonYear"] = serde_json::json!(year);
    }
    if let Some(sort) = params.sort.as_deref().and_then(mapper::sort_to_remote) {
        variables["sort"] = serde_json::json!([sort]);
    }

    let query = match kind {
        MediaKind::Anime => ANIME_SEARCH_QUERY,
        MediaKind::Manga => MANGA_SEARCH_QUERY,
    };
    Ok(QueryDocument { query, variables })
}

/// Build the detail document for one kind.
///
/// The identifier arrives as the raw route/CLI string; anything that is
/// not a positive integer fails with [`CatalogError::InvalidArgument`]
/// before any network call.
pub fn build_detail(kind: MediaKind, id: &str) -> Result<QueryDocument, CatalogError> {
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| CatalogError::InvalidArgument(format!("ID inválido: {id}")))?;
    if id <= 0 {
        return Err(CatalogError::InvalidArgument(format!("ID inválido: {id}")));
    }

    let query = match kind {
        MediaKind::Anime => ANIME_DETAIL_QUERY,
        MediaKind::Manga => MANGA_DETAIL_QUERY,
    };
    Ok(QueryDocument {
        query,
        variables: serde_json::json!({ "id": id }),
    })
}
