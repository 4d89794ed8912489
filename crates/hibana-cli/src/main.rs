use clap::{Parser, Subcommand};

use hibana_catalog::{CatalogClient, SearchParams};
use hibana_core::models::MediaKind;
use hibana_core::AppConfig;
use hibana_lists::types::{ReadStatus, WatchStatus};
use hibana_lists::{AuthContext, ListStoreClient};

type CliError = Box<dyn std::error::Error>;

#[derive(Parser)]
#[command(name = "hibana", about = "Query the anime/manga catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog by free text and filters.
    Search {
        /// Media kind: anime or manga.
        kind: MediaKind,
        /// Free-text search term; omit to browse by popularity.
        text: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        per_page: Option<u32>,
        #[arg(long)]
        genre: Option<String>,
        /// Application status token (airing/completed/upcoming for anime,
        /// ongoing/completed/hiatus for manga).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        year: Option<u32>,
        /// Sort token: popularity, score, or year.
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one catalog item by its identifier.
    Detail {
        kind: MediaKind,
        id: String,
    },
    /// Show the caller's tracking list from the application's list API.
    List {
        kind: MediaKind,
        /// Session token for the list API.
        #[arg(long)]
        token: String,
        /// Tracking status filter (watching/reading, completed, …).
        #[arg(long)]
        status: Option<String>,
    },
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hibana=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().unwrap_or_default();

    let result = match cli.command {
        Command::Search {
            kind,
            text,
            page,
            per_page,
            genre,
            status,
            year,
            sort,
        } => {
            let client = CatalogClient::with_endpoint(&config.catalog.endpoint);
            let params = SearchParams {
                text,
                page,
                per_page: per_page.unwrap_or(config.catalog.per_page),
                genre,
                status,
                season_year: year,
                sort,
            };
            run_search(&client, kind, &params).await
        }
        Command::Detail { kind, id } => {
            let client = CatalogClient::with_endpoint(&config.catalog.endpoint);
            run_detail(&client, kind, &id).await
        }
        Command::List {
            kind,
            token,
            status,
        } => {
            let client = ListStoreClient::new(&config.lists.base_url);
            let auth = AuthContext {
                session_token: token,
            };
            run_list(&client, &auth, kind, status.as_deref()).await
        }
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run_search(
    client: &CatalogClient,
    kind: MediaKind,
    params: &SearchParams,
) -> Result<(), CliError> {
    let page = client.search(kind, params).await?;
    println!(
        "Página {} / {} ({} resultados)",
        page.page_info.current_page, page.page_info.last_page, page.page_info.total
    );
    for item in &page.items {
        println!(
            "{:>7}  {:<50} {:>4}  {:>5.1}  {}",
            item.id,
            truncate(&item.title, 50),
            item.year,
            item.rating,
            item.status
        );
    }
    Ok(())
}

async fn run_detail(client: &CatalogClient, kind: MediaKind, id: &str) -> Result<(), CliError> {
    let detail = client.get_by_id(kind, id).await?;
    let item = &detail.item;
    println!("{} ({})", item.title, item.year);
    println!("  estado: {}  puntuación: {:.1}/10", item.status, item.rating);
    match kind {
        MediaKind::Anime => {
            println!("  episodios: {}", item.count);
            if let Some(studios) = &detail.studios {
                println!("  estudios: {studios}");
            }
        }
        MediaKind::Manga => {
            println!("  capítulos: {}", item.count);
            if let Some(volumes) = detail.volumes {
                println!("  volúmenes: {volumes}");
            }
            if let Some(authors) = &detail.authors {
                println!("  autores: {authors}");
            }
        }
    }
    if !item.genres.is_empty() {
        println!("  géneros: {}", item.genres.join(", "));
    }
    for credit in detail.characters.iter().chain(detail.staff.iter()) {
        match &credit.role {
            Some(role) => println!("  - {} ({role})", credit.name),
            None => println!("  - {}", credit.name),
        }
    }
    Ok(())
}

async fn run_list(
    client: &ListStoreClient,
    auth: &AuthContext,
    kind: MediaKind,
    status: Option<&str>,
) -> Result<(), CliError> {
    match kind {
        MediaKind::Anime => {
            let filter = status.map(str::parse::<WatchStatus>).transpose()?;
            let entries = client.anime_entries(auth, filter).await?;
            for entry in entries {
                println!(
                    "{:>7}  {:<14} ep {:>4}  {}",
                    entry.anime_id,
                    entry.status.as_str(),
                    entry.episodes_watched.unwrap_or(0),
                    entry.notes.as_deref().unwrap_or("")
                );
            }
        }
        MediaKind::Manga => {
            let filter = status.map(str::parse::<ReadStatus>).transpose()?;
            let entries = client.manga_entries(auth, filter).await?;
            for entry in entries {
                println!(
                    "{:>7}  {:<14} cap {:>4}  {}",
                    entry.manga_id,
                    entry.status.as_str(),
                    entry.chapters_read.unwrap_or(0),
                    entry.notes.as_deref().unwrap_or("")
                );
            }
        }
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
