use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::{CACHE_KEY_RECENTLY_PLAYED, CacheManager, TokenManager, top_artists_cache_key},
    spotify, success,
    types::{Artist, ArtistTableRow, RecentlyPlayedTrack},
    utils::TimeRange,
    warning,
};

/// Upstream page size cap for both history endpoints.
const MAX_ITEMS_PER_REQUEST: u32 = 50;

/// How long fetched listening history stays fresh.
pub const LISTENING_HISTORY_TTL: Duration = Duration::from_secs(60 * 60 * 24);

pub async fn update_artists(force: bool) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run festcli auth\n Error: {}",
                e
            );
        }
    };

    for time_range in TimeRange::ALL {
        match ensure_top_artists(&mut token_mgr, time_range, force).await {
            Ok(artists) => success!("Cached {} artists ({})", artists.len(), time_range),
            Err(e) => error!("Cannot update top artists ({}). Err: {}", time_range, e),
        }
    }

    match ensure_recently_played(&mut token_mgr, force).await {
        Ok(played) => success!("Cached {} recently played tracks", played.len()),
        Err(e) => error!("Cannot update recently played tracks. Err: {}", e),
    }
}

pub async fn list_artists(time_range: TimeRange, search: Option<String>) {
    let artists: Vec<Artist> =
        match CacheManager::get(&top_artists_cache_key(time_range)).await {
            Ok(Some(artists)) => artists,
            Ok(None) => {
                warning!(
                    "No cached top artists for {}. Run festcli artists update.",
                    time_range
                );
                return;
            }
            Err(e) => {
                warning!("Failed to load artists. Err: {:?}", e);
                return;
            }
        };

    // ranked list: keep the affinity order, rank is 1-based
    let mut table_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .enumerate()
        .map(|(index, a)| ArtistTableRow {
            rank: index + 1,
            name: a.name,
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
            popularity: a.popularity,
        })
        .collect();

    if let Some(artist_search) = search {
        let search_term = artist_search.to_lowercase();
        table_rows.retain(|row| row.name.to_lowercase().contains(&search_term));
    }

    let table = Table::new(table_rows);
    println!("{}", table);
}

/// Returns the cached top artists for a time window, fetching and caching
/// them when the cache is stale, missing, or a refresh is forced.
pub async fn ensure_top_artists(
    token_mgr: &mut TokenManager,
    time_range: TimeRange,
    force: bool,
) -> Result<Vec<Artist>, String> {
    let key = top_artists_cache_key(time_range);

    if !force {
        if let Ok(Some(artists)) = CacheManager::get::<Vec<Artist>>(&key).await {
            return Ok(artists);
        }
    }

    let pb = progress_spinner(format!("Fetching top artists ({})...", time_range));

    let token = token_mgr.get_valid_token().await;
    let result = spotify::top::get_top_artists(&token, time_range, MAX_ITEMS_PER_REQUEST).await;

    pb.finish_and_clear();
    let artists = result.map_err(|e| e.to_string())?;

    if let Err(e) = CacheManager::set(&key, &artists, LISTENING_HISTORY_TTL).await {
        warning!("Failed to cache top artists. Err: {:?}", e);
    }

    Ok(artists)
}

/// Returns the cached recently played feed, fetching and caching it when
/// the cache is stale, missing, or a refresh is forced.
pub async fn ensure_recently_played(
    token_mgr: &mut TokenManager,
    force: bool,
) -> Result<Vec<RecentlyPlayedTrack>, String> {
    if !force {
        if let Ok(Some(played)) =
            CacheManager::get::<Vec<RecentlyPlayedTrack>>(CACHE_KEY_RECENTLY_PLAYED).await
        {
            return Ok(played);
        }
    }

    let pb = progress_spinner("Fetching recently played tracks...".to_string());

    let token = token_mgr.get_valid_token().await;
    let result = spotify::recent::get_recently_played(&token, MAX_ITEMS_PER_REQUEST).await;

    pb.finish_and_clear();
    let played = result.map_err(|e| e.to_string())?;

    if let Err(e) = CacheManager::set(CACHE_KEY_RECENTLY_PLAYED, &played, LISTENING_HISTORY_TTL).await
    {
        warning!("Failed to cache recently played tracks. Err: {:?}", e);
    }

    Ok(played)
}

pub(crate) fn progress_spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
