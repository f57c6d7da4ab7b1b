use std::cmp::Ordering;
use std::time::Duration;

use colored::Colorize;
use tabled::Table;

use crate::{
    error,
    festival::{FestivalConfig, generate_festival},
    management::{CACHE_KEY_FESTIVAL, CacheManager, TokenManager},
    success,
    types::{Artist, Festival, FestivalDay, LineupTableRow, Stage},
    utils::{TimeRange, format_time_slot},
    warning,
};

use super::artists::{ensure_recently_played, ensure_top_artists};

/// How long a generated festival stays cached.
const FESTIVAL_TTL: Duration = Duration::from_secs(60 * 60 * 24);

pub async fn festival(update: bool, force: bool) {
    if !update {
        match CacheManager::get::<Festival>(CACHE_KEY_FESTIVAL).await {
            Ok(Some(cached)) => {
                render_festival(&cached);
                return;
            }
            Ok(None) => {}
            Err(e) => warning!("Failed to load cached festival. Err: {:?}", e),
        }
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run festcli auth\n Error: {}",
                e
            );
        }
    };

    let short = match ensure_top_artists(&mut token_mgr, TimeRange::Short, force).await {
        Ok(artists) => artists,
        Err(e) => error!("Cannot fetch top artists (short term). Err: {}", e),
    };
    let medium = match ensure_top_artists(&mut token_mgr, TimeRange::Medium, force).await {
        Ok(artists) => artists,
        Err(e) => error!("Cannot fetch top artists (medium term). Err: {}", e),
    };
    let long = match ensure_top_artists(&mut token_mgr, TimeRange::Long, force).await {
        Ok(artists) => artists,
        Err(e) => error!("Cannot fetch top artists (long term). Err: {}", e),
    };
    let recently_played = match ensure_recently_played(&mut token_mgr, force).await {
        Ok(played) => played,
        Err(e) => error!("Cannot fetch recently played tracks. Err: {}", e),
    };

    let generated = match generate_festival(&short, &medium, &long, &recently_played) {
        Ok(festival) => festival,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = CacheManager::set(CACHE_KEY_FESTIVAL, &generated, FESTIVAL_TTL).await {
        warning!("Failed to cache festival. Err: {:?}", e);
    }

    success!(
        "Generated {name} with {count} artists",
        name = generated.name,
        count = generated.total_artists
    );
    render_festival(&generated);
}

fn render_festival(festival: &Festival) {
    let config = FestivalConfig::default();

    println!();
    println!("{}", festival.name.bold());
    println!(
        "{dates} | {location}",
        dates = festival.dates,
        location = festival.location
    );
    println!(
        "Headliners: {}",
        festival
            .headliners
            .iter()
            .map(|h| h.name.clone())
            .collect::<Vec<String>>()
            .join(", ")
    );
    println!(
        "{count} artists across {days} days",
        count = festival.total_artists,
        days = festival.days.len()
    );

    for day in &festival.days {
        println!();
        println!(
            "{name} — {date}",
            name = day.name.bold(),
            date = day.date
        );

        for (stage_index, stage) in day.stages.iter().enumerate() {
            println!(
                "{}",
                stage.name.color(stage.color.as_str()).bold()
            );

            let table = Table::new(lineup_rows(&config, day, stage, stage_index));
            println!("{}", table);
        }
    }
}

/// Builds one stage's lineup rows: the headliner on top, everyone else
/// latest set first. Set times come from the artist's assignment position,
/// not the display order.
fn lineup_rows(
    config: &FestivalConfig,
    day: &FestivalDay,
    stage: &Stage,
    stage_index: usize,
) -> Vec<LineupTableRow> {
    let is_headliner =
        |artist: &Artist| stage.name == "Main Stage" && artist.id == day.headliner.id;

    let mut positioned: Vec<(usize, &Artist)> = stage.artists.iter().enumerate().collect();
    positioned.sort_by(|a, b| {
        match (is_headliner(a.1), is_headliner(b.1)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => b.0.cmp(&a.0),
        }
    });

    positioned
        .into_iter()
        .map(|(position, artist)| LineupTableRow {
            time: format_time_slot(config, stage_index, position, is_headliner(artist)),
            artist: artist.name.clone(),
            genres: artist
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect()
}
