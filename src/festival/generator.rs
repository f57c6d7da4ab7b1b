use std::collections::HashSet;
use std::fmt;

use chrono::Utc;

use crate::types::{Artist, ExternalUrls, Festival, FestivalDay, RecentlyPlayedTrack, Stage};
use crate::utils::TimeRange;

use super::config::{DayPlan, FestivalConfig, StageSource};
use super::name;
use super::random::{SeededRandom, derive_seed};

/// Errors that can abort a generation call.
///
/// Running out of artists mid-allocation is not one of them: stages are
/// filled best-effort and simply come up short once the pool is exhausted.
#[derive(Debug)]
pub enum FestivalError {
    /// The deduplicated artist pool is below the configured minimum.
    InsufficientArtists { found: usize, required: usize },
}

impl fmt::Display for FestivalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FestivalError::InsufficientArtists { found, required } => write!(
                f,
                "Not enough artists in your listening history ({} found, {} needed). Listen to more music on Spotify and try again!",
                found, required
            ),
        }
    }
}

impl std::error::Error for FestivalError {}

/// Generates a personalized festival from Spotify listening data with the
/// default configuration.
pub fn generate_festival(
    top_artists_short: &[Artist],
    top_artists_medium: &[Artist],
    top_artists_long: &[Artist],
    recently_played: &[RecentlyPlayedTrack],
) -> Result<Festival, FestivalError> {
    generate_festival_with(
        &FestivalConfig::default(),
        top_artists_short,
        top_artists_medium,
        top_artists_long,
        recently_played,
    )
}

/// Generates a personalized festival from Spotify listening data.
///
/// The inputs are borrowed and copied internally, so concurrent generation
/// calls never alias each other's state. Fails only when the deduplicated
/// artist pool is smaller than `config.min_artists_required`; afterwards
/// allocation is best-effort and stages may hold fewer artists than
/// configured once the pool runs dry.
pub fn generate_festival_with(
    config: &FestivalConfig,
    top_artists_short: &[Artist],
    top_artists_medium: &[Artist],
    top_artists_long: &[Artist],
    recently_played: &[RecentlyPlayedTrack],
) -> Result<Festival, FestivalError> {
    // Priority order: short -> medium -> long (most recent listening first)
    let pool = dedupe_artists(&[top_artists_short, top_artists_medium, top_artists_long]);

    if pool.len() < config.min_artists_required {
        return Err(FestivalError::InsufficientArtists {
            found: pool.len(),
            required: config.min_artists_required,
        });
    }

    // Stable sort: equally popular artists keep their pool priority order
    let mut by_popularity = pool.clone();
    by_popularity.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    let headliners: Vec<Artist> = by_popularity
        .into_iter()
        .take(config.headliner_count)
        .collect();

    let top_genres = rank_genres(&pool, config.top_genres_limit);

    // Cosmetics are seeded from the artist id set: same taste, same name and
    // location. Draw order is prefix, noun, location on one shared stream.
    let ids: Vec<String> = pool.iter().map(|a| a.id.clone()).collect();
    let mut rng = SeededRandom::new(&derive_seed(&ids));
    let festival_name = name::festival_name(&top_genres, &mut rng);
    let location = name::festival_location(&mut rng);
    let dates = name::festival_dates(Utc::now().date_naive(), config.day_plans.len());

    let recent_artists = artists_from_recent(recently_played);

    let mut used_artist_ids: HashSet<String> = HashSet::new();
    for headliner in &headliners {
        used_artist_ids.insert(headliner.id.clone());
    }

    let sources = DaySources {
        short: top_artists_short,
        medium: top_artists_medium,
        long: top_artists_long,
        recent: &recent_artists,
        pool: &pool,
    };

    let days: Vec<FestivalDay> = config
        .day_plans
        .iter()
        .zip(headliners.iter())
        .enumerate()
        .map(|(day_index, (plan, headliner))| {
            allocate_day(
                config,
                plan,
                headliner,
                name::day_date(day_index),
                &sources,
                &mut used_artist_ids,
            )
        })
        .collect();

    Ok(Festival {
        name: festival_name,
        dates,
        location,
        days,
        headliners,
        total_artists: used_artist_ids.len(),
    })
}

/// Merges ranked artist lists into one unique pool, first seen wins.
pub fn dedupe_artists(lists: &[&[Artist]]) -> Vec<Artist> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for list in lists {
        for artist in *list {
            if seen.insert(artist.id.clone()) {
                unique.push(artist.clone());
            }
        }
    }

    unique
}

/// Ranks genre tags by occurrence count descending, ties broken by first
/// appearance in the pool.
pub fn rank_genres(artists: &[Artist], limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for artist in artists {
        for genre in &artist.genres {
            match counts.iter_mut().find(|(name, _)| name == genre) {
                Some((_, count)) => *count += 1,
                None => counts.push((genre.clone(), 1)),
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1)); // stable: ties keep first-seen order
    counts.truncate(limit);
    counts.into_iter().map(|(name, _)| name).collect()
}

/// Projects minimal artist records out of play events, first seen wins.
///
/// This source carries no genre data, so genres stay empty; artwork and
/// popularity come from the track, and the profile link is synthesized
/// from the artist id.
pub fn artists_from_recent(recently_played: &[RecentlyPlayedTrack]) -> Vec<Artist> {
    let mut seen = HashSet::new();
    let mut artists = Vec::new();

    for item in recently_played {
        for artist_ref in &item.track.artists {
            if seen.insert(artist_ref.id.clone()) {
                artists.push(Artist {
                    id: artist_ref.id.clone(),
                    name: artist_ref.name.clone(),
                    genres: Vec::new(),
                    images: item.track.album.images.clone(),
                    popularity: item.track.popularity,
                    external_urls: ExternalUrls {
                        spotify: format!("https://open.spotify.com/artist/{}", artist_ref.id),
                    },
                });
            }
        }
    }

    artists
}

struct DaySources<'a> {
    short: &'a [Artist],
    medium: &'a [Artist],
    long: &'a [Artist],
    recent: &'a [Artist],
    pool: &'a [Artist],
}

impl<'a> DaySources<'a> {
    fn primary(&self, range: TimeRange) -> &'a [Artist] {
        match range {
            TimeRange::Short => self.short,
            TimeRange::Medium => self.medium,
            TimeRange::Long => self.long,
        }
    }
}

/// Fills one day's stages from its plan.
///
/// The first stage is the Main Stage: it opens with the day's headliner
/// (marked used before any stage is filled) and takes `main_stage_artists`
/// more; the remaining stages take `artists_per_stage` each. Every pull
/// goes through `take_unused`, so an artist placed anywhere never shows up
/// again on a later stage or day.
fn allocate_day(
    config: &FestivalConfig,
    plan: &DayPlan,
    headliner: &Artist,
    date: String,
    sources: &DaySources,
    used_artist_ids: &mut HashSet<String>,
) -> FestivalDay {
    let primary = sources.primary(plan.primary);

    let stages = plan
        .stages
        .iter()
        .enumerate()
        .map(|(stage_index, stage_plan)| {
            let target = if stage_index == 0 {
                config.main_stage_artists
            } else {
                config.artists_per_stage
            };

            let source: Vec<Artist> = match stage_plan.source {
                StageSource::Primary => primary.to_vec(),
                StageSource::Secondary => {
                    // Recent discoveries carry the stage only when enough of
                    // them are still unplaced
                    if count_unused(sources.recent, used_artist_ids) > 5 {
                        sources.recent.to_vec()
                    } else {
                        primary.to_vec()
                    }
                }
                StageSource::Chill => {
                    let chill =
                        chill_artists(primary, used_artist_ids, &config.chill_genre_keywords);
                    if chill.len() >= config.artists_per_stage {
                        chill
                    } else {
                        primary.to_vec()
                    }
                }
            };

            let mut artists = Vec::with_capacity(target + 1);
            if stage_index == 0 {
                artists.push(headliner.clone());
            }
            artists.extend(take_unused(&source, used_artist_ids, sources.pool, target));

            Stage {
                name: stage_plan.name.clone(),
                color: stage_plan.color.clone(),
                artists,
            }
        })
        .collect();

    FestivalDay {
        name: plan.name.clone(),
        date,
        headliner: headliner.clone(),
        stages,
    }
}

/// Takes up to `count` not-yet-used artists from `source` in order, topping
/// up from `fallback` when the source runs dry. Taken artists are marked
/// used immediately. May return fewer than `count` when both run out.
fn take_unused(
    source: &[Artist],
    used_artist_ids: &mut HashSet<String>,
    fallback: &[Artist],
    count: usize,
) -> Vec<Artist> {
    let mut taken = Vec::new();

    for artist in source.iter().chain(fallback.iter()) {
        if taken.len() >= count {
            break;
        }
        if used_artist_ids.insert(artist.id.clone()) {
            taken.push(artist.clone());
        }
    }

    taken
}

fn count_unused(artists: &[Artist], used_artist_ids: &HashSet<String>) -> usize {
    artists
        .iter()
        .filter(|a| !used_artist_ids.contains(&a.id))
        .count()
}

/// Still-unplaced artists whose genre tags read as mellow, per the
/// configured keywords (case-insensitive substring match).
fn chill_artists(
    artists: &[Artist],
    used_artist_ids: &HashSet<String>,
    keywords: &[String],
) -> Vec<Artist> {
    artists
        .iter()
        .filter(|a| !used_artist_ids.contains(&a.id))
        .filter(|a| {
            a.genres.iter().any(|genre| {
                let genre = genre.to_lowercase();
                keywords.iter().any(|keyword| genre.contains(keyword.as_str()))
            })
        })
        .cloned()
        .collect()
}
