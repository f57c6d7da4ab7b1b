use std::collections::HashSet;

use festcli::festival::generator::{artists_from_recent, dedupe_artists, rank_genres};
use festcli::festival::{FestivalError, derive_seed, generate_festival};
use festcli::types::{
    Album, Artist, ExternalUrls, Festival, Image, RecentlyPlayedTrack, Track, TrackArtistRef,
};

// Helper function to create a test artist
fn artist(id: &str, popularity: u32, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("Artist {}", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        images: Vec::new(),
        popularity,
        external_urls: ExternalUrls {
            spotify: format!("https://open.spotify.com/artist/{}", id),
        },
    }
}

// Helper function to create a batch of artists with descending popularity
fn artist_batch(prefix: &str, count: usize, top_popularity: u32) -> Vec<Artist> {
    (0..count)
        .map(|i| {
            artist(
                &format!("{}{:02}", prefix, i),
                top_popularity.saturating_sub(i as u32),
                &[],
            )
        })
        .collect()
}

// Helper function to create a play event with a single track artist
fn play_event(artist_id: &str, popularity: u32) -> RecentlyPlayedTrack {
    RecentlyPlayedTrack {
        track: Track {
            id: format!("track_{}", artist_id),
            name: format!("Track {}", artist_id),
            artists: vec![TrackArtistRef {
                id: artist_id.to_string(),
                name: format!("Artist {}", artist_id),
            }],
            album: Album {
                images: vec![Image {
                    url: format!("https://images.example/{}.jpg", artist_id),
                    height: Some(300),
                    width: Some(300),
                }],
            },
            popularity,
        },
        played_at: "2024-05-01T12:00:00Z".to_string(),
    }
}

// All artist ids placed on any stage (headliners included via Main Stage)
fn placed_artist_ids(festival: &Festival) -> Vec<String> {
    festival
        .days
        .iter()
        .flat_map(|day| day.stages.iter())
        .flat_map(|stage| stage.artists.iter())
        .map(|a| a.id.clone())
        .collect()
}

#[test]
fn test_no_artist_appears_twice() {
    let short = artist_batch("s", 30, 90);
    let medium = artist_batch("m", 30, 60);
    let long = artist_batch("l", 20, 40);
    let recent: Vec<RecentlyPlayedTrack> =
        (0..10).map(|i| play_event(&format!("r{:02}", i), 50)).collect();

    let festival = generate_festival(&short, &medium, &long, &recent).unwrap();

    let placed = placed_artist_ids(&festival);
    let unique: HashSet<&String> = placed.iter().collect();
    assert_eq!(placed.len(), unique.len());

    // Headliners are placed on their Main Stages, so the distinct count
    // covers them as well
    assert_eq!(festival.total_artists, unique.len());
}

#[test]
fn test_fully_populated_festival_shape() {
    let short = artist_batch("s", 30, 90);
    let medium = artist_batch("m", 30, 60);
    let long = artist_batch("l", 20, 40);

    let festival = generate_festival(&short, &medium, &long, &[]).unwrap();

    assert_eq!(festival.days.len(), 3);
    assert_eq!(festival.headliners.len(), 3);

    for day in &festival.days {
        assert_eq!(day.stages.len(), 3);
        // Main Stage holds the headliner plus five more, other stages six
        assert_eq!(day.stages[0].artists.len(), 6);
        assert_eq!(day.stages[1].artists.len(), 6);
        assert_eq!(day.stages[2].artists.len(), 6);
    }

    // 3 headliners + 3 days * (5 + 6 + 6)
    assert_eq!(festival.total_artists, 54);
}

#[test]
fn test_headliners_sorted_by_popularity_and_present_on_main_stage() {
    let short = artist_batch("s", 15, 90); // s00..s02 are the most popular overall
    let medium = artist_batch("m", 15, 60);
    let long = artist_batch("l", 15, 40);

    let festival = generate_festival(&short, &medium, &long, &[]).unwrap();

    let headliner_ids: Vec<&str> =
        festival.headliners.iter().map(|h| h.id.as_str()).collect();
    assert_eq!(headliner_ids, vec!["s00", "s01", "s02"]);

    for (index, day) in festival.days.iter().enumerate() {
        assert_eq!(day.headliner.id, festival.headliners[index].id);
        // The day's Main Stage opens with its headliner
        assert_eq!(day.stages[0].artists[0].id, day.headliner.id);
    }
}

#[test]
fn test_cosmetics_ignore_input_order() {
    let genres: &[&str] = &["indie rock"];
    let short: Vec<Artist> = (0..12)
        .map(|i| artist(&format!("s{:02}", i), 80 - i as u32, genres))
        .collect();
    let medium = artist_batch("m", 12, 60);
    let long = artist_batch("l", 12, 40);

    let mut short_reversed = short.clone();
    short_reversed.reverse();
    let mut medium_reversed = medium.clone();
    medium_reversed.reverse();
    let mut long_reversed = long.clone();
    long_reversed.reverse();

    let first = generate_festival(&short, &medium, &long, &[]).unwrap();
    let second =
        generate_festival(&short_reversed, &medium_reversed, &long_reversed, &[]).unwrap();

    // Same artist id set, any order: same seed, same cosmetics
    assert_eq!(first.name, second.name);
    assert_eq!(first.location, second.location);
}

#[test]
fn test_seed_changes_with_artist_set() {
    let base: Vec<String> = (0..10).map(|i| format!("id{:02}", i)).collect();
    let mut changed = base.clone();
    changed[4] = "something_else".to_string();

    assert_ne!(derive_seed(&base), derive_seed(&changed));
}

#[test]
fn test_insufficient_artists() {
    let nine = artist_batch("s", 9, 50);
    let result = generate_festival(&nine, &[], &[], &[]);

    match result {
        Err(FestivalError::InsufficientArtists { found, required }) => {
            assert_eq!(found, 9);
            assert_eq!(required, 10);
        }
        other => panic!("expected InsufficientArtists, got {:?}", other.map(|f| f.name)),
    }

    // Overlapping lists don't help: uniqueness is what counts
    let result = generate_festival(&nine, &nine, &nine, &[]);
    assert!(matches!(
        result,
        Err(FestivalError::InsufficientArtists { found: 9, .. })
    ));

    // Ten unique artists are enough
    let ten = artist_batch("s", 10, 50);
    assert!(generate_festival(&ten, &[], &[], &[]).is_ok());
}

#[test]
fn test_fallback_fills_sparse_primary_source() {
    // Friday's primary list has only two artists left once the headliners
    // are taken; the rest of the Main Stage must come from the global pool
    let short = artist_batch("s", 5, 99);
    let medium = artist_batch("m", 30, 60);

    let festival = generate_festival(&short, &medium, &[], &[]).unwrap();

    // s00..s02 headline, leaving s03 and s04 for Friday's Main Stage
    let friday_main = &festival.days[0].stages[0];
    assert_eq!(friday_main.artists.len(), 6);

    let ids: Vec<&str> = friday_main.artists.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids[0], "s00"); // headliner
    assert!(ids.contains(&"s03"));
    assert!(ids.contains(&"s04"));
    // Fallback artists arrive in pool order
    assert!(ids.contains(&"m00"));

    // Global uniqueness still holds
    let placed = placed_artist_ids(&festival);
    let unique: HashSet<&String> = placed.iter().collect();
    assert_eq!(placed.len(), unique.len());
}

#[test]
fn test_genre_ranking() {
    // rock and pop tie at two, rock was seen first
    let artists = vec![
        artist("a", 10, &["rock"]),
        artist("b", 10, &["rock", "pop"]),
        artist("c", 10, &["pop"]),
    ];
    assert_eq!(rank_genres(&artists, 5), vec!["rock", "pop"]);

    // count descending, then first-seen order
    let artists = vec![
        artist("a", 10, &["rock"]),
        artist("b", 10, &["rock"]),
        artist("c", 10, &["pop"]),
        artist("d", 10, &["jazz"]),
    ];
    assert_eq!(rank_genres(&artists, 5), vec!["rock", "pop", "jazz"]);

    // limit truncates the ranking
    assert_eq!(rank_genres(&artists, 2), vec!["rock", "pop"]);
}

#[test]
fn test_chill_stage_prefers_mellow_genres() {
    let short = artist_batch("s", 30, 99);
    let medium = artist_batch("m", 30, 60);

    // Sunday's primary list: five loud openers followed by eight mellow acts
    let mut long: Vec<Artist> = (0..5)
        .map(|i| artist(&format!("ln{:02}", i), 30, &["techno"]))
        .collect();
    long.extend((0..8).map(|i| artist(&format!("lc{:02}", i), 20, &["indie folk"])));

    let festival = generate_festival(&short, &medium, &long, &[]).unwrap();

    let acoustic_grove = &festival.days[2].stages[1];
    assert_eq!(acoustic_grove.name, "Acoustic Grove");
    assert_eq!(acoustic_grove.artists.len(), 6);
    for placed in &acoustic_grove.artists {
        assert!(
            placed.id.starts_with("lc"),
            "expected a mellow act, got {}",
            placed.id
        );
    }
}

#[test]
fn test_discovery_stage_uses_recent_plays() {
    let short = artist_batch("s", 30, 99);
    let medium = artist_batch("m", 30, 60);
    let long = artist_batch("l", 30, 40);
    let recent: Vec<RecentlyPlayedTrack> =
        (0..8).map(|i| play_event(&format!("r{:02}", i), 45)).collect();

    let festival = generate_festival(&short, &medium, &long, &recent).unwrap();

    let new_sounds = &festival.days[1].stages[2];
    assert_eq!(new_sounds.name, "New Sounds Tent");
    assert_eq!(new_sounds.artists.len(), 6);
    for placed in &new_sounds.artists {
        assert!(placed.id.starts_with('r'));
        // Recently-played projections carry no genre data
        assert!(placed.genres.is_empty());
    }
}

#[test]
fn test_discovery_stage_falls_back_without_enough_recent_plays() {
    let short = artist_batch("s", 30, 99);
    let medium = artist_batch("m", 30, 60);
    let long = artist_batch("l", 30, 40);
    // Five or fewer unused recent artists: the stage uses the day's primary
    let recent: Vec<RecentlyPlayedTrack> =
        (0..4).map(|i| play_event(&format!("r{:02}", i), 45)).collect();

    let festival = generate_festival(&short, &medium, &long, &recent).unwrap();

    let new_sounds = &festival.days[1].stages[2];
    for placed in &new_sounds.artists {
        assert!(placed.id.starts_with('m'));
    }
}

#[test]
fn test_exhausted_pool_leaves_stages_short() {
    // Exactly the minimum: ten artists for 54 slots
    let short = artist_batch("s", 10, 90);

    let festival = generate_festival(&short, &[], &[], &[]).unwrap();

    assert_eq!(festival.days.len(), 3);
    assert_eq!(festival.total_artists, 10);

    // Friday takes everything: headliner + 5 on main, 2 on the second
    // stage, then the pool is dry
    let friday = &festival.days[0];
    assert_eq!(friday.stages[0].artists.len(), 6);
    assert_eq!(friday.stages[1].artists.len(), 2);
    assert_eq!(friday.stages[2].artists.len(), 0);

    // Later days still get their headliners but nothing else
    for day in &festival.days[1..] {
        assert_eq!(day.stages.len(), 3);
        assert_eq!(day.stages[0].artists.len(), 1);
        assert_eq!(day.stages[0].artists[0].id, day.headliner.id);
        assert!(day.stages[1].artists.is_empty());
        assert!(day.stages[2].artists.is_empty());
    }

    let placed = placed_artist_ids(&festival);
    let unique: HashSet<&String> = placed.iter().collect();
    assert_eq!(placed.len(), unique.len());
}

#[test]
fn test_dedupe_keeps_first_seen_record() {
    let short = vec![artist("x", 10, &["rock"])];
    let medium = vec![artist("x", 99, &["pop"]), artist("y", 20, &[])];

    let pool = dedupe_artists(&[&short, &medium]);

    assert_eq!(pool.len(), 2);
    // The short-term record wins for duplicated ids
    assert_eq!(pool[0].id, "x");
    assert_eq!(pool[0].popularity, 10);
    assert_eq!(pool[0].genres, vec!["rock"]);
    assert_eq!(pool[1].id, "y");
}

#[test]
fn test_artists_from_recent_projection() {
    let mut events = vec![
        play_event("r00", 70),
        play_event("r01", 55),
        play_event("r00", 10), // repeat play of the same artist
    ];
    // a second artist on an existing track
    events[1].track.artists.push(TrackArtistRef {
        id: "r02".to_string(),
        name: "Artist r02".to_string(),
    });

    let artists = artists_from_recent(&events);

    assert_eq!(artists.len(), 3);

    // First seen wins: the repeat play doesn't overwrite popularity
    assert_eq!(artists[0].id, "r00");
    assert_eq!(artists[0].popularity, 70);

    // Projection rules: no genres, album art, synthesized profile link
    assert!(artists[0].genres.is_empty());
    assert_eq!(artists[0].images.len(), 1);
    assert_eq!(
        artists[0].external_urls.spotify,
        "https://open.spotify.com/artist/r00"
    );

    // Every artist on a track is extracted
    assert_eq!(artists[1].id, "r01");
    assert_eq!(artists[2].id, "r02");
    assert_eq!(artists[2].popularity, 55);
}
