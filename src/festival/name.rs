use chrono::{Datelike, NaiveDate};

use super::random::SeededRandom;

const FESTIVAL_MONTH: u32 = 6;
const FESTIVAL_START_DAY: u32 = 14;

const ADJECTIVES: [&str; 24] = [
    "Sonic", "Electric", "Cosmic", "Neon", "Golden", "Velvet", "Crystal", "Mystic", "Wild",
    "Sunset", "Midnight", "Aurora", "Stellar", "Lunar", "Solar", "Urban", "Desert", "Forest",
    "Ocean", "Mountain", "River", "Island", "Sky", "Horizon",
];

const NOUNS: [&str; 23] = [
    "Waves",
    "Vibes",
    "Dreams",
    "Nights",
    "Days",
    "Sessions",
    "Beats",
    "Sounds",
    "Rhythms",
    "Melodies",
    "Harmonies",
    "Echoes",
    "Frequencies",
    "Pulse",
    "Flow",
    "Groove",
    "Jam",
    "Sessions",
    "Festival",
    "Fest",
    "Gathering",
    "Assembly",
    "Collective",
];

/// Genre-family keywords matched against the ranked genres, in match
/// priority order, each with its themed prefix words.
const GENRE_WORDS: [(&str, [&str; 4]); 10] = [
    ("electronic", ["Circuit", "Digital", "Synth", "Electric"]),
    ("rock", ["Riff", "Amplified", "Loud", "Raw"]),
    ("indie", ["Alternative", "Underground", "Indie", "DIY"]),
    ("pop", ["Neon", "Bright", "Shiny", "Pop"]),
    ("hip hop", ["Urban", "Street", "Block", "Cipher"]),
    ("jazz", ["Blue Note", "Smooth", "Cool", "Modal"]),
    ("classical", ["Symphony", "Orchestral", "Chamber", "Baroque"]),
    ("folk", ["Acoustic", "Rustic", "Campfire", "Roots"]),
    ("metal", ["Heavy", "Dark", "Iron", "Steel"]),
    ("country", ["Honky Tonk", "Nashville", "Outlaw", "Western"]),
];

const LOCATIONS: [&str; 10] = [
    "Golden Gate Park, SF",
    "Desert Valley, CA",
    "Coastal Meadows, OR",
    "Mountain View, CO",
    "Lakeside Grounds, MI",
    "Forest Clearing, WA",
    "Sunset Beach, FL",
    "Urban Plaza, NY",
    "Riverside Park, TX",
    "Island Shores, HI",
];

/// Builds the festival name from the ranked genre list.
///
/// The first genre containing a known family keyword picks a themed prefix
/// word; without a match a generic adjective is drawn instead. A noun is
/// always appended. The prefix draw happens before the noun draw; together
/// with the location draw in [`festival_location`] this ordering is part of
/// the determinism contract, since all three share one seeded stream.
pub fn festival_name(top_genres: &[String], rng: &mut SeededRandom) -> String {
    let mut prefix: Option<&str> = None;

    'genres: for genre in top_genres {
        let genre_lower = genre.to_lowercase();
        for (family, words) in &GENRE_WORDS {
            if genre_lower.contains(family) {
                prefix = Some(*rng.choose(words));
                break 'genres;
            }
        }
    }

    let prefix = prefix.unwrap_or_else(|| *rng.choose(&ADJECTIVES));
    let noun = *rng.choose(&NOUNS);

    format!("{} {}", prefix, noun)
}

/// Draws the festival location. Must be called after [`festival_name`];
/// it consumes the next value of the shared seeded stream.
pub fn festival_location(rng: &mut SeededRandom) -> String {
    rng.choose(&LOCATIONS).to_string()
}

/// Formats the festival date range for the next occurring June.
///
/// Unlike name and location this is wall-clock derived, not seeded: once
/// June has started, the festival rolls over to next year's edition.
pub fn festival_dates(today: NaiveDate, days: usize) -> String {
    let year = if today.month() >= FESTIVAL_MONTH {
        today.year() + 1
    } else {
        today.year()
    };
    let end_day = FESTIVAL_START_DAY + days.saturating_sub(1) as u32;

    format!("June {}-{}, {}", FESTIVAL_START_DAY, end_day, year)
}

/// Calendar date label for one festival day.
pub fn day_date(day_index: usize) -> String {
    format!("June {}", FESTIVAL_START_DAY + day_index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_uses_genre_family_prefix() {
        let genres = vec!["garage rock".to_string()];
        let mut rng = SeededRandom::new("seed");
        let name = festival_name(&genres, &mut rng);

        let (_, rock_words) = GENRE_WORDS[1];
        let prefix = name.rsplit_once(' ').map(|(p, _)| p).unwrap_or(&name);
        assert!(rock_words.contains(&prefix));
    }

    #[test]
    fn name_falls_back_to_adjective() {
        let genres = vec!["vaporwave".to_string()];
        let mut rng = SeededRandom::new("seed");
        let name = festival_name(&genres, &mut rng);

        let prefix = name.split(' ').next().unwrap();
        assert!(ADJECTIVES.contains(&prefix));
    }

    #[test]
    fn first_matching_genre_wins() {
        // "jazz" ranks ahead of "rock", so the prefix comes from the jazz
        // family even though both would match.
        let genres = vec!["nu jazz".to_string(), "rock".to_string()];
        let mut rng = SeededRandom::new("seed");
        let name = festival_name(&genres, &mut rng);

        let (_, jazz_words) = GENRE_WORDS[5];
        let noun = name.rsplit(' ').next().unwrap();
        let prefix = &name[..name.len() - noun.len() - 1];
        assert!(jazz_words.contains(&prefix));
    }

    #[test]
    fn same_stream_same_name_and_location() {
        let genres = vec!["indie pop".to_string()];

        let mut first = SeededRandom::new("stable-seed");
        let mut second = SeededRandom::new("stable-seed");

        assert_eq!(
            festival_name(&genres, &mut first),
            festival_name(&genres, &mut second)
        );
        assert_eq!(festival_location(&mut first), festival_location(&mut second));
    }

    #[test]
    fn dates_roll_to_next_year_from_june_onward() {
        let may = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let june = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let december = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

        assert_eq!(festival_dates(may, 3), "June 14-16, 2025");
        assert_eq!(festival_dates(june, 3), "June 14-16, 2026");
        assert_eq!(festival_dates(december, 3), "June 14-16, 2026");
    }

    #[test]
    fn day_dates_are_consecutive() {
        assert_eq!(day_date(0), "June 14");
        assert_eq!(day_date(1), "June 15");
        assert_eq!(day_date(2), "June 16");
    }
}
