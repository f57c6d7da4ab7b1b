use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::festival::FestivalConfig;

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Listening history window as understood by the top-artists endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeRange {
    Short,
    Medium,
    Long,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Short, TimeRange::Medium, TimeRange::Long];
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        };
        write!(f, "{}", s)
    }
}

pub fn parse_time_range(input: &str) -> Result<TimeRange, String> {
    let normalized = input.trim().to_ascii_lowercase().replace('-', "_");
    if normalized.is_empty() {
        return Err("time range cannot be empty".to_string());
    }

    match normalized.as_str() {
        "short" | "short_term" => Ok(TimeRange::Short),
        "medium" | "medium_term" => Ok(TimeRange::Medium),
        "long" | "long_term" => Ok(TimeRange::Long),
        other => Err(format!(
            "invalid value '{}' (expected short, medium, or long)",
            other
        )),
    }
}

/// Maps a lineup position to a human-readable set time.
///
/// Headliners always play the configured headliner slot. Everyone else is
/// scheduled from the stage's start time, one slot per position index.
/// Stage indexes beyond the configured list fall back to the first stage's
/// start time, and times wrap past midnight.
pub fn format_time_slot(
    config: &FestivalConfig,
    stage_index: usize,
    artist_index: usize,
    is_headliner: bool,
) -> String {
    if is_headliner {
        return config.headliner_time_label.clone();
    }

    // Different stages have different start times
    let (start_hour, start_minute) = config
        .stage_start_times
        .get(stage_index)
        .or_else(|| config.stage_start_times.first())
        .copied()
        .unwrap_or((14, 0));

    let total_minutes =
        start_hour * 60 + start_minute + artist_index as u32 * config.slot_duration_minutes;
    let hour = (total_minutes / 60) % 24;
    let minute = total_minutes % 60;

    let display_hour = if hour > 12 {
        hour - 12
    } else if hour == 0 {
        12
    } else {
        hour
    };
    let period = if hour >= 12 { "PM" } else { "AM" };

    format!("{}:{:02} {}", display_hour, minute, period)
}
