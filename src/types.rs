use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

/// A full artist record as returned by the top-artists endpoint.
///
/// Artists derived from recently played tracks carry no genre data; their
/// `genres` list is empty and the remaining fields are projected from the
/// track (see `festival::generator::artists_from_recent`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub popularity: u32,
    pub external_urls: ExternalUrls,
}

/// Minimal artist reference embedded in a track object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtistRef>,
    pub album: Album,
    pub popularity: u32,
}

/// One play event from the recently-played endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedTrack {
    pub track: Track,
    pub played_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopArtistsResponse {
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<RecentlyPlayedTrack>,
}

/// A named stage within a festival day.
///
/// `artists` is kept in assignment order; display times are derived from the
/// position index by `utils::format_time_slot`. `color` is a terminal color
/// token used when rendering the stage header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub color: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalDay {
    pub name: String,
    pub date: String,
    pub headliner: Artist,
    pub stages: Vec<Stage>,
}

/// The generated festival aggregate.
///
/// `headliners` holds one artist per day ordered by descending popularity;
/// each day's `headliner` equals the entry at that day's index.
/// `total_artists` counts the distinct artist ids placed anywhere in the
/// festival.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    pub dates: String,
    pub location: String,
    pub days: Vec<FestivalDay>,
    pub headliners: Vec<Artist>,
    pub total_artists: usize,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub name: String,
    pub genres: String,
    pub popularity: u32,
}

#[derive(Tabled)]
pub struct LineupTableRow {
    pub time: String,
    pub artist: String,
    pub genres: String,
}
