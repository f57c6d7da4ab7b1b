use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{RecentlyPlayedResponse, RecentlyPlayedTrack},
};

use super::top::retry_after_elapsed;

/// Retrieves the user's recently played tracks.
///
/// Fetches the play-history events used as the discovery source for the
/// festival's "new sounds" stage. Each event carries the full track object
/// and a played-at timestamp; the festival core projects minimal artist
/// records out of these (track artists carry no genre data).
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of play events to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<RecentlyPlayedTrack>)` - Play events, most recent first
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Rate Limiting
///
/// Implements the same retry logic as `get_top_artists()`: 429 responses
/// are waited out per the `Retry-After` header (capped at 120 seconds) and
/// 502 Bad Gateway responses are retried after a 10-second delay.
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// let played = get_recently_played(token, 50).await?;
/// println!("Last played: {}", played[0].track.name);
/// ```
pub async fn get_recently_played(
    token: &str,
    limit: u32,
) -> Result<Vec<RecentlyPlayedTrack>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/player/recently-played?limit={limit}",
            uri = &config::spotify_apiurl(),
            limit = limit
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => {
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    if retry_after_elapsed(&resp).await {
                        continue; // retry
                    }
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<RecentlyPlayedResponse>().await?;

        return Ok(res.items);
    }
}
