use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{Artist, TopArtistsResponse},
    utils::TimeRange,
    warning,
};

/// Retrieves the user's ranked top artists for one time window.
///
/// Fetches the affinity-ranked artist list the festival generator consumes.
/// The ranking order returned by Spotify is preserved; the generator relies
/// on it as the priority order within each time window.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `time_range` - Listening history window (short, medium, or long term)
/// * `limit` - Maximum number of artists to return (1-50)
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Artist>)` - Ranked artists for the requested window
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Rate Limiting
///
/// The function implements intelligent rate limit handling:
/// - Detects 429 Too Many Requests responses
/// - Reads the `Retry-After` header for the recommended delay
/// - Automatically waits and retries for delays ≤ 120 seconds
/// - Issues a warning and propagates the error for excessive delays
///
/// # Retry Logic
///
/// 502 Bad Gateway responses are retried automatically with a 10-second
/// delay between attempts. Other errors are propagated immediately.
///
/// # Example
///
/// ```
/// let token = "BQC..."; // Valid access token
/// let artists = get_top_artists(token, TimeRange::Short, 50).await?;
/// println!("Top artist this month: {}", artists[0].name);
/// ```
pub async fn get_top_artists(
    token: &str,
    time_range: TimeRange,
    limit: u32,
) -> Result<Vec<Artist>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/top/artists?time_range={time_range}&limit={limit}",
            uri = &config::spotify_apiurl(),
            time_range = time_range,
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

        let res = response.json::<TopArtistsResponse>().await?;

        return Ok(res.items);
    }
}

/// Waits out a 429 response's `Retry-After` delay.
///
/// Returns true when the delay was short enough to wait through and the
/// request should be retried. Delays above 120 seconds are not waited on;
/// the caller propagates the response as an error instead.
pub(crate) async fn retry_after_elapsed(response: &reqwest::Response) -> bool {
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    if retry_after <= 120 {
        sleep(Duration::from_secs(retry_after)).await;
        true
    } else {
        warning!(
            "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
            retry_after
        );
        false
    }
}
