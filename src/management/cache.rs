use std::{io::Error, path::PathBuf, time::Duration};

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::utils::TimeRange;

pub const CACHE_KEY_FESTIVAL: &str = "festival";
pub const CACHE_KEY_RECENTLY_PLAYED: &str = "recently_played";

pub fn top_artists_cache_key(time_range: TimeRange) -> String {
    format!("top_artists_{}", time_range)
}

#[derive(Debug)]
pub enum CacheError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for CacheError {
    fn from(err: Error) -> Self {
        CacheError::IoError(err)
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CacheEntry<T> {
    data: T,
    timestamp: i64,
    expires_at: i64,
}

/// Key-value cache with expiration, persisted as JSON files under the
/// local data directory.
///
/// Fetched listening history and the generated festival are cached here so
/// repeated invocations don't hit the Spotify API or regenerate the lineup.
/// Expired entries are removed on read and reported as absent.
pub struct CacheManager;

impl CacheManager {
    /// Stores a value under `key` with a time-to-live.
    pub async fn set<T: Serialize>(key: &str, data: &T, ttl: Duration) -> Result<(), CacheError> {
        let path = Self::cache_path(key);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(CacheError::IoError)?;
        }

        let now = Utc::now().timestamp();
        let entry = CacheEntry {
            data,
            timestamp: now,
            expires_at: now + ttl.as_secs() as i64,
        };

        let json = serde_json::to_string_pretty(&entry).map_err(CacheError::SerdeError)?;
        async_fs::write(path, json)
            .await
            .map_err(CacheError::IoError)
    }

    /// Returns the value stored under `key`, or `None` when the key is
    /// missing or its entry has expired.
    pub async fn get<T: DeserializeOwned>(key: &str) -> Result<Option<T>, CacheError> {
        let path = Self::cache_path(key);
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::IoError(e)),
        };

        let entry: CacheEntry<T> =
            serde_json::from_str(&content).map_err(CacheError::SerdeError)?;

        if Utc::now().timestamp() > entry.expires_at {
            Self::remove(key).await?;
            return Ok(None);
        }

        Ok(Some(entry.data))
    }

    pub async fn remove(key: &str) -> Result<(), CacheError> {
        let path = Self::cache_path(key);
        async_fs::remove_file(path)
            .await
            .map_err(CacheError::IoError)
    }

    /// Removes every cached entry, leaving the token untouched.
    pub async fn clear() -> Result<(), CacheError> {
        let mut keys = vec![
            CACHE_KEY_FESTIVAL.to_string(),
            CACHE_KEY_RECENTLY_PLAYED.to_string(),
        ];
        keys.extend(TimeRange::ALL.iter().map(|tr| top_artists_cache_key(*tr)));

        for key in keys {
            match Self::remove(&key).await {
                Ok(()) => {}
                Err(CacheError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    fn cache_path(key: &str) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!("festcli/cache/cache_{key}.json"));
        path
    }
}
