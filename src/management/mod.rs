mod auth;
mod cache;

pub use auth::TokenManager;
pub use cache::CACHE_KEY_FESTIVAL;
pub use cache::CACHE_KEY_RECENTLY_PLAYED;
pub use cache::CacheError;
pub use cache::CacheManager;
pub use cache::top_artists_cache_key;
