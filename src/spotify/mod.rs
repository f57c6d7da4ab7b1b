//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! festival generator: authentication and retrieval of the listening history
//! the lineup is synthesized from. It handles all HTTP communication,
//! authentication flows, error handling, and rate limiting.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Top Artists (per time range)
//!     └── Recently Played (play history)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements OAuth 2.0 PKCE (Proof Key for Code Exchange) flow:
//! - **Complete Auth Flow**: Handles the full OAuth process from initial request to token storage
//! - **PKCE Security**: Implements cryptographically secure authentication without client secrets
//! - **Token Management**: Automatic token refresh and expiration handling
//! - **Browser Integration**: Automatic browser launch for user authorization
//! - **Local Callback Server**: Temporary HTTP server for receiving OAuth callbacks
//!
//! ### Top Artists Module
//!
//! [`top`] - Fetches the user's ranked top artists:
//! - **Time Windows**: short term (~4 weeks), medium term (~6 months), long term (years)
//! - **Rank Order**: Spotify's affinity ranking is preserved as returned
//! - **Rate Limiting**: Honors `Retry-After` on 429 responses
//! - **Transient Errors**: Automatic retry for 502 Bad Gateway
//!
//! ### Recently Played Module
//!
//! [`recent`] - Fetches the user's play history:
//! - **Play Events**: Each item carries the track and a played-at timestamp
//! - **Artist Projection**: The festival core derives minimal artist records
//!   from these events (no genre data is available at this source)
//!
//! ## Error Handling
//!
//! ### Rate Limiting
//! - **Automatic Retry**: Handles 429 Too Many Requests with appropriate delays
//! - **Retry-After Headers**: Respects Spotify's recommended retry timing
//! - **Rate Limit Warnings**: Provides user feedback for excessive delays
//!
//! ### Network Resilience
//! - **Retry Logic**: Automatic retry for transient failures (502 Bad Gateway)
//! - **Connection Failures**: Errors are propagated to the caller for display
//!
//! ### Authentication Errors
//! - **Token Expiration**: Automatic token refresh using refresh tokens
//! - **Invalid Credentials**: Clear error messages directing to re-authentication
//!
//! ## API Coverage
//!
//! - `GET /me/top/artists` - Ranked top artists per time range
//! - `GET /me/player/recently-played` - Recent play events
//! - `POST /api/token` - Token exchange and refresh operations
//!
//! ## Error Types
//!
//! All functions return `Result` types with specific error handling:
//! - **`reqwest::Error`** - HTTP client errors, network issues, API errors
//! - **`String`** - Authentication and token management errors

pub mod auth;
pub mod recent;
pub mod top;
