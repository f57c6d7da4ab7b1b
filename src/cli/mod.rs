//! # CLI Module
//!
//! This module provides the command-line interface layer for festcli, a
//! Spotify API client that turns a listening history into a personal
//! fantasy festival. It implements all user-facing CLI commands and
//! coordinates between the Spotify integration, local data management,
//! and the festival generation core.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the
//! application's functionality:
//!
//! - **Authentication Management**: OAuth 2.0 PKCE flow for Spotify API access
//! - **Listening History**: Fetching, caching, and listing top artists per
//!   time window plus the recently played feed
//! - **Festival Generation**: Building and rendering the personalized
//!   festival lineup
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates Spotify OAuth authentication flow with PKCE security
//!
//! ### Listening History
//!
//! - [`update_artists`] - Synchronizes the local listening history caches
//!   (three top-artist windows and the recently played feed)
//! - [`list_artists`] - Displays a cached top-artist ranking with optional
//!   search filtering
//!
//! ### Festival
//!
//! - [`festival`] - Renders the cached festival, or generates a fresh one
//!   from the cached (or newly fetched) listening history
//!
//! ## Data Flow Patterns
//!
//! ### Update Operations
//! 1. **Authentication Check**: Verify valid tokens exist
//! 2. **API Interaction**: Fetch data from Spotify with rate limiting
//! 3. **Cache Management**: Persist data locally with a TTL
//! 4. **Progress Feedback**: Provide real-time user feedback
//!
//! ### Query Operations
//! 1. **Cache Loading**: Load requested data from local storage
//! 2. **Data Processing**: Filter, sort, and format for display
//! 3. **Output Generation**: Create formatted tables or lineup views
//! 4. **Error Handling**: Gracefully handle missing or stale data
//!
//! ## Error Handling Philosophy
//!
//! - **Graceful Degradation**: Partial failures don't prevent useful operations
//! - **Helpful Messages**: Clear guidance on how to resolve issues
//!   (e.g. "listen to more music" when the artist pool is too small)
//! - **Recovery Suggestions**: Actionable advice for user recovery steps
//!
//! ## Caching Strategy
//!
//! The CLI coordinates the TTL'd key-value cache in [`crate::management`]:
//!
//! - **Listening History Cache**: Top artists per time window, recent plays
//! - **Festival Cache**: The generated festival itself, so repeated
//!   invocations render instantly
//! - **Token Cache**: OAuth tokens with automatic refresh
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! festcli auth                     # Authenticate with Spotify
//! festcli artists update           # Cache listening history
//! festcli festival                 # Generate and show your festival
//! ```
//!
//! ### Regular Usage
//! ```bash
//! festcli festival                 # Show the cached festival
//! festcli festival update          # Regenerate from cached history
//! festcli festival update --force  # Refetch history and regenerate
//! festcli artists --time-range long --search radio
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Spotify API integration and authentication
//! - [`crate::management`] - Token handling and TTL caching
//! - [`crate::festival`] - The festival generation core
//! - [`crate::types`] - Data structures and type definitions
//! - [`crate::utils`] - Time-slot formatting and utility functions

mod artists;
mod auth;
mod festival;

pub use artists::list_artists;
pub use artists::update_artists;
pub use auth::auth;
pub use festival::festival;
