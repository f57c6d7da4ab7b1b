//! # API Module
//!
//! This module provides HTTP API endpoints for the festival CLI's local web
//! server functionality. It implements the essential endpoints for OAuth
//! authentication and health monitoring.
//!
//! ## Overview
//!
//! The API module serves as the web interface layer for festcli, a
//! command-line interface that turns a Spotify listening history into a
//! personal festival lineup. It provides HTTP endpoints that handle:
//!
//! - **OAuth Authentication Flow**: Implements the Spotify OAuth 2.0 PKCE
//!   (Proof Key for Code Exchange) callback handler for secure token exchange
//! - **Health Monitoring**: Provides a health check endpoint for verifying
//!   that the temporary callback server is up
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles OAuth callback requests from Spotify's authorization
//!   server. This endpoint completes the PKCE authentication flow by exchanging
//!   authorization codes for access tokens.
//!
//! ### Monitoring
//!
//! - [`health`] - Provides a health check endpoint that returns application
//!   status and version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is implemented as an async function that can be easily
//! integrated into Axum's routing system.
//!
//! ## Security Considerations
//!
//! - Uses OAuth 2.0 PKCE flow for enhanced security without exposing client secrets
//! - Implements proper state management for temporary authentication data
//! - Handles authentication failures gracefully with appropriate error responses
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use festcli::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration
//! - [`crate::types`] - Type definitions for authentication tokens

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
