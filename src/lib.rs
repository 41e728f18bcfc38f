//! # Carousel Client Library
//!
//! Client for the mobile carousel API: authenticates with a bearer token,
//! keeps the session alive ahead of expiry, and serves carousel content
//! through a time-boxed cache.
//!
//! Modules:
//! - `token` — payload decoding and expiry policy
//! - `session` — in-memory token slot and the lifecycle orchestrator
//! - `api` — the HTTP client for the auth and data endpoints
//! - `content` — carousel models, display transform, and the cache gate

pub mod api;
pub mod config;
pub mod content;
pub mod errors;
pub mod helpers;
pub mod session;
pub mod tests;
pub mod token;
pub mod utils;

pub use crate::errors::{AuthError, FetchError};
pub use crate::token::{
    decode_token, is_token_expired, should_refresh_token, token_remaining_time,
};
