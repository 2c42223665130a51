//! # amoCRM Client
//!
//! This crate provides a client for the amoCRM HTTP API.
//!
//! ## Features
//!
//! - Cookie based session authentication
//! - Incoming call (SIP) events, lead creation and lead listing
//! - Typed response envelopes with classified errors
//! - Configuration from environment variables or a `.env` file
//!
//! ## Example
//!
//! ```ignore
//! use amocrm_client::prelude::*;
//!
//! setup_logger();
//! let client = AmoClient::new(Config::new()).await?;
//! let id = client.add_lead(LeadPost::new("New deal")).await?;
//! ```
//!
//! ## Architecture
//!
//! - [`application::auth`]: [`Session`](application::auth::Session) creation
//! - [`model::http`]: the [`Transport`](model::http::Transport) trait and its `reqwest` implementation
//! - [`model::responses`]: envelope decoding
//! - [`application::client`]: resource operations

/// Application layer: session, configuration and resource operations
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models and the HTTP transport
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
