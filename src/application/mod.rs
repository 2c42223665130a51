/// Session authentication and cookie capture
pub mod auth;
/// Resource operations built on the transport
pub mod client;
/// Application configuration module
pub mod config;
