/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Authentication request and response models
pub mod auth;
/// Typed API endpoints resolved against the account URL
pub mod endpoint;
/// HTTP transport: cookie aware GET and POST entry points
pub mod http;
/// Incoming call (SIP) lead payloads
pub mod incoming_lead;
/// Lead payloads and read models
pub mod lead;
/// Shared request wrappers and payload traits
pub mod requests;
/// Response envelopes and the identifier decoder
pub mod responses;
/// Serde helpers for loosely typed API fields
pub mod utils;
