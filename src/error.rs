/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the amoCRM client

use reqwest::StatusCode;
use std::fmt;

/// Coarse classification of an [`AppError`]
///
/// Callers that only care about how to react to a failure (fix the input,
/// re-authenticate, give up) can match on the kind instead of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied input failed a precondition, nothing was sent
    Validation,
    /// Network failure or unexpected HTTP status
    Transport,
    /// The authentication endpoint rejected the credentials
    Auth,
    /// The remote API reported an explicit error in its envelope
    Remote,
    /// The remote API returned neither items nor an error
    EmptyResult,
    /// The response body did not have the expected JSON shape
    Decode,
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Invalid or missing caller input
    Validation(String),
    /// Network level failure reported by the HTTP client
    Network(reqwest::Error),
    /// The server answered with a status the call does not accept
    HttpStatus(StatusCode),
    /// Credentials rejected, carries the server message
    Auth(String),
    /// Error string reported by the API envelope
    Remote(String),
    /// No items and no error in the envelope
    EmptyResult,
    /// Body could not be decoded
    Decode(serde_json::Error),
}

impl AppError {
    /// Returns the classification of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Network(_) | AppError::HttpStatus(_) => ErrorKind::Transport,
            AppError::Auth(_) => ErrorKind::Auth,
            AppError::Remote(_) => ErrorKind::Remote,
            AppError::EmptyResult => ErrorKind::EmptyResult,
            AppError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Status code attached to a transport error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::HttpStatus(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::HttpStatus(status) => write!(f, "wrong http status: {status}"),
            AppError::Auth(msg) => write!(f, "authentication failed: {msg}"),
            AppError::Remote(msg) => write!(f, "remote error: {msg}"),
            AppError::EmptyResult => write!(f, "no items"),
            AppError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Decode(error)
    }
}
