/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::null_as_default;
use pretty_simple_display::DisplaySimple;
use reqwest::Response;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Envelope returned by the write endpoints
///
/// ```json
/// {"_embedded": {"items": [{"id": 42}]}, "response": {"error": "..."}}
/// ```
#[derive(Debug, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Created resources
    #[serde(rename = "_embedded", default, deserialize_with = "null_as_default")]
    pub embedded: EmbeddedItems,
    /// Error block
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: ApiError,
}

/// `_embedded` block of a [`ResponseEnvelope`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedItems {
    /// Created resources, in request order
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ItemId>,
}

/// Identifier of a created resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemId {
    /// Resource id
    pub id: i64,
}

/// `response` block carrying the API error string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error message, absent on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Numeric error code, when the API provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// Parses an envelope from a raw body
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|e| {
            warn!("Failed to decode response envelope: {e}");
            AppError::Decode(e)
        })
    }

    /// Identifier of the single resource created by the call
    ///
    /// Only the first item is consulted: every write goes through a one
    /// element batch, so later items are never expected.
    pub fn into_id(self) -> Result<i64, AppError> {
        if let Some(item) = self.embedded.items.first() {
            return Ok(item.id);
        }
        match self.response.error {
            Some(error) if !error.is_empty() => Err(AppError::Remote(error)),
            _ => Err(AppError::EmptyResult),
        }
    }
}

/// Reads a write endpoint response and returns the id of the created resource
///
/// # Errors
/// * `AppError::Network` if the body cannot be read
/// * `AppError::Decode` if the body is not a valid envelope
/// * `AppError::Remote` if the envelope reports an error and no items
/// * `AppError::EmptyResult` if the envelope has neither
pub async fn extract_id(response: Response) -> Result<i64, AppError> {
    let status = response.status();
    let body = response.bytes().await?;
    debug!("Decoding envelope ({} bytes, status {})", body.len(), status);
    ResponseEnvelope::from_slice(&body)?.into_id()
}
