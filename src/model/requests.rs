/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Capability required from any value sent through the transport
///
/// Implementors promise that their `Serialize` output is the exact wire shape
/// the target endpoint expects, for both JSON and form encodings.
pub trait WirePayload: Serialize + Send + Sync {}

/// Required field checks performed before a payload is sent
pub trait Validate {
    /// Returns the first violated precondition, in the payload's fixed check order
    fn validate(&self) -> Result<(), AppError>;
}

/// Batch body accepted by every amoCRM write endpoint: `{"add": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRequest<P> {
    /// Resources to create
    pub add: Vec<P>,
}

impl<P> AddRequest<P> {
    /// Wraps one payload into a one element batch
    pub fn single(payload: P) -> Self {
        Self { add: vec![payload] }
    }
}

impl<P: Serialize + Send + Sync> WirePayload for AddRequest<P> {}

/// Fails with a validation error naming `field` when `value` is empty
pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} is empty")));
    }
    Ok(())
}
