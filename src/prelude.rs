/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # amoCRM Client Prelude
//!
//! Brings the types needed for most amoCRM interactions into scope:
//!
//! ```rust
//! use amocrm_client::prelude::*;
//!
//! let config = Config::with_credentials("https://example.amocrm.ru", "user@example.com", "hash");
//! assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the amoCRM client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ErrorKind};

// ============================================================================
// SESSION AND TRANSPORT
// ============================================================================

/// Authenticated session
pub use crate::application::auth::{Session, SessionCookie};

/// Resource operations
pub use crate::application::client::AmoClient;

/// HTTP transport
pub use crate::model::http::{Encoding, HttpTransport, Transport};

/// Endpoints
pub use crate::model::endpoint::Endpoint;

// ============================================================================
// MODELS
// ============================================================================

/// Shared request traits and wrappers
pub use crate::model::requests::{AddRequest, Validate, WirePayload};

/// Response envelopes
pub use crate::model::responses::{
    ApiError, EmbeddedItems, ItemId, ResponseEnvelope, extract_id,
};

/// Authentication models
pub use crate::model::auth::{AuthAccount, AuthResponse, AuthResult};

/// Incoming call models
pub use crate::model::incoming_lead::{
    IncomingEntities, IncomingEntity, IncomingLead, IncomingLeadInfo, IncomingLeadRequest,
};

/// Lead models
pub use crate::model::lead::{
    AddLeadRequest, CustomField, CustomFieldPost, CustomFieldValue, EntityRef, EntityRefs,
    GetLeadResponse, Lead, LeadItems, LeadPost, LeadRequestFilter, LeadRequestParams, Link, Links,
    Tag,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
