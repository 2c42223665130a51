use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Authentication credentials for the amoCRM API
pub struct Credentials {
    /// Login of the amoCRM user
    pub login: String,
    /// API hash from the user profile
    #[serde(skip_serializing, default)]
    pub api_hash: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Account URL, e.g. `https://example.amocrm.ru`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Main configuration for the amoCRM client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Variables are read from the process environment after loading an
    /// optional `.env` file:
    ///
    /// * `AMOCRM_BASE_URL` - account URL
    /// * `AMOCRM_LOGIN` - user login
    /// * `AMOCRM_API_HASH` - user API hash
    /// * `AMOCRM_TIMEOUT` - request timeout in seconds (default 30)
    ///
    /// Missing credentials are reported and left empty, which makes the
    /// subsequent authentication fail with a validation error.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let login: Option<String> = get_env_or_none("AMOCRM_LOGIN");
        let api_hash: Option<String> = get_env_or_none("AMOCRM_API_HASH");

        if login.is_none() {
            error!("AMOCRM_LOGIN not found in environment variables or .env file");
        }
        if api_hash.is_none() {
            error!("AMOCRM_API_HASH not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                login: login.unwrap_or_default(),
                api_hash: api_hash.unwrap_or_default(),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("AMOCRM_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("AMOCRM_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration from explicit values
    pub fn with_credentials(
        base_url: impl Into<String>,
        login: impl Into<String>,
        api_hash: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                login: login.into(),
                api_hash: api_hash.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
        }
    }
}
