/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::requests::WirePayload;
use crate::model::utils::{null_as_default, string_or_number};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Form body sent to the authentication endpoint
#[derive(Clone, Serialize)]
pub struct AuthRequest<'a> {
    /// User login (usually the e-mail of the amoCRM user)
    #[serde(rename = "USER_LOGIN")]
    pub login: &'a str,
    /// API hash issued in the amoCRM user profile
    #[serde(rename = "USER_HASH")]
    pub api_hash: &'a str,
}

impl WirePayload for AuthRequest<'_> {}

/// Top level body returned by the authentication endpoint
#[derive(Debug, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Result of the authentication attempt
    #[serde(default)]
    pub response: AuthResult,
}

/// Result of an authentication attempt
#[derive(Debug, DisplaySimple, Clone, Default, Serialize, Deserialize)]
pub struct AuthResult {
    /// Whether the credentials were accepted
    #[serde(rename = "auth", default)]
    pub authenticated: bool,
    /// Accounts the user has access to
    #[serde(default, deserialize_with = "null_as_default")]
    pub accounts: Vec<AuthAccount>,
    /// Server time as a Unix timestamp
    #[serde(default)]
    pub server_time: i64,
    /// Error message when authentication failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Account entry listed in the authentication response
#[derive(Debug, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthAccount {
    /// Account identifier
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    /// Account name
    #[serde(default)]
    pub name: String,
    /// Account subdomain, as in `<subdomain>.amocrm.ru`
    #[serde(default)]
    pub subdomain: String,
    /// Interface language
    #[serde(default)]
    pub language: String,
    /// Account timezone, e.g. `Europe/Moscow`
    #[serde(default)]
    pub timezone: String,
}

impl AuthResult {
    /// Timezone of the first account, if the response listed any and it is set
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.accounts
            .first()
            .map(|account| account.timezone.as_str())
            .filter(|tz| !tz.is_empty())
    }
}
