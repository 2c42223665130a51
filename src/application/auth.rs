/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session authentication for the amoCRM API
//!
//! amoCRM v2 keeps the session in cookies: the auth endpoint answers with
//! `Set-Cookie` headers that must be replayed on every later call. A
//! [`Session`] captures them once and never changes afterwards.

use crate::error::AppError;
use crate::model::auth::{AuthRequest, AuthResponse};
use crate::model::endpoint::Endpoint;
use crate::model::http::{Encoding, make_post_request};
use reqwest::{Client, StatusCode, Url};
use std::fmt;
use tracing::{debug, error, info};

/// Cookie captured from the authentication response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// `Path` attribute
    pub path: Option<String>,
    /// `Domain` attribute
    pub domain: Option<String>,
    /// `Secure` attribute
    pub secure: bool,
    /// `HttpOnly` attribute
    pub http_only: bool,
}

impl SessionCookie {
    /// Creates a cookie with just a name and a value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            path: None,
            domain: None,
            secure: false,
            http_only: false,
        }
    }
}

impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl From<reqwest::cookie::Cookie<'_>> for SessionCookie {
    fn from(cookie: reqwest::cookie::Cookie<'_>) -> Self {
        Self {
            name: cookie.name().to_string(),
            value: cookie.value().to_string(),
            path: cookie.path().map(String::from),
            domain: cookie.domain().map(String::from),
            secure: cookie.secure(),
            http_only: cookie.http_only(),
        }
    }
}

/// Authenticated amoCRM session
///
/// Holds the account URL, the credentials and the cookies issued by the auth
/// endpoint. Sessions are only created by [`Session::authenticate`] and are
/// read only afterwards, so one session can serve concurrent requests.
#[derive(Clone)]
pub struct Session {
    base_url: Url,
    login: String,
    api_secret: String,
    timezone: Option<String>,
    cookies: Vec<SessionCookie>,
}

impl Session {
    /// Authenticates against the account and returns a live session
    ///
    /// # Arguments
    /// * `http` - HTTP client used for the auth request
    /// * `base_url` - Account URL, e.g. `https://example.amocrm.ru`
    /// * `login` - User login
    /// * `api_secret` - API hash of the user
    ///
    /// # Errors
    /// * `AppError::Validation` - empty login or secret, malformed URL; nothing is sent
    /// * `AppError::Network` / `AppError::HttpStatus` - transport failure or a status other than 200
    /// * `AppError::Decode` - body is not the expected JSON
    /// * `AppError::Auth` - credentials rejected, with the server message
    pub async fn authenticate(
        http: &Client,
        base_url: &str,
        login: &str,
        api_secret: &str,
    ) -> Result<Self, AppError> {
        if login.is_empty() {
            return Err(AppError::Validation("login is empty".to_string()));
        }
        if api_secret.is_empty() {
            return Err(AppError::Validation("api secret is empty".to_string()));
        }
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::Validation(format!("invalid account url {base_url:?}: {e}"))
        })?;

        let url = Endpoint::Auth.url(&base_url);
        info!("Authenticating {} at {}", login, base_url);

        let form = AuthRequest {
            login,
            api_hash: api_secret,
        };
        let response =
            make_post_request(http, &url, &form, Encoding::FormUrlEncoded, None).await?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Authentication failed with status {}", status);
            return Err(AppError::HttpStatus(status));
        }

        let cookies: Vec<SessionCookie> = response.cookies().map(SessionCookie::from).collect();
        let body = response.bytes().await?;
        let auth: AuthResponse = serde_json::from_slice(&body).map_err(|e| {
            error!("Failed to decode auth response: {e}");
            AppError::Decode(e)
        })?;

        let result = auth.response;
        if !result.authenticated {
            let message = result.error.unwrap_or_default();
            error!("Credentials rejected: {}", message);
            return Err(AppError::Auth(message));
        }

        debug!(
            "Received {} session cookies, {} accounts",
            cookies.len(),
            result.accounts.len()
        );

        let session = Self {
            base_url,
            login: login.to_string(),
            api_secret: api_secret.to_string(),
            timezone: result.timezone().map(String::from),
            cookies,
        };

        info!("✓ Login successful, timezone: {:?}", session.timezone);
        Ok(session)
    }

    /// Account URL
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Login the session was opened with
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// API hash the session was opened with
    #[must_use]
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Timezone of the first account listed at login
    #[must_use]
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// Cookies issued at login, in the order they were received
    #[must_use]
    pub fn cookies(&self) -> &[SessionCookie] {
        &self.cookies
    }

    /// Value of the `Cookie` request header, or None when there are no cookies
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(SessionCookie::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("login", &self.login)
            .field("api_secret", &"***")
            .field("timezone", &self.timezone)
            .field("cookies", &self.cookies.len())
            .finish()
    }
}
