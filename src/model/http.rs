/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! HTTP transport for the amoCRM API
//!
//! Three entry points with deliberately different contracts:
//! - [`Transport::get`] attaches the session cookies and returns the body
//!   whatever the status code is
//! - [`Transport::post_authenticated`] sends JSON with the session cookies
//! - [`Transport::post_anonymous`] sends a URL encoded form without cookies
//!
//! Both POST variants hand back the unread response so the caller decides
//! how to interpret status and body.

use crate::application::auth::Session;
use crate::error::AppError;
use crate::model::requests::WirePayload;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, Response, Url};
use std::sync::Arc;
use tracing::debug;

/// Body encoding of a POST request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `application/json`
    Json,
    /// `application/x-www-form-urlencoded`, answered as JSON
    FormUrlEncoded,
}

/// Capability used by resource operations to reach the API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Account URL endpoint paths are resolved against
    fn base_url(&self) -> &Url;

    /// Sends a GET with the session cookies and returns the raw body
    ///
    /// Query pairs are appended in order, repeated keys included. The body is
    /// returned for any status code.
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, AppError>;

    /// Sends `payload` as JSON with the session cookies
    async fn post_authenticated<B: WirePayload>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<Response, AppError>;

    /// Sends `payload` as a URL encoded form without any cookies
    async fn post_anonymous<B: WirePayload>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<Response, AppError>;
}

/// `reqwest` backed transport bound to an authenticated session
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    session: Arc<Session>,
}

impl HttpTransport {
    /// Creates a transport sending requests for `session` through `client`
    pub fn new(client: Client, session: Session) -> Self {
        Self {
            client,
            session: Arc::new(session),
        }
    }

    /// Session the transport authenticates with
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Underlying HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &Url {
        self.session.base_url()
    }

    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, AppError> {
        debug!("GET {} ({} query params)", url, query.len());

        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(cookies) = self.session.cookie_header() {
            request = request.header(COOKIE, cookies);
        }

        let response = request.send().await?;
        debug!("Response status: {}", response.status());

        Ok(response.bytes().await?.to_vec())
    }

    async fn post_authenticated<B: WirePayload>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<Response, AppError> {
        let cookies = self.session.cookie_header();
        make_post_request(&self.client, url, payload, Encoding::Json, cookies.as_deref()).await
    }

    async fn post_anonymous<B: WirePayload>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<Response, AppError> {
        make_post_request(&self.client, url, payload, Encoding::FormUrlEncoded, None).await
    }
}

/// Builds and sends a POST request
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `url` - Full URL to request
/// * `payload` - Body, serialized according to `encoding`
/// * `encoding` - JSON or URL encoded form
/// * `cookies` - Value of the `Cookie` header, if any
///
/// # Returns
///
/// * `Ok(Response)` - The response, whatever its status
/// * `Err(AppError)` - If the request could not be built or sent
pub async fn make_post_request<B: WirePayload>(
    client: &Client,
    url: &str,
    payload: &B,
    encoding: Encoding,
    cookies: Option<&str>,
) -> Result<Response, AppError> {
    debug!("POST {} ({:?})", url, encoding);

    let mut request = client.post(url);
    request = match encoding {
        Encoding::Json => request.json(payload),
        Encoding::FormUrlEncoded => request.header(ACCEPT, "application/json").form(payload),
    };
    if let Some(cookies) = cookies {
        request = request.header(COOKIE, cookies);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}
