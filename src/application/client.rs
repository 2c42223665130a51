/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Resource operations of the amoCRM API
//!
//! # Example
//! ```ignore
//! use amocrm_client::prelude::*;
//!
//! let client = AmoClient::new(Config::new()).await?;
//! let info = IncomingLeadInfo { to: "78120000000".into(), /* ... */ ..Default::default() };
//! let id = client
//!     .add_incoming_call_lead(IncomingLead::new("pbx", "1544023966.361", info))
//!     .await?;
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::{HttpTransport, Transport};
use crate::model::incoming_lead::IncomingLead;
use crate::model::lead::{GetLeadResponse, LeadPost, LeadRequestParams};
use crate::model::requests::{AddRequest, Validate, WirePayload};
use crate::model::responses::extract_id;
use reqwest::Client;
use serde::de::Error as _;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client exposing typed amoCRM operations over a [`Transport`]
///
/// Cloning is cheap and clones share the same session.
pub struct AmoClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for AmoClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl AmoClient<HttpTransport> {
    /// Creates a new client and performs authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(AmoClient)` - Authenticated client ready to use
    /// * `Err(AppError)` - If authentication fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let session = Session::authenticate(
            &http_client,
            &config.rest_api.base_url,
            &config.credentials.login,
            &config.credentials.api_hash,
        )
        .await?;

        Ok(Self::with_transport(HttpTransport::new(http_client, session)))
    }

    /// Authenticates with explicit credentials and default settings
    pub async fn connect(base_url: &str, login: &str, api_secret: &str) -> Result<Self, AppError> {
        Self::new(Config::with_credentials(base_url, login, api_secret)).await
    }

    /// Session the client is bound to
    pub fn session(&self) -> &Session {
        self.transport.session()
    }
}

impl<T: Transport> AmoClient<T> {
    /// Creates a client over an existing transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Transport used by the client
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submits an incoming call event and returns the id of the created entry
    ///
    /// All call details are required; the first empty one is reported and
    /// nothing is sent.
    pub async fn add_incoming_call_lead(&self, lead: IncomingLead) -> Result<i64, AppError> {
        info!(
            "Adding incoming call {} from {}",
            lead.incoming_lead_info.uniq, lead.incoming_lead_info.from
        );
        self.add_single(Endpoint::IncomingLeadsSip, lead).await
    }

    /// Creates a lead and returns its id
    pub async fn add_lead(&self, lead: LeadPost) -> Result<i64, AppError> {
        info!("Adding lead {:?}", lead.name);
        self.add_single(Endpoint::Leads, lead).await
    }

    /// Lists leads matching `params`
    ///
    /// amoCRM answers an empty body when nothing matches, which is returned
    /// as an empty page.
    pub async fn get_leads(&self, params: &LeadRequestParams) -> Result<GetLeadResponse, AppError> {
        let url = Endpoint::Leads.url(self.transport.base_url());
        let body = self.transport.get(&url, &params.to_query()).await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            debug!("Empty lead listing");
            return Ok(GetLeadResponse::default());
        }

        let page: GetLeadResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode lead listing: {e}");
            AppError::Decode(e)
        })?;

        if page.is_unrecognized() {
            warn!("Lead listing has neither _embedded nor response");
            return Err(AppError::Decode(serde_json::Error::custom(
                "lead listing has neither _embedded nor response",
            )));
        }

        if let Some(error) = page.error() {
            return Err(AppError::Remote(error.to_string()));
        }

        debug!("Leads obtained: {}", page.leads().len());
        Ok(page)
    }

    /// Validates `payload`, sends it as a one element batch and returns the created id
    ///
    /// Every write operation goes through here.
    pub async fn add_single<P>(&self, endpoint: Endpoint, payload: P) -> Result<i64, AppError>
    where
        P: Validate + WirePayload,
    {
        payload.validate()?;

        let url = endpoint.url(self.transport.base_url());
        let batch = AddRequest::single(payload);
        let response = self.transport.post_authenticated(&url, &batch).await?;

        let id = extract_id(response).await?;
        debug!("Created {} with id {}", endpoint, id);
        Ok(id)
    }
}
