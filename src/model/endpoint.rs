use reqwest::Url;
use std::fmt;

/// amoCRM API endpoints used by this client
///
/// Every endpoint is a fixed path under the account URL, e.g.
/// `https://example.amocrm.ru` + `/api/v2/leads`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Session authentication (form encoded, answers JSON)
    Auth,
    /// Lead creation and lead listing
    Leads,
    /// Incoming call events from telephony integrations
    IncomingLeadsSip,
}

impl Endpoint {
    /// Path of the endpoint relative to the account URL, including any fixed query
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Auth => "/private/api/auth.php?type=json",
            Endpoint::Leads => "/api/v2/leads",
            Endpoint::IncomingLeadsSip => "/api/v2/incoming_leads/sip",
        }
    }

    /// Absolute URL of the endpoint for the given account
    ///
    /// Any query or fragment on the account URL is dropped; a path prefix is kept.
    #[must_use]
    pub fn url(&self, base_url: &Url) -> String {
        let mut base = base_url.clone();
        base.set_query(None);
        base.set_fragment(None);
        format!("{}{}", base.as_str().trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
