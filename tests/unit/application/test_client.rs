use amocrm_client::application::client::AmoClient;
use amocrm_client::error::{AppError, ErrorKind};
use amocrm_client::model::http::Transport;
use amocrm_client::model::incoming_lead::{IncomingLead, IncomingLeadInfo};
use amocrm_client::model::lead::{LeadPost, LeadRequestParams};
use amocrm_client::model::requests::WirePayload;
use async_trait::async_trait;
use reqwest::{Response, Url};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Transport that records every call and answers with canned bodies
struct SpyTransport {
    base_url: Url,
    calls: AtomicUsize,
    posted: Mutex<Vec<(String, serde_json::Value)>>,
    queries: Mutex<Vec<(String, Vec<(String, String)>)>>,
    post_body: String,
    get_body: String,
}

impl SpyTransport {
    fn new(post_body: &str, get_body: &str) -> Self {
        Self {
            base_url: Url::parse("https://example.amocrm.ru").unwrap(),
            calls: AtomicUsize::new(0),
            posted: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            post_body: post_body.to_string(),
            get_body: get_body.to_string(),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn canned(&self) -> Response {
        Response::from(
            http::Response::builder()
                .status(200)
                .body(self.post_body.clone())
                .unwrap(),
        )
    }
}

#[async_trait]
impl Transport for SpyTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .unwrap()
            .push((url.to_string(), query.to_vec()));
        Ok(self.get_body.clone().into_bytes())
    }

    async fn post_authenticated<B: WirePayload>(
        &self,
        url: &str,
        payload: &B,
    ) -> Result<Response, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.posted
            .lock()
            .unwrap()
            .push((url.to_string(), serde_json::to_value(payload).unwrap()));
        Ok(self.canned())
    }

    async fn post_anonymous<B: WirePayload>(
        &self,
        _url: &str,
        _payload: &B,
    ) -> Result<Response, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.canned())
    }
}

fn call_info() -> IncomingLeadInfo {
    IncomingLeadInfo {
        to: "78123375496".to_string(),
        from: "89626849787".to_string(),
        date_call: "1544040279".to_string(),
        duration: "14".to_string(),
        link: "https://pbx.example.com/record.mp3".to_string(),
        service_code: "amo_asterisk".to_string(),
        uniq: "1544023966.361".to_string(),
        add_note: "1".to_string(),
    }
}

#[tokio::test]
async fn invalid_incoming_lead_sends_nothing() {
    let client = AmoClient::with_transport(SpyTransport::new("{}", ""));
    let mut info = call_info();
    info.to.clear();

    let result = client
        .add_incoming_call_lead(IncomingLead::new("686", "uid", info))
        .await;

    match result {
        Err(AppError::Validation(msg)) => assert_eq!(msg, "incoming_lead_info.to is empty"),
        other => panic!("Expected validation error, got {other:?}"),
    }
    assert_eq!(client.transport().calls(), 0);
}

#[tokio::test]
async fn incoming_lead_is_posted_as_single_batch() {
    let client = AmoClient::with_transport(SpyTransport::new(
        r#"{"_embedded":{"items":[{"id":42},{"id":99}]}}"#,
        "",
    ));
    let lead = IncomingLead::new("686", "1544023966.361", call_info());

    let id = client.add_incoming_call_lead(lead.clone()).await.unwrap();
    assert_eq!(id, 42);

    let transport = client.transport();
    assert_eq!(transport.calls(), 1);
    let posted = transport.posted.lock().unwrap();
    let (url, body) = &posted[0];
    assert_eq!(url, "https://example.amocrm.ru/api/v2/incoming_leads/sip");
    assert_eq!(body["add"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["add"][0], serde_json::to_value(&lead).unwrap());
}

#[tokio::test]
async fn add_lead_surfaces_remote_error() {
    let client = AmoClient::with_transport(SpyTransport::new(
        r#"{"_embedded":{"items":[]},"response":{"error":"Status not found"}}"#,
        "",
    ));

    let err = client
        .add_lead(LeadPost::new("Deal").with_status("1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Remote);
    assert_eq!(err.to_string(), "remote error: Status not found");

    let posted = client.transport().posted.lock().unwrap();
    assert_eq!(posted[0].0, "https://example.amocrm.ru/api/v2/leads");
}

#[tokio::test]
async fn add_lead_without_name_sends_nothing() {
    let client = AmoClient::with_transport(SpyTransport::new("{}", ""));
    let err = client.add_lead(LeadPost::default()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(client.transport().calls(), 0);
}

#[tokio::test]
async fn empty_write_response_is_empty_result() {
    let client = AmoClient::with_transport(SpyTransport::new(r#"{"_embedded":{"items":[]},"response":{}}"#, ""));
    let err = client.add_lead(LeadPost::new("Deal")).await.unwrap_err();
    assert!(matches!(err, AppError::EmptyResult));
}

#[tokio::test]
async fn get_leads_passes_query_and_decodes() {
    let client = AmoClient::with_transport(SpyTransport::new(
        "",
        r#"{"_embedded":{"items":[{"id":1001,"name":"Deal"},{"id":1002,"name":"Other"}]}}"#,
    ));
    let params = LeadRequestParams::new().with_ids([1001, 1002]).with_limit(2, 0);

    let page = client.get_leads(&params).await.unwrap();
    assert_eq!(page.leads().len(), 2);
    assert_eq!(page.leads()[1].name, "Other");

    let queries = client.transport().queries.lock().unwrap();
    assert_eq!(queries[0].0, "https://example.amocrm.ru/api/v2/leads");
    assert_eq!(queries[0].1, params.to_query());
}

#[tokio::test]
async fn get_leads_empty_body_is_empty_page() {
    let client = AmoClient::with_transport(SpyTransport::new("", ""));
    let page = client.get_leads(&LeadRequestParams::new()).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn get_leads_error_block_is_remote_error() {
    let client = AmoClient::with_transport(SpyTransport::new(
        "",
        r#"{"response":{"error":"Account is blocked","error_code":110}}"#,
    ));
    let err = client.get_leads(&LeadRequestParams::new()).await.unwrap_err();
    assert!(matches!(err, AppError::Remote(ref m) if m == "Account is blocked"));
}

#[tokio::test]
async fn get_leads_malformed_body_is_decode_error() {
    let client = AmoClient::with_transport(SpyTransport::new("", "<html>"));
    let err = client.get_leads(&LeadRequestParams::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn get_leads_foreign_json_is_decode_error() {
    let client = AmoClient::with_transport(SpyTransport::new(
        "",
        r#"{"title":"Unauthorized","type":"https://httpstatus.es/401","status":401,"detail":"Invalid user name or password"}"#,
    ));
    let err = client.get_leads(&LeadRequestParams::new()).await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
    assert_eq!(err.kind(), ErrorKind::Decode);
}
