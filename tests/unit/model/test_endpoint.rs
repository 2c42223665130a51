use amocrm_client::model::endpoint::Endpoint;
use reqwest::Url;

#[test]
fn endpoint_paths() {
    assert_eq!(Endpoint::Auth.path(), "/private/api/auth.php?type=json");
    assert_eq!(Endpoint::Leads.path(), "/api/v2/leads");
    assert_eq!(Endpoint::IncomingLeadsSip.path(), "/api/v2/incoming_leads/sip");
}

#[test]
fn endpoint_url_joins_without_double_slash() {
    let base = Url::parse("https://example.amocrm.ru").unwrap();
    assert_eq!(
        Endpoint::Leads.url(&base),
        "https://example.amocrm.ru/api/v2/leads"
    );

    let with_port = Url::parse("http://127.0.0.1:1234/").unwrap();
    assert_eq!(
        Endpoint::Auth.url(&with_port),
        "http://127.0.0.1:1234/private/api/auth.php?type=json"
    );
}

#[test]
fn endpoint_url_drops_base_query_and_fragment() {
    let base = Url::parse("https://x.amocrm.ru/?a=1#top").unwrap();
    assert_eq!(Endpoint::Leads.url(&base), "https://x.amocrm.ru/api/v2/leads");

    let prefixed = Url::parse("https://proxy.local/amo/?a=1").unwrap();
    assert_eq!(
        Endpoint::Auth.url(&prefixed),
        "https://proxy.local/amo/private/api/auth.php?type=json"
    );
}

#[test]
fn endpoint_display_is_path() {
    assert_eq!(Endpoint::IncomingLeadsSip.to_string(), "/api/v2/incoming_leads/sip");
}
