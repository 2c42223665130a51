use amocrm_client::application::auth::SessionCookie;

#[test]
fn cookie_renders_as_request_pair() {
    let cookie = SessionCookie::new("session_id", "abc123");
    assert_eq!(cookie.to_string(), "session_id=abc123");
    assert!(cookie.path.is_none());
    assert!(!cookie.secure);
}
