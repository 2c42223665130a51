/// User agent string sent with every request to the amoCRM API
pub const USER_AGENT: &str = "amocrm-client/0.1.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default account URL used when `AMOCRM_BASE_URL` is not configured
pub const DEFAULT_BASE_URL: &str = "https://example.amocrm.ru";
