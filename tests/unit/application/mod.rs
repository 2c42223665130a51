mod test_client;
mod test_session_cookie;
