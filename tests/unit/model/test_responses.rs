use amocrm_client::error::AppError;
use amocrm_client::model::responses::{ResponseEnvelope, extract_id};
use reqwest::Response;

fn response(body: &str) -> Response {
    Response::from(
        http::Response::builder()
            .status(200)
            .body(body.to_string())
            .unwrap(),
    )
}

#[test]
fn first_item_wins() {
    let envelope =
        ResponseEnvelope::from_slice(br#"{"_embedded":{"items":[{"id":42},{"id":99}]}}"#).unwrap();
    assert_eq!(envelope.into_id().unwrap(), 42);
}

#[test]
fn items_take_precedence_over_error() {
    let envelope = ResponseEnvelope::from_slice(
        br#"{"_embedded":{"items":[{"id":7}]},"response":{"error":"partial"}}"#,
    )
    .unwrap();
    assert_eq!(envelope.into_id().unwrap(), 7);
}

#[test]
fn empty_items_with_error_is_remote_error() {
    let envelope =
        ResponseEnvelope::from_slice(br#"{"_embedded":{"items":[]},"response":{"error":"not found"}}"#)
            .unwrap();
    match envelope.into_id() {
        Err(AppError::Remote(msg)) => assert_eq!(msg, "not found"),
        other => panic!("Expected Remote error, got {other:?}"),
    }
}

#[test]
fn empty_items_without_error_is_empty_result() {
    let envelope = ResponseEnvelope::from_slice(br#"{"_embedded":{"items":[]},"response":{}}"#).unwrap();
    assert!(matches!(envelope.into_id(), Err(AppError::EmptyResult)));

    let bare = ResponseEnvelope::from_slice(b"{}").unwrap();
    assert!(matches!(bare.into_id(), Err(AppError::EmptyResult)));

    let nulls = ResponseEnvelope::from_slice(br#"{"_embedded":null,"response":null}"#).unwrap();
    assert!(matches!(nulls.into_id(), Err(AppError::EmptyResult)));
}

#[test]
fn empty_error_string_counts_as_no_error() {
    let envelope =
        ResponseEnvelope::from_slice(br#"{"_embedded":{"items":[]},"response":{"error":""}}"#).unwrap();
    assert!(matches!(envelope.into_id(), Err(AppError::EmptyResult)));
}

#[test]
fn malformed_json_is_decode_error() {
    assert!(matches!(
        ResponseEnvelope::from_slice(b"<html>502</html>"),
        Err(AppError::Decode(_))
    ));
}

#[tokio::test]
async fn extract_id_reads_response_body() {
    let id = extract_id(response(r#"{"_embedded":{"items":[{"id":42},{"id":99}]}}"#))
        .await
        .unwrap();
    assert_eq!(id, 42);
}

#[tokio::test]
async fn extract_id_classifies_errors() {
    let remote = extract_id(response(r#"{"_embedded":{"items":[]},"response":{"error":"not found"}}"#)).await;
    assert!(matches!(remote, Err(AppError::Remote(ref m)) if m == "not found"));

    let empty = extract_id(response(r#"{"_embedded":{"items":[]},"response":{}}"#)).await;
    assert!(matches!(empty, Err(AppError::EmptyResult)));

    let malformed = extract_id(response("not json")).await;
    assert!(matches!(malformed, Err(AppError::Decode(_))));
}

#[test]
fn extract_id_blocking() {
    let id = tokio_test::block_on(extract_id(response(r#"{"_embedded":{"items":[{"id":5}]},"response":{"error":""}}"#)));
    assert_eq!(id.unwrap(), 5);
}
