use super::*;

use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.5-flash";
const ENDPOINT: &str = "/models/gemini-2.5-flash:generateContent";

fn describer(base_url: String) -> GeminiDescriber {
    GeminiDescriber::connect(
        "test-key".to_string(),
        MODEL,
        Some(base_url),
        Duration::from_secs(2),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

fn jpeg() -> ImageDataUrl {
    ImageDataUrl::new("image/jpeg", "/9j/AAAA")
}

#[tokio::test]
async fn test_describe_image_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {"inline_data": {"mime_type": "image/jpeg", "data": "/9j/AAAA"}},
                    {"text": DESCRIBE_INSTRUCTION}
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("**Title of the item**: David")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = describer(mock_server.uri()).describe_image(&jpeg()).await.unwrap();
    assert_eq!(text, "**Title of the item**: David");
}

#[tokio::test]
async fn test_describe_image_sends_system_prompt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(serde_json::json!({
            "systemInstruction": {"parts": [{"text": SYSTEM_PROMPT}]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    describer(mock_server.uri()).describe_image(&jpeg()).await.unwrap();
}

#[tokio::test]
async fn test_describe_image_invalid_data_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("unused")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let bad = ImageDataUrl::from_raw("data:text/plain;base64,AAAA");
    let err = describer(mock_server.uri()).describe_image(&bad).await.unwrap_err();
    assert!(matches!(err, DescribeError::Service(ServiceError::InvalidImage)));
}

#[tokio::test]
async fn test_describe_image_empty_text_not_identified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .mount(&mock_server)
        .await;

    let err = describer(mock_server.uri()).describe_image(&jpeg()).await.unwrap_err();
    assert!(matches!(err, DescribeError::NotIdentified));
}

#[tokio::test]
async fn test_describe_image_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string(
            r#"{"error": {"code": 503, "message": "The model is overloaded", "status": "UNAVAILABLE"}}"#,
        ))
        .mount(&mock_server)
        .await;

    let err = describer(mock_server.uri()).describe_image(&jpeg()).await.unwrap_err();
    match err {
        DescribeError::Service(ServiceError::Unavailable { detail }) => {
            assert!(detail.contains("overloaded"));
        }
        other => panic!("Expected Unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_describe_image_bad_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(403).set_body_string(
            r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#,
        ))
        .mount(&mock_server)
        .await;

    let err = describer(mock_server.uri()).describe_image(&jpeg()).await.unwrap_err();
    assert!(matches!(
        err,
        DescribeError::Service(ServiceError::Authentication { .. })
    ));
}

#[tokio::test]
async fn test_describe_image_unparseable_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = describer(mock_server.uri()).describe_image(&jpeg()).await.unwrap_err();
    assert!(matches!(
        err,
        DescribeError::Service(ServiceError::Unavailable { .. })
    ));
}

#[tokio::test]
async fn test_describe_image_network_failure() {
    // Nothing listens on port 1.
    let err = describer("http://127.0.0.1:1".to_string())
        .describe_image(&jpeg())
        .await
        .unwrap_err();
    assert!(matches!(err, DescribeError::Service(ServiceError::Network { .. })));
}

#[tokio::test]
async fn test_nearby_suggestions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"parts": [{"text": suggestions_prompt(48.8584, 2.2945)}]}]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_response("Eiffel Tower\n\n  Trocadéro  \nPont d'Iéna\n")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let names = describer(mock_server.uri())
        .nearby_suggestions(Coordinates::new(48.8584, 2.2945))
        .await
        .unwrap();
    assert_eq!(names, vec!["Eiffel Tower", "Trocadéro", "Pont d'Iéna"]);
}

#[tokio::test]
async fn test_nearby_suggestions_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("No suggestions found.")))
        .mount(&mock_server)
        .await;

    let names = describer(mock_server.uri())
        .nearby_suggestions(Coordinates::new(0.0, -160.0))
        .await
        .unwrap();
    assert!(names.is_empty());
}

#[tokio::test]
async fn test_nearby_suggestions_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let err = describer(mock_server.uri())
        .nearby_suggestions(Coordinates::new(1.0, 2.0))
        .await
        .unwrap_err();
    assert_eq!(err.detail(), Some("HTTP 500: boom"));
}

#[test]
fn test_parse_suggestions() {
    assert_eq!(parse_suggestions("A\n B \n\nC"), vec!["A", "B", "C"]);
    assert!(parse_suggestions("Sorry. No suggestions found.").is_empty());
    assert!(parse_suggestions("\n  \n").is_empty());
}

#[test]
fn test_suggestions_prompt_mentions_coordinates() {
    let prompt = suggestions_prompt(41.9, 12.5);
    assert!(prompt.contains("latitude 41.9, longitude 12.5"));
    assert!(prompt.ends_with("\"No suggestions found.\""));
}
