use super::*;

#[test]
fn test_request_serialization() {
    let request = GenerateContentRequest {
        contents: vec![Content::user(vec![
            Part::inline_data("image/jpeg", "AAAA"),
            Part::text("describe"),
        ])],
        system_instruction: Some(Content::system("You are a guide")),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["contents"][0]["role"], "user");
    assert_eq!(json["contents"][0]["parts"][0]["inline_data"]["mime_type"], "image/jpeg");
    assert_eq!(json["contents"][0]["parts"][0]["inline_data"]["data"], "AAAA");
    assert_eq!(json["contents"][0]["parts"][1]["text"], "describe");
    assert_eq!(json["systemInstruction"]["parts"][0]["text"], "You are a guide");
    assert!(json["systemInstruction"].get("role").is_none());
}

#[test]
fn test_request_without_system_instruction() {
    let request = GenerateContentRequest {
        contents: vec![Content::user(vec![Part::text("hello")])],
        system_instruction: None,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("systemInstruction").is_none());
}

#[test]
fn test_response_text_concatenates_parts() {
    let json = r#"{
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "**Title"}, {"text": " of the item**: X"}]},
            "finishReason": "STOP"
        }]
    }"#;
    let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.text().as_deref(), Some("**Title of the item**: X"));
    assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
}

#[test]
fn test_response_without_candidates() {
    let response: GenerateContentResponse =
        serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
    assert!(response.text().is_none());
}

#[test]
fn test_response_candidate_without_content() {
    let response: GenerateContentResponse =
        serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
    assert!(response.text().is_none());
}

#[test]
fn test_response_ignores_unknown_parts() {
    let json = r#"{"candidates": [{"content": {"parts": [{"executableCode": {}}, {"text": "Hi"}]}}]}"#;
    let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.text().as_deref(), Some("Hi"));
}

#[test]
fn test_error_deserialization() {
    let json = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
    let error: GeminiError = serde_json::from_str(json).unwrap();
    assert_eq!(error.error.code, 400);
    assert_eq!(error.error.message, "API key not valid");
    assert_eq!(error.error.status, "INVALID_ARGUMENT");
}
