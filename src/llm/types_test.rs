use super::*;

#[test]
fn chat_message_constructors_set_role() {
    assert_eq!(ChatMessage::system("s").role, "system");
    assert_eq!(ChatMessage::user("u").role, "user");
    assert_eq!(ChatMessage::user("u").content, "u");
}

#[test]
fn chat_message_serializes_to_ollama_shape() {
    let json = serde_json::to_value(ChatMessage::user("hello")).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hello" }));
}

#[test]
fn unreachable_message_names_ollama() {
    let err = LlmError::Unreachable { url: "http://127.0.0.1:11434".into() };
    let text = err.to_string();
    assert!(text.contains("could not connect to Ollama"));
    assert!(text.contains("127.0.0.1:11434"));
}

#[test]
fn retryable_classification() {
    assert!(LlmError::Unreachable { url: String::new() }.retryable());
    assert!(LlmError::ApiRequest("timeout".into()).retryable());
    assert!(LlmError::ApiResponse { status: 503, body: String::new() }.retryable());
    assert!(!LlmError::ApiResponse { status: 404, body: String::new() }.retryable());
    assert!(!LlmError::ApiParse("bad".into()).retryable());
    assert!(!LlmError::EmptyReply.retryable());
}
