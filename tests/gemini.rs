use plantcare::ai::generate_text;
use plantcare::{fetch_plant_tips, AiConfig, Category, TipError};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn config_for(server: &MockServer) -> AiConfig {
    AiConfig {
        api_url: Some(server.uri()),
        ..AiConfig::new("test-key")
    }
}

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [
            { "content": { "role": "model", "parts": [ { "text": text } ] }, "finishReason": "STOP" }
        ]
    }))
}

#[tokio::test]
async fn fetch_plant_tips_parses_model_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("plant care guide for Monstera"))
        .respond_with(gemini_reply(
            "1. Give it bright, indirect light.\n2. Water when the top soil is dry.",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let tips = fetch_plant_tips(&config_for(&server), "Monstera").await.unwrap();
    assert_eq!(tips.len(), 2);
    assert!(tips.count_mismatch());
    assert_eq!(tips.tips()[1].content(), "Water when the top soil is dry.");
    assert_eq!(tips.tips()[1].category(), Category::BasicCare);
    server.verify().await;
}

#[tokio::test]
async fn empty_plant_name_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(gemini_reply("1. unused"))
        .expect(0)
        .mount(&server)
        .await;

    let err = fetch_plant_tips(&config_for(&server), "   ").await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<TipError>(),
        Some(&TipError::EmptyPlantName)
    );
    server.verify().await;
}

#[tokio::test]
async fn unnumbered_answer_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(gemini_reply("I cannot help with that plant."))
        .mount(&server)
        .await;

    let err = fetch_plant_tips(&config_for(&server), "Fern").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TipError>(),
        Some(TipError::Parse(_))
    ));
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = generate_text(&config_for(&server), "prompt").await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("429"), "{message}");
    assert!(message.contains("quota exceeded"), "{message}");
}

#[tokio::test]
async fn custom_model_changes_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-pro:generateContent"))
        .respond_with(gemini_reply("1. ok"))
        .expect(1)
        .mount(&server)
        .await;

    let config = AiConfig {
        model: "gemini-pro".into(),
        ..config_for(&server)
    };
    let text = generate_text(&config, "prompt").await.unwrap();
    assert_eq!(text, "1. ok");
    server.verify().await;
}
