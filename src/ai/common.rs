use anyhow::{anyhow, Result};
use serde::Deserialize;
use tracing::warn;

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

/// Build a single-turn `generateContent` body.
pub fn build_generate_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            { "role": "user", "parts": [ { "text": prompt } ] }
        ]
    })
}

/// Send a request to the Gemini API, failing on non-success status codes.
pub async fn send_gemini_request(
    api_key: &str,
    builder: reqwest::RequestBuilder,
) -> Result<reqwest::Response> {
    let resp = builder.header("x-goog-api-key", api_key).send().await?;
    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "Gemini API error");
        return Err(anyhow!("Gemini API error {status}: {err_text}"));
    }
    Ok(resp)
}

/// Extract the text of the first candidate from a raw response body.
///
/// Multiple text parts are concatenated in order.
pub fn parse_generated_text(raw: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(raw)?;

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(anyhow!("prompt blocked by Gemini: {reason}"));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing candidate in Gemini response"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
        return Err(anyhow!("empty Gemini candidate (finish reason: {reason})"));
    }

    Ok(text)
}
