use anyhow::Result;
use tracing::{debug, instrument, trace};

use crate::ai::common::{build_generate_body, parse_generated_text, send_gemini_request};
use crate::ai::config::AiConfig;
use crate::ai::prompts::build_prompt;
use crate::tips::{process_response, TipSet};

/// Send `prompt` to the configured model and return the generated text.
#[instrument(level = "trace", skip(config, prompt), fields(model = %config.model))]
pub async fn generate_text(config: &AiConfig, prompt: &str) -> Result<String> {
    let url = config.generate_url();
    let body = build_generate_body(prompt);

    debug!(url = %url, prompt_len = prompt.len(), "sending generateContent request");

    let client = reqwest::Client::new();
    let builder = client.post(&url).json(&body);
    let resp = send_gemini_request(&config.api_key, builder).await?;

    let raw = resp.text().await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "generateContent response body");
    trace!(raw = %raw, "generateContent response");

    parse_generated_text(&raw)
}

/// Ask the model for a care guide and turn the answer into tips.
///
/// An empty plant name fails before any request is sent.
#[instrument(level = "trace", skip(config))]
pub async fn fetch_plant_tips(config: &AiConfig, plant_name: &str) -> Result<TipSet> {
    let prompt = build_prompt(plant_name)?;
    let text = generate_text(config, &prompt).await?;
    Ok(process_response(&text)?)
}
