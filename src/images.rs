//! Illustrative photos from the Pixabay search API.

use std::env;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

pub const PIXABAY_API_URL: &str = "https://pixabay.com/api/";
pub const DEFAULT_PER_PAGE: u32 = 10;

#[derive(Clone)]
pub struct ImageConfig {
    pub api_key: String,
    pub api_url: Option<String>,
    pub per_page: u32,
}

impl ImageConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn from_env() -> Option<Self> {
        let api_key = env::var("PIXABAY_API_KEY").ok()?;
        let per_page = env::var("PIXABAY_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PER_PAGE);
        Some(Self {
            api_key,
            api_url: env::var("PIXABAY_API_URL").ok(),
            per_page,
        })
    }
}

impl std::fmt::Debug for ImageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageConfig")
            .field("api_url", &self.api_url)
            .field("per_page", &self.per_page)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantImage {
    pub id: String,
    /// Web-sized image for thumbnails.
    pub url: String,
    /// Large image for the full preview.
    pub large: String,
}

#[derive(Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

impl From<Hit> for PlantImage {
    fn from(hit: Hit) -> Self {
        Self {
            id: hit.id.to_string(),
            url: hit.webformat_url,
            large: hit.large_image_url,
        }
    }
}

/// Search photos of `plant_name`.
///
/// The query is `"<plant_name> plant"` so that results favour the plant over
/// unrelated meanings of the name.
#[instrument(level = "trace", skip(config))]
pub async fn fetch_plant_images(config: &ImageConfig, plant_name: &str) -> Result<Vec<PlantImage>> {
    let url = config.api_url.as_deref().unwrap_or(PIXABAY_API_URL);
    let query = format!("{} plant", plant_name.trim());
    let per_page = config.per_page.to_string();

    debug!(url, query = %query, "sending image search request");

    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .query(&[
            ("key", config.api_key.as_str()),
            ("q", query.as_str()),
            ("image_type", "photo"),
            ("per_page", per_page.as_str()),
        ])
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "Pixabay API error");
        return Err(anyhow!("Pixabay API error {status}: {err_text}"));
    }

    let raw = resp.text().await?;
    trace!(raw = %raw, "image search response");
    let data: SearchResponse = serde_json::from_str(&raw)?;
    let images: Vec<PlantImage> = data.hits.into_iter().map(PlantImage::from).collect();
    debug!(count = images.len(), "Fetched plant images");
    Ok(images)
}

/// Like [`fetch_plant_images`] but never fails: a missing configuration or a
/// failed request yields an empty gallery.
pub async fn fetch_plant_images_or_empty(
    config: Option<&ImageConfig>,
    plant_name: &str,
) -> Vec<PlantImage> {
    let Some(config) = config else {
        debug!("image search disabled, no PIXABAY_API_KEY");
        return Vec::new();
    };
    match fetch_plant_images(config, plant_name).await {
        Ok(images) => images,
        Err(err) => {
            warn!(error = %err, "Image search failed, continuing without images");
            Vec::new()
        }
    }
}
