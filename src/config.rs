use crate::ai::config::AiConfig;
use crate::images::ImageConfig;

#[derive(Clone, Debug)]
pub struct Config {
    /// `None` when `GEMINI_API_KEY` is unset; searching is then disabled.
    pub ai: Option<AiConfig>,
    /// `None` when `PIXABAY_API_KEY` is unset; searches return no images.
    pub images: Option<ImageConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            ai: AiConfig::from_env(),
            images: ImageConfig::from_env(),
        }
    }
}
