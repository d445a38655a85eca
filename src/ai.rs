pub mod common;
pub mod config;
pub mod gemini;
pub mod prompts;

pub use config::AiConfig;
pub use gemini::{fetch_plant_tips, generate_text};
pub use prompts::build_prompt;
