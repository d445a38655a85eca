use anyhow::Result;
use dotenvy::dotenv;

pub mod ai;
pub mod command_handler;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod images;
pub mod messages;
pub mod search;
mod system_info;
pub mod text_utils;
pub mod tips;

pub use ai::{build_prompt, fetch_plant_tips, AiConfig};
pub use config::Config;
pub use error::{ParseError, TipError};
pub use images::{fetch_plant_images, ImageConfig, PlantImage};
pub use search::{search_plant, SearchOutcome, SearchState, SearchTicket};
pub use system_info::get_system_info;
pub use tips::{
    assemble, category_for_position, parse_tips, process_response, Category, CountMismatch,
    Fragment, ParsedTips, Tip, TipSet, EXPECTED_TIP_COUNT,
};

use crate::command_handler::handle_command;
use crate::commands::Cli;

// ──────────────────────────────────────────────────────────────
// Application entry point
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    // Logs go to stderr so stdout only carries command output.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let config = Config::from_env();

    tracing::debug!(
        ai_enabled = config.ai.is_some(),
        images_enabled = config.images.is_some(),
        "Loaded configuration"
    );

    handle_command(cli.command, &config).await
}
