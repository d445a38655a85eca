use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use crate::ai::build_prompt;
use crate::commands::Command;
use crate::config::Config;
use crate::format::{
    category_style, format_category_summary, format_category_table, format_heading,
    format_image_list, format_tip_detail, format_tip_list, CategoryStyle, ResultsView,
};
use crate::messages::{
    count_mismatch_notice, loading_text, no_tips_in_category, tip_not_found, AI_DISABLED,
    EMPTY_PLANT_NAME, NO_IMAGES, NO_TIPS,
};
use crate::search::{search_plant, SearchState};
use crate::system_info::get_system_info;
use crate::tips::{process_response, Category, TipSet};

#[derive(Serialize)]
struct CategoryView {
    label: &'static str,
    slug: &'static str,
    first: u32,
    last: u32,
    #[serde(flatten)]
    style: CategoryStyle,
}

pub async fn handle_command(cmd: Command, config: &Config) -> Result<()> {
    match cmd {
        Command::Search {
            plant,
            category,
            tip,
            json,
        } => search(config, &plant.join(" "), category, tip, json).await?,
        Command::Prompt { plant } => {
            let prompt = build_prompt(&plant.join(" ")).map_err(|_| anyhow!(EMPTY_PLANT_NAME))?;
            println!("{prompt}");
        }
        Command::Parse {
            file,
            category,
            tip,
            json,
        } => parse_saved_response(file.as_deref(), category, tip, json)?,
        Command::Categories { json } => show_categories(json)?,
        Command::Info => println!("{}", get_system_info()),
    }
    Ok(())
}

async fn search(
    config: &Config,
    plant_name: &str,
    category: Option<Category>,
    tip: Option<u32>,
    json: bool,
) -> Result<()> {
    let Some(ai) = &config.ai else {
        bail!(AI_DISABLED);
    };

    let mut state = SearchState::new();
    let ticket = state
        .begin(plant_name)
        .map_err(|_| anyhow!(EMPTY_PLANT_NAME))?;
    eprintln!("{}", loading_text(ticket.plant_name()));

    let result = search_plant(ai, config.images.as_ref(), ticket.plant_name()).await;
    state.finish(&ticket, result);
    if let Some(err) = state.take_failure() {
        return Err(err);
    }

    if let Some(category) = category {
        state.toggle_category(category);
    }

    if json {
        let view = select_view(state.tips(), state.selected_category(), tip)?
            .with_search(state.plant_name(), state.images());
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}\n", format_heading(state.plant_name()));
    if state.images().is_empty() {
        println!("{NO_IMAGES}\n");
    } else {
        println!("Photos:\n{}", format_image_list(state.images()));
    }
    if tip.is_none() {
        println!("{}", format_category_summary(state.tips()));
    }
    print_tips(state.tips(), state.selected_category(), tip)
}

fn read_response(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn parse_saved_response(
    file: Option<&Path>,
    category: Option<Category>,
    tip: Option<u32>,
    json: bool,
) -> Result<()> {
    let raw = read_response(file)?;
    let set = process_response(&raw)?;
    tracing::debug!(count = set.len(), "Parsed saved response");

    if json {
        let view = select_view(&set, category, tip)?;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    print_tips(&set, category, tip)
}

fn select_view(
    set: &TipSet,
    category: Option<Category>,
    tip: Option<u32>,
) -> Result<ResultsView<'_>> {
    match tip {
        Some(id) => {
            ResultsView::single(set, category, id).ok_or_else(|| anyhow!(tip_not_found(id)))
        }
        None => Ok(ResultsView::filtered(set, category)),
    }
}

fn print_tips(set: &TipSet, category: Option<Category>, tip: Option<u32>) -> Result<()> {
    if let Some(mismatch) = set.warning() {
        eprintln!(
            "{}",
            count_mismatch_notice(mismatch.expected, mismatch.actual)
        );
    }

    if let Some(id) = tip {
        let tip = set.get(id).ok_or_else(|| anyhow!(tip_not_found(id)))?;
        print!("{}", format_tip_detail(tip));
        return Ok(());
    }

    let tips = set.filter(category);
    match (tips.is_empty(), category) {
        (true, Some(category)) => println!("{}", no_tips_in_category(category.label())),
        (true, None) => println!("{NO_TIPS}"),
        (false, _) => print!("{}", format_tip_list(tips)),
    }
    Ok(())
}

fn show_categories(json: bool) -> Result<()> {
    if !json {
        print!("{}", format_category_table());
        return Ok(());
    }

    let views: Vec<CategoryView> = Category::ALL
        .into_iter()
        .map(|category| {
            let range = category.range();
            CategoryView {
                label: category.label(),
                slug: category.slug(),
                first: *range.start(),
                last: *range.end(),
                style: category_style(category),
            }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}
