use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::tips::Category;

#[derive(Parser, Debug)]
#[command(name = "plantcare")]
#[command(about = "Plant care tips from a generative-text model", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch care tips and photos for a plant.
    Search {
        /// Plant name, e.g. Monstera.
        #[arg(required = true)]
        plant: Vec<String>,

        /// Only show tips in this category (label or slug, e.g. "water").
        #[arg(short, long)]
        category: Option<Category>,

        /// Show the full text of a single tip.
        #[arg(short, long)]
        tip: Option<u32>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt that would be sent for a plant.
    Prompt {
        #[arg(required = true)]
        plant: Vec<String>,
    },

    /// Parse a saved model response from a file or stdin.
    Parse {
        /// Response file. Reads stdin when omitted.
        file: Option<PathBuf>,

        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long)]
        tip: Option<u32>,

        #[arg(long)]
        json: bool,
    },

    /// List the tip categories and the positions they cover.
    Categories {
        #[arg(long)]
        json: bool,
    },

    /// Show build information.
    Info,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_joins_plant_words_and_parses_category() {
        let cli = Cli::try_parse_from([
            "plantcare", "search", "snake", "plant", "--category", "water", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Search {
                plant,
                category,
                tip,
                json,
            } => {
                assert_eq!(plant, vec!["snake", "plant"]);
                assert_eq!(category, Some(Category::Water));
                assert_eq!(tip, None);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["plantcare", "search", "fern", "-c", "cacti"]).is_err());
    }

    #[test]
    fn search_requires_a_plant() {
        assert!(Cli::try_parse_from(["plantcare", "search"]).is_err());
    }
}
