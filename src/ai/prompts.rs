//! Prompt text sent to the text-generation service.
//!
//! The section list is generated from [`Category`] so the ranges the model is
//! asked for always match the ranges used to categorize its answer.

use std::fmt::Write as _;

use crate::error::TipError;
use crate::tips::{Category, EXPECTED_TIP_COUNT};

/// Sub-topics listed under each section of the prompt.
pub fn section_topics(category: Category) -> &'static [&'static str] {
    match category {
        Category::BasicCare => &[
            "Species overview",
            "General characteristics",
            "Basic requirements",
            "Climate preferences",
            "Growth patterns",
        ],
        Category::Growth => &[
            "Growth stages",
            "Size expectations",
            "Development timeline",
            "Structural characteristics",
            "Growth patterns",
        ],
        Category::Soil => &[
            "Soil composition",
            "pH requirements",
            "Fertilization schedule",
            "Nutrient needs",
            "Soil amendments",
        ],
        Category::Water => &[
            "Watering frequency",
            "Water quality",
            "Drainage needs",
            "Humidity requirements",
            "Seasonal adjustments",
        ],
        Category::Light => &[
            "Light intensity",
            "Duration",
            "Seasonal changes",
            "Positioning",
            "Shade requirements",
        ],
        Category::Problems => &[
            "Pest identification",
            "Disease symptoms",
            "Environmental issues",
            "Growth problems",
            "Prevention methods",
        ],
        Category::Remedies => &[
            "Natural solutions",
            "DIY treatments",
            "Organic approaches",
            "Prevention methods",
            "Emergency care",
        ],
        Category::Maintenance => &[
            "Pruning techniques",
            "Cleaning methods",
            "Tool requirements",
            "Regular care",
            "Maintenance schedule",
        ],
        Category::Seasonal => &[
            "Season-specific needs",
            "Temperature adjustments",
            "Care modifications",
            "Protection methods",
            "Seasonal transitions",
        ],
        Category::AdvancedGardening => &[
            "Propagation methods",
            "Special techniques",
            "Expert tips",
            "Advanced care",
            "Professional advice",
        ],
    }
}

/// Build the care-guide prompt for `plant_name`.
///
/// The name is trimmed; an empty name is rejected before any text is built.
pub fn build_prompt(plant_name: &str) -> Result<String, TipError> {
    let plant_name = plant_name.trim();
    if plant_name.is_empty() {
        return Err(TipError::EmptyPlantName);
    }

    let mut prompt = format!(
        "Generate a comprehensive plant care guide for {plant_name} with exactly {EXPECTED_TIP_COUNT} numbered points.\n\
         Structure the information as follows:\n"
    );

    for category in Category::ALL {
        let range = category.range();
        // Writing to a String cannot fail.
        let _ = write!(
            prompt,
            "\n{}-{}: {}\n",
            range.start(),
            range.end(),
            category.label()
        );
        for topic in section_topics(category) {
            let _ = writeln!(prompt, "- {topic}");
        }
    }

    let _ = write!(
        prompt,
        "\nFormat each point as a clear, detailed sentence. \
         Number each point from 1 to {EXPECTED_TIP_COUNT} consecutively."
    );

    Ok(prompt)
}
