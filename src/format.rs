//! Terminal rendering of search results.

use serde::Serialize;

use crate::images::PlantImage;
use crate::text_utils::{capitalize_first, preview};
use crate::tips::{Category, CountMismatch, Tip, TipSet};

/// Grapheme budget for a tip preview in list output.
pub const PREVIEW_LEN: usize = 140;

/// Icon and colour used to render a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// Font Awesome icon name.
    pub icon: &'static str,
    /// `#rrggbb` colour.
    pub color: &'static str,
    /// Mark used in plain-text output.
    pub mark: &'static str,
}

pub fn category_style(category: Category) -> CategoryStyle {
    let (icon, color, mark) = match category {
        Category::BasicCare => ("seedling", "#4CAF50", "🌱"),
        Category::Growth => ("chart-line", "#2196F3", "📈"),
        Category::Soil => ("mountain", "#8D6E63", "🪨"),
        Category::Water => ("tint", "#00BCD4", "💧"),
        Category::Light => ("sun", "#FFA000", "☀️"),
        Category::Problems => ("exclamation-triangle", "#F44336", "⚠️"),
        Category::Remedies => ("mortar-pestle", "#9C27B0", "🧪"),
        Category::Maintenance => ("cut", "#009688", "✂️"),
        Category::Seasonal => ("calendar-alt", "#FF5722", "📅"),
        Category::AdvancedGardening => ("tools", "#3F51B5", "🛠️"),
    };
    CategoryStyle { icon, color, mark }
}

/// Darken a `#rrggbb` colour by `factor` (0.0 keeps it, 1.0 gives black).
///
/// Returns `None` if `hex` is not a six-digit hex colour. The leading `#` is
/// optional; the output always has one and uses lowercase digits.
pub fn darken_color(hex: &str, factor: f64) -> Option<String> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let factor = factor.clamp(0.0, 1.0);
    let mut out = String::from("#");
    for i in (0..6).step_by(2) {
        let channel = u8::from_str_radix(&hex[i..i + 2], 16).ok()?;
        let darkened = (f64::from(channel) * (1.0 - factor)).round() as u8;
        out.push_str(&format!("{darkened:02x}"));
    }
    Some(out)
}

fn format_tip_line(tip: &Tip) -> String {
    let category = tip.category();
    format!(
        "{} #{} {}: {}",
        category_style(category).mark,
        tip.id(),
        category,
        preview(tip.content(), PREVIEW_LEN)
    )
}

/// One line per tip.
pub fn format_tip_list<'a, I>(tips: I) -> String
where
    I: IntoIterator<Item = &'a Tip>,
{
    let mut text = String::new();
    for tip in tips {
        text.push_str(&format_tip_line(tip));
        text.push('\n');
    }
    text
}

/// Full text of one tip.
pub fn format_tip_detail(tip: &Tip) -> String {
    let category = tip.category();
    format!(
        "Tip #{}\n{} {}\n\n{}\n",
        tip.id(),
        category_style(category).mark,
        category,
        tip.content()
    )
}

/// Tip count per category, with the position range each one covers.
pub fn format_category_summary(set: &TipSet) -> String {
    let mut text = String::new();
    for (category, count) in set.category_counts() {
        let range = category.range();
        text.push_str(&format!(
            "{} {:<27} {:>3}-{:<3} {:>3} tips\n",
            category_style(category).mark,
            category.label(),
            range.start(),
            range.end(),
            count
        ));
    }
    text
}

/// Static category table: label, slug, range and style.
pub fn format_category_table() -> String {
    let mut text = String::new();
    for category in Category::ALL {
        let range = category.range();
        let style = category_style(category);
        text.push_str(&format!(
            "{} {:<27} {:<12} {:>3}-{:<3} {}\n",
            style.mark,
            category.label(),
            category.slug(),
            range.start(),
            range.end(),
            style.color
        ));
    }
    text
}

pub fn format_image_list(images: &[PlantImage]) -> String {
    let mut text = String::new();
    for image in images {
        text.push_str(&format!("• {} {}\n", image.url, image.large));
    }
    text
}

pub fn format_heading(plant_name: &str) -> String {
    format!("Plant Care Guide: {}", capitalize_first(plant_name.trim()))
}

/// JSON shape of a result listing.
#[derive(Debug, Serialize)]
pub struct ResultsView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_mismatch: Option<&'a CountMismatch>,
    pub tips: Vec<&'a Tip>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub images: &'a [PlantImage],
}

impl<'a> ResultsView<'a> {
    /// Tips of `set` passing the `category` filter.
    pub fn filtered(set: &'a TipSet, category: Option<Category>) -> Self {
        Self {
            plant_name: None,
            category,
            count_mismatch: set.warning(),
            tips: set.filter(category),
            images: &[],
        }
    }

    /// Only tip `id`, or `None` if the set has no such tip. The category
    /// is reported but does not filter.
    pub fn single(set: &'a TipSet, category: Option<Category>, id: u32) -> Option<Self> {
        let tip = set.get(id)?;
        Some(Self {
            plant_name: None,
            category,
            count_mismatch: set.warning(),
            tips: vec![tip],
            images: &[],
        })
    }

    pub fn with_search(self, plant_name: &'a str, images: &'a [PlantImage]) -> Self {
        Self {
            plant_name: Some(plant_name),
            images,
            ..self
        }
    }
}
