use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of points the prompt asks for. Equal to the upper bound of the
/// last category range.
pub const EXPECTED_TIP_COUNT: usize = 150;

/// The ten fixed sections of a care guide.
///
/// Variants are declared in ascending range order; [`Category::ALL`] relies on
/// that order for the position lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Basic Care & Introduction")]
    BasicCare,
    #[serde(rename = "Growth & Development")]
    Growth,
    #[serde(rename = "Soil & Nutrients")]
    Soil,
    #[serde(rename = "Water Requirements")]
    Water,
    #[serde(rename = "Light Requirements")]
    Light,
    #[serde(rename = "Common Problems")]
    Problems,
    #[serde(rename = "Home Remedies")]
    Remedies,
    #[serde(rename = "Maintenance Tips")]
    Maintenance,
    #[serde(rename = "Seasonal Care")]
    Seasonal,
    #[serde(rename = "Advanced Gardening")]
    AdvancedGardening,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::BasicCare,
        Category::Growth,
        Category::Soil,
        Category::Water,
        Category::Light,
        Category::Problems,
        Category::Remedies,
        Category::Maintenance,
        Category::Seasonal,
        Category::AdvancedGardening,
    ];

    /// Human readable label, also used as the serialized value.
    pub fn label(self) -> &'static str {
        match self {
            Category::BasicCare => "Basic Care & Introduction",
            Category::Growth => "Growth & Development",
            Category::Soil => "Soil & Nutrients",
            Category::Water => "Water Requirements",
            Category::Light => "Light Requirements",
            Category::Problems => "Common Problems",
            Category::Remedies => "Home Remedies",
            Category::Maintenance => "Maintenance Tips",
            Category::Seasonal => "Seasonal Care",
            Category::AdvancedGardening => "Advanced Gardening",
        }
    }

    /// Short lowercase name accepted on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Category::BasicCare => "basic",
            Category::Growth => "growth",
            Category::Soil => "soil",
            Category::Water => "water",
            Category::Light => "light",
            Category::Problems => "problems",
            Category::Remedies => "remedies",
            Category::Maintenance => "maintenance",
            Category::Seasonal => "seasonal",
            Category::AdvancedGardening => "advanced",
        }
    }

    /// Inclusive range of tip positions belonging to this category.
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Category::BasicCare => 1..=15,
            Category::Growth => 16..=35,
            Category::Soil => 36..=55,
            Category::Water => 56..=75,
            Category::Light => 76..=95,
            Category::Problems => 96..=115,
            Category::Remedies => 116..=125,
            Category::Maintenance => 126..=135,
            Category::Seasonal => 136..=145,
            Category::AdvancedGardening => 146..=150,
        }
    }

    /// Look up a category by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts either the full label or the slug, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                c.slug().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Map a 1-based tip position to its category.
///
/// The first category whose upper bound is at least `position` wins.
/// Positions past the last range (the parser tolerates more than
/// [`EXPECTED_TIP_COUNT`] points) fall into [`Category::AdvancedGardening`]
/// instead of failing.
pub fn category_for_position(position: u32) -> Category {
    Category::ALL
        .into_iter()
        .find(|c| position <= *c.range().end())
        .unwrap_or(Category::AdvancedGardening)
}
