use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::category::{category_for_position, Category};
use super::parse::{parse_tips, CountMismatch, ParsedTips};
use crate::error::TipError;

/// A single care instruction.
///
/// The category is computed from `id` on demand so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    id: u32,
    content: String,
}

impl Tip {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> Category {
        category_for_position(self.id)
    }
}

impl Serialize for Tip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tip", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("content", &self.content)?;
        state.serialize_field("category", &self.category())?;
        state.end()
    }
}

/// The assembled tips of one response, in parse order.
///
/// Read-only once built. A new search produces a new set instead of
/// modifying this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TipSet {
    tips: Vec<Tip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<CountMismatch>,
}

impl TipSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn count_mismatch(&self) -> bool {
        self.warning.is_some()
    }

    pub fn warning(&self) -> Option<&CountMismatch> {
        self.warning.as_ref()
    }

    /// Look up a tip by id.
    pub fn get(&self, id: u32) -> Option<&Tip> {
        // Ids are assigned 1..=n in order, so the id is the index plus one.
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.tips.get(index).filter(|tip| tip.id == id)
    }

    /// Tips in `category`, or every tip when no category is given.
    pub fn filter(&self, category: Option<Category>) -> Vec<&Tip> {
        self.tips
            .iter()
            .filter(|tip| category.map_or(true, |c| tip.category() == c))
            .collect()
    }

    /// Exact match on the category label. Unknown labels match nothing.
    pub fn filter_by_label(&self, label: &str) -> Vec<&Tip> {
        match Category::from_label(label) {
            Some(category) => self.filter(Some(category)),
            None => Vec::new(),
        }
    }

    /// Number of tips per category, in category order. Categories without
    /// tips are listed with a zero count.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.tips.iter().filter(|t| t.category() == c).count()))
            .collect()
    }
}

/// Turn parsed fragments into tips. Order is preserved and nothing is
/// dropped, merged or renumbered.
pub fn assemble(parsed: ParsedTips) -> TipSet {
    let tips = parsed
        .fragments
        .into_iter()
        .map(|fragment| Tip {
            id: fragment.position,
            content: fragment.content,
        })
        .collect();
    TipSet {
        tips,
        warning: parsed.warning,
    }
}

/// Parse and assemble a raw response in one step.
pub fn process_response(raw_text: &str) -> Result<TipSet, TipError> {
    let parsed = parse_tips(raw_text)?;
    let set = assemble(parsed);
    tracing::debug!(
        count = set.len(),
        count_mismatch = set.count_mismatch(),
        "Assembled care tips"
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn assemble_attaches_categories_by_position() {
        let set = process_response("1. Water daily. 2. Use bright light.").unwrap();
        let tips = set.tips();
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].id(), 1);
        assert_eq!(tips[0].content(), "Water daily.");
        assert_eq!(tips[0].category(), Category::BasicCare);
        assert_eq!(tips[1].id(), 2);
        assert_eq!(tips[1].content(), "Use bright light.");
        assert_eq!(tips[1].category(), Category::BasicCare);
        assert!(set.count_mismatch());
    }

    #[test]
    fn tip_serializes_with_category_label() {
        let set = process_response("1. Water daily.").unwrap();
        let json = serde_json::to_value(&set.tips()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "content": "Water daily.",
                "category": "Basic Care & Introduction"
            })
        );
    }

    #[test]
    fn get_finds_tips_by_id() {
        let set = process_response("1. a 2. b 3. c").unwrap();
        assert_eq!(set.get(2).map(Tip::content), Some("b"));
        assert!(set.get(0).is_none());
        assert!(set.get(4).is_none());
    }

    #[test]
    fn filter_without_category_returns_everything() {
        let set = process_response("1. a 2. b").unwrap();
        assert_eq!(set.filter(None).len(), 2);
        assert!(set.filter(Some(Category::Water)).is_empty());
    }

    #[test]
    fn unknown_label_filters_to_nothing() {
        let set = process_response("1. a 2. b").unwrap();
        assert!(set.filter_by_label("Cactus Care").is_empty());
        assert_eq!(set.filter_by_label("Basic Care & Introduction").len(), 2);
    }

    #[test]
    fn process_response_surfaces_parse_errors() {
        assert_eq!(
            process_response("no numbers here"),
            Err(TipError::Parse(ParseError::NoMarkers))
        );
    }
}
