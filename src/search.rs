use anyhow::Result;
use futures_util::future::join;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::ai::{fetch_plant_tips, AiConfig};
use crate::error::TipError;
use crate::images::{fetch_plant_images_or_empty, ImageConfig, PlantImage};
use crate::messages::{EMPTY_PLANT_NAME, FETCH_FAILED};
use crate::tips::{Category, Tip, TipSet};

/// Everything one search produced.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub plant_name: String,
    pub tips: TipSet,
    pub images: Vec<PlantImage>,
}

/// Fetch tips and photos for `plant_name`.
///
/// Both requests run concurrently. A tip failure fails the whole search; an
/// image failure only leaves the gallery empty.
#[instrument(level = "trace", skip(ai, images))]
pub async fn search_plant(
    ai: &AiConfig,
    images: Option<&ImageConfig>,
    plant_name: &str,
) -> Result<SearchOutcome> {
    let plant_name = plant_name.trim();
    if plant_name.is_empty() {
        return Err(TipError::EmptyPlantName.into());
    }

    info!(plant_name, "Searching plant care tips");
    let (tips, images) = join(
        fetch_plant_tips(ai, plant_name),
        fetch_plant_images_or_empty(images, plant_name),
    )
    .await;

    let tips = tips?;
    debug!(
        plant_name,
        tips = tips.len(),
        images = images.len(),
        "Search finished"
    );
    Ok(SearchOutcome {
        plant_name: plant_name.to_string(),
        tips,
        images,
    })
}

/// Identifies one started search. Only the ticket of the most recent
/// [`SearchState::begin`] can update the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    plant_name: String,
}

impl SearchTicket {
    pub fn plant_name(&self) -> &str {
        &self.plant_name
    }
}

/// State of the plant search screen, minus the rendering.
#[derive(Debug, Default)]
pub struct SearchState {
    generation: u64,
    plant_name: String,
    tips: TipSet,
    images: Vec<PlantImage>,
    loading: bool,
    error: Option<String>,
    failure: Option<anyhow::Error>,
    selected_category: Option<Category>,
    selected_tip: Option<u32>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search. Clears the previous error, selections and images;
    /// the previous tips stay until the new result arrives.
    pub fn begin(&mut self, plant_name: &str) -> Result<SearchTicket, TipError> {
        let plant_name = plant_name.trim();
        if plant_name.is_empty() {
            self.error = Some(EMPTY_PLANT_NAME.to_string());
            return Err(TipError::EmptyPlantName);
        }

        self.generation += 1;
        self.plant_name = plant_name.to_string();
        self.loading = true;
        self.error = None;
        self.failure = None;
        self.selected_tip = None;
        self.selected_category = None;
        self.images.clear();

        debug!(generation = self.generation, plant_name, "Search started");
        Ok(SearchTicket {
            generation: self.generation,
            plant_name: self.plant_name.clone(),
        })
    }

    /// Apply the result of the search identified by `ticket`.
    ///
    /// Returns `false` and changes nothing when a newer search has started
    /// since. On failure the tips are cleared, an error message is set and
    /// the cause is kept for [`SearchState::take_failure`].
    pub fn finish(&mut self, ticket: &SearchTicket, result: Result<SearchOutcome>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale search result"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(outcome) => {
                self.tips = outcome.tips;
                self.images = outcome.images;
            }
            Err(err) => {
                warn!(error = %err, plant_name = %ticket.plant_name, "Search failed");
                self.tips = TipSet::empty();
                self.error = Some(FETCH_FAILED.to_string());
                self.failure = Some(err);
            }
        }
        true
    }

    pub fn plant_name(&self) -> &str {
        &self.plant_name
    }

    pub fn tips(&self) -> &TipSet {
        &self.tips
    }

    pub fn images(&self) -> &[PlantImage] {
        &self.images
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Cause of the last failed search, with the user-facing message
    /// attached as context.
    pub fn take_failure(&mut self) -> Option<anyhow::Error> {
        self.failure.take().map(|err| err.context(FETCH_FAILED))
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    /// Select `category`, or clear the filter if it is already selected.
    pub fn toggle_category(&mut self, category: Category) {
        self.selected_category = if self.selected_category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    /// Tips passing the current category filter.
    pub fn visible_tips(&self) -> Vec<&Tip> {
        self.tips.filter(self.selected_category)
    }

    /// Open the detail of tip `id`. Returns `None` and leaves the selection
    /// unchanged when there is no such tip.
    pub fn select_tip(&mut self, id: u32) -> Option<&Tip> {
        let tip = self.tips.get(id)?;
        self.selected_tip = Some(id);
        Some(tip)
    }

    pub fn selected_tip(&self) -> Option<&Tip> {
        self.selected_tip.and_then(|id| self.tips.get(id))
    }

    pub fn clear_selected_tip(&mut self) {
        self.selected_tip = None;
    }
}
