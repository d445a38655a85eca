//! User-facing strings.
//!
//! Keep everything printed to the user here so wording stays consistent
//! between the search state and the command-line output.

pub const EMPTY_PLANT_NAME: &str = "Please enter a plant name";
pub const FETCH_FAILED: &str = "Failed to fetch plant information. Please try again.";
pub const AI_DISABLED: &str =
    "Tip generation is disabled. Set GEMINI_API_KEY to search for care tips.";
pub const NO_TIPS: &str = "No care tips found.";
pub const NO_IMAGES: &str = "No photos found.";

pub fn loading_text(plant_name: &str) -> String {
    format!("Finding care tips for {plant_name}...")
}

pub fn no_tips_in_category(category: &str) -> String {
    format!("No tips in {category}.")
}

pub fn tip_not_found(id: u32) -> String {
    format!("There is no tip #{id}.")
}

pub fn count_mismatch_notice(expected: usize, actual: usize) -> String {
    format!("Note: expected {expected} tips but the response contained {actual}.")
}
