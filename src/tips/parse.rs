use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::category::EXPECTED_TIP_COUNT;
use crate::error::ParseError;

/// One numbered point cut out of a raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// 1-based order of appearance. The numeral printed in the response is
    /// not used.
    pub position: u32,
    pub content: String,
}

/// The response did not contain [`EXPECTED_TIP_COUNT`] points.
///
/// Carried next to the results; never returned as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl std::fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected {} points, got {}", self.expected, self.actual)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTips {
    pub fragments: Vec<Fragment>,
    pub warning: Option<CountMismatch>,
}

impl ParsedTips {
    pub fn count_mismatch(&self) -> bool {
        self.warning.is_some()
    }
}

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| Regex::new(r"[0-9]+\.").expect("valid regex"))
}

/// Split a free-text response into numbered fragments.
///
/// The text is split on every `<digits>.` marker. Fragments that are empty
/// after trimming are dropped and the rest are numbered by their order of
/// appearance, so duplicated or out-of-order numerals in the response do not
/// affect positions. Any text before the first marker counts as a fragment.
///
/// A count other than [`EXPECTED_TIP_COUNT`] is reported through
/// [`ParsedTips::warning`] rather than as an error.
pub fn parse_tips(raw_text: &str) -> Result<ParsedTips, ParseError> {
    if raw_text.trim().is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let markers = marker_regex();
    if !markers.is_match(raw_text) {
        debug!(len = raw_text.len(), "response has no numbered markers");
        return Err(ParseError::NoMarkers);
    }

    let fragments: Vec<Fragment> = markers
        .split(raw_text)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .zip(1u32..)
        .map(|(content, position)| {
            trace!(position, content, "parsed fragment");
            Fragment {
                position,
                content: content.to_string(),
            }
        })
        .collect();

    if fragments.is_empty() {
        return Err(ParseError::NoContent);
    }

    let warning = (fragments.len() != EXPECTED_TIP_COUNT).then(|| CountMismatch {
        expected: EXPECTED_TIP_COUNT,
        actual: fragments.len(),
    });
    if let Some(mismatch) = &warning {
        warn!(
            expected = mismatch.expected,
            actual = mismatch.actual,
            "Unexpected number of care tips in response"
        );
    }

    Ok(ParsedTips { fragments, warning })
}
