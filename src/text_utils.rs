use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Collapse runs of whitespace (including newlines) into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shorten `text` to at most `max` grapheme clusters for a one-line preview.
///
/// Whitespace is collapsed first. Truncated text ends with `…`, which counts
/// towards `max`.
pub fn preview(text: &str, max: usize) -> String {
    let collapsed = collapse_whitespace(text);
    let count = collapsed.graphemes(true).count();
    if count <= max {
        return collapsed;
    }
    if max == 0 {
        return String::new();
    }

    trace!(count, max, "Truncating preview");
    let mut out: String = collapsed.graphemes(true).take(max - 1).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(preview("Water weekly.", 20), "Water weekly.");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(preview("Water the fern weekly", 10), "Water the…");
    }

    #[test]
    fn newlines_are_collapsed() {
        assert_eq!(preview("Check\n  roots", 40), "Check roots");
    }

    #[test]
    fn graphemes_are_not_split() {
        let text = "🌱🌱🌱🌱";
        assert_eq!(preview(text, 3), "🌱🌱…");
    }

    #[test]
    fn capitalize_first_handles_empty() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("monstera"), "Monstera");
    }
}
