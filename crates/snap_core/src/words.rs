use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ContentRecord;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());

/// Count words in text, ignoring HTML tags and markdown emphasis markers.
///
/// `**bold**` and `*emphasis*` are unwrapped to their inner text before
/// counting, so markup never inflates the count.
pub fn count_words(text: &str) -> usize {
    let clean = HTML_TAG.replace_all(text, "");
    let clean = BOLD.replace_all(&clean, "$1");
    let clean = EMPHASIS.replace_all(&clean, "$1");
    clean.split_whitespace().count()
}

/// Word count over the five budgeted fields of a record.
pub fn record_word_count(record: &ContentRecord) -> usize {
    record.budgeted_fields().iter().map(|f| count_words(f)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_counts_tokens() {
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("  spaced   out  "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_markdown_markers_are_stripped() {
        assert_eq!(count_words("**bold** text"), 2);
        assert_eq!(count_words("*emphasis* text"), 2);
        assert_eq!(count_words("bold text"), 2);
    }

    #[test]
    fn test_html_tags_are_stripped() {
        assert_eq!(count_words("<p>hello <b>world</b></p>"), 2);
        assert_eq!(count_words("<div class=\"x\">one</div> two"), 2);
    }

    #[test]
    fn test_record_word_count_sums_budgeted_fields() {
        let record = ContentRecord {
            highlight: "ignored entirely by the budget".to_string(),
            description: "one two".to_string(),
            what: "three".to_string(),
            why_matters: "four five".to_string(),
            cool_factor: "six".to_string(),
            takeaway: "seven eight nine".to_string(),
        };
        assert_eq!(record_word_count(&record), 9);
    }
}
