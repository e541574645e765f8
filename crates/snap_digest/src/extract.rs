use snap_core::{ContentRecord, RawStory};

use crate::rules::{self, KeywordRule};

/// Derive the six-field summary from a raw story.
///
/// Total over its input: empty or missing fields simply fail every keyword
/// check and fall through to the per-field fallback sentences.
pub fn extract(raw: &RawStory) -> ContentRecord {
    let snippet_lower = raw.snippet.to_lowercase();

    ContentRecord {
        highlight: clean_title(&raw.title),
        description: simplify_description(&raw.snippet),
        what: lookup(rules::WHAT_RULES, rules::WHAT_FALLBACK, &snippet_lower),
        why_matters: lookup(
            rules::WHY_MATTERS_RULES,
            rules::WHY_MATTERS_FALLBACK,
            &snippet_lower,
        ),
        cool_factor: lookup(
            rules::COOL_FACTOR_RULES,
            rules::COOL_FACTOR_FALLBACK,
            &snippet_lower,
        ),
        takeaway: lookup(rules::TAKEAWAY_RULES, rules::TAKEAWAY_FALLBACK, &snippet_lower),
    }
}

/// Canned record used when the source returns no stories at all.
pub fn fallback_record() -> ContentRecord {
    ContentRecord {
        highlight: "AI Development Continues at Rapid Pace".to_string(),
        description: "The AI industry keeps advancing with new models, tools, and \
                      capabilities being released regularly. Companies are focusing on \
                      making AI more accessible and useful for everyday tasks."
            .to_string(),
        what: "Ongoing improvements to AI technology and applications".to_string(),
        why_matters: "Makes AI tools more helpful and accessible to everyone".to_string(),
        cool_factor: "New AI capabilities emerge almost weekly".to_string(),
        takeaway: "AI technology is evolving so quickly that what seemed impossible last \
                   year is becoming normal today. This rapid progress means more helpful \
                   AI tools for work, creativity, and daily life are constantly being \
                   developed."
            .to_string(),
    }
}

/// First match wins; table order is the precedence order.
fn lookup(table: &[KeywordRule], fallback: &str, snippet_lower: &str) -> String {
    table
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| snippet_lower.contains(t)))
        .map(|rule| rule.sentence.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Strip a known headline prefix and cap the length at
/// [`rules::TITLE_MAX_CHARS`] characters.
fn clean_title(title: &str) -> String {
    let cleaned = strip_title_prefix(title.trim());

    if cleaned.chars().count() > rules::TITLE_MAX_CHARS {
        let head: String = cleaned.chars().take(rules::TITLE_TRUNCATE_AT).collect();
        format!("{}...", head)
    } else {
        cleaned.to_string()
    }
}

fn strip_title_prefix(title: &str) -> &str {
    for prefix in rules::TITLE_PREFIXES {
        if title.len() >= prefix.len()
            && title.is_char_boundary(prefix.len())
            && title[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            return title[prefix.len()..].trim_start();
        }
    }
    title
}

/// Swap jargon for plainer wording and keep at most two sentence fragments.
fn simplify_description(snippet: &str) -> String {
    let mut description = snippet.to_string();
    for (term, simple) in rules::SIMPLIFICATIONS {
        description = description.replace(term, simple);
    }

    let segments: Vec<&str> = description.split(". ").collect();
    if segments.len() > rules::DESCRIPTION_MAX_SENTENCES {
        format!(
            "{}.",
            segments[..rules::DESCRIPTION_MAX_SENTENCES].join(". ")
        )
    } else {
        description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(title: &str, snippet: &str) -> RawStory {
        RawStory {
            title: title.to_string(),
            snippet: snippet.to_string(),
            url: None,
            date: None,
            source: None,
        }
    }

    #[test]
    fn test_breaking_prefix_is_stripped() {
        let record = extract(&story("Breaking: Big News About Gemini", ""));
        assert_eq!(record.highlight, "Big News About Gemini");
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        assert_eq!(
            extract(&story("BREAKING: Story", "")).highlight,
            "Story"
        );
        assert_eq!(extract(&story("NEW: Model", "")).highlight, "Model");
        assert_eq!(extract(&story("News: Update", "")).highlight, "Update");
    }

    #[test]
    fn test_long_title_truncates_to_sixty_chars() {
        let title = "a".repeat(80);
        let record = extract(&story(&title, ""));
        assert_eq!(record.highlight.chars().count(), 60);
        assert!(record.highlight.ends_with("..."));
    }

    #[test]
    fn test_sixty_char_title_is_kept_whole() {
        let title = "b".repeat(60);
        let record = extract(&story(&title, ""));
        assert_eq!(record.highlight, title);
    }

    #[test]
    fn test_description_replacements_and_sentence_cap() {
        let snippet = "New infrastructure arrives. It handles workloads well. A third \
                       sentence that gets dropped.";
        let record = extract(&story("t", snippet));
        assert_eq!(
            record.description,
            "New computer systems arrives. It handles tasks well."
        );
    }

    #[test]
    fn test_short_description_is_untouched() {
        let record = extract(&story("t", "One sentence only"));
        assert_eq!(record.description, "One sentence only");
    }

    #[test]
    fn test_reasoning_wins_in_why_matters_regardless_of_position() {
        // "performance" sits later in the table than "reasoning"; the table
        // order decides, not the position of the keyword in the snippet.
        let record = extract(&story(
            "t",
            "Better performance across the board and stronger reasoning",
        ));
        assert_eq!(
            record.why_matters,
            "Makes AI better at solving complex problems and thinking logically"
        );
    }

    #[test]
    fn test_gemini_snippet_resolves_what() {
        let record = extract(&story("t", "Google unveils Gemini with new tricks"));
        assert_eq!(
            record.what,
            "Google's advanced AI model for complex reasoning and multimodal tasks"
        );
    }

    #[test]
    fn test_empty_story_falls_back_everywhere() {
        let record = extract(&story("", ""));
        assert_eq!(record.highlight, "");
        assert_eq!(record.description, "");
        assert_eq!(record.what, rules::WHAT_FALLBACK);
        assert_eq!(record.why_matters, rules::WHY_MATTERS_FALLBACK);
        assert_eq!(record.cool_factor, rules::COOL_FACTOR_FALLBACK);
        assert_eq!(record.takeaway, rules::TAKEAWAY_FALLBACK);
    }

    #[test]
    fn test_multibyte_title_does_not_panic() {
        let record = extract(&story("Ünïcode headline", "snippet"));
        assert_eq!(record.highlight, "Ünïcode headline");
    }

    #[test]
    fn test_fallback_record_is_fully_populated() {
        let record = fallback_record();
        for field in record.budgeted_fields() {
            assert!(!field.is_empty());
        }
        assert!(!record.highlight.is_empty());
    }
}
