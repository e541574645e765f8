use snap_core::words::record_word_count;
use snap_core::ContentRecord;

/// Cutoffs for the single-pass budget trim.
///
/// The takeaway and description cutoffs are configurable because the
/// product never settled on a single value (35 vs 40 and 20 vs 25 words
/// have both shipped); callers can pick either without touching the code.
#[derive(Debug, Clone)]
pub struct TrimPolicy {
    /// Word budget over the five non-highlight fields.
    pub word_limit: usize,
    /// Takeaway is cut to this many words when the record is over budget.
    pub takeaway_words: usize,
    /// Description is cut to this many words when the record is still over
    /// budget after the takeaway cut.
    pub description_words: usize,
}

impl Default for TrimPolicy {
    fn default() -> Self {
        Self {
            word_limit: 100,
            takeaway_words: 35,
            description_words: 20,
        }
    }
}

/// Single-pass, best-effort trim toward the word budget.
///
/// Cuts the takeaway first, then the description if the record is still
/// over. There is no convergence loop: overflow held in `what`,
/// `why_matters`, or `cool_factor` is never touched, so the returned count
/// can exceed the limit. Returns the final word count either way.
pub fn trim(record: &mut ContentRecord, policy: &TrimPolicy) -> usize {
    let count = record_word_count(record);
    if count <= policy.word_limit {
        return count;
    }

    record.takeaway = truncate_words(&record.takeaway, policy.takeaway_words);
    let count = record_word_count(record);
    if count <= policy.word_limit {
        return count;
    }

    record.description = truncate_words(&record.description, policy.description_words);
    record_word_count(record)
}

fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }
    format!("{}...", words[..max_words].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat_words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    fn record_with(description: &str, takeaway: &str, what: &str) -> ContentRecord {
        ContentRecord {
            highlight: "h".to_string(),
            description: description.to_string(),
            what: what.to_string(),
            why_matters: "w".to_string(),
            cool_factor: "c".to_string(),
            takeaway: takeaway.to_string(),
        }
    }

    #[test]
    fn test_under_budget_record_is_untouched() {
        let mut record = record_with("short description", "short takeaway", "x");
        let original = record.clone();
        let count = trim(&mut record, &TrimPolicy::default());
        assert_eq!(record, original);
        assert!(count <= 100);
    }

    #[test]
    fn test_overlong_takeaway_is_cut_within_budget() {
        let mut record = record_with(&repeat_words(10), &repeat_words(120), "x");
        let count = trim(&mut record, &TrimPolicy::default());
        assert!(count <= 100, "count was {}", count);
        assert!(record.takeaway.ends_with("..."));
        assert_eq!(record.takeaway.split_whitespace().count(), 35);
        // Description was enough under budget to survive the second cut.
        assert_eq!(record.description, repeat_words(10));
    }

    #[test]
    fn test_description_is_cut_when_takeaway_cut_is_not_enough() {
        let mut record = record_with(&repeat_words(80), &repeat_words(80), "x");
        let count = trim(&mut record, &TrimPolicy::default());
        assert!(count <= 100, "count was {}", count);
        assert!(record.description.ends_with("..."));
        assert_eq!(record.description.split_whitespace().count(), 20);
    }

    #[test]
    fn test_custom_cutoffs_are_honored() {
        let policy = TrimPolicy {
            word_limit: 100,
            takeaway_words: 40,
            description_words: 25,
        };
        let mut record = record_with(&repeat_words(80), &repeat_words(80), "x");
        trim(&mut record, &policy);
        assert_eq!(record.takeaway.split_whitespace().count(), 40);
        assert_eq!(record.description.split_whitespace().count(), 25);
    }

    #[test]
    fn trim_single_pass_can_stay_over_limit() {
        // Overflow in `what` is never trimmed: a single pass only touches
        // takeaway and description, so this record stays over budget.
        let mut record = record_with("short", "short", &repeat_words(150));
        let count = trim(&mut record, &TrimPolicy::default());
        assert!(count > 100, "expected the budget gap, got {}", count);
        assert_eq!(record.what, repeat_words(150));
    }
}
