use chrono::NaiveDate;
use snap_core::{words, ContentRecord};

use crate::escape::escape_markdown;

/// Render the markdown edition of a record for the given date.
pub fn render_markdown(record: &ContentRecord, date: NaiveDate) -> String {
    let word_count = words::record_word_count(record);

    format!(
        r#"# Daily AI & Cloud Snapshot 📡

## Today's Highlight

**{highlight}**
{description}

## Quick Facts 🔍

• **What**: {what}
• **Why it matters**: {why_matters}
• **Cool factor**: {cool_factor}

## One-Minute Takeaway 💡

{takeaway}

---

**Word Count**: {word_count} words
**Read Time**: 1 minute
**Date**: {date}

---"#,
        highlight = escape_markdown(&record.highlight),
        description = escape_markdown(&record.description),
        what = escape_markdown(&record.what),
        why_matters = escape_markdown(&record.why_matters),
        cool_factor = escape_markdown(&record.cool_factor),
        takeaway = escape_markdown(&record.takeaway),
        word_count = word_count,
        date = date.format("%B %d, %Y"),
    )
}
