pub mod escape;
mod html;
mod markdown;

pub use html::render_html;
pub use markdown::render_markdown;

use chrono::NaiveDate;
use snap_core::{words, ContentRecord, RenderedOutput};

/// Render both editions of a record for the given date.
///
/// Pure function of its arguments: the date is injected by the caller so
/// output is reproducible in tests and with `--date`.
pub fn render(record: &ContentRecord, date: NaiveDate) -> RenderedOutput {
    RenderedOutput {
        markdown: render_markdown(record, date),
        html: render_html(record, date),
        word_count: words::record_word_count(record),
    }
}
