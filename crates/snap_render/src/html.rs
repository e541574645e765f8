use chrono::NaiveDate;
use snap_core::{words, ContentRecord};

use crate::escape::escape_html;

/// Render the inline-styled HTML email edition of a record.
pub fn render_html(record: &ContentRecord, date: NaiveDate) -> String {
    let word_count = words::record_word_count(record);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Daily AI & Cloud Snapshot</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f8fafc; }}
        .container {{ max-width: 600px; margin: 0 auto; background-color: white; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }}
        .header {{ background-color: #3B82F6; color: white; padding: 20px; text-align: center; }}
        .header h1 {{ margin: 0; font-size: 24px; }}
        .header p {{ margin: 5px 0 0 0; font-size: 14px; opacity: 0.9; }}
        .content {{ padding: 30px; }}
        .highlight {{ color: #1e293b; font-size: 20px; font-weight: bold; margin-bottom: 15px; }}
        .description {{ color: #475569; font-size: 14px; line-height: 1.5; margin-bottom: 25px; }}
        .facts {{ margin-bottom: 25px; }}
        .facts h3 {{ color: #10B981; font-size: 16px; margin-bottom: 15px; }}
        .fact {{ display: flex; align-items: flex-start; margin-bottom: 10px; }}
        .fact-dot {{ width: 6px; height: 6px; background-color: #3B82F6; border-radius: 50%; margin-right: 15px; margin-top: 8px; }}
        .fact-label {{ font-weight: bold; color: #1e293b; margin-right: 10px; }}
        .fact-text {{ color: #475569; flex: 1; }}
        .takeaway {{ margin-bottom: 25px; }}
        .takeaway h3 {{ color: #F59E0B; font-size: 16px; margin-bottom: 15px; }}
        .takeaway p {{ color: #475569; font-size: 14px; line-height: 1.6; margin: 0; }}
        .footer {{ background-color: #f1f5f9; padding: 15px; text-align: center; font-size: 12px; color: #64748b; }}
        .footer span {{ margin: 0 15px; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>📡 Daily AI & Cloud Snapshot</h1>
            <p>{date}</p>
        </div>

        <div class="content">
            <div class="highlight">{highlight}</div>

            <div class="description">
                {description}
            </div>

            <div class="facts">
                <h3>🔍 Quick Facts</h3>
                <div class="fact">
                    <div class="fact-dot"></div>
                    <div class="fact-label">What:</div>
                    <div class="fact-text">{what}</div>
                </div>
                <div class="fact">
                    <div class="fact-dot"></div>
                    <div class="fact-label">Why it matters:</div>
                    <div class="fact-text">{why_matters}</div>
                </div>
                <div class="fact">
                    <div class="fact-dot"></div>
                    <div class="fact-label">Cool factor:</div>
                    <div class="fact-text">{cool_factor}</div>
                </div>
            </div>

            <div class="takeaway">
                <h3>💡 One-Minute Takeaway</h3>
                <p>{takeaway}</p>
            </div>
        </div>

        <div class="footer">
            <span>📊 {word_count} words</span>
            <span>⏱️ 1 minute read</span>
            <span>🤖 Daily AI Snapshot</span>
        </div>
    </div>
</body>
</html>"#,
        date = date.format("%B %d, %Y"),
        highlight = escape_html(&record.highlight),
        description = escape_html(&record.description),
        what = escape_html(&record.what),
        why_matters = escape_html(&record.why_matters),
        cool_factor = escape_html(&record.cool_factor),
        takeaway = escape_html(&record.takeaway),
        word_count = word_count,
    )
}
