use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use snap_core::{RenderedOutput, Result};

/// Write the markdown and HTML editions next to each other, stamped with
/// the run date. Rerunning on the same day overwrites both files.
pub fn write_outputs(
    rendered: &RenderedOutput,
    dir: &Path,
    date: NaiveDate,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let stamp = date.format("%Y-%m-%d");
    let md_path = dir.join(format!("ai_news_summary_{}.md", stamp));
    let html_path = dir.join(format!("ai_news_summary_{}.html", stamp));

    fs::write(&md_path, &rendered.markdown)?;
    fs::write(&html_path, &rendered.html)?;

    Ok(vec![md_path, html_path])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_output() -> RenderedOutput {
        RenderedOutput {
            markdown: "# markdown edition\n".to_string(),
            html: "<!DOCTYPE html><html></html>".to_string(),
            word_count: 3,
        }
    }

    #[test]
    fn test_outputs_are_date_stamped_and_written() {
        let dir = std::env::temp_dir().join("snap_output_test");
        let date = NaiveDate::from_ymd_opt(2025, 7, 12).unwrap();

        let files = write_outputs(&sample_output(), &dir, date).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("ai_news_summary_2025-07-12.md"));
        assert!(files[1].ends_with("ai_news_summary_2025-07-12.html"));

        let markdown = fs::read_to_string(&files[0]).unwrap();
        assert_eq!(markdown, "# markdown edition\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_same_day_rerun_overwrites() {
        let dir = std::env::temp_dir().join("snap_output_overwrite_test");
        let date = NaiveDate::from_ymd_opt(2025, 7, 12).unwrap();

        write_outputs(&sample_output(), &dir, date).unwrap();
        let mut second = sample_output();
        second.markdown = "# second run\n".to_string();
        let files = write_outputs(&second, &dir, date).unwrap();

        let markdown = fs::read_to_string(&files[0]).unwrap();
        assert_eq!(markdown, "# second run\n");

        fs::remove_dir_all(&dir).unwrap();
    }
}
