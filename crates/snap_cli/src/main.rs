use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use snap_core::words::record_word_count;
use snap_core::Result;
use snap_digest::{extract, fallback_record, trim, TrimPolicy};
use snap_render::render;
use snap_sources::{query_for_date, select_story, source_by_name, source_from_env};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query. Defaults to a term rotated by date.
    #[arg(long)]
    query: Option<String>,

    /// Directory the markdown and HTML files are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Date used in filenames and document footers (YYYY-MM-DD).
    /// Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Story source to use (demo, newsapi). Defaults to picking by whether
    /// SEARCH_API_KEY is set.
    #[arg(long)]
    source: Option<String>,

    /// Word budget over the summary body.
    #[arg(long, default_value_t = 100)]
    word_limit: usize,

    /// Takeaway word cutoff applied when the summary is over budget.
    #[arg(long, default_value_t = 35)]
    takeaway_words: usize,

    /// Description word cutoff applied when the takeaway cut is not enough.
    #[arg(long, default_value_t = 20)]
    description_words: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let source = match cli.source.as_deref() {
        Some(name) => source_by_name(name)?,
        None => source_from_env()?,
    };

    let query = cli
        .query
        .clone()
        .unwrap_or_else(|| query_for_date(date).to_string());
    info!("🤖 Starting AI news generation (source: {})", source.name());
    info!("🔍 Searching for: {}", query);

    let stories = source.search(&query).await?;
    let mut record = match select_story(stories) {
        Some(story) => {
            info!("📰 Selected story: {}", story.title);
            extract(&story)
        }
        None => {
            warn!("No stories returned, using fallback content");
            fallback_record()
        }
    };

    let policy = TrimPolicy {
        word_limit: cli.word_limit,
        takeaway_words: cli.takeaway_words,
        description_words: cli.description_words,
    };
    let count = record_word_count(&record);
    if count > policy.word_limit {
        info!("⚠️ Summary is {} words, trimming to {}", count, policy.word_limit);
    }
    let count = trim(&mut record, &policy);
    if count > policy.word_limit {
        warn!("Summary still {} words after trimming (limit {})", count, policy.word_limit);
    }
    info!("📊 Generated summary with {} words", count);

    let rendered = render(&record, date);
    let files = output::write_outputs(&rendered, &cli.output_dir, date)?;

    println!("✅ Generated files:");
    for file in &files {
        println!("   - {}", file.display());
    }
    println!("📊 Final word count: {}", rendered.word_count);
    println!("📧 Ready for your email newsletter!");

    Ok(())
}
