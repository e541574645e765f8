use async_trait::async_trait;
use snap_core::{RawStory, Result};

use crate::StorySource;

/// Built-in stories used whenever no search API key is configured.
///
/// The payloads are fixed so a keyless run always produces a complete,
/// readable snapshot.
#[derive(Debug, Clone, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StorySource for DemoSource {
    fn name(&self) -> &str {
        "demo"
    }

    async fn search(&self, _query: &str) -> Result<Vec<RawStory>> {
        Ok(vec![
            RawStory {
                title: "Google Announces Gemini 2.5 Pro with Advanced Reasoning".to_string(),
                snippet: "Google unveils Gemini 2.5 Pro with enhanced reasoning \
                          capabilities, multimodal understanding, and improved code \
                          generation. The model shows significant improvements in \
                          mathematical problem-solving and complex reasoning tasks."
                    .to_string(),
                url: Some(
                    "https://blog.google/technology/ai/gemini-2-5-pro-announcement".to_string(),
                ),
                date: Some("2024-12-15".to_string()),
                source: Some("Google Blog".to_string()),
            },
            RawStory {
                title: "OpenAI Releases ChatGPT-5 with Multimodal Capabilities".to_string(),
                snippet: "OpenAI announces ChatGPT-5 featuring native image, audio, and \
                          video processing. The new model demonstrates superior \
                          performance in creative tasks and can generate multimedia \
                          content."
                    .to_string(),
                url: Some("https://openai.com/blog/chatgpt-5-release".to_string()),
                date: Some("2024-12-14".to_string()),
                source: Some("OpenAI".to_string()),
            },
            RawStory {
                title: "Microsoft Copilot Gets Major Update with AI Agents".to_string(),
                snippet: "Microsoft introduces AI agents in Copilot, allowing users to \
                          automate complex workflows across Office applications. The \
                          update includes enhanced Excel formulas and PowerPoint design \
                          assistance."
                    .to_string(),
                url: Some(
                    "https://blogs.microsoft.com/blog/2024/12/13/copilot-ai-agents-update"
                        .to_string(),
                ),
                date: Some("2024-12-13".to_string()),
                source: Some("Microsoft Blog".to_string()),
            },
        ])
    }
}
