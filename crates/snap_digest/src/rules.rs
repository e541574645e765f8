//! Rule tables for the content digest.
//!
//! Each derived field has its own ordered keyword table. Tables are scanned
//! top to bottom against the lower-cased snippet and the first entry with a
//! matching trigger wins, so entry order encodes precedence.

/// One entry in a keyword-trigger table. An entry may carry several trigger
/// substrings; any of them matching selects the entry's sentence.
pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub sentence: &'static str,
}

/// Headline prefixes stripped before the highlight is built. Matched
/// case-insensitively at the start of the title.
pub const TITLE_PREFIXES: &[&str] = &["breaking:", "news:", "new:"];

/// Maximum highlight length in characters; longer titles are cut to
/// [`TITLE_TRUNCATE_AT`] and get an ellipsis appended.
pub const TITLE_MAX_CHARS: usize = 60;
pub const TITLE_TRUNCATE_AT: usize = 57;

/// Ordered literal replacements that swap jargon for plainer wording in the
/// description. Applied in order, all occurrences.
pub const SIMPLIFICATIONS: &[(&str, &str)] = &[
    ("infrastructure", "computer systems"),
    ("multimodal", "multi-format"),
    ("workloads", "tasks"),
    ("enhanced", "improved"),
    ("capabilities", "abilities"),
    ("significantly", "greatly"),
    ("implementations", "uses"),
];

/// Descriptions keep at most this many sentence fragments.
pub const DESCRIPTION_MAX_SENTENCES: usize = 2;

pub const WHAT_RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["gemini"],
        sentence: "Google's advanced AI model for complex reasoning and multimodal tasks",
    },
    KeywordRule {
        triggers: &["chatgpt", "gpt", "language model"],
        sentence: "Advanced AI that understands and generates human-like text",
    },
    KeywordRule {
        triggers: &["copilot"],
        sentence: "AI assistant that helps with work and creative tasks",
    },
    KeywordRule {
        triggers: &["vision", "image"],
        sentence: "AI that can see and understand pictures like humans",
    },
    KeywordRule {
        triggers: &["cloud", "tpu"],
        sentence: "Powerful computer systems for running AI applications",
    },
    KeywordRule {
        triggers: &["memory"],
        sentence: "AI system that remembers past conversations and preferences",
    },
];

pub const WHAT_FALLBACK: &str = "New AI technology that makes computers more helpful";

pub const WHY_MATTERS_RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["reasoning"],
        sentence: "Makes AI better at solving complex problems and thinking logically",
    },
    KeywordRule {
        triggers: &["multimodal"],
        sentence: "Allows AI to work with text, images, audio, and video together",
    },
    KeywordRule {
        triggers: &["performance", "2x"],
        sentence: "Makes AI tools work faster and more reliably",
    },
    KeywordRule {
        triggers: &["personalized", "memory"],
        sentence: "Creates AI that adapts to your specific needs",
    },
    KeywordRule {
        triggers: &["vision", "image"],
        sentence: "Helps AI assist with visual tasks and photo editing",
    },
    KeywordRule {
        triggers: &["infrastructure"],
        sentence: "Improves the foundation that powers AI applications",
    },
    KeywordRule {
        triggers: &["accessible"],
        sentence: "Makes powerful AI tools available to more people",
    },
];

pub const WHY_MATTERS_FALLBACK: &str = "Improves how AI can help with daily tasks and work";

pub const COOL_FACTOR_RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["2x", "twice"],
        sentence: "Delivers twice the performance of previous versions",
    },
    KeywordRule {
        triggers: &["vision"],
        sentence: "Can analyze photos and describe what's happening in them",
    },
    KeywordRule {
        triggers: &["memory"],
        sentence: "Remembers your preferences across different conversations",
    },
    KeywordRule {
        triggers: &["multimodal"],
        sentence: "Works with text, images, and audio all at the same time",
    },
    KeywordRule {
        triggers: &["reasoning"],
        sentence: "Can think through problems step-by-step like a human",
    },
    KeywordRule {
        triggers: &["breakthrough"],
        sentence: "Represents a major leap forward in AI capabilities",
    },
];

pub const COOL_FACTOR_FALLBACK: &str = "Uses technology that wasn't possible just months ago";

pub const TAKEAWAY_RULES: &[KeywordRule] = &[
    KeywordRule {
        triggers: &["gpt", "language"],
        sentence: "Think of this as your AI writing assistant getting a major upgrade. \
                   It can now help with more complex tasks, understand context better, and \
                   provide more accurate responses for work and personal projects.",
    },
    KeywordRule {
        triggers: &["vision"],
        sentence: "This brings us closer to AI that truly sees and understands our world. \
                   Imagine being able to show your AI assistant any image and have it \
                   explain, edit, or help you work with it naturally.",
    },
    KeywordRule {
        triggers: &["memory"],
        sentence: "Your AI assistant is finally getting a good memory. Instead of starting \
                   fresh every time, it will remember your work style, preferences, and \
                   ongoing projects, making it much more helpful.",
    },
    KeywordRule {
        triggers: &["cloud", "infrastructure"],
        sentence: "This is like upgrading the engine that powers your favorite AI apps. It \
                   means faster responses, better reliability, and new AI features that \
                   weren't possible before.",
    },
    KeywordRule {
        triggers: &["google"],
        sentence: "Google is pushing the boundaries of AI with more intelligent systems \
                   that can understand and reason across multiple types of content, making \
                   AI more useful for both personal and professional tasks.",
    },
    KeywordRule {
        triggers: &["openai"],
        sentence: "OpenAI continues to advance conversational AI with more sophisticated \
                   capabilities that bring us closer to AI assistants that truly understand \
                   and help with complex tasks.",
    },
    KeywordRule {
        triggers: &["microsoft"],
        sentence: "Microsoft is integrating AI deeper into everyday work tools, making it \
                   easier for people to automate tasks and be more productive without \
                   technical expertise.",
    },
];

pub const TAKEAWAY_FALLBACK: &str =
    "This advancement makes AI more practical and useful for everyday tasks. Whether \
     you're a student, professional, or just curious about technology, these improvements \
     make AI tools more helpful and easier to use.";
