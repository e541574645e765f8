pub mod error;
pub mod types;
pub mod words;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use types::{ContentRecord, RawStory, RenderedOutput};
