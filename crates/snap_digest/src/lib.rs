pub mod extract;
pub mod rules;
pub mod trim;

pub use extract::{extract, fallback_record};
pub use trim::{trim, TrimPolicy};

pub mod prelude {
    pub use super::{extract, fallback_record, trim, TrimPolicy};
    pub use snap_core::{ContentRecord, RawStory, Result};
}
