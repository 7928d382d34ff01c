//! Rendering of converted sections to JSON and plain text.

mod json;
mod stats;
mod text;

pub use json::{to_json, JsonFormat};
pub use stats::SectionStats;
pub use text::to_text;
