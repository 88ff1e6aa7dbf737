//! Tutorcast Script Model
//!
//! Defines the data contracts shared by the parser and its consumers:
//! - **Timecode:** `M:SS` / `H:M:SS` offsets and their frame conversion
//! - **Annotation:** Typed overlay records, one payload shape per kind
//! - **Outline:** Chapters, assets, talking points, and raw annotation lines
//!
//! Coordinates are integer pixels in the recording's own resolution; the
//! renderer owns any scaling.

pub mod annotation;
pub mod outline;
pub mod timecode;

pub use annotation::*;
pub use outline::*;
pub use timecode::*;
