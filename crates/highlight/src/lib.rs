//! # summercal-highlight
//!
//! Turns labeled date ranges into the two lookups the renderer needs: which
//! label covers each day, and which color each label is drawn with.
//!
//! ```mermaid
//! graph LR
//!     E["&[Event]"] -->|"expand()"| H["HighlightMap (Date -> label)"]
//!     E -->|"assign_colors()"| C["ColorMap (label -> color)"]
//!     P["Palette"] --> C
//!     E -->|"find_overlaps()"| O["Vec of Overlap"]
//! ```
//!
//! Overlapping events resolve by input order: the later event's label wins.

mod error;
mod event;
mod expand;
mod palette;

pub use error::EventError;
pub use event::Event;
pub use expand::{HighlightMap, Overlap, expand, find_overlaps};
pub use palette::{ColorMap, DEFAULT_COLORS, Palette, assign_colors};
