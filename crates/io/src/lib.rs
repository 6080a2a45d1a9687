//! # summercal-io
//!
//! Read labeled date ranges from CSV and write the rendered HTML document.
//! Bridges external files into the typed [`Event`](summercal_highlight::Event)
//! values the rest of summercal works with.

mod error;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{ReaderConfig, parse_events, read_events};
pub use writer::{write_document, write_document_to};
