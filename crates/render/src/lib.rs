//! # summercal-render
//!
//! Builds each requested month as a [`MonthGrid`] tree (month, week rows,
//! seven cells per row), serializes it to an HTML `<table>`, and wraps the
//! tables in a styled, self-contained document.
//!
//! ## Quick Start
//!
//! ```ignore
//! use summercal_calendar::MonthSpec;
//! use summercal_highlight::{Palette, assign_colors, expand};
//! use summercal_render::{DocumentOptions, compose};
//!
//! let highlights = expand(&events);
//! let colors = assign_colors(&events, &Palette::default());
//! let months = [MonthSpec::new(2025, 6)?, MonthSpec::new(2025, 7)?];
//! let html = compose(&months, &highlights, &colors, &DocumentOptions::default())?;
//! ```

mod document;
mod error;
mod grid;
mod html;

pub use document::{DEFAULT_TITLE, DocumentOptions, compose};
pub use error::RenderError;
pub use grid::{Cell, MonthGrid, WeekRow, build_month};
pub use html::{escape_html, render_month, write_month};
