//! Tree formatting and display
//!
//! This module provides formatters for outputting a `TreeListing`:
//! - HTML fragment with inline styles
//! - Plain-text outline (optionally colored on a terminal)
//! - JSON object carrying both renderings
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Bullets, indentation, and HTML escaping
//! - `html` - HTML formatter
//! - `text` - Plain-text formatter
//! - `json` - JSON and HTML printing

mod config;
mod html;
mod json;
mod text;
mod utils;

use crate::tree::TreeListing;

// Re-export public types and functions
pub use config::OutputConfig;
pub use html::HtmlFormatter;
pub use json::{print_html, print_json, write_json};
pub use text::TextFormatter;

/// Serializes a walked tree into one output format.
pub trait ListingFormatter {
    fn format(&self, listing: &TreeListing) -> String;
}
