//! Rendexpress - render a directory tree as an HTML fragment and a text outline

pub mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{
    HtmlFormatter, ListingFormatter, OutputConfig, TextFormatter, print_html, print_json,
};
pub use render::{RenderResult, render_tree};
pub use tree::{TreeEntry, TreeListing, walk_tree};
