//! Single entry point that produces both renderings of a directory

use std::path::Path;

use serde::Serialize;

use crate::output::{HtmlFormatter, ListingFormatter, TextFormatter};
use crate::tree::walk_tree;

/// Both renderings of the same tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderResult {
    pub html: String,
    pub text: String,
}

/// Render the tree rooted at `root` as an HTML fragment and a text outline.
///
/// The directory is read once and both formats are produced from that one
/// listing, so they always agree on order and depth. Unlistable directories
/// render as having no children; this function does not fail.
pub fn render_tree(root: &Path) -> RenderResult {
    let listing = walk_tree(root);
    RenderResult {
        html: HtmlFormatter::new().format(&listing),
        text: TextFormatter::default().format(&listing),
    }
}
