//! HTML output formatting
//!
//! This module provides `HtmlFormatter` which renders a `TreeListing` as a
//! self-contained, inline-styled HTML fragment suitable for pasting into an
//! email or a larger document.

use crate::tree::{TreeEntry, TreeListing};

use super::ListingFormatter;
use super::utils::{bullet, escape_html, indent};

const CONTAINER_STYLE: &str = "font-family: Segoe UI, Arial, sans-serif; font-size: 13px; \
    color: #111827; background: #f8fafc; padding: 12px 14px; border: 1px solid #e2e8f0; \
    border-radius: 10px; line-height: 1.4;";
const HEADER_STYLE: &str =
    "font-weight: 700; text-transform: uppercase; letter-spacing: 0.4px; margin-bottom: 6px;";
const BULLET_STYLE: &str = "color:#f97316;";
const DIR_HEADING_STYLE: &str = "font-weight: 700; text-decoration: underline;";
const DIR_STYLE: &str = "font-weight: 600;";
const FILE_STYLE: &str = "font-style: italic;";
const INDENT_UNIT: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

/// Directories at this depth or shallower are underlined.
const UNDERLINE_MAX_DEPTH: usize = 2;

/// Formatter for the HTML fragment. One `<div>` per line.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_entry(entry: &TreeEntry) -> String {
        let depth = entry.depth();
        let name = escape_html(entry.name());
        let line_start = format!(
            "{}<span style=\"{}\">{}</span>&nbsp;",
            indent(INDENT_UNIT, depth),
            BULLET_STYLE,
            bullet(depth)
        );

        match entry {
            TreeEntry::Dir { .. } => {
                let style = if depth <= UNDERLINE_MAX_DEPTH {
                    DIR_HEADING_STYLE
                } else {
                    DIR_STYLE
                };
                format!("<div>{line_start}<span style=\"{style}\">{name}:</span></div>")
            }
            TreeEntry::File { .. } => {
                format!("<div>{line_start}<span style=\"{FILE_STYLE}\">{name}</span></div>")
            }
        }
    }
}

impl ListingFormatter for HtmlFormatter {
    fn format(&self, listing: &TreeListing) -> String {
        let mut lines = Vec::with_capacity(listing.entries.len() + 3);
        lines.push(format!("<div style=\"{CONTAINER_STYLE}\">"));
        lines.push(format!(
            "<div style=\"{}\">{}</div>",
            HEADER_STYLE,
            escape_html(&listing.header())
        ));
        lines.extend(listing.entries.iter().map(Self::format_entry));
        lines.push("</div>".to_string());
        lines.join("\n")
    }
}
