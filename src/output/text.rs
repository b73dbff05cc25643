//! Plain-text output formatting
//!
//! This module provides `TextFormatter` which renders a `TreeListing` as an
//! indented outline, either as a string or printed to stdout with colors.

use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{TreeEntry, TreeListing};

use super::ListingFormatter;
use super::config::OutputConfig;
use super::utils::{bullet, indent};

const INDENT_UNIT: &str = "    ";

/// Formatter for the plain-text outline.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    fn format_entry(entry: &TreeEntry) -> String {
        let depth = entry.depth();
        let prefix = format!("{}{} ", indent(INDENT_UNIT, depth), bullet(depth));
        match entry {
            TreeEntry::Dir { name, .. } => format!("{prefix}{name}:"),
            TreeEntry::File { name, .. } => format!("{prefix}{name}"),
        }
    }

    pub fn print(&self, listing: &TreeListing) -> io::Result<()> {
        // The caller has already resolved auto-detection
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_listing(&mut stdout, listing)
    }

    /// Write the outline with colors. Without color support the bytes match
    /// `format` followed by a newline.
    pub fn write_listing<W: WriteColor>(
        &self,
        out: &mut W,
        listing: &TreeListing,
    ) -> io::Result<()> {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}:", listing.header())?;
        out.reset()?;
        writeln!(out)?;

        for entry in &listing.entries {
            let depth = entry.depth();
            write!(out, "{}", indent(INDENT_UNIT, depth))?;

            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(out, "{}", bullet(depth))?;
            out.reset()?;
            write!(out, " ")?;

            match entry {
                TreeEntry::Dir { name, .. } => {
                    out.set_color(
                        ColorSpec::new()
                            .set_fg(Some(Color::Blue))
                            .set_bold(true)
                            .set_underline(depth <= 2),
                    )?;
                    write!(out, "{}:", name)?;
                }
                TreeEntry::File { name, .. } => {
                    out.set_color(ColorSpec::new().set_italic(true))?;
                    write!(out, "{}", name)?;
                }
            }
            out.reset()?;
            writeln!(out)?;
        }
        Ok(())
    }
}

impl ListingFormatter for TextFormatter {
    fn format(&self, listing: &TreeListing) -> String {
        let mut lines = Vec::with_capacity(listing.entries.len() + 1);
        lines.push(format!("{}:", listing.header()));
        lines.extend(listing.entries.iter().map(Self::format_entry));
        lines.join("\n")
    }
}
