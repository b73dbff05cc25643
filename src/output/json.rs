//! JSON and HTML printing of a `RenderResult`

use std::io::{self, Write};

use crate::error::Result;
use crate::render::RenderResult;

/// Print both renderings as a single-line JSON object to stdout.
pub fn print_json(result: &RenderResult) -> Result<()> {
    let stdout = io::stdout();
    write_json(&mut stdout.lock(), result)
}

/// Write both renderings as a single-line JSON object followed by a newline.
pub fn write_json<W: Write>(out: &mut W, result: &RenderResult) -> Result<()> {
    let json = serde_json::to_string(result)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Print only the HTML rendering to stdout.
pub fn print_html(result: &RenderResult) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", result.html)?;
    Ok(())
}
