//! Shared utility functions for output formatting

/// Bullet glyphs by depth; anything deeper than the last reuses it.
pub const BULLETS: [&str; 3] = ["*", "o", "-"];

/// Bullet glyph for an entry at `depth` (1-based).
pub fn bullet(depth: usize) -> &'static str {
    BULLETS[depth.saturating_sub(1).min(BULLETS.len() - 1)]
}

/// Repeat one indentation unit `depth` times.
pub fn indent(unit: &str, depth: usize) -> String {
    unit.repeat(depth)
}

/// Escape text for embedding in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
