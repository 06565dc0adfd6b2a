//! SVG generation for the laser glyph
//!
//! The glyph geometry is a fixed constant authored on a 36x36 grid; only the
//! rendered size, stroke color, and stroke width vary per call.

use crate::config::IconConfig;

/// Path commands for the laser glyph, authored against the 0,0..36,36 viewBox.
/// Never parameterized or computed.
const GLYPH_D: &str = "M8 24H16M15 9 V18L19 23  23 18 V17 L15 17M23 9V18L19 23 19 24 30 24";

/// The fixed internal coordinate grid, independent of the rendered size
const VIEW_BOX: &str = "0 0 36 36";

/// Render the icon as an SVG fragment
///
/// The output is a single `<svg>` element with one stroked, unfilled path.
/// The element is decorative: hidden from assistive technology but tagged
/// with an image role. Identical configs produce byte-identical output.
pub fn render(config: &IconConfig) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" aria-hidden="true" role="img" width="{w}" height="{h}" viewBox="{vb}"><path fill="none" stroke="{stroke}" stroke-width="{sw}" d="{d}"/></svg>"#,
        w = config.size,
        h = config.size,
        vb = VIEW_BOX,
        stroke = escape_attr(&config.color),
        sw = config.stroke_width,
        d = GLYPH_D,
    )
}

/// Render the icon as a standalone SVG document
///
/// Same fragment as [`render`], preceded by an XML declaration so the result
/// can be written directly to a `.svg` file.
pub fn render_document(config: &IconConfig) -> String {
    format!("{}\n{}", r#"<?xml version="1.0" encoding="UTF-8"?>"#, render(config))
}

/// Escape special XML characters for attribute interpolation
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
