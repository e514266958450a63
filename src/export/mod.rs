mod document;
mod svg;

pub use document::render_document;
pub use svg::render_svg;

/// Depth-indexed node tint, shared by the viewer, the SVG snapshot, and the
/// minimap.
pub(crate) const DEPTH_COLORS: [&str; 5] =
    ["#e3f2fd", "#bbdefb", "#90caf9", "#64b5f6", "#42a5f5"];

pub(crate) fn depth_color(depth: usize) -> &'static str {
    DEPTH_COLORS[depth.min(DEPTH_COLORS.len() - 1)]
}

/// Minimal XML/HTML escaping for text and attribute content.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape("plain.txt"), "plain.txt");
    }

    #[test]
    fn depth_color_saturates_at_the_deepest_tint() {
        assert_eq!(depth_color(0), "#e3f2fd");
        assert_eq!(depth_color(4), "#42a5f5");
        assert_eq!(depth_color(99), "#42a5f5");
    }
}
