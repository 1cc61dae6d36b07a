/// Presentation settings for a standalone SVG document.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentStyle {
    /// Pixel width written to the root `width` attribute.
    pub width: u32,
    /// Pixel height written to the root `height` attribute.
    pub height: u32,
    /// Background fill; `None` leaves the document transparent.
    pub background: Option<String>,
    /// Fill colour per layer, cycled when there are more layers than colours.
    pub fills: Vec<String>,
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: None,
            fills: vec![
                "#1e3a8a".to_owned(),
                "#2563eb".to_owned(),
                "#60a5fa".to_owned(),
            ],
        }
    }
}

/// Wrap wave path data into an SVG document over the unit square.
///
/// The view box is `0 0 1 1` and stretched to the document size, so the
/// waves fill any aspect ratio. Layers are drawn in order; later paths
/// paint over earlier ones.
pub fn svg_document<S: AsRef<str>>(paths: &[S], style: &DocumentStyle) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 1 1" preserveAspectRatio="none">"#,
        style.width, style.height
    );
    if let Some(bg) = &style.background {
        out.push_str(&format!(
            r#"<rect x="0" y="0" width="1" height="1" fill="{}"/>"#,
            escape_attr(bg)
        ));
    }
    for (i, d) in paths.iter().enumerate() {
        let fill = if style.fills.is_empty() {
            "black"
        } else {
            style.fills[i % style.fills.len()].as_str()
        };
        out.push_str(&format!(
            r#"<path fill="{}" d="{}"/>"#,
            escape_attr(fill),
            escape_attr(d.as_ref())
        ));
    }
    out.push_str("</svg>");
    out
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

#[cfg(test)]
#[path = "../../tests/unit/render/document.rs"]
mod tests;
