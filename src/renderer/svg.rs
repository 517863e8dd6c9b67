//! SVG generation from draw calls

use crate::canvas::{Canvas, Paint, PaintStyle};
use crate::path::Path;

use super::SvgConfig;

/// A canvas that builds an SVG document
pub struct SvgCanvas {
    config: SvgConfig,
    width: f64,
    height: f64,
    id: Option<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgCanvas {
    /// Create a canvas covering a `width` x `height` box
    pub fn new(config: SvgConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            id: None,
            elements: vec![],
            indent: 1,
        }
    }

    /// Set the `id` attribute of the root element
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Number of draw calls received so far
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Build the final SVG string
    pub fn finish(self) -> String {
        let padding = self.config.viewbox_padding;
        // avoid "-0" in the viewBox
        let vb_x = 0.0 - padding;
        let vb_y = 0.0 - padding;
        let vb_w = self.width + 2.0 * padding;
        let vb_h = self.height + 2.0 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let id_attr = self
            .id
            .as_deref()
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"{} width="{}" height="{}" viewBox="{} {} {} {}">"#,
            id_attr, vb_w, vb_h, vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

impl Canvas for SvgCanvas {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let class = match paint.style {
            PaintStyle::Fill => "fill",
            PaintStyle::Stroke => "stroke",
        };
        let class_attr = format!(r#" class="{}{}""#, self.prefix(), class);

        self.elements.push(format!(
            r#"{}<path{} d="{}"{}/>"#,
            self.indent_str(),
            class_attr,
            path.to_svg_d(),
            format_paint(paint)
        ));
    }
}

/// Paint attributes for a `<path>` element
fn format_paint(paint: &Paint) -> String {
    let mut parts = vec![];
    let color = paint.color.to_svg_hex();
    match paint.style {
        PaintStyle::Fill => {
            parts.push(format!(r#" fill="{}""#, color));
            if !paint.color.is_opaque() {
                parts.push(format!(
                    r#" fill-opacity="{}""#,
                    format_opacity(paint.color.opacity())
                ));
            }
            parts.push(r#" stroke="none""#.to_string());
        }
        PaintStyle::Stroke => {
            parts.push(r#" fill="none""#.to_string());
            parts.push(format!(r#" stroke="{}""#, color));
            if !paint.color.is_opaque() {
                parts.push(format!(
                    r#" stroke-opacity="{}""#,
                    format_opacity(paint.color.opacity())
                ));
            }
            parts.push(format!(r#" stroke-width="{}""#, paint.stroke_width));
        }
    }
    if !paint.anti_alias {
        parts.push(r#" shape-rendering="crispEdges""#.to_string());
    }
    parts.join("")
}

/// Opacity with at most three decimals and no trailing zeros
fn format_opacity(opacity: f64) -> String {
    let s = format!("{:.3}", opacity);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::Point;

    fn triangle_path() -> Path {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 10.0));
        path.line_to(Point::new(5.0, 0.0));
        path.line_to(Point::new(10.0, 10.0));
        path.close();
        path
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_format_opacity() {
        assert_eq!(format_opacity(1.0), "1");
        assert_eq!(format_opacity(0.5), "0.5");
        assert_eq!(format_opacity(128.0 / 255.0), "0.502");
        assert_eq!(format_opacity(0.0), "0");
    }

    #[test]
    fn test_fill_paint() {
        let attrs = format_paint(&Paint::fill(Color::BLACK).with_anti_alias(true));
        assert_eq!(attrs, r##" fill="#000000" stroke="none""##);
    }

    #[test]
    fn test_stroke_paint() {
        let attrs = format_paint(&Paint::stroke(Color(0x80FF0000), 4.0));
        assert!(attrs.contains(r#"fill="none""#));
        assert!(attrs.contains(r##"stroke="#ff0000""##));
        assert!(attrs.contains(r#"stroke-opacity="0.502""#));
        assert!(attrs.contains(r#"stroke-width="4""#));
        assert!(attrs.contains(r#"shape-rendering="crispEdges""#));
    }

    #[test]
    fn test_empty_document() {
        let svg = SvgCanvas::new(SvgConfig::default(), 20.0, 10.0).finish();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 20 10""#));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_draw_path_element() {
        let mut canvas = SvgCanvas::new(SvgConfig::default(), 10.0, 10.0).with_id("pointer");
        canvas.draw_path(&triangle_path(), &Paint::fill(Color::RED).with_anti_alias(true));
        assert_eq!(canvas.element_count(), 1);

        let svg = canvas.finish();
        assert!(svg.contains(r#"id="pointer""#));
        assert!(svg.contains(r#"class="tri-fill""#));
        assert!(svg.contains(r#"d="M0 10 L5 0 L10 10 Z""#));
    }

    #[test]
    fn test_padding_and_compact_output() {
        let config = SvgConfig::new()
            .with_viewbox_padding(2.0)
            .with_standalone(false)
            .with_pretty_print(false)
            .without_class_prefix();
        let mut canvas = SvgCanvas::new(config, 10.0, 10.0);
        canvas.draw_path(&triangle_path(), &Paint::stroke(Color::BLACK, 1.0));
        let svg = canvas.finish();

        assert!(!svg.contains('\n'));
        assert!(!svg.contains("<?xml"));
        assert!(svg.contains(r#"viewBox="-2 -2 14 14""#));
        assert!(svg.contains(r#"width="14""#));
        assert!(svg.contains(r#"class="stroke""#));
    }
}
