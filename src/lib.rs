//! Tooltip Triangle - a styled triangle view for tooltip pointers
//!
//! This library parses declarative view attributes, resolves them against a
//! theme, and draws a triangle (▲ or ▶) with an optional full or two-sided
//! border onto any [`Canvas`].
//!
//! # Example
//!
//! ```rust
//! use tooltip_triangle::render;
//!
//! let svg = render("triangle [triangleColor: red]").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("#ff0000"));
//! ```

pub mod attributes;
pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod parser;
pub mod path;
pub mod renderer;
pub mod shape;
pub mod theme;

pub use attributes::{AttributeError, AttributeSet, TypedAttributes};
pub use canvas::{Canvas, DrawCommand, Paint, PaintStyle, RecordingCanvas};
pub use color::Color;
pub use error::ParseError;
pub use geometry::{ClosedPolygon, Orientation, Point, Segment};
pub use parser::{parse, Document, ViewDecl};
pub use path::Path;
pub use renderer::{SvgCanvas, SvgConfig};
pub use shape::{StyleConfig, TriangleShape};
pub use theme::{Theme, ThemeError};

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// Error while resolving attributes
    #[error("attribute error: {0}")]
    Attribute(#[from] AttributeError),

    /// The document declares no triangle
    #[error("document contains no triangle declaration")]
    NoTriangle,

    /// The requested triangle is not declared
    #[error("no triangle named '{0}'")]
    UnknownTriangle(String),
}

impl From<Vec<ParseError>> for RenderError {
    fn from(errors: Vec<ParseError>) -> Self {
        RenderError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Theme for style and color resolution
    pub theme: Theme,
    /// Bounding box width in device pixels
    pub width: f64,
    /// Bounding box height in device pixels
    pub height: f64,
    /// Style the view falls back on for attributes it does not set
    pub fallback_style: Option<String>,
    /// Name of the declaration to render; the first one when unset
    pub target: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            svg: SvgConfig::default(),
            theme: Theme::default(),
            width: 100.0,
            height: 100.0,
            fallback_style: None,
            target: None,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the bounding box
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the fallback style
    pub fn with_fallback_style(mut self, style: impl Into<String>) -> Self {
        self.fallback_style = Some(style.into());
        self
    }

    /// Render the declaration with this name
    pub fn with_target(mut self, name: impl Into<String>) -> Self {
        self.target = Some(name.into());
        self
    }
}

/// Pick the declaration to render
pub fn select_view<'d>(doc: &'d Document, target: Option<&str>) -> Result<&'d ViewDecl, RenderError> {
    match target {
        Some(name) => doc
            .find(name)
            .ok_or_else(|| RenderError::UnknownTriangle(name.to_string())),
        None => doc
            .views
            .first()
            .map(|v| &v.node)
            .ok_or(RenderError::NoTriangle),
    }
}

/// Construct the shape for a declaration using the configured theme
pub fn build_shape(decl: &ViewDecl, config: &RenderConfig) -> Result<TriangleShape, RenderError> {
    let attrs = AttributeSet::from_decl(decl);
    let shape =
        TriangleShape::from_attributes(&config.theme, &attrs, config.fallback_style.as_deref())?;
    Ok(shape)
}

/// Render an attribute document to SVG with default configuration
///
/// # Example
///
/// ```rust
/// use tooltip_triangle::render;
///
/// let svg = render(r#"
///     triangle pointer [
///         triangleOrientation: horizontal,
///         triangleStrokeColor: red,
///         triangleStrokeWidth: 4,
///         triangleTwoSidedStroke: true,
///     ]
/// "#).unwrap();
///
/// assert!(svg.contains(r#"id="pointer""#));
/// assert!(svg.contains("M100 0 L0 50 M0 50 L100 100"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render an attribute document to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use tooltip_triangle::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_size(24.0, 12.0)
///     .with_svg(SvgConfig::default().with_viewbox_padding(1.0));
///
/// let svg = render_with_config("triangle", config).unwrap();
/// assert!(svg.contains(r#"viewBox="-1 -1 26 14""#));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    // Parse the source
    let doc = parse(source)?;

    // Resolve attributes into a shape
    let decl = select_view(&doc, config.target.as_deref())?;
    let shape = build_shape(decl, &config)?;

    // Draw into an SVG surface sized to the bounding box
    let mut canvas = SvgCanvas::new(config.svg.clone(), config.width, config.height);
    if let Some(name) = &decl.name {
        canvas = canvas.with_id(name.node.as_str());
    }
    shape.render(&mut canvas, config.width, config.height);

    Ok(canvas.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_triangle() {
        let svg = render("triangle").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r#"d="M0 100 L50 0 L100 100 Z""#));
        assert!(svg.contains(r##"fill="#000000""##));
        assert!(!svg.contains("tri-stroke"));
    }

    #[test]
    fn test_render_selects_named_view() {
        let source = "triangle a [triangleColor: red] triangle b [triangleColor: blue]";
        let svg = render_with_config(source, RenderConfig::new().with_target("b")).unwrap();
        assert!(svg.contains(r#"id="b""#));
        assert!(svg.contains(r##"fill="#0000ff""##));
    }

    #[test]
    fn test_render_unknown_target() {
        let err = render_with_config("triangle a", RenderConfig::new().with_target("z"))
            .unwrap_err();
        assert!(matches!(err, RenderError::UnknownTriangle(ref n) if n == "z"));
    }

    #[test]
    fn test_render_empty_document() {
        let err = render("// nothing here").unwrap_err();
        assert!(matches!(err, RenderError::NoTriangle));
    }

    #[test]
    fn test_render_parse_error() {
        let err = render("triangle [triangleColor red]").unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
        assert!(err.to_string().starts_with("parse errors:"));
    }

    #[test]
    fn test_render_attribute_error() {
        let err = render("triangle [triangleTwoSidedStroke: 4dp]").unwrap_err();
        assert!(matches!(err, RenderError::Attribute(_)));
    }

    #[test]
    fn test_fallback_style() {
        let theme = Theme::from_str(
            r##"
[styles.tooltipPointer]
triangleColor = "#123456"
"##,
        )
        .unwrap();
        let config = RenderConfig::new()
            .with_theme(theme)
            .with_fallback_style("tooltipPointer");
        let svg = render_with_config("triangle", config).unwrap();
        assert!(svg.contains(r##"fill="#123456""##));
    }
}
