//! The triangle shape: style parsing, geometry and rendering
//!
//! A [`TriangleShape`] is built once from declarative attributes and then
//! rendered any number of times into whatever bounding box the host hands
//! it. Rendering is a pure function of the style and the box.

use crate::attributes::{keys, AttributeError, AttributeSet};
use crate::canvas::{Canvas, Paint};
use crate::color::Color;
use crate::geometry::{self, ClosedPolygon, Orientation, Segment};
use crate::path::Path;
use crate::theme::Theme;

/// Color used for strokes when no stroke color was given
///
/// The attribute sentinel for "unset" is the packed integer -1, which
/// paints as opaque white.
pub const UNSET_STROKE_COLOR: Color = Color(0xFFFFFFFF);

/// Immutable styling for a triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub fill_color: Color,
    /// `None` when the attribute was not set
    pub stroke_color: Option<Color>,
    /// Device pixels; zero disables the stroke
    pub stroke_width: f64,
    /// Stroke only the two slanted edges
    pub two_sided_stroke: bool,
    pub orientation: Orientation,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            stroke_color: None,
            stroke_width: 0.0,
            two_sided_stroke: false,
            orientation: Orientation::Vertical,
        }
    }
}

impl StyleConfig {
    /// Parse the five triangle options, each defaulted independently
    ///
    /// The typed attribute handle is released on every path out of this
    /// function, including coercion errors.
    pub fn from_attributes(
        theme: &Theme,
        attrs: &AttributeSet,
        def_style: Option<&str>,
    ) -> Result<Self, AttributeError> {
        for (key, _) in attrs.iter() {
            if key != keys::STYLE && !keys::TRIANGLE.contains(&key) {
                log::debug!("ignoring attribute '{}'", key);
            }
        }

        let a = theme.obtain_styled_attributes(attrs, def_style)?;

        let fill_color = a.get_color(keys::TRIANGLE_COLOR, Color::BLACK)?;
        let stroke_color = a.get_optional_color(keys::TRIANGLE_STROKE_COLOR)?;
        let stroke_width = a.get_dimension_pixel_offset(keys::TRIANGLE_STROKE_WIDTH, 0)?;
        let two_sided_stroke = a.get_boolean(keys::TRIANGLE_TWO_SIDED_STROKE, false)?;
        let orientation = a.get_enum(keys::TRIANGLE_ORIENTATION, Orientation::ATTR_VALUES, 1)?;

        a.recycle();

        let style = Self {
            fill_color,
            stroke_color,
            stroke_width: stroke_width.max(0) as f64,
            two_sided_stroke,
            orientation: Orientation::from_attr_value(orientation).unwrap_or_default(),
        };
        log::debug!("resolved triangle style: {:?}", style);
        Ok(style)
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn with_two_sided_stroke(mut self, two_sided: bool) -> Self {
        self.two_sided_stroke = two_sided;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn has_stroke(&self) -> bool {
        self.stroke_width > 0.0
    }

    /// The stroke color actually painted
    pub fn effective_stroke_color(&self) -> Color {
        self.stroke_color.unwrap_or(UNSET_STROKE_COLOR)
    }
}

/// A triangle pointing up or right, with optional border
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleShape {
    style: StyleConfig,
}

impl TriangleShape {
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Build from declarative attributes resolved against `theme`
    pub fn from_attributes(
        theme: &Theme,
        attrs: &AttributeSet,
        def_style: Option<&str>,
    ) -> Result<Self, AttributeError> {
        StyleConfig::from_attributes(theme, attrs, def_style).map(Self::new)
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Closed fill polygon for half-width `w` and half-height `h`
    pub fn compute_fill_path(&self, w: f64, h: f64) -> ClosedPolygon {
        geometry::fill_polygon(self.style.orientation, w, h)
    }

    /// The two slanted edges as independent segments
    pub fn compute_two_sided_stroke_path(&self, w: f64, h: f64) -> [Segment; 2] {
        geometry::two_sided_segments(self.style.orientation, w, h)
    }

    /// The outline to stroke, or `None` when the stroke is disabled
    pub fn stroke_path(&self, w: f64, h: f64) -> Option<Path> {
        if !self.style.has_stroke() {
            return None;
        }
        let path = if self.style.two_sided_stroke {
            Path::from_segments(&self.compute_two_sided_stroke_path(w, h))
        } else {
            self.compute_fill_path(w, h).to_path()
        };
        Some(path)
    }

    /// Draw the triangle into a `width` x `height` box
    ///
    /// The fill is anti-aliased; the stroke is not. Zero or negative
    /// extents draw a degenerate, empty-looking path.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, width: f64, height: f64) {
        let (w, h) = geometry::half_extents(width, height);

        let fill_path = self.compute_fill_path(w, h).to_path();
        let fill_paint = Paint::fill(self.style.fill_color).with_anti_alias(true);
        log::trace!("fill {}", fill_path.to_svg_d());
        canvas.draw_path(&fill_path, &fill_paint);

        if let Some(stroke_path) = self.stroke_path(w, h) {
            let stroke_paint =
                Paint::stroke(self.style.effective_stroke_color(), self.style.stroke_width);
            log::trace!("stroke {}", stroke_path.to_svg_d());
            canvas.draw_path(&stroke_path, &stroke_paint);
        }
    }
}
