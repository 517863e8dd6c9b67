//! Triangle geometry
//!
//! All coordinates are computed from the half extents of the bounding box
//! so the apex, which sits on the midpoint of one side, needs no division.

use crate::path::Path;

/// A 2D point in the view's coordinate system (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which way the triangle points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// ▲
    #[default]
    Vertical,
    /// ▶
    Horizontal,
}

impl Orientation {
    /// Attribute enum values, by name and integer
    pub const ATTR_VALUES: &'static [(&'static str, i64)] = &[("vertical", 1), ("horizontal", 2)];

    pub fn from_attr_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Orientation::Vertical),
            2 => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// True if both segments cover the same edge, in either direction
    pub fn same_edge(&self, other: &Segment) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

/// Three vertices in winding order, implicitly closed back to the first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosedPolygon {
    pub vertices: [Point; 3],
}

impl ClosedPolygon {
    /// The three edges, the last one being the closing edge
    pub fn edges(&self) -> [Segment; 3] {
        let [a, b, c] = self.vertices;
        [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)]
    }

    pub fn to_path(&self) -> Path {
        let [a, b, c] = self.vertices;
        let mut path = Path::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close();
        path
    }
}

/// Half extents of a bounding box, clamped so geometry stays total
pub fn half_extents(width: f64, height: f64) -> (f64, f64) {
    // f64::max returns the non-NaN operand
    (width.max(0.0) / 2.0, height.max(0.0) / 2.0)
}

/// The filled triangle for half-width `w` and half-height `h`
pub fn fill_polygon(orientation: Orientation, w: f64, h: f64) -> ClosedPolygon {
    let vertices = match orientation {
        Orientation::Vertical => [
            Point::new(0.0, 2.0 * h),
            Point::new(w, 0.0),
            Point::new(2.0 * w, 2.0 * h),
        ],
        Orientation::Horizontal => [
            Point::new(2.0 * w, 0.0),
            Point::new(0.0, h),
            Point::new(2.0 * w, 2.0 * h),
        ],
    };
    ClosedPolygon { vertices }
}

/// The two slanted edges, never the base
pub fn two_sided_segments(orientation: Orientation, w: f64, h: f64) -> [Segment; 2] {
    let [first, apex, last] = fill_polygon(orientation, w, h).vertices;
    [Segment::new(first, apex), Segment::new(apex, last)]
}

/// The base edge, opposite the apex
pub fn base_segment(orientation: Orientation, w: f64, h: f64) -> Segment {
    let [first, _, last] = fill_polygon(orientation, w, h).vertices;
    Segment::new(first, last)
}
