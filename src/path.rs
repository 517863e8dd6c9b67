//! Vector paths handed to a canvas

use crate::geometry::{Point, Segment};

/// A segment of a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new sub-path
    MoveTo(Point),
    /// Straight line from the current point
    LineTo(Point),
    /// Close the current sub-path back to its start
    Close,
}

/// A sequence of sub-paths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.segments.push(PathSegment::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.segments.push(PathSegment::LineTo(p));
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    /// Build a path of independent, unjoined line segments
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut path = Self::new();
        for seg in segments {
            path.move_to(seg.start);
            path.line_to(seg.end);
        }
        path
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of sub-paths (one per `MoveTo`)
    pub fn subpath_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveTo(_)))
            .count()
    }

    /// Every drawn line, including the ones produced by `Close`
    pub fn lines(&self) -> Vec<Segment> {
        let mut lines = Vec::new();
        let mut start: Option<Point> = None;
        let mut current: Option<Point> = None;

        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    start = Some(p);
                    current = Some(p);
                }
                PathSegment::LineTo(p) => {
                    if let Some(from) = current {
                        lines.push(Segment::new(from, p));
                    }
                    current = Some(p);
                }
                PathSegment::Close => {
                    if let (Some(from), Some(to)) = (current, start) {
                        if from != to {
                            lines.push(Segment::new(from, to));
                        }
                    }
                    current = start;
                }
            }
        }

        lines
    }

    /// Convert to an SVG path `d` attribute string
    pub fn to_svg_d(&self) -> String {
        let mut parts = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            match seg {
                PathSegment::MoveTo(p) => parts.push(format!("M{} {}", p.x, p.y)),
                PathSegment::LineTo(p) => parts.push(format!("L{} {}", p.x, p.y)),
                PathSegment::Close => parts.push("Z".to_string()),
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg_d() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 100.0));
        path.line_to(Point::new(50.0, 0.0));
        path.line_to(Point::new(100.0, 100.0));
        path.close();
        assert_eq!(path.to_svg_d(), "M0 100 L50 0 L100 100 Z");
    }

    #[test]
    fn test_fractional_coordinates() {
        let mut path = Path::new();
        path.move_to(Point::new(0.5, 2.25));
        assert_eq!(path.to_svg_d(), "M0.5 2.25");
    }

    #[test]
    fn test_from_segments_is_disjoint() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(5.0, 0.0);
        let c = Point::new(10.0, 10.0);
        let path = Path::from_segments(&[Segment::new(a, b), Segment::new(b, c)]);
        assert_eq!(path.subpath_count(), 2);
        assert_eq!(path.lines(), vec![Segment::new(a, b), Segment::new(b, c)]);
    }

    #[test]
    fn test_close_adds_closing_line() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let mut path = Path::new();
        path.move_to(a);
        path.line_to(b);
        path.close();
        assert_eq!(path.lines(), vec![Segment::new(a, b), Segment::new(b, a)]);
    }

    #[test]
    fn test_empty() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.to_svg_d(), "");
    }
}
