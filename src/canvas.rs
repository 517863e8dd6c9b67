//! Drawing surface abstraction
//!
//! A [`Canvas`] receives fully built paths together with the paint to use.
//! Backends decide what "drawing" means: [`RecordingCanvas`] keeps the
//! calls, [`crate::renderer::SvgCanvas`] serializes them.

use crate::color::Color;
use crate::path::Path;

/// How a path is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Paint settings for one draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub style: PaintStyle,
    pub color: Color,
    /// Stroke thickness in device pixels, ignored for fills
    pub stroke_width: f64,
    pub anti_alias: bool,
}

impl Paint {
    /// A fill paint with anti-aliasing off
    pub fn fill(color: Color) -> Self {
        Self {
            style: PaintStyle::Fill,
            color,
            stroke_width: 0.0,
            anti_alias: false,
        }
    }

    /// A stroke paint with anti-aliasing off
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            style: PaintStyle::Stroke,
            color,
            stroke_width: width,
            anti_alias: false,
        }
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

/// A surface that paths can be drawn onto
pub trait Canvas {
    fn draw_path(&mut self, path: &Path, paint: &Paint);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub path: Path,
    pub paint: Paint,
}

/// Canvas that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls made with the given paint style
    pub fn commands_with_style(&self, style: PaintStyle) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.paint.style == style)
    }

    /// Take the recorded commands, leaving the canvas empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand {
            path: path.clone(),
            paint: *paint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn test_recording_canvas_keeps_order() {
        let mut canvas = RecordingCanvas::new();
        let mut path = Path::new();
        path.move_to(Point::new(1.0, 2.0));

        canvas.draw_path(&path, &Paint::fill(Color::BLACK).with_anti_alias(true));
        canvas.draw_path(&path, &Paint::stroke(Color::RED, 3.0));

        assert_eq!(canvas.commands.len(), 2);
        assert_eq!(canvas.commands[0].paint.style, PaintStyle::Fill);
        assert!(canvas.commands[0].paint.anti_alias);
        assert_eq!(canvas.commands_with_style(PaintStyle::Stroke).count(), 1);

        let taken = canvas.take();
        assert_eq!(taken.len(), 2);
        assert!(canvas.commands.is_empty());
    }
}
