//! SVG backend for the canvas
//!
//! Draw calls made on an [`SvgCanvas`] become `<path>` elements, in order.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::SvgCanvas;
