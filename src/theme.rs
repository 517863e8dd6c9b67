//! Themes: display density, named colors and fallback styles
//!
//! A theme plays the part of the host's styling system. Styles are named
//! bundles of attribute values that a declaration falls back on, either
//! through its own `style` attribute or through the fallback scope the
//! view is constructed with.

use std::cell::Cell;
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::attributes::{AttributeError, AttributeSet, TypedAttributes};
use crate::color::{Color, ColorError};
use crate::parser::ast::AttrValue;
use crate::parser::parse_value;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid theme color '{name}': {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: ColorError,
    },
    #[error("Invalid value for '{key}' in style '{style}': {message}")]
    InvalidStyleValue {
        style: String,
        key: String,
        message: String,
    },
    #[error("Display density must be a positive number, got {0}")]
    InvalidDensity(f64),
}

/// A theme resolving colors and styles for attribute lookup
#[derive(Debug)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Device pixels per density-independent pixel
    pub density: f64,
    /// Color mappings: name -> color
    pub colors: HashMap<String, Color>,
    /// Style mappings: name -> attribute values
    pub styles: HashMap<String, AttributeSet>,
    open_handles: Cell<usize>,
}

/// TOML structure for deserializing themes
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    display: Option<TomlDisplay>,
    #[serde(default)]
    colors: HashMap<String, String>,
    #[serde(default)]
    styles: HashMap<String, HashMap<String, toml::Value>>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlDisplay {
    density: Option<f64>,
}

impl Theme {
    /// Load theme from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load theme from TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;

        let density = parsed.display.and_then(|d| d.density).unwrap_or(1.0);
        if !(density.is_finite() && density > 0.0) {
            return Err(ThemeError::InvalidDensity(density));
        }

        let mut colors = HashMap::new();
        for (name, value) in parsed.colors {
            let color = value
                .parse::<Color>()
                .map_err(|source| ThemeError::InvalidColor {
                    name: name.clone(),
                    source,
                })?;
            colors.insert(name, color);
        }

        let mut styles = HashMap::new();
        for (style, entries) in parsed.styles {
            let mut set = AttributeSet::new();
            for (key, value) in entries {
                let value = toml_to_attr(value).map_err(|message| {
                    ThemeError::InvalidStyleValue {
                        style: style.clone(),
                        key: key.clone(),
                        message,
                    }
                })?;
                set.insert(key, value);
            }
            styles.insert(style, set);
        }

        log::debug!(
            "loaded theme with {} colors and {} styles at density {}",
            colors.len(),
            styles.len(),
            density
        );

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            density,
            colors,
            styles,
            open_handles: Cell::new(0),
        })
    }

    /// Override the display density
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Resolve a theme color by name
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    pub fn style(&self, name: &str) -> Option<&AttributeSet> {
        self.styles.get(name)
    }

    /// Resolve the attributes of a declaration against this theme
    ///
    /// Precedence, highest first: explicit attributes, the style named by
    /// the `style` attribute, the fallback style `def_style`. Keys missing
    /// from all three are left to the getters' defaults.
    pub fn obtain_styled_attributes(
        &self,
        attrs: &AttributeSet,
        def_style: Option<&str>,
    ) -> Result<TypedAttributes<'_>, AttributeError> {
        let mut values: HashMap<String, AttrValue> = HashMap::new();

        for name in def_style.into_iter().chain(attrs.style_name()) {
            let style = self
                .style(name)
                .ok_or_else(|| AttributeError::UnknownStyle(name.to_string()))?;
            for (key, value) in style.iter() {
                values.insert(key.to_string(), value.clone());
            }
        }

        for (key, value) in attrs.iter() {
            values.insert(key.to_string(), value.clone());
        }

        log::debug!(
            "obtained styled attributes: {} values (fallback style: {:?}, style: {:?})",
            values.len(),
            def_style,
            attrs.style_name()
        );

        Ok(TypedAttributes::new(self, values))
    }

    /// Number of attribute handles obtained from this theme and not yet released
    pub fn open_handles(&self) -> usize {
        self.open_handles.get()
    }

    pub(crate) fn acquire_handle(&self) {
        self.open_handles.set(self.open_handles.get() + 1);
    }

    pub(crate) fn release_handle(&self) {
        self.open_handles.set(self.open_handles.get().saturating_sub(1));
    }
}

fn toml_to_attr(value: toml::Value) -> Result<AttrValue, String> {
    match value {
        toml::Value::String(s) => parse_value(&s).map_err(|errs| {
            errs.iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        }),
        toml::Value::Boolean(b) => Ok(AttrValue::Boolean(b)),
        toml::Value::Integer(i) => Ok(AttrValue::Number(i as f64)),
        toml::Value::Float(f) => Ok(AttrValue::Number(f)),
        other => Err(format!("unsupported value type '{}'", other.type_str())),
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            density: 1.0,
            colors: HashMap::new(),
            styles: HashMap::new(),
            open_handles: Cell::new(0),
        }
    }
}

impl Clone for Theme {
    /// Clones start with no open handles; handles borrow the original
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            description: self.description.clone(),
            density: self.density,
            colors: self.colors.clone(),
            styles: self.styles.clone(),
            open_handles: Cell::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::keys;
    use crate::parser::ast::{Dimension, Identifier, Unit};

    const TOOLTIP_THEME: &str = r##"
[metadata]
name = "Tooltip"
description = "Dark tooltips"

[display]
density = 2.0

[colors]
tooltip-bg = "#333333"
tooltip-border = "#80ffffff"

[styles.tooltipPointer]
triangleColor = "tooltip-bg"
triangleStrokeColor = "tooltip-border"
triangleStrokeWidth = "1dp"
triangleTwoSidedStroke = true

[styles.sidePointer]
triangleOrientation = 2
"##;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.density, 1.0);
        assert!(theme.colors.is_empty());
        assert!(theme.styles.is_empty());
    }

    #[test]
    fn test_parse_theme() {
        let theme = Theme::from_str(TOOLTIP_THEME).expect("Should parse");
        assert_eq!(theme.name, Some("Tooltip".to_string()));
        assert_eq!(theme.description, Some("Dark tooltips".to_string()));
        assert_eq!(theme.density, 2.0);
        assert_eq!(theme.color("tooltip-bg"), Some(Color(0xFF333333)));
        assert_eq!(theme.color("tooltip-border"), Some(Color(0x80FFFFFF)));

        let style = theme.style("tooltipPointer").expect("style exists");
        assert_eq!(
            style.get(keys::TRIANGLE_STROKE_WIDTH),
            Some(&AttrValue::Dimension(Dimension {
                value: 1.0,
                unit: Unit::Dp
            }))
        );
        assert_eq!(
            style.get(keys::TRIANGLE_TWO_SIDED_STROKE),
            Some(&AttrValue::Boolean(true))
        );
        assert_eq!(
            theme.style("sidePointer").unwrap().get(keys::TRIANGLE_ORIENTATION),
            Some(&AttrValue::Number(2.0))
        );
    }

    #[test]
    fn test_resolution_precedence() {
        let theme = Theme::from_str(
            r##"
[styles.base]
triangleColor = "red"
triangleStrokeWidth = "2px"
triangleOrientation = "horizontal"

[styles.override]
triangleColor = "blue"
triangleStrokeWidth = "3px"
"##,
        )
        .unwrap();

        let attrs = AttributeSet::new()
            .with(keys::STYLE, AttrValue::Identifier(Identifier::new("override")))
            .with(keys::TRIANGLE_COLOR, AttrValue::Color("#00ff00".to_string()));
        let a = theme.obtain_styled_attributes(&attrs, Some("base")).unwrap();

        // explicit beats the style attribute
        assert_eq!(
            a.get_color(keys::TRIANGLE_COLOR, Color::BLACK),
            Ok(Color(0xFF00FF00))
        );
        // style attribute beats the fallback style
        assert_eq!(a.get_dimension_pixel_offset(keys::TRIANGLE_STROKE_WIDTH, 0), Ok(3));
        // fallback style fills the rest
        assert_eq!(
            a.get_enum(keys::TRIANGLE_ORIENTATION, &[("vertical", 1), ("horizontal", 2)], 1),
            Ok(2)
        );
    }

    #[test]
    fn test_unknown_style() {
        let theme = Theme::default();
        let err = theme
            .obtain_styled_attributes(&AttributeSet::new(), Some("missing"))
            .unwrap_err();
        assert_eq!(err, AttributeError::UnknownStyle("missing".to_string()));
        assert_eq!(theme.open_handles(), 0);
    }

    #[test]
    fn test_invalid_density() {
        let result = Theme::from_str("[display]\ndensity = 0.0\n");
        assert!(matches!(result, Err(ThemeError::InvalidDensity(_))));
    }

    #[test]
    fn test_invalid_color() {
        let result = Theme::from_str("[colors]\nbg = \"#12\"\n");
        assert!(matches!(result, Err(ThemeError::InvalidColor { .. })));
    }

    #[test]
    fn test_invalid_style_value() {
        let result = Theme::from_str("[styles.bad]\ntriangleColor = \"[\"\n");
        assert!(matches!(
            result,
            Err(ThemeError::InvalidStyleValue { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = Theme::from_str(invalid);
        assert!(result.is_err());
    }

    #[test]
    fn test_clone_resets_handles() {
        let theme = Theme::default();
        let _a = theme
            .obtain_styled_attributes(&AttributeSet::new(), None)
            .unwrap();
        let copy = theme.clone();
        assert_eq!(theme.open_handles(), 1);
        assert_eq!(copy.open_handles(), 0);
    }
}
