//! Declarative attributes and typed access to them
//!
//! An [`AttributeSet`] holds the attributes written on a declaration, as
//! written. Typed values come from a [`TypedAttributes`] handle obtained
//! from a [`Theme`], which merges in the fallback styles and releases
//! itself when dropped.

use std::collections::HashMap;

use thiserror::Error;

use crate::color::{Color, ColorError};
use crate::parser::ast::{AttrValue, Unit, ViewDecl};
use crate::theme::Theme;

/// Attribute names understood by the triangle view
pub mod keys {
    pub const TRIANGLE_COLOR: &str = "triangleColor";
    pub const TRIANGLE_STROKE_COLOR: &str = "triangleStrokeColor";
    pub const TRIANGLE_STROKE_WIDTH: &str = "triangleStrokeWidth";
    pub const TRIANGLE_TWO_SIDED_STROKE: &str = "triangleTwoSidedStroke";
    pub const TRIANGLE_ORIENTATION: &str = "triangleOrientation";
    /// Names a theme style to fall back on
    pub const STYLE: &str = "style";

    pub const TRIANGLE: &[&str] = &[
        TRIANGLE_COLOR,
        TRIANGLE_STROKE_COLOR,
        TRIANGLE_STROKE_WIDTH,
        TRIANGLE_TWO_SIDED_STROKE,
        TRIANGLE_ORIENTATION,
    ];
}

/// Errors raised while coercing attribute values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttributeError {
    #[error("attribute '{key}' expects a {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("attribute '{key}': {source}")]
    InvalidColor {
        key: String,
        #[source]
        source: ColorError,
    },

    #[error("attribute '{key}': unknown color '{name}'")]
    UnknownColor { key: String, name: String },

    #[error("attribute '{key}': '{value}' is not one of {allowed}")]
    InvalidEnum {
        key: String,
        value: String,
        allowed: String,
    },

    #[error("unknown style '{0}'")]
    UnknownStyle(String),
}

impl AttributeError {
    fn mismatch(key: &str, expected: &'static str, found: &AttrValue) -> Self {
        Self::TypeMismatch {
            key: key.to_string(),
            expected,
            found: format!("{} '{}'", found.kind(), found),
        }
    }
}

/// Attributes as written on a declaration, in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    entries: Vec<(String, AttrValue)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the attributes of a parsed declaration
    ///
    /// A key written twice keeps its last value.
    pub fn from_decl(decl: &ViewDecl) -> Self {
        let mut set = Self::new();
        for attr in &decl.attributes {
            let key = attr.node.key.node.as_str();
            if set.get(key).is_some() {
                log::warn!("attribute '{}' given more than once, last value wins", key);
            }
            set.insert(key, attr.node.value.node.clone());
        }
        set
    }

    /// Set a value, replacing any earlier one for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: AttrValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The style named by the `style` attribute, if any
    pub fn style_name(&self) -> Option<&str> {
        match self.get(keys::STYLE)? {
            AttrValue::Identifier(id) => Some(id.as_str()),
            AttrValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Resolved attribute values with typed, defaulted getters
///
/// Holding one of these counts as an open handle on the theme it came
/// from. The handle is released when this value is dropped.
#[derive(Debug)]
pub struct TypedAttributes<'t> {
    theme: &'t Theme,
    values: HashMap<String, AttrValue>,
}

impl<'t> TypedAttributes<'t> {
    pub(crate) fn new(theme: &'t Theme, values: HashMap<String, AttrValue>) -> Self {
        theme.acquire_handle();
        Self { theme, values }
    }

    pub fn has_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Release the handle now rather than at the end of scope
    pub fn recycle(self) {}

    pub fn get_color(&self, key: &str, default: Color) -> Result<Color, AttributeError> {
        Ok(self.get_optional_color(key)?.unwrap_or(default))
    }

    /// A color, or `None` when the attribute is not set anywhere
    pub fn get_optional_color(&self, key: &str) -> Result<Option<Color>, AttributeError> {
        let value = match self.values.get(key) {
            Some(v) => v,
            None => return Ok(None),
        };

        let color = match value {
            AttrValue::Color(hex) => {
                Color::from_hex(hex).map_err(|source| AttributeError::InvalidColor {
                    key: key.to_string(),
                    source,
                })?
            }
            AttrValue::Identifier(id) => self.named_color(key, id.as_str())?,
            AttrValue::String(s) => self.named_color(key, s)?,
            other => return Err(AttributeError::mismatch(key, "color", other)),
        };
        Ok(Some(color))
    }

    fn named_color(&self, key: &str, name: &str) -> Result<Color, AttributeError> {
        self.theme
            .color(name)
            .or_else(|| Color::from_name(name))
            .ok_or_else(|| AttributeError::UnknownColor {
                key: key.to_string(),
                name: name.to_string(),
            })
    }

    /// A length in device pixels, truncated toward zero
    ///
    /// `dp`, `dip` and `sp` are scaled by the theme's display density;
    /// `px` and unit-less numbers are taken as device pixels.
    pub fn get_dimension_pixel_offset(&self, key: &str, default: i32) -> Result<i32, AttributeError> {
        let px = match self.values.get(key) {
            None => return Ok(default),
            Some(AttrValue::Dimension(d)) => match d.unit {
                Unit::Px => d.value,
                Unit::Dp | Unit::Sp => d.value * self.theme.density,
            },
            Some(AttrValue::Number(n)) => *n,
            Some(other) => return Err(AttributeError::mismatch(key, "dimension", other)),
        };
        Ok(px.trunc() as i32)
    }

    pub fn get_boolean(&self, key: &str, default: bool) -> Result<bool, AttributeError> {
        match self.values.get(key) {
            None => Ok(default),
            Some(AttrValue::Boolean(b)) => Ok(*b),
            Some(other) => Err(AttributeError::mismatch(key, "boolean", other)),
        }
    }

    /// An enum attribute, given either by integer value or by name
    pub fn get_enum(
        &self,
        key: &str,
        allowed: &[(&str, i64)],
        default: i64,
    ) -> Result<i64, AttributeError> {
        let invalid = |value: String| AttributeError::InvalidEnum {
            key: key.to_string(),
            value,
            allowed: allowed
                .iter()
                .map(|(name, v)| format!("{} ({})", name, v))
                .collect::<Vec<_>>()
                .join(", "),
        };

        match self.values.get(key) {
            None => Ok(default),
            Some(AttrValue::Number(n)) => allowed
                .iter()
                .find(|(_, v)| *v as f64 == *n)
                .map(|(_, v)| *v)
                .ok_or_else(|| invalid(n.to_string())),
            Some(AttrValue::Identifier(id)) => allowed
                .iter()
                .find(|(name, _)| *name == id.as_str())
                .map(|(_, v)| *v)
                .ok_or_else(|| invalid(id.to_string())),
            Some(other) => Err(AttributeError::mismatch(key, "enum", other)),
        }
    }
}

impl Drop for TypedAttributes<'_> {
    fn drop(&mut self) {
        self.theme.release_handle();
        log::trace!("released styled attributes ({} values)", self.values.len());
    }
}
