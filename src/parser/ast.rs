//! Syntax tree for declarative attribute documents

use std::fmt;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Valid identifier (alphanumeric, underscore or hyphen, starts with letter/_)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length unit of a dimension literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Device pixels
    Px,
    /// Density-independent pixels (`dp` or `dip`)
    Dp,
    /// Scale-independent pixels, scaled like `dp`
    Sp,
}

/// A length with an explicit unit, e.g. `4dp`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            Unit::Px => "px",
            Unit::Dp => "dp",
            Unit::Sp => "sp",
        };
        write!(f, "{}{}", self.value, unit)
    }
}

/// An attribute value as written, before coercion to a typed field
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// `#rgb`, `#argb`, `#rrggbb` or `#aarrggbb`
    Color(String),
    Dimension(Dimension),
    Number(f64),
    Boolean(bool),
    /// Enum name, color name, theme color or style reference
    Identifier(Identifier),
    String(String),
}

impl AttrValue {
    /// Human-readable kind, used in type mismatch errors
    pub fn kind(&self) -> &'static str {
        match self {
            AttrValue::Color(_) => "color",
            AttrValue::Dimension(_) => "dimension",
            AttrValue::Number(_) => "number",
            AttrValue::Boolean(_) => "boolean",
            AttrValue::Identifier(_) => "identifier",
            AttrValue::String(_) => "string",
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Color(c) => write!(f, "{}", c),
            AttrValue::Dimension(d) => write!(f, "{}", d),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Boolean(b) => write!(f, "{}", b),
            AttrValue::Identifier(id) => write!(f, "{}", id),
            AttrValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// A single `key: value` pair
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub key: Spanned<Identifier>,
    pub value: Spanned<AttrValue>,
}

/// View declaration: `triangle name [key: value, ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewDecl {
    pub name: Option<Spanned<Identifier>>,
    pub attributes: Vec<Spanned<Attribute>>,
}

/// Root AST node - a complete attribute document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub views: Vec<Spanned<ViewDecl>>,
}

impl Document {
    /// Find a view by name
    pub fn find(&self, name: &str) -> Option<&ViewDecl> {
        self.views
            .iter()
            .map(|v| &v.node)
            .find(|v| v.name.as_ref().map(|n| n.node.as_str()) == Some(name))
    }
}
