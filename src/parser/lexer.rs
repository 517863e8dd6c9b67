//! Lexer for declarative attribute documents using logos

use logos::Logos;

use super::ast::{Dimension, Unit};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // View keywords
    #[token("triangle")]
    Triangle,

    // Boolean literals
    #[token("true")]
    True,
    #[token("false")]
    False,

    // Delimiters
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Literals - identifiers must come after keywords.
    // Hyphens are allowed so theme color names like tooltip-bg lex as one token.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_\-]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    #[regex(r"[0-9]+(\.[0-9]+)?(px|dp|dip|sp)", lex_dimension)]
    Dimension(Dimension),

    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r"#[0-9a-fA-F]+", |lex| lex.slice().to_string())]
    HexColor(String),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

fn lex_dimension(lex: &mut logos::Lexer<Token>) -> Option<Dimension> {
    let s = lex.slice();
    let split = s.find(|c: char| c.is_ascii_alphabetic())?;
    let value = s[..split].parse::<f64>().ok()?;
    let unit = match &s[split..] {
        "px" => Unit::Px,
        "dp" | "dip" => Unit::Dp,
        "sp" => Unit::Sp,
        _ => return None,
    };
    Some(Dimension { value, unit })
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
