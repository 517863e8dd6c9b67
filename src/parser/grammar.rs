//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse an attribute document into an AST
pub fn parse(input: &str) -> Result<Document, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Parse a single attribute value such as `#ff0000`, `4dp` or `horizontal`
///
/// Theme files store their style values as strings and run them through
/// this so that they accept exactly what a declaration accepts.
pub fn parse_value(input: &str) -> Result<AttrValue, Vec<crate::ParseError>> {
    let len = input.len();
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));
    let token_stream =
        Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    value_parser()
        .then_ignore(end())
        .parse(token_stream)
        .into_result()
        .map(|v| v.node)
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn value_parser<'a, I>(
) -> impl Parser<'a, I, Spanned<AttrValue>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    select! {
        Token::HexColor(c) => AttrValue::Color(c),
        Token::Dimension(d) => AttrValue::Dimension(d),
        Token::Number(n) => AttrValue::Number(n),
        Token::True => AttrValue::Boolean(true),
        Token::False => AttrValue::Boolean(false),
        Token::Ident(s) => AttrValue::Identifier(Identifier::new(s)),
        Token::String(s) => AttrValue::String(s),
    }
    .map_with(|v, e| Spanned::new(v, span_range(&e.span())))
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Document, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let identifier = select! {
        Token::Ident(s) => Identifier::new(s),
    }
    .map_with(|id, e| Spanned::new(id, span_range(&e.span())));

    let attribute = identifier
        .clone()
        .then_ignore(just(Token::Colon))
        .then(value_parser())
        .map_with(|(key, value), e| Spanned::new(Attribute { key, value }, span_range(&e.span())));

    let attribute_block = attribute
        .separated_by(just(Token::Comma))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just(Token::BracketOpen), just(Token::BracketClose));

    let view_decl = just(Token::Triangle)
        .ignore_then(identifier.or_not())
        .then(attribute_block.or_not())
        .map_with(|(name, attributes), e| {
            Spanned::new(
                ViewDecl {
                    name,
                    attributes: attributes.unwrap_or_default(),
                },
                span_range(&e.span()),
            )
        });

    view_decl
        .repeated()
        .collect()
        .then_ignore(end())
        .map(|views| Document { views })
}
