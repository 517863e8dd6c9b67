//! Parser for declarative attribute documents

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::{parse, parse_value};
