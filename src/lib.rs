#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod parser;
pub mod scanner;

pub use ast::ast::{Binding, ParseResult, Stmt};
pub use errors::errors::Error;
pub use parser::parser::{parse, ParseOptions};

extern crate regex;

/// Absolute character offset into the top-level source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(pub usize);
