//! Parser state and the statement loop.
//!
//! A [`Parser`] owns everything one call to [`parse`] touches: the scanner
//! over the fragment, the binding table and the statement list. Nested
//! function bodies get a parser of their own, so nothing is shared between
//! calls except the base offset handed down.

use tracing::instrument;

use crate::{
    ast::ast::{Binding, Context, ParseResult, Stmt},
    errors::errors::Error,
    scanner::{classes::is_word, scanner::Scanner},
};

use super::stmt::parse_stmt;

/// Options accepted by [`parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Absolute offset of the fragment's first character in the top-level
    /// buffer. Added to every offset the parse reports.
    pub base: usize,
}

impl ParseOptions {
    pub fn with_base(base: usize) -> Self {
        ParseOptions { base }
    }
}

pub struct Parser {
    /// Cursor pair over the fragment
    pub(super) scanner: Scanner,
    /// Latest binding per declared name
    pub(super) context: Context,
    /// Every recognized statement, in source order
    pub(super) statements: Vec<Stmt>,
    /// Local index where the value of the last variable declaration begins.
    /// `None` when the last statement is not an initialized variable.
    pub(super) last_value_start: Option<usize>,
}

impl Parser {
    pub fn new(source: &str, options: ParseOptions) -> Self {
        Parser {
            scanner: Scanner::new(source, options.base),
            context: Context::new(),
            statements: vec![],
            last_value_start: None,
        }
    }

    /// Reads the next leading word. An empty word means the fragment is done.
    pub fn next_word(&mut self) -> String {
        self.scanner.read_run(is_word)
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.statements.push(stmt);
    }

    /// Installs `binding` under `name`, replacing any earlier declaration.
    pub fn bind(&mut self, name: String, binding: Binding) {
        self.context.insert(name, binding);
    }

    pub fn into_result(self) -> ParseResult {
        ParseResult {
            context: self.context,
            statements: self.statements,
        }
    }
}

/// Parses one source fragment into its bindings and statements.
///
/// Offsets in the result are character offsets shifted by `options.base`.
/// The two fatal conditions, an unterminated bracketed structure and an
/// invalid declaration name, abort the whole parse, including the parse of
/// any enclosing function body.
#[instrument(level = "debug", skip_all, fields(base = options.base))]
pub fn parse(source: &str, options: ParseOptions) -> Result<ParseResult, Error> {
    let mut parser = Parser::new(source, options);

    loop {
        let word = parser.next_word();
        if word.is_empty() {
            break;
        }

        parse_stmt(&mut parser, &word)?;
    }

    Ok(parser.into_result())
}
