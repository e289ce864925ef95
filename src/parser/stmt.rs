use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Binding, Stmt},
        bindings::{FunctionBinding, VariableBinding},
        statements::{FnDeclStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    scanner::classes::{is_identifier, is_identifier_start, is_word},
    Position,
};

use super::{
    lookups::{classify_word, Keyword, WordKind, CONTINUATION_PATTERN},
    parser::{parse, ParseOptions, Parser},
};

pub fn parse_stmt(parser: &mut Parser, word: &str) -> Result<(), Error> {
    match classify_word(word) {
        WordKind::Continuation => {
            parse_continuation(parser, word);
            Ok(())
        }
        WordKind::Keyword(keyword @ (Keyword::Var | Keyword::Let | Keyword::Const)) => {
            parse_var_decl_stmt(parser, keyword)
        }
        WordKind::Keyword(Keyword::Function) => parse_fn_decl_stmt(parser),
        WordKind::Keyword(Keyword::Return) => parse_return_stmt(parser),
        WordKind::Unrecognised => {
            let offset = parser.scanner.absolute(parser.scanner.pos());
            debug!(word, offset, "skipping unrecognised word");
            Ok(())
        }
    }
}

/// Local index of the keyword that was just read as the leading word.
fn keyword_start(parser: &Parser, keyword: Keyword) -> usize {
    parser.scanner.pos() - keyword.as_str().len()
}

/// Extends the value of the preceding variable declaration over a line that
/// opens with an operator. Other statement kinds are left untouched.
pub fn parse_continuation(parser: &mut Parser, word: &str) {
    let scanner = &mut parser.scanner;

    // A bare operator has its operand after the space, on the same line.
    if CONTINUATION_PATTERN
        .find(word)
        .is_some_and(|operator| operator.end() == word.len())
    {
        scanner.skip_space();
        if scanner.at().is_some_and(is_word) {
            scanner.read_run(is_word);
        }
    }

    let end = scanner.pos();
    let Some(value_start) = parser.last_value_start else {
        return;
    };
    let Some(Stmt::VarDecl(stmt)) = parser.statements.last_mut() else {
        return;
    };

    let value_expression = scanner.slice(value_start, end);
    stmt.end = scanner.absolute(end);
    stmt.value_expression = Some(value_expression.clone());

    if let Some(Binding::Variable(binding)) = parser.context.get_mut(&stmt.variable_name) {
        binding.value_expression = Some(value_expression);
    }

    trace!(name = %stmt.variable_name, end = stmt.end, "extended declaration value");
}

/// Parses every declarator of one `var`/`let`/`const` run.
///
/// `var a = 1, b;` yields one statement per name. All of them start at the
/// run's keyword and end after their own value (or name when uninitialized).
pub fn parse_var_decl_stmt(parser: &mut Parser, keyword: Keyword) -> Result<(), Error> {
    let start = keyword_start(parser, keyword);

    loop {
        let scanner = &mut parser.scanner;
        scanner.skip_space();

        match scanner.at() {
            Some(c) if is_identifier_start(c) => {}
            character => {
                return Err(Error::new(
                    ErrorImpl::InvalidIdentifier { character },
                    Position(scanner.absolute(scanner.pos())),
                ))
            }
        }

        let variable_name = scanner.read_run(is_identifier);
        let mut end = scanner.pos();
        let mut value_start = None;
        let mut value_expression = None;

        scanner.skip_space();
        if scanner.at() == Some('=') {
            scanner.advance_n(1);
            let expression = scanner.read_expression()?;
            end = scanner.pos();
            value_start = Some(end - expression.chars().count());
            value_expression = Some(expression);
        }

        scanner.skip_space();
        let has_next = scanner.at() == Some(',');
        if has_next {
            scanner.advance_n(1);
        }

        let stmt = VarDeclStmt {
            variable_name: variable_name.clone(),
            value_expression: value_expression.clone(),
            declaration_kind: keyword,
            start: scanner.absolute(start),
            end: scanner.absolute(end),
        };
        trace!(name = %variable_name, start = stmt.start, end = stmt.end, "variable declaration");

        parser.bind(
            variable_name.clone(),
            Binding::Variable(VariableBinding {
                variable_name,
                value_expression,
            }),
        );
        parser.push(Stmt::VarDecl(stmt));
        parser.last_value_start = value_start;

        if !has_next {
            return Ok(());
        }
    }
}

/// Parses `function name(params) { body }`.
///
/// Each part is optional and read only when its opening character is next.
/// The body is parsed on its own with the base moved just inside its opening
/// brace, which keeps nested offsets absolute. Anonymous functions are
/// recorded as statements but never bound.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<(), Error> {
    let start = keyword_start(parser, Keyword::Function);
    let scanner = &mut parser.scanner;

    let mut function_name = None;
    let mut parameter_string = None;
    let mut function_body_string = None;
    let mut parsed = None;

    scanner.skip_space();
    if scanner.at().is_some_and(is_identifier_start) {
        function_name = Some(scanner.read_run(is_identifier));
        scanner.skip_space();
    }

    if scanner.at() == Some('(') {
        parameter_string = Some(scanner.read_balanced('(', ')')?);
        scanner.skip_space();
    }

    if scanner.at() == Some('{') {
        let body_base = scanner.absolute(scanner.pos() + 1);
        let body = scanner.read_balanced('{', '}')?;
        let inner = &body[1..body.len() - 1];

        parsed = Some(Box::new(parse(inner, ParseOptions::with_base(body_base))?));
        function_body_string = Some(body);
    }

    let stmt = FnDeclStmt {
        function_name: function_name.clone(),
        parameter_string: parameter_string.clone(),
        function_body_string: function_body_string.clone(),
        start: scanner.absolute(start),
        end: scanner.absolute(scanner.pos()),
    };
    trace!(name = ?function_name, start = stmt.start, end = stmt.end, "function declaration");

    if let Some(function_name) = function_name {
        parser.bind(
            function_name.clone(),
            Binding::Function(FunctionBinding {
                function_name,
                parameter_string,
                function_body_string,
                parsed,
            }),
        );
    }
    parser.push(Stmt::FnDecl(stmt));
    parser.last_value_start = None;

    Ok(())
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<(), Error> {
    let return_expression = parser.scanner.read_expression()?;

    trace!(expression = %return_expression, "return");
    parser.push(Stmt::Return(ReturnStmt { return_expression }));
    parser.last_value_start = None;

    Ok(())
}
