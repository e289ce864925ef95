//! Character classes used with [`Scanner::read_run`](super::scanner::Scanner::read_run).

pub type CharClass = fn(char) -> bool;

pub fn is_horizontal_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_not_horizontal_space(c: char) -> bool {
    !is_horizontal_space(c)
}

/// Characters that may appear in a statement's leading word.
pub fn is_word(c: char) -> bool {
    !matches!(c, ' ' | '\t' | '\n' | ';')
}

/// Characters of a bare, unbracketed expression.
pub fn is_expression(c: char) -> bool {
    !matches!(c, '\n' | ';' | ',')
}

pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

pub fn is_identifier(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

pub fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}
