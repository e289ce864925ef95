use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("var", Keyword::Var);
        map.insert("let", Keyword::Let);
        map.insert("const", Keyword::Const);
        map.insert("function", Keyword::Function);
        map.insert("return", Keyword::Return);
        map
    };

    /// A word opening with one of these continues the previous line's value.
    pub static ref CONTINUATION_PATTERN: Regex = Regex::new(r"^([+\-*/?:]|\|\||&&)").unwrap();
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Var,
    Let,
    Const,
    Function,
    Return,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::Let => "let",
            Keyword::Const => "const",
            Keyword::Function => "function",
            Keyword::Return => "return",
        }
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the statement loop treats one leading word.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum WordKind {
    Continuation,
    Keyword(Keyword),
    Unrecognised,
}

pub fn classify_word(word: &str) -> WordKind {
    if CONTINUATION_PATTERN.is_match(word) {
        return WordKind::Continuation;
    }

    match KEYWORD_LOOKUP.get(word) {
        Some(keyword) => WordKind::Keyword(*keyword),
        None => WordKind::Unrecognised,
    }
}
