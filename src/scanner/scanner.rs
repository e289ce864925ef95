use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::classes::{is_expression, is_horizontal_space, is_quote, CharClass};

/// Cursor pair over one source fragment.
///
/// `start` marks the beginning of the token being read and `pos` is the
/// lookahead. Both only ever move forward. All positions are character
/// indices local to the fragment; [`Scanner::absolute`] rebases them onto the
/// top-level buffer.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: Vec<char>,
    start: usize,
    pos: usize,
    base: usize,
}

impl Scanner {
    pub fn new(source: &str, base: usize) -> Scanner {
        Scanner {
            source: source.chars().collect(),
            start: 0,
            pos: 0,
            base,
        }
    }

    /// Returns the character under the lookahead cursor.
    pub fn at(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn absolute(&self, local: usize) -> usize {
        self.base + local
    }

    /// Consumes `n` characters and collapses the token start onto the cursor.
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
        self.start = self.pos;
    }

    pub fn slice(&self, from: usize, to: usize) -> String {
        self.source[from..to].iter().collect()
    }

    pub fn skip_space(&mut self) {
        while self.at().is_some_and(is_horizontal_space) {
            self.pos += 1;
        }
        self.start = self.pos;
    }

    /// Skips everything outside `class`, then reads the maximal run inside it.
    pub fn read_run(&mut self, class: CharClass) -> String {
        while self.at().is_some_and(|c| !class(c)) {
            self.pos += 1;
        }
        self.start = self.pos;

        while self.at().is_some_and(class) {
            self.pos += 1;
        }

        let run = self.slice(self.start, self.pos);
        self.start = self.pos;
        run
    }

    /// Reads a literal opened by the quote under the cursor, quotes included.
    ///
    /// A closing quote directly preceded by a backslash is escaped. There is no
    /// further escape processing, so `"\\"` does not terminate at its second
    /// quote. A literal left open runs to the end of the fragment.
    pub fn read_quoted(&mut self, quote: char) -> String {
        let opened_at = self.pos;
        self.pos = self.quoted_end(opened_at, quote);

        let literal = self.slice(opened_at, self.pos);
        self.start = self.pos;
        literal
    }

    fn quoted_end(&self, opened_at: usize, quote: char) -> usize {
        let len = self.source.len();
        let mut end = opened_at + 1;

        if self.source.get(end) == Some(&quote) {
            return end + 1;
        }

        end += 1;
        while end < len {
            if self.source[end] == quote && self.source[end - 1] != '\\' {
                return end + 1;
            }
            end += 1;
        }

        len
    }

    /// Reads a region from the `open` under the cursor through its matching
    /// `close`. Quoted literals are skipped whole so their brackets never count.
    pub fn read_balanced(&mut self, open: char, close: char) -> Result<String, Error> {
        let opened_at = self.pos;
        let mut depth = 1;
        self.pos += 1;

        while depth > 0 {
            let Some(c) = self.at() else {
                return Err(Error::new(
                    ErrorImpl::UnterminatedStructure { open, close },
                    Position(self.absolute(opened_at)),
                ));
            };

            if is_quote(c) {
                self.pos = self.quoted_end(self.pos, c);
                continue;
            }

            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
            }
            self.pos += 1;
        }

        let region = self.slice(opened_at, self.pos);
        self.start = self.pos;
        Ok(region)
    }

    /// Reads one raw value: a bracketed region, a quoted literal, or a bare
    /// run ending at a newline, semicolon or comma.
    pub fn read_expression(&mut self) -> Result<String, Error> {
        self.skip_space();

        let expression = match self.at() {
            Some('[') => self.read_balanced('[', ']')?,
            Some('{') => self.read_balanced('{', '}')?,
            Some('(') => self.read_balanced('(', ')')?,
            Some(quote) if is_quote(quote) => self.read_quoted(quote),
            _ => self.read_run(is_expression),
        };

        Ok(expression)
    }
}
