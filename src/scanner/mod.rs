//! Character-level scanning for source fragments.
//!
//! The scanner never produces tokens on its own. It exposes cursor
//! primitives that the statement parser drives:
//!
//! - skipping horizontal whitespace (newlines are statement separators)
//! - reading maximal runs of a character class
//! - reading quoted literals with single-level backslash escapes
//! - reading balanced bracketed regions, ignoring brackets inside literals
//! - reading one raw expression token

pub mod classes;
pub mod scanner;

#[cfg(test)]
mod tests;
