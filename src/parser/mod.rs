//! Statement parser building a shallow inventory of a source fragment.
//!
//! The parser reads the fragment one leading word at a time and only
//! understands three statement shapes:
//!
//! - `var`/`let`/`const` declarations, including comma-separated runs
//! - `function` declarations, whose bodies are parsed recursively
//! - `return` statements
//!
//! Everything else is skipped. A word opening with a binary or ternary
//! operator extends the value of the preceding declaration instead of
//! starting a new statement.

pub mod lookups;
pub mod parser;
pub mod stmt;
