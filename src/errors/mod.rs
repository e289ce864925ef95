//! Error types and error handling for the scanner and parser.
//!
//! Only two conditions abort a parse:
//!
//! - an unterminated bracketed structure
//! - a declaration whose name cannot start an identifier
//!
//! Both carry the absolute source offset they were raised at.

pub mod errors;
