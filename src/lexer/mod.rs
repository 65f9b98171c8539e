//! Lexical analysis for CCX source.
//!
//! This module contains the scanner that converts a byte stream into a
//! stream of tokens for a downstream parser. It handles:
//!
//! - Dispatch on the first byte after whitespace, with one byte of lookahead
//! - Reserved words, identifiers, numeric, string and character literals
//! - Maximal-munch operator runs
//! - Line and block comments, reported as tokens
//! - Recovery from malformed input through `Unknown` tokens

pub mod lexer;
pub mod tokens;
