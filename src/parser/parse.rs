//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, cursor helpers, and the program entry
//! point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following
//! organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing top-level function and variable declarations
//! - `statements`: Parsing statements (scopes, conditionals, loops, ...)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! Parser methods are split across multiple files using `impl Parser`
//! blocks, allowing each module to extend the Parser with related
//! functionality while maintaining access to the shared cursor state.
//!
//! # Failure policy
//!
//! The first grammar violation aborts the entire parse: errors propagate
//! out of `parse_program` and no partial AST is exposed. There is no error
//! recovery or multi-error accumulation.

use crate::parser::ast::{Node, SourceLocation};
use crate::parser::grammar;
use crate::parser::lexer::{LexError, Token, TokenCategory};
use std::fmt;

/// Parser error type
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for the glint grammar.
///
/// Borrows the token sequence read-only; the same sequence can back any
/// number of parser instances, each owning its private cursor. The cursor
/// is monotonically non-decreasing and never exceeds the token count.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program (a sequence of top-level declarations).
    pub fn parse_program(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();

        while !self.is_at_end() {
            nodes.push(self.parse_global_statement()?);
        }

        Ok(nodes)
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn peek_next(&self) -> Option<&'a Token> {
        self.tokens.get(self.position + 1)
    }

    pub(crate) fn peek_category(&self) -> Option<TokenCategory> {
        self.peek().map(|t| t.category)
    }

    /// The most recently consumed token. Only valid after a successful
    /// match or consume.
    pub(crate) fn previous(&self) -> &'a Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn check(&self, text: &str) -> bool {
        self.peek().is_some_and(|t| t.text == text)
    }

    pub(crate) fn check_next_any(&self, texts: &[&str]) -> bool {
        self.peek_next()
            .is_some_and(|t| texts.contains(&t.text.as_str()))
    }

    /// Consume the current token if its text matches any of `texts`.
    pub(crate) fn match_any(&mut self, texts: &[&str]) -> bool {
        if self.peek().is_some_and(|t| texts.contains(&t.text.as_str())) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is acceptable in type position: a
    /// plain identifier, or a keyword from the type-name table.
    pub(crate) fn match_type_token(&mut self) -> bool {
        match self.peek() {
            Some(t) if t.category == TokenCategory::Identifier => {
                self.position += 1;
                true
            }
            Some(t) if t.category == TokenCategory::Keyword && grammar::is_type_name(&t.text) => {
                self.position += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume the current token unconditionally and return its text.
    /// Running out of input here is a parse error, never a cursor overrun.
    pub(crate) fn advance_text(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(token) => {
                self.position += 1;
                Ok(token.text.clone())
            }
            None => Err(self.error_at_current("Unexpected end of input")),
        }
    }

    /// Consume a token with the exact text `text`, or fail with `message`.
    pub(crate) fn consume(&mut self, text: &str, message: &str) -> Result<(), ParseError> {
        if self.check(text) {
            self.position += 1;
            Ok(())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Consume an identifier token and return its text.
    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(t) if t.category == TokenCategory::Identifier => {
                self.position += 1;
                Ok(t.text.clone())
            }
            _ => Err(self.error_at_current("Expected identifier")),
        }
    }

    /// Build a [`ParseError`] at the current token, appending the found
    /// token's rendering to the expectation message.
    pub(crate) fn error_at_current(&self, message: &str) -> ParseError {
        let (found, location) = match self.peek() {
            Some(token) => (format!("{}", token), token.location),
            None => ("end of input".to_string(), self.end_location()),
        };

        ParseError {
            message: format!("{}, found {}", message, found),
            location,
        }
    }

    fn end_location(&self) -> SourceLocation {
        self.tokens
            .last()
            .map(|t| t.location)
            .unwrap_or(SourceLocation::new(1, 1))
    }
}
