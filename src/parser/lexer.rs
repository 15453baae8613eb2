//! Lexer (tokenizer) for glint source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Tokens keep the literal text of the lexeme together with a
//! category; the parser dispatches on both. Comments are not recognized:
//! [`TokenCategory::LineComment`] and [`TokenCategory::BlockComment`] are
//! reserved categories with no producing rule.

use super::ast::SourceLocation;
use super::grammar;
use std::fmt;

/// Classification of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Punctuator,
    Keyword,
    Identifier,
    Operator,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    StringLiteral,
    LineComment,
    BlockComment,
    Unknown,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenCategory::Punctuator => "punctuator",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Operator => "operator",
            TokenCategory::IntegerLiteral => "integer literal",
            TokenCategory::FloatLiteral => "float literal",
            TokenCategory::BooleanLiteral => "boolean literal",
            TokenCategory::StringLiteral => "string literal",
            TokenCategory::LineComment => "line comment",
            TokenCategory::BlockComment => "block comment",
            TokenCategory::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexeme: category plus the literal text it was scanned from.
///
/// Every token carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
/// Tokens are immutable once produced; the full sequence is built in one
/// pass and never mutated afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub category: TokenCategory,
    pub text: String,
    pub location: SourceLocation,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            TokenCategory::Keyword | TokenCategory::Operator | TokenCategory::Punctuator => {
                write!(f, "'{}'", self.text)
            }
            _ => write!(f, "{} '{}'", self.category, self.text),
        }
    }
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for glint source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Fails with a [`LexError`] the instant a character starts no
    /// recognized token class. Whitespace-only input yields an empty
    /// sequence.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Scan the next token starting at the current position.
    fn next_token(&mut self) -> Result<Token, LexError> {
        let location = self.current_location();
        // skip_whitespace already ran, so peek() is guaranteed here
        let ch = self.peek().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            location,
        })?;

        if ch.is_ascii_alphabetic() {
            return Ok(self.identifier_or_keyword(location));
        }

        if ch.is_ascii_digit() {
            return Ok(self.number_literal(location));
        }

        let single = ch.to_string();

        if grammar::is_operator(&single) {
            let text = self.munch(grammar::is_operator);
            return Ok(Token {
                category: TokenCategory::Operator,
                text,
                location,
            });
        }

        if grammar::is_punctuator(&single) {
            let text = self.munch(grammar::is_punctuator);
            return Ok(Token {
                category: TokenCategory::Punctuator,
                text,
                location,
            });
        }

        if ch == '"' {
            return self.string_literal(location);
        }

        Err(LexError {
            message: format!("Unrecognized character '{}'", ch),
            location,
        })
    }

    /// Scan an identifier, keyword, or boolean literal.
    ///
    /// Extends over the longest run of alphanumeric characters (no
    /// underscores), so `ifx` is a single identifier, never `if` + `x`.
    /// `true`/`false` are reclassified as boolean literals even though they
    /// sit in the keyword table — literal classification takes priority.
    fn identifier_or_keyword(&mut self, location: SourceLocation) -> Token {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let category = if text == "true" || text == "false" {
            TokenCategory::BooleanLiteral
        } else if grammar::is_keyword(&text) {
            TokenCategory::Keyword
        } else {
            TokenCategory::Identifier
        };

        Token {
            category,
            text,
            location,
        }
    }

    /// Scan an integer or float literal.
    ///
    /// A `.` is consumed only when a digit follows it, so `3.` lexes as the
    /// integer `3` with the `.` left for the next scan (it becomes a
    /// punctuator token).
    fn number_literal(&mut self, location: SourceLocation) -> Token {
        let mut text = String::new();
        let mut category = TokenCategory::IntegerLiteral;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            text.push('.');
            self.advance();

            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }

            category = TokenCategory::FloatLiteral;
        }

        Token {
            category,
            text,
            location,
        }
    }

    /// Scan a string literal: raw characters up to the next `"`, with no
    /// escape processing. The closing quote is consumed without producing
    /// output. End of input before the closing quote is a [`LexError`].
    fn string_literal(&mut self, location: SourceLocation) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch == '"' {
                self.advance(); // closing quote
                return Ok(Token {
                    category: TokenCategory::StringLiteral,
                    text,
                    location,
                });
            }
            text.push(ch);
            self.advance();
        }

        Err(LexError {
            message: "Unterminated string literal".to_string(),
            location,
        })
    }

    /// Maximal munch over a grammar table: starting from the current
    /// character, extend the token by one character at a time as long as the
    /// extended text is still a member of the table. `===` therefore scans
    /// as `==` followed by a separate `=`.
    fn munch(&mut self, table: fn(&str) -> bool) -> String {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            text.push(ch);
            if table(&text) {
                self.advance();
            } else {
                text.pop();
                break;
            }
        }

        text
    }

    /// Skip whitespace between tokens.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
