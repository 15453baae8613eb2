//! glint source code front end
//!
//! This module transforms glint source text into an Abstract Syntax Tree
//! (AST):
//! - [`grammar`]: Fixed keyword/operator/punctuator/type-name tables
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported language
//!
//! A small imperative language:
//! - Top level: function declarations only
//! - Statements: variable declarations and assignments, scopes, `if`/`else`,
//!   `while`, `return`, function calls, empty statements
//! - Expressions: arithmetic, comparison, equality, unary `-`/`!`,
//!   `as` casts, calls, integer/float/boolean/string literals
//! - No comments, no semantic checking, no error recovery
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for
//! binary operators. No external parser generator dependencies. Parsing
//! halts at the first violation; no partial AST is exposed on failure.

pub mod ast;
pub mod grammar;
pub mod lexer;
pub mod parse;

mod declarations;
mod expressions;
mod statements;
