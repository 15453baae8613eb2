//! # Introduction
//!
//! glint is a two-stage front end for a small imperative language: a lexer
//! that turns raw source text into a sequence of classified tokens, and a
//! recursive-descent parser with precedence climbing that turns that
//! sequence into a tree of typed statement and expression nodes.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → tokens → Parser → AST → (external consumer)
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source against the fixed
//!    [`parser::grammar`] tables using maximal-munch scanning.
//! 2. [`parser::parse`] — consumes the token sequence and builds
//!    [`parser::ast::Node`] trees, one per top-level function declaration.
//!
//! Both stages are synchronous, side-effect-free transformations over
//! in-memory buffers. Each fails at the first violation ([`parser::lexer::LexError`]
//! or [`parser::parse::ParseError`]) with no partial result; execution of
//! the produced AST is out of scope for this crate.
//!
//! ## Example
//!
//! ```
//! use glint::parser::lexer::Lexer;
//! use glint::parser::parse::Parser;
//!
//! let tokens = Lexer::new("int32 add(int32 a, int32 b) { return a + b; }")
//!     .tokenize()
//!     .unwrap();
//! let program = Parser::new(&tokens).parse_program().unwrap();
//! assert_eq!(program.len(), 1);
//! ```

pub mod parser;
