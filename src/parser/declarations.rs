//! Declaration parsing implementation
//!
//! Top-level and declaration forms of the glint grammar:
//!
//! ```text
//! program      ::= function_decl*
//! function_decl ::= ("void" | type_token) identifier "(" params ")" statement
//! params       ::= ( type_token identifier ("," type_token identifier)* )?
//! var_decl     ::= type_token identifier "=" expression ";"
//! ```
//!
//! Only function declarations are permitted at the top level; the body is a
//! single statement, conventionally a scope. All parsing methods are
//! implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::lexer::TokenCategory;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Parse a top-level statement. A function declaration is the only
    /// permitted form: the literal `void` or a type-position token, then an
    /// identifier, then `(`.
    pub(crate) fn parse_global_statement(&mut self) -> Result<Node, ParseError> {
        if self.match_any(&["void"]) || self.match_type_token() {
            if self.peek_category() == Some(TokenCategory::Identifier)
                && self.check_next_any(&["("])
            {
                return self.parse_function_declaration();
            }
        }

        Err(self.error_at_current("Expected a function declaration at top level"))
    }

    /// Parse a function declaration. The return-type token has already been
    /// consumed by the top-level dispatch.
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Node, ParseError> {
        let return_type = self.previous().text.clone();
        let name = self.expect_identifier()?;

        self.consume("(", "Expected '(' after function name")?;

        let mut param_types = Vec::new();
        let mut param_names = Vec::new();

        while !self.check(")") {
            param_types.push(self.advance_text()?);
            param_names.push(self.advance_text()?);
            if !self.check(")") {
                self.consume(",", "Expected ',' between parameters")?;
            }
        }

        self.consume(")", "Expected ')' after parameters")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Node::FunctionDeclaration {
            return_type,
            name,
            param_types,
            param_names,
            body,
        })
    }

    /// Parse a variable declaration. The declaring token (qualifier) has
    /// already been consumed by the statement dispatch; its literal text is
    /// recorded as the declaration kind.
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<Node, ParseError> {
        let qualifier = self.previous().text.clone();
        let name = self.expect_identifier()?;

        self.consume("=", "Expected '='")?;
        let value = Box::new(self.parse_expression()?);
        self.consume(";", "Expected ';' after statement")?;

        Ok(Node::VariableDeclaration {
            qualifier,
            name,
            value,
        })
    }
}
