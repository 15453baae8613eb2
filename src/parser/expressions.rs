//! Expression parsing implementation
//!
//! Precedence climbing from the loosest to the tightest binding, each level
//! left-associative via a match-and-fold loop:
//!
//! 1. equality: `==` `!=`
//! 2. comparison: `<` `<=` `>` `>=`
//! 3. cast: `as <type token>`
//! 4. term: `+` `-`
//! 5. factor: `*` `/`
//! 6. remainder: `%`
//! 7. unary (right-recursive, prefix): `-` `!`
//! 8. primary: literals, calls, variable references, parentheses
//!
//! The factor level parses its operands through the remainder production
//! rather than directly through unary, so each operand of `*`/`/` is a
//! complete `%` chain: `3 * 4 % 5` groups as `3 * (4 % 5)`. This grouping
//! is part of the language's grammar and must not be normalized to
//! conventional equal-precedence left-to-right folding.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::lexer::TokenCategory;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_equality()
    }

    /// Parse equality (`==` `!=`)
    fn parse_equality(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_comparison()?;

        while self.match_any(&["==", "!="]) {
            let op = self.previous().text.clone();
            let right = self.parse_comparison()?;
            expr = Node::BinaryOperation {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse comparison (`<` `<=` `>` `>=`)
    fn parse_comparison(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_cast()?;

        while self.match_any(&["<", "<=", ">", ">="]) {
            let op = self.previous().text.clone();
            let right = self.parse_cast()?;
            expr = Node::BinaryOperation {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse cast: `expr as <type token>`. The token after `as` is bound
    /// directly as the target type; no further expression is parsed there.
    fn parse_cast(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_term()?;

        while self.match_any(&["as"]) {
            let target_type = self.advance_text()?;
            expr = Node::CastOperation {
                operand: Box::new(expr),
                target_type,
            };
        }

        Ok(expr)
    }

    /// Parse term (`+` `-`)
    fn parse_term(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_factor()?;

        while self.match_any(&["+", "-"]) {
            let op = self.previous().text.clone();
            let right = self.parse_factor()?;
            expr = Node::BinaryOperation {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse factor (`*` `/`). Operands come from the remainder production,
    /// not directly from unary; see the module docs for the consequence.
    fn parse_factor(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_remainder()?;

        while self.match_any(&["*", "/"]) {
            let op = self.previous().text.clone();
            let right = self.parse_remainder()?;
            expr = Node::BinaryOperation {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse remainder (`%`)
    fn parse_remainder(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_unary()?;

        while self.match_any(&["%"]) {
            let op = self.previous().text.clone();
            let right = self.parse_unary()?;
            expr = Node::BinaryOperation {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Parse unary prefix operators (`-` `!`), right-recursive.
    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        if self.match_any(&["-", "!"]) {
            let op = self.previous().text.clone();
            let operand = self.parse_unary()?;
            return Ok(Node::UnaryOperation {
                op,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parse primary: a literal, a function call, a bare variable
    /// reference, or a parenthesized sub-expression.
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.peek_category() {
            Some(TokenCategory::IntegerLiteral) => Ok(Node::IntegerLiteral(self.advance_text()?)),
            Some(TokenCategory::FloatLiteral) => Ok(Node::FloatLiteral(self.advance_text()?)),
            Some(TokenCategory::BooleanLiteral) => {
                Ok(Node::BooleanLiteral(self.advance_text()? == "true"))
            }
            Some(TokenCategory::StringLiteral) => Ok(Node::StringLiteral(self.advance_text()?)),
            Some(TokenCategory::Identifier) => {
                if self.check_next_any(&["("]) {
                    self.parse_function_call_expression()
                } else {
                    Ok(Node::VariableCall(self.advance_text()?))
                }
            }
            _ => {
                if self.match_any(&["("]) {
                    let expr = self.parse_expression()?;
                    self.consume(")", "Expected ')' after expression")?;
                    return Ok(expr);
                }

                Err(self.error_at_current("Expected an expression"))
            }
        }
    }

    /// Parse a function call in expression position: comma-separated
    /// argument expressions until `)`.
    fn parse_function_call_expression(&mut self) -> Result<Node, ParseError> {
        let name = self.advance_text()?;
        self.consume("(", "Expected '(' after function name")?;

        let mut args = Vec::new();
        while !self.check(")") && !self.is_at_end() {
            args.push(self.parse_expression()?);
            if !self.check(")") {
                self.consume(",", "Expected ',' between arguments")?;
            }
        }

        self.consume(")", "Expected ')' after arguments")?;

        Ok(Node::FunctionCall { name, args })
    }
}
