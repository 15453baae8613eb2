//! Statement parsing implementation
//!
//! First-token dispatch over the glint statement forms:
//!
//! ```text
//! statement ::= scope | conditional | while_loop | return_stmt
//!             | assignment | call_stmt | var_decl | ";" | expression
//! ```
//!
//! A bare expression is the fallback production and does not require a
//! trailing `;`; a stray `;` parses as an empty statement. Compound
//! assignments are desugared here into a plain assignment of a binary
//! operation. All parsing methods are implemented as `pub(crate)` methods
//! on the [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::lexer::TokenCategory;
use crate::parser::parse::{ParseError, Parser};

impl<'a> Parser<'a> {
    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        if self.match_any(&["{"]) {
            return self.parse_scope_declaration();
        }
        if self.match_any(&["if", "else"]) {
            return self.parse_conditional_statement();
        }
        if self.match_any(&["while"]) {
            return self.parse_while_loop_statement();
        }
        if self.match_any(&["return"]) {
            return self.parse_return_statement();
        }

        if self.peek_category() == Some(TokenCategory::Identifier) {
            if self.check_next_any(&["=", "+=", "-=", "*=", "/=", "%="]) {
                return self.parse_variable_assignment();
            }
            if self.check_next_any(&["("]) {
                return self.parse_function_call_statement();
            }
        }

        // The dispatch consumes the type token before looking ahead; when
        // the lookahead fails the cursor stays past it and the remaining
        // branches see the following token.
        if self.match_type_token() {
            if self.peek_category() == Some(TokenCategory::Identifier)
                && self.check_next_any(&["="])
            {
                return self.parse_variable_declaration();
            }
        }

        if self.match_any(&[";"]) {
            return Ok(Node::EmptyStatement);
        }

        self.parse_expression()
    }

    /// Parse a scope: statements until `}`. The opening `{` has already
    /// been consumed by the dispatch.
    pub(crate) fn parse_scope_declaration(&mut self) -> Result<Node, ParseError> {
        let mut statements = Vec::new();

        while !self.check("}") && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.consume("}", "Expected '}' after scope")?;

        Ok(Node::ScopeDeclaration { statements })
    }

    /// Parse a conditional: `( expr )` then one statement, optionally
    /// `else` then one statement.
    pub(crate) fn parse_conditional_statement(&mut self) -> Result<Node, ParseError> {
        self.consume("(", "Expected '('")?;
        let condition = Box::new(self.parse_expression()?);
        self.consume(")", "Expected ')'")?;

        let on_true = Box::new(self.parse_statement()?);

        let on_false = if self.match_any(&["else"]) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Node::ConditionalStatement {
            condition,
            on_true,
            on_false,
        })
    }

    /// Parse a while loop: `( expr )` then one statement.
    pub(crate) fn parse_while_loop_statement(&mut self) -> Result<Node, ParseError> {
        self.consume("(", "Expected '('")?;
        let condition = Box::new(self.parse_expression()?);
        self.consume(")", "Expected ')'")?;

        let body = Box::new(self.parse_statement()?);

        Ok(Node::WhileLoopStatement { condition, body })
    }

    /// Parse a return statement. A bare `return;` carries an empty
    /// statement as its value.
    pub(crate) fn parse_return_statement(&mut self) -> Result<Node, ParseError> {
        let value = if self.check(";") {
            Box::new(Node::EmptyStatement)
        } else {
            Box::new(self.parse_expression()?)
        };

        self.consume(";", "Expected ';' after statement")?;

        Ok(Node::ReturnStatement { value })
    }

    /// Parse a variable assignment, desugaring compound assignments:
    /// `x op= e` becomes `x = x op e` reading the current value.
    pub(crate) fn parse_variable_assignment(&mut self) -> Result<Node, ParseError> {
        let name = self.advance_text()?;

        let op = match self.peek_category() {
            Some(TokenCategory::Operator) => self.advance_text()?,
            _ => return Err(self.error_at_current("Expected operator")),
        };

        let value = self.parse_expression()?;
        self.consume(";", "Expected ';' after statement")?;

        if op == "=" {
            return Ok(Node::VariableAssignment {
                name,
                value: Box::new(value),
            });
        }

        let binary_op = match op.as_str() {
            "+=" => "+",
            "-=" => "-",
            "*=" => "*",
            "/=" => "/",
            "%=" => "%",
            _ => return Err(self.error_at_current("Expected assignment operator")),
        };

        let desugared = Node::BinaryOperation {
            left: Box::new(Node::VariableCall(name.clone())),
            op: binary_op.to_string(),
            right: Box::new(value),
        };

        Ok(Node::VariableAssignment {
            name,
            value: Box::new(desugared),
        })
    }

    /// Parse a function call in statement position: arguments until `)`,
    /// then a required `;`.
    pub(crate) fn parse_function_call_statement(&mut self) -> Result<Node, ParseError> {
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
        self.consume(";", "Expected ';' after statement")?;

        Ok(Node::FunctionCall { name, args })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::Node;
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::Parser;

    fn parse_statement(source: &str) -> Node {
        let tokens = Lexer::new(source).tokenize().expect("lexing failed");
        let mut parser = Parser::new(&tokens);
        parser.parse_statement().expect("parsing failed")
    }

    #[test]
    fn test_compound_assignment_desugaring() {
        let node = parse_statement("x += 1;");

        assert_eq!(
            node,
            Node::VariableAssignment {
                name: "x".to_string(),
                value: Box::new(Node::BinaryOperation {
                    left: Box::new(Node::VariableCall("x".to_string())),
                    op: "+".to_string(),
                    right: Box::new(Node::IntegerLiteral("1".to_string())),
                }),
            }
        );
    }

    #[test]
    fn test_plain_assignment_is_not_desugared() {
        let node = parse_statement("x = y;");

        assert_eq!(
            node,
            Node::VariableAssignment {
                name: "x".to_string(),
                value: Box::new(Node::VariableCall("y".to_string())),
            }
        );
    }

    #[test]
    fn test_conditional_with_else() {
        let node = parse_statement("if (x == 1) { return; } else { return; }");

        let Node::ConditionalStatement {
            condition,
            on_true,
            on_false,
        } = node
        else {
            panic!("Expected conditional statement");
        };

        assert!(matches!(*condition, Node::BinaryOperation { .. }));
        assert!(matches!(*on_true, Node::ScopeDeclaration { .. }));
        assert!(on_false.is_some());
    }

    #[test]
    fn test_conditional_without_else() {
        let node = parse_statement("if (x) y = 1;");

        let Node::ConditionalStatement { on_false, .. } = node else {
            panic!("Expected conditional statement");
        };
        assert!(on_false.is_none());
    }

    #[test]
    fn test_while_loop() {
        let node = parse_statement("while (i < 10) i += 1;");

        let Node::WhileLoopStatement { condition, body } = node else {
            panic!("Expected while loop");
        };
        assert!(matches!(*condition, Node::BinaryOperation { .. }));
        assert!(matches!(*body, Node::VariableAssignment { .. }));
    }

    #[test]
    fn test_bare_return() {
        let node = parse_statement("return;");

        assert_eq!(
            node,
            Node::ReturnStatement {
                value: Box::new(Node::EmptyStatement),
            }
        );
    }

    #[test]
    fn test_empty_statement() {
        assert_eq!(parse_statement(";"), Node::EmptyStatement);
    }

    #[test]
    fn test_function_call_statement() {
        let node = parse_statement("print(x, 2);");

        assert_eq!(
            node,
            Node::FunctionCall {
                name: "print".to_string(),
                args: vec![
                    Node::VariableCall("x".to_string()),
                    Node::IntegerLiteral("2".to_string()),
                ],
            }
        );
    }

    #[test]
    fn test_nested_scopes() {
        let node = parse_statement("{ { ; } }");

        let Node::ScopeDeclaration { statements } = node else {
            panic!("Expected scope");
        };
        assert_eq!(
            statements[0],
            Node::ScopeDeclaration {
                statements: vec![Node::EmptyStatement],
            }
        );
    }

    #[test]
    fn test_unterminated_scope() {
        let tokens = Lexer::new("{ x = 1;").tokenize().unwrap();
        let err = Parser::new(&tokens).parse_statement().unwrap_err();
        assert!(err.message.contains("'}'"), "message: {}", err.message);
    }

    #[test]
    fn test_missing_semicolon_after_assignment() {
        let tokens = Lexer::new("x = 1").tokenize().unwrap();
        assert!(Parser::new(&tokens).parse_statement().is_err());
    }
}
