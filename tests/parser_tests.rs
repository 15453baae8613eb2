// Integration tests for the glint front end

use glint::parser::ast::Node;
use glint::parser::lexer::{Lexer, Token, TokenCategory};
use glint::parser::parse::Parser;

fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().expect("Lexing failed")
}

fn parse(source: &str) -> Vec<Node> {
    let tokens = lex(source);
    Parser::new(&tokens).parse_program().expect("Parsing failed")
}

fn body_statements(node: &Node) -> &[Node] {
    let Node::FunctionDeclaration { body, .. } = node else {
        panic!("Expected function declaration, got {:?}", node);
    };
    let Node::ScopeDeclaration { statements } = &**body else {
        panic!("Expected scope body, got {:?}", body);
    };
    statements
}

#[test]
fn test_full_program() {
    let source = r#"
        int32 add(int32 a, int32 b) {
            return a + b;
        }

        void main() {
            int32 result = add(3, 4);
            result += 1;
            print(result);
        }
    "#;

    let program = parse(source);
    assert_eq!(program.len(), 2);

    let main_body = body_statements(&program[1]);
    assert_eq!(main_body.len(), 3);

    assert_eq!(
        main_body[0],
        Node::VariableDeclaration {
            qualifier: "int32".to_string(),
            name: "result".to_string(),
            value: Box::new(Node::FunctionCall {
                name: "add".to_string(),
                args: vec![
                    Node::IntegerLiteral("3".to_string()),
                    Node::IntegerLiteral("4".to_string()),
                ],
            }),
        }
    );

    assert!(matches!(main_body[1], Node::VariableAssignment { .. }));
    assert!(matches!(main_body[2], Node::FunctionCall { .. }));
}

#[test]
fn test_control_flow_nesting() {
    let source = r#"
        int32 collatz(int32 n) {
            int32 steps = 0;
            while (n != 1) {
                if (n % 2 == 0) {
                    n /= 2;
                } else {
                    n = 3 * n + 1;
                }
                steps += 1;
            }
            return steps;
        }
    "#;

    let program = parse(source);
    let body = body_statements(&program[0]);

    let Node::WhileLoopStatement {
        body: loop_body, ..
    } = &body[1]
    else {
        panic!("Expected while loop, got {:?}", body[1]);
    };
    let Node::ScopeDeclaration { statements } = &**loop_body else {
        panic!("Expected scope as loop body");
    };
    assert!(matches!(statements[0], Node::ConditionalStatement { .. }));
}

#[test]
fn test_token_stream_shape() {
    let tokens = lex("while (count >= 2.5) break;");

    let categories: Vec<TokenCategory> = tokens.iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![
            TokenCategory::Keyword,
            TokenCategory::Punctuator,
            TokenCategory::Identifier,
            TokenCategory::Operator,
            TokenCategory::FloatLiteral,
            TokenCategory::Punctuator,
            TokenCategory::Keyword,
            TokenCategory::Punctuator,
        ]
    );
    assert_eq!(tokens[3].text, ">=");
}

#[test]
fn test_string_and_boolean_literals() {
    let source = r#"
        void main() {
            string greeting = "hello world";
            bool ready = true;
        }
    "#;

    let program = parse(source);
    let body = body_statements(&program[0]);

    assert_eq!(
        body[0],
        Node::VariableDeclaration {
            qualifier: "string".to_string(),
            name: "greeting".to_string(),
            value: Box::new(Node::StringLiteral("hello world".to_string())),
        }
    );
    assert_eq!(
        body[1],
        Node::VariableDeclaration {
            qualifier: "bool".to_string(),
            name: "ready".to_string(),
            value: Box::new(Node::BooleanLiteral(true)),
        }
    );
}

#[test]
fn test_cast_in_declaration() {
    let program = parse("void main() { float64 r = n / 2 as float64; }");
    let body = body_statements(&program[0]);

    let Node::VariableDeclaration { value, .. } = &body[0] else {
        panic!("Expected variable declaration");
    };

    // Cast binds looser than the arithmetic levels, so the whole division
    // is the cast operand.
    assert_eq!(
        **value,
        Node::CastOperation {
            operand: Box::new(Node::BinaryOperation {
                left: Box::new(Node::VariableCall("n".to_string())),
                op: "/".to_string(),
                right: Box::new(Node::IntegerLiteral("2".to_string())),
            }),
            target_type: "float64".to_string(),
        }
    );
}

#[test]
fn test_lex_error_positions() {
    let err = Lexer::new("void main() {\n    int32 x = 1 @ 2;\n}")
        .tokenize()
        .unwrap_err();

    assert!(err.message.contains('@'));
    assert_eq!(err.location.line, 2);
}

#[test]
fn test_parse_error_aborts_whole_program() {
    // The first function is fine; the error in the second still fails the
    // entire parse with no partial AST.
    let tokens = lex("void ok() {} void bad( {}");
    assert!(Parser::new(&tokens).parse_program().is_err());
}

#[test]
fn test_shared_token_sequence() {
    let tokens = lex("void main() { return; }");

    // Two parsers over the same read-only token slice, each with its own
    // cursor.
    let first = Parser::new(&tokens).parse_program().unwrap();
    let second = Parser::new(&tokens).parse_program().unwrap();
    assert_eq!(first, second);
}
