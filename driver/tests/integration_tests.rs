// End-to-end checks of the lex -> parse pipeline the driver wires together.

use lexer::lex;
use model::{Assignment, BinaryOp, Declaration, Expr, Item, Stmt, SyntaxFault, TypeSpecifier};
use parser::parse_tokens;

fn run(src: &str) -> Result<model::Program, SyntaxFault> {
    parse_tokens(&lex(src).tokens)
}

#[test]
fn accepts_plain_declaration() {
    let program = run("int x;").unwrap();
    assert_eq!(
        program.items,
        vec![Item::Declaration(Declaration {
            type_specifier: TypeSpecifier::Int,
            name: "x".to_string(),
            params: vec![],
            body: None,
        })]
    );
}

#[test]
fn accepts_function_definition() {
    let program = run("int add(int a, int b) { a = a + b; }").unwrap();
    let Item::Declaration(decl) = &program.items[0] else {
        panic!("expected declaration");
    };
    assert_eq!(
        decl.params,
        vec![
            (TypeSpecifier::Int, "a".to_string()),
            (TypeSpecifier::Int, "b".to_string()),
        ]
    );
    let body = decl.body.as_ref().unwrap();
    assert_eq!(
        body[0],
        Item::Statement(Stmt::Assignment(Assignment {
            target: "a".to_string(),
            value: Expr::Binary {
                left: Box::new(Expr::Variable("a".to_string())),
                op: BinaryOp::Add,
                right: Box::new(Expr::Variable("b".to_string())),
            },
        }))
    );
}

#[test]
fn accepts_while_loop() {
    let program = run("while (x < 10) { x = x + 1; }").unwrap();
    assert_eq!(
        program.items,
        vec![Item::Statement(Stmt::While {
            cond: Expr::Binary {
                left: Box::new(Expr::Variable("x".to_string())),
                op: BinaryOp::Less,
                right: Box::new(Expr::Constant(10)),
            },
            body: vec![Item::Statement(Stmt::Assignment(Assignment {
                target: "x".to_string(),
                value: Expr::Binary {
                    left: Box::new(Expr::Variable("x".to_string())),
                    op: BinaryOp::Add,
                    right: Box::new(Expr::Constant(1)),
                },
            }))],
        })]
    );
}

#[test]
fn accepts_if_else() {
    let program = run("if (x == 1) { y = 2; } else { y = 3; }").unwrap();
    assert_eq!(program.items.len(), 1);
    assert!(matches!(
        program.items[0],
        Item::Statement(Stmt::IfElse { .. })
    ));
}

#[test]
fn rejects_missing_semicolon() {
    let fault = run("int x").unwrap_err();
    assert!(matches!(fault, SyntaxFault::UnexpectedEndOfInput { .. }));
}

#[test]
fn illegal_character_is_reported_but_rest_still_parses() {
    let output = lex("int x;\n@\nx = x + 1;");
    assert_eq!(output.faults.len(), 1);
    assert_eq!(output.faults[0].character, '@');
    assert_eq!(output.faults[0].line, 2);

    let program = parse_tokens(&output.tokens).unwrap();
    assert_eq!(program.items.len(), 2);
}

#[test]
fn multi_line_program_round_trip() {
    let src = "\
int counter;
int step(int n) {
    counter = counter + n;  # accumulate
}
counter = 0;
for (i = 0; i < 5; i = i + 1) {
    counter = counter * 2 + 1;
}";
    let first = run(src).unwrap();
    let second = run(src).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.items.len(), 4);
}
