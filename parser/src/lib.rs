// Parser module: converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - parser.rs: Core Parser struct, cursor helpers, top-level program loop
// - declarations.rs: Declaration parsing (variables, prototypes, definitions)
// - statements.rs: Statement parsing (if, if-else, while, for, assignment)
// - expressions.rs: Expression parsing with a fixed precedence ladder

mod declarations;
mod expressions;
mod parser;
mod statements;

use model::{Program, SyntaxFault, Token};
use parser::Parser;

/// Parse a list of tokens into a Program AST
///
/// # Arguments
/// * `tokens` - Slice of tokens from the lexer
///
/// # Returns
/// * `Ok(Program)` - the recognized tree, top-level items in source order
/// * `Err(SyntaxFault)` - the first unmatched token (or end of input); no
///   partial tree is ever returned
pub fn parse_tokens(tokens: &[Token]) -> Result<Program, SyntaxFault> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
