use std::fmt;
use thiserror::Error;

/// A classified lexical unit together with the source line it started on.
#[derive(PartialEq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

#[derive(PartialEq, Debug, Clone)]
pub enum TokenKind {
    Identifier { value: String },
    Constant { value: i64 },
    OpenParenthesis,
    CloseParenthesis,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Comma,
    // Keywords
    Int,
    Char,
    Float,
    Void,
    If,
    Else,
    While,
    For,
    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Identifier { value } => return write!(f, "identifier '{value}'"),
            TokenKind::Constant { value } => return write!(f, "constant '{value}'"),
            TokenKind::OpenParenthesis => "'('",
            TokenKind::CloseParenthesis => "')'",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Int => "'int'",
            TokenKind::Char => "'char'",
            TokenKind::Float => "'float'",
            TokenKind::Void => "'void'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::For => "'for'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Equal => "'='",
            TokenKind::EqualEqual => "'=='",
            TokenKind::Less => "'<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEqual => "'>='",
        };
        f.write_str(text)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeSpecifier {
    Int,
    Char,
    Float,
    Void,
}

/// A recognized source block: one or more declarations/statements in
/// source order. Function bodies nest the same structure recursively.
#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub items: Vec<Item>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Item {
    Declaration(Declaration),
    Statement(Stmt),
}

/// A typed name introduction: plain variable (`params` empty, no body),
/// function prototype (`params` present, no body), or function definition
/// (body present, possibly empty).
#[derive(Debug, PartialEq, Clone)]
pub struct Declaration {
    pub type_specifier: TypeSpecifier,
    pub name: String,
    pub params: Vec<(TypeSpecifier, String)>,
    pub body: Option<Vec<Item>>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Stmt {
    If {
        cond: Expr,
        body: Vec<Item>,
    },
    IfElse {
        cond: Expr,
        then_body: Vec<Item>,
        else_body: Vec<Item>,
    },
    While {
        cond: Expr,
        body: Vec<Item>,
    },
    For {
        init: Assignment,
        cond: Expr,
        update: Assignment,
        body: Vec<Item>,
    },
    Assignment(Assignment),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Assignment {
    pub target: String,
    pub value: Expr,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    Variable(String),
    Constant(i64),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    EqualEqual,
}

/// An unrecognized character. Recovered locally: the scanner discards the
/// character, records the fault, and keeps going.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("illegal character '{character}' on line {line}")]
pub struct LexicalFault {
    pub character: char,
    pub line: usize,
}

/// A token sequence not derivable under the grammar. Fatal for the parse:
/// the caller gets this instead of a tree, never a partial one.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum SyntaxFault {
    #[error("syntax error on line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        found: String,
        line: usize,
        expected: String,
    },
    #[error("syntax error: expected {expected}, found end of input")]
    UnexpectedEndOfInput { expected: String },
}
