use crate::parser::Parser;
use model::{BinaryOp, Expr, SyntaxFault, Token, TokenKind};

/// Expression parsing with a precedence ladder, low to high:
/// equality, relational, additive, multiplicative. All levels are
/// left-associative, so `a + b < c == d` groups as `((a + b) < c) == d`.
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> Result<Expr, SyntaxFault>;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expr(&mut self) -> Result<Expr, SyntaxFault> {
        self.parse_equality()
    }
}

impl<'a> Parser<'a> {
    // Equality (==)
    fn parse_equality(&mut self) -> Result<Expr, SyntaxFault> {
        let mut expr = self.parse_relational()?;
        while self.match_token(|k| matches!(k, TokenKind::EqualEqual)) {
            let right = self.parse_relational()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op: BinaryOp::EqualEqual,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    // Relational (< > <= >=)
    fn parse_relational(&mut self) -> Result<Expr, SyntaxFault> {
        let mut expr = self.parse_additive()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Less) => BinaryOp::Less,
                Some(TokenKind::LessEqual) => BinaryOp::LessEqual,
                Some(TokenKind::Greater) => BinaryOp::Greater,
                Some(TokenKind::GreaterEqual) => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_additive()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    // Additive (+ -)
    fn parse_additive(&mut self) -> Result<Expr, SyntaxFault> {
        let mut expr = self.parse_multiplicative()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_multiplicative()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    // Multiplicative (* /)
    fn parse_multiplicative(&mut self) -> Result<Expr, SyntaxFault> {
        let mut expr = self.parse_primary()?;
        loop {
            let op = match self.peek().map(|t| &t.kind) {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            let right = self.parse_primary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    // Parenthesized expressions, identifiers, integer constants
    fn parse_primary(&mut self) -> Result<Expr, SyntaxFault> {
        if self.match_token(|k| matches!(k, TokenKind::OpenParenthesis)) {
            let expr = self.parse_expr()?;
            self.expect(|k| matches!(k, TokenKind::CloseParenthesis), "')'")?;
            return Ok(expr);
        }

        match self.peek() {
            Some(Token {
                kind: TokenKind::Identifier { value },
                ..
            }) => {
                let name = value.clone();
                self.pos += 1;
                Ok(Expr::Variable(name))
            }
            Some(Token {
                kind: TokenKind::Constant { value },
                ..
            }) => {
                let value = *value;
                self.pos += 1;
                Ok(Expr::Constant(value))
            }
            _ => Err(self.fault("an expression")),
        }
    }
}
