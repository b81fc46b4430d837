use crate::declarations::DeclarationParser;
use crate::statements::StatementParser;
use model::{Item, Program, SyntaxFault, Token, TokenKind};

/// Core parser struct that maintains parsing state
pub(crate) struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Parse the entire program: one or more declarations/statements,
    /// source order preserved.
    pub fn parse_program(&mut self) -> Result<Program, SyntaxFault> {
        let mut items = vec![self.parse_item()?];
        while !self.is_at_end() {
            items.push(self.parse_item()?);
        }
        Ok(Program { items })
    }

    /// A declaration starts with a type specifier; everything else must be
    /// a statement.
    pub(crate) fn parse_item(&mut self) -> Result<Item, SyntaxFault> {
        if self.check(|k| {
            matches!(
                k,
                TokenKind::Int | TokenKind::Char | TokenKind::Float | TokenKind::Void
            )
        }) {
            Ok(Item::Declaration(self.parse_declaration()?))
        } else {
            Ok(Item::Statement(self.parse_stmt()?))
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn check(&self, pred: impl Fn(&TokenKind) -> bool) -> bool {
        self.peek().is_some_and(|t| pred(&t.kind))
    }

    pub(crate) fn match_token(&mut self, pred: impl Fn(&TokenKind) -> bool) -> bool {
        if self.check(pred) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(
        &mut self,
        pred: impl Fn(&TokenKind) -> bool,
        expected: &str,
    ) -> Result<&'a Token, SyntaxFault> {
        match self.tokens.get(self.pos) {
            Some(token) if pred(&token.kind) => {
                self.pos += 1;
                Ok(token)
            }
            _ => Err(self.fault(expected)),
        }
    }

    pub(crate) fn expect_identifier(&mut self, expected: &str) -> Result<String, SyntaxFault> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Identifier { value },
                ..
            }) => {
                self.pos += 1;
                Ok(value.clone())
            }
            _ => Err(self.fault(expected)),
        }
    }

    /// Build the fault for the token under the cursor (or end of input).
    /// The first fault aborts the whole parse; there is no resynchronization.
    pub(crate) fn fault(&self, expected: &str) -> SyntaxFault {
        match self.peek() {
            Some(token) => SyntaxFault::UnexpectedToken {
                found: token.kind.to_string(),
                line: token.line,
                expected: expected.to_string(),
            },
            None => SyntaxFault::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
        }
    }
}
