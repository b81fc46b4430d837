use crate::expressions::ExpressionParser;
use crate::parser::Parser;
use model::{Assignment, Item, Stmt, SyntaxFault, TokenKind};

/// Statement parsing functionality
pub(crate) trait StatementParser {
    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxFault>;
    fn parse_block(&mut self) -> Result<Vec<Item>, SyntaxFault>;
    fn parse_items_until_close_brace(&mut self) -> Result<Vec<Item>, SyntaxFault>;
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_stmt(&mut self) -> Result<Stmt, SyntaxFault> {
        if self.match_token(|k| matches!(k, TokenKind::If)) {
            return self.parse_if_stmt();
        }

        if self.match_token(|k| matches!(k, TokenKind::While)) {
            return self.parse_while_stmt();
        }

        if self.match_token(|k| matches!(k, TokenKind::For)) {
            return self.parse_for_stmt();
        }

        // Assignment statement: ID = expr ;
        if self.check(|k| matches!(k, TokenKind::Identifier { .. })) {
            let assignment = self.parse_assignment()?;
            self.expect(|k| matches!(k, TokenKind::Semicolon), "';'")?;
            return Ok(Stmt::Assignment(assignment));
        }

        Err(self.fault("a declaration or statement"))
    }

    /// A braced body. The grammar nests a full program here, so a block
    /// holds at least one item; `{ }` is only grammatical in the dedicated
    /// empty-bodied declaration form.
    fn parse_block(&mut self) -> Result<Vec<Item>, SyntaxFault> {
        self.expect(|k| matches!(k, TokenKind::OpenBrace), "'{'")?;
        let items = self.parse_items_until_close_brace()?;
        self.expect(|k| matches!(k, TokenKind::CloseBrace), "'}'")?;
        Ok(items)
    }

    fn parse_items_until_close_brace(&mut self) -> Result<Vec<Item>, SyntaxFault> {
        let mut items = vec![self.parse_item()?];
        while !self.check(|k| matches!(k, TokenKind::CloseBrace)) && !self.is_at_end() {
            items.push(self.parse_item()?);
        }
        Ok(items)
    }
}

impl<'a> Parser<'a> {
    fn parse_if_stmt(&mut self) -> Result<Stmt, SyntaxFault> {
        self.expect(|k| matches!(k, TokenKind::OpenParenthesis), "'('")?;
        let cond = self.parse_expr()?;
        self.expect(|k| matches!(k, TokenKind::CloseParenthesis), "')'")?;
        let then_body = self.parse_block()?;

        // A trailing else binds to the nearest preceding if, yielding the
        // distinct if-else node
        if self.match_token(|k| matches!(k, TokenKind::Else)) {
            let else_body = self.parse_block()?;
            Ok(Stmt::IfElse {
                cond,
                then_body,
                else_body,
            })
        } else {
            Ok(Stmt::If {
                cond,
                body: then_body,
            })
        }
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt, SyntaxFault> {
        self.expect(|k| matches!(k, TokenKind::OpenParenthesis), "'('")?;
        let cond = self.parse_expr()?;
        self.expect(|k| matches!(k, TokenKind::CloseParenthesis), "')'")?;
        let body = self.parse_block()?;
        Ok(Stmt::While { cond, body })
    }

    /// `for ( assignment ; expr ; assignment ) { program }`
    fn parse_for_stmt(&mut self) -> Result<Stmt, SyntaxFault> {
        self.expect(|k| matches!(k, TokenKind::OpenParenthesis), "'('")?;
        let init = self.parse_assignment()?;
        self.expect(|k| matches!(k, TokenKind::Semicolon), "';'")?;
        let cond = self.parse_expr()?;
        self.expect(|k| matches!(k, TokenKind::Semicolon), "';'")?;
        let update = self.parse_assignment()?;
        self.expect(|k| matches!(k, TokenKind::CloseParenthesis), "')'")?;
        let body = self.parse_block()?;
        Ok(Stmt::For {
            init,
            cond,
            update,
            body,
        })
    }

    /// `ID = expr` without the trailing semicolon; the for-loop header and
    /// the assignment statement terminate it differently.
    pub(crate) fn parse_assignment(&mut self) -> Result<Assignment, SyntaxFault> {
        let target = self.expect_identifier("an assignment target")?;
        self.expect(|k| matches!(k, TokenKind::Equal), "'='")?;
        let value = self.parse_expr()?;
        Ok(Assignment { target, value })
    }
}
