use crate::parser::Parser;
use crate::statements::StatementParser;
use model::{Declaration, SyntaxFault, TokenKind, TypeSpecifier};

pub(crate) trait DeclarationParser {
    fn parse_declaration(&mut self) -> Result<Declaration, SyntaxFault>;
    fn parse_type_specifier(&mut self) -> Result<TypeSpecifier, SyntaxFault>;
    fn parse_params(&mut self) -> Result<Vec<(TypeSpecifier, String)>, SyntaxFault>;
}

impl<'a> DeclarationParser for Parser<'a> {
    /// Declaration forms, disambiguated by the token after the declarator:
    ///
    /// ```text
    /// Type ID ;                        plain variable
    /// Type ID ( params ) ;             prototype
    /// Type ID ( params ) { program }   definition with parameters
    /// Type ID { program } [;]          definition without parameters
    /// Type ID { }                      definition with empty body
    /// ```
    fn parse_declaration(&mut self) -> Result<Declaration, SyntaxFault> {
        let type_specifier = self.parse_type_specifier()?;
        let name = self.expect_identifier("a name after the type specifier")?;

        if self.match_token(|k| matches!(k, TokenKind::Semicolon)) {
            return Ok(Declaration {
                type_specifier,
                name,
                params: Vec::new(),
                body: None,
            });
        }

        if self.match_token(|k| matches!(k, TokenKind::OpenParenthesis)) {
            let params = self.parse_params()?;
            self.expect(|k| matches!(k, TokenKind::CloseParenthesis), "')'")?;

            // Prototype ends here; a definition carries a braced body
            let body = if self.match_token(|k| matches!(k, TokenKind::Semicolon)) {
                None
            } else {
                Some(self.parse_block()?)
            };

            return Ok(Declaration {
                type_specifier,
                name,
                params,
                body,
            });
        }

        if self.match_token(|k| matches!(k, TokenKind::OpenBrace)) {
            // `Type ID { }` is the one place an empty body is grammatical
            let body = if self.match_token(|k| matches!(k, TokenKind::CloseBrace)) {
                Vec::new()
            } else {
                let items = self.parse_items_until_close_brace()?;
                self.expect(|k| matches!(k, TokenKind::CloseBrace), "'}'")?;
                items
            };
            // The no-parameter definition allows a trailing semicolon
            self.match_token(|k| matches!(k, TokenKind::Semicolon));

            return Ok(Declaration {
                type_specifier,
                name,
                params: Vec::new(),
                body: Some(body),
            });
        }

        Err(self.fault("';', '(' or '{' after the declared name"))
    }

    fn parse_type_specifier(&mut self) -> Result<TypeSpecifier, SyntaxFault> {
        let specifier = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Int) => TypeSpecifier::Int,
            Some(TokenKind::Char) => TypeSpecifier::Char,
            Some(TokenKind::Float) => TypeSpecifier::Float,
            Some(TokenKind::Void) => TypeSpecifier::Void,
            _ => return Err(self.fault("a type specifier")),
        };
        self.pos += 1;
        Ok(specifier)
    }

    /// `Type ID (, Type ID)*` — at least one parameter; the grammar has no
    /// zero-parameter `()` form.
    fn parse_params(&mut self) -> Result<Vec<(TypeSpecifier, String)>, SyntaxFault> {
        let mut params = Vec::new();
        loop {
            let param_type = self.parse_type_specifier()?;
            let param_name = self.expect_identifier("a parameter name")?;
            params.push((param_type, param_name));
            if !self.match_token(|k| matches!(k, TokenKind::Comma)) {
                break;
            }
        }
        Ok(params)
    }
}
