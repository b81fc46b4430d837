use crate::keywords::keyword_or_identifier;
use crate::LexOutput;
use model::{LexicalFault, Token, TokenKind};

/// Byte-cursor scanner over one source block. Built fresh per `lex` call so
/// the line counter never carries over between passes.
pub struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    token_start: usize,
    line: usize,
    faults: Vec<LexicalFault>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            token_start: 0,
            line: 1,
            faults: Vec::new(),
        }
    }

    pub fn scan(mut self) -> LexOutput {
        let mut tokens = Vec::new();

        while self.pos < self.input.len() {
            match self.lex_next_token() {
                Some(token) => tokens.push(token),
                None => continue, // Whitespace, comment, or illegal character consumed
            }
        }

        LexOutput {
            tokens,
            faults: self.faults,
        }
    }

    fn lex_next_token(&mut self) -> Option<Token> {
        self.skip_insignificant();

        if self.pos >= self.input.len() {
            return None;
        }

        self.token_start = self.pos;
        let line = self.line;
        let kind = match self.current_char() {
            '0'..='9' => self.lex_number(),
            'a'..='z' | 'A'..='Z' | '_' => self.lex_identifier(),
            _ => self.lex_operator_or_punctuation()?,
        };

        Some(Token { kind, line })
    }

    fn current_char(&self) -> char {
        self.input[self.pos] as char
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).map(|&b| b as char)
    }

    fn current_slice(&self) -> &str {
        std::str::from_utf8(&self.input[self.token_start..self.pos]).unwrap_or_default()
    }

    /// Spaces, tabs, newlines (counted), and `#` comments through end of line.
    fn skip_insignificant(&mut self) {
        while self.pos < self.input.len() {
            match self.current_char() {
                ' ' | '\t' | '\r' => self.pos += 1,
                '\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                '#' => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        // Stop before the newline so the line counter sees it
        while self.pos < self.input.len() && self.current_char() != '\n' {
            self.pos += 1;
        }
    }

    fn lex_number(&mut self) -> TokenKind {
        while self.pos < self.input.len() {
            match self.current_char() {
                '0'..='9' => self.pos += 1,
                _ => break,
            }
        }

        // Saturates on overflow rather than failing the pass
        let value = self
            .current_slice()
            .bytes()
            .fold(0i64, |acc, d| {
                acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
            });
        TokenKind::Constant { value }
    }

    fn lex_identifier(&mut self) -> TokenKind {
        while self.pos < self.input.len() {
            match self.current_char() {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => self.pos += 1,
                _ => break,
            }
        }

        keyword_or_identifier(self.current_slice())
    }

    fn lex_operator_or_punctuation(&mut self) -> Option<TokenKind> {
        let ch = self.current_char();
        let next = self.peek(1);

        // Two-character operators win over their one-character prefixes
        let two_char_kind = match (ch, next) {
            ('=', Some('=')) => Some(TokenKind::EqualEqual),
            ('<', Some('=')) => Some(TokenKind::LessEqual),
            ('>', Some('=')) => Some(TokenKind::GreaterEqual),
            _ => None,
        };

        if let Some(kind) = two_char_kind {
            self.pos += 2;
            return Some(kind);
        }

        self.pos += 1;
        let kind = match ch {
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::OpenParenthesis,
            ')' => TokenKind::CloseParenthesis,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Equal,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            _ => {
                // Local recovery: record the fault, drop the character, resume
                self.faults.push(LexicalFault {
                    character: ch,
                    line: self.line,
                });
                return None;
            }
        };

        Some(kind)
    }
}
