mod keywords;
mod scanner;

use model::{LexicalFault, Token};
use scanner::Scanner;

/// The complete result of one lexing pass: every token for the valid text,
/// plus every illegal character recovered from along the way. A pass always
/// covers the whole input; lexical faults never truncate the stream.
#[derive(Debug, PartialEq, Clone)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub faults: Vec<LexicalFault>,
}

/// Main lexer entry point. Builds a fresh scanner per call, so no state
/// (line counter included) leaks between independent passes.
pub fn lex(input: &str) -> LexOutput {
    Scanner::new(input).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TokenKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lex_simple_identifier_and_constant() {
        let input = "foo 123";
        let output = lex(input);
        assert!(output.faults.is_empty());
        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Identifier { value: "foo".to_string() },
                TokenKind::Constant { value: 123 },
            ]
        );
    }

    #[test]
    fn lex_keywords_and_operators() {
        assert_eq!(
            kinds("int x = 1; if (x == 1) { }"),
            vec![
                TokenKind::Int,
                TokenKind::Identifier { value: "x".to_string() },
                TokenKind::Equal,
                TokenKind::Constant { value: 1 },
                TokenKind::Semicolon,
                TokenKind::If,
                TokenKind::OpenParenthesis,
                TokenKind::Identifier { value: "x".to_string() },
                TokenKind::EqualEqual,
                TokenKind::Constant { value: 1 },
                TokenKind::CloseParenthesis,
                TokenKind::OpenBrace,
                TokenKind::CloseBrace,
            ]
        );
    }

    #[test]
    fn lex_all_keywords() {
        assert_eq!(
            kinds("while if else for int char float void"),
            vec![
                TokenKind::While,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::For,
                TokenKind::Int,
                TokenKind::Char,
                TokenKind::Float,
                TokenKind::Void,
            ]
        );
    }

    #[test]
    fn lex_keyword_prefix_is_identifier() {
        // Reserved-word check must not fire on identifiers that merely
        // start with a keyword
        assert_eq!(
            kinds("interior form"),
            vec![
                TokenKind::Identifier { value: "interior".to_string() },
                TokenKind::Identifier { value: "form".to_string() },
            ]
        );
    }

    #[test]
    fn lex_relational_operators() {
        assert_eq!(
            kinds("< > <= >= == ="),
            vec![
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::EqualEqual,
                TokenKind::Equal,
            ]
        );
    }

    #[test]
    fn lex_arithmetic_operators() {
        assert_eq!(
            kinds("+ - * / , ;"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Comma,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn lex_adjacent_tokens_no_space() {
        assert_eq!(
            kinds("(x+1)"),
            vec![
                TokenKind::OpenParenthesis,
                TokenKind::Identifier { value: "x".to_string() },
                TokenKind::Plus,
                TokenKind::Constant { value: 1 },
                TokenKind::CloseParenthesis,
            ]
        );
    }

    #[test]
    fn lex_ignores_comments_and_whitespace() {
        let input = "  \t int x; # x marks the spot\n\tx = 2;\n";
        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Int,
                TokenKind::Identifier { value: "x".to_string() },
                TokenKind::Semicolon,
                TokenKind::Identifier { value: "x".to_string() },
                TokenKind::Equal,
                TokenKind::Constant { value: 2 },
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn lex_newlines_increment_line_numbers() {
        let output = lex("int x;\nx = 1;\n\n\nx = 2;");
        let lines: Vec<usize> = output.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 2, 2, 2, 2, 5, 5, 5, 5]);
    }

    #[test]
    fn lex_illegal_character_reported_and_skipped() {
        let output = lex("int x@;");
        assert_eq!(
            output.faults,
            vec![model::LexicalFault { character: '@', line: 1 }]
        );
        // Remaining valid text still tokenizes in full
        assert_eq!(
            output.tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![
                TokenKind::Int,
                TokenKind::Identifier { value: "x".to_string() },
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn lex_multiple_illegal_characters() {
        let output = lex("$ int ? x;");
        assert_eq!(output.faults.len(), 2);
        assert_eq!(output.faults[0].character, '$');
        assert_eq!(output.faults[1].character, '?');
        assert_eq!(output.tokens.len(), 3);
    }

    #[test]
    fn lex_fault_display() {
        let fault = model::LexicalFault { character: '@', line: 3 };
        assert_eq!(fault.to_string(), "illegal character '@' on line 3");
    }

    #[test]
    fn lex_empty_input() {
        let output = lex("");
        assert!(output.tokens.is_empty());
        assert!(output.faults.is_empty());
    }

    #[test]
    fn lex_whitespace_only() {
        let output = lex("   \t\n  \r\n  ");
        assert!(output.tokens.is_empty());
        assert!(output.faults.is_empty());
    }

    #[test]
    fn lex_comment_only() {
        let output = lex("# nothing but commentary\n");
        assert!(output.tokens.is_empty());
        assert!(output.faults.is_empty());
    }

    #[test]
    fn lex_is_restartable_from_scratch() {
        // Two passes over multi-line input must agree exactly; the line
        // counter is per-pass state
        let input = "int x;\nx = x + 1;";
        assert_eq!(lex(input), lex(input));
        assert_eq!(lex(input).tokens[0].line, 1);
    }
}
