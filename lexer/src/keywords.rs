use model::TokenKind;

/// Reserved-word check: runs before a generic identifier token is emitted,
/// so keywords always win over identifiers.
pub fn keyword_or_identifier(text: &str) -> TokenKind {
    match text {
        "while" => TokenKind::While,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "for" => TokenKind::For,
        "int" => TokenKind::Int,
        "char" => TokenKind::Char,
        "float" => TokenKind::Float,
        "void" => TokenKind::Void,
        _ => TokenKind::Identifier {
            value: text.to_string(),
        },
    }
}
