// src/core/tokenizer.rs
use crate::core::types::{Token, TokenKind};

/// Splits `text` into alternating runs of whitespace and non-whitespace.
/// Concatenating the token contents gives back `text` exactly.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (idx, c) in text.char_indices() {
        let kind = kind_of(c);
        match current {
            Some(k) if k == kind => {}
            Some(k) => {
                tokens.push(Token {
                    content: text[start..idx].to_string(),
                    kind: k,
                });
                start = idx;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(k) = current {
        tokens.push(Token {
            content: text[start..].to_string(),
            kind: k,
        });
    }
    tokens
}

#[inline]
fn kind_of(c: char) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Whitespace
    } else {
        TokenKind::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(tokens: &[Token]) -> Vec<(&str, TokenKind)> {
        tokens.iter().map(|t| (t.content.as_str(), t.kind)).collect()
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn words_and_runs() {
        let tokens = tokenize("यह  एक\tसरल");
        assert_eq!(
            contents(&tokens),
            vec![
                ("यह", TokenKind::Word),
                ("  ", TokenKind::Whitespace),
                ("एक", TokenKind::Word),
                ("\t", TokenKind::Whitespace),
                ("सरल", TokenKind::Word),
            ]
        );
    }

    #[test]
    fn leading_and_trailing_whitespace() {
        let tokens = tokenize("\n привет ");
        assert_eq!(
            contents(&tokens),
            vec![
                ("\n ", TokenKind::Whitespace),
                ("привет", TokenKind::Word),
                (" ", TokenKind::Whitespace),
            ]
        );
    }

    #[test]
    fn only_whitespace() {
        let tokens = tokenize(" \u{3000}\r\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Whitespace);
    }

    #[test]
    fn punctuation_stays_in_word() {
        let tokens = tokenize("שלום, עולם!");
        assert_eq!(tokens[0].content, "שלום,");
        assert_eq!(tokens[2].content, "עולם!");
    }

    #[test]
    fn reconstructs_input() {
        let text = "  హలో  world\t\tمرحبا\n";
        let joined: String = tokenize(text).into_iter().map(|t| t.content).collect();
        assert_eq!(joined, text);
    }
}
