//! Property-based checks of the tokenizer, classifier and converter.

use lipi_core::core::registry::Registry;
use lipi_core::{classify, resolve_script, tokenize, transliterate, Script, TokenKind};
use proptest::prelude::*;

/// Characters biased toward the registered script blocks, with Latin,
/// whitespace and astral characters mixed in.
fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => proptest::char::range('\u{0900}', '\u{097f}'),
        3 => proptest::char::range('\u{0c00}', '\u{0c7f}'),
        1 => proptest::char::range('\u{0980}', '\u{09ff}'),
        1 => proptest::char::range('\u{0b80}', '\u{0bff}'),
        1 => proptest::char::range('\u{0400}', '\u{06ff}'),
        2 => proptest::char::range('a', 'z'),
        2 => prop::sample::select(vec![' ', '\t', '\n', '\u{00a0}', '\u{3000}']),
        1 => any::<char>(),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..40).prop_map(|cs| cs.into_iter().collect())
}

fn in_any_range(c: char) -> bool {
    Registry::global()
        .entries()
        .iter()
        .any(|e| e.range.contains(c))
}

proptest! {
    #[test]
    fn tokens_rejoin_to_input(text in arb_text()) {
        let joined: String = tokenize(&text).into_iter().map(|t| t.content).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn token_kind_matches_content(text in arb_text()) {
        for token in tokenize(&text) {
            prop_assert!(!token.content.is_empty());
            let all_ws = token.content.chars().all(char::is_whitespace);
            prop_assert_eq!(token.kind == TokenKind::Whitespace, all_ws);
        }
    }

    #[test]
    fn adjacent_tokens_alternate(text in arb_text()) {
        let tokens = tokenize(&text);
        for pair in tokens.windows(2) {
            prop_assert_ne!(pair[0].kind, pair[1].kind);
        }
    }

    #[test]
    fn one_cell_per_char(word in arb_text()) {
        prop_assert_eq!(transliterate(&word).len(), word.chars().count());
    }

    #[test]
    fn unregistered_chars_pass_through(c in any::<char>()) {
        prop_assume!(!in_any_range(c));
        prop_assert_eq!(classify(c), Script::Unknown);
        let s = c.to_string();
        prop_assert_eq!(transliterate(&s), vec![s.clone()]);
    }

    #[test]
    fn classify_is_stable(c in arb_char()) {
        prop_assert_eq!(classify(c), classify(c));
    }

    #[test]
    fn resolve_matches_first_known_char(word in arb_text()) {
        let expected = word
            .chars()
            .map(classify)
            .find(|s| *s != Script::Unknown)
            .unwrap_or(Script::Unknown);
        prop_assert_eq!(resolve_script(&word), expected);
    }

    #[test]
    fn transliterate_is_deterministic(word in arb_text()) {
        prop_assert_eq!(transliterate(&word), transliterate(&word));
    }
}

#[test]
fn empty_inputs() {
    assert!(tokenize("").is_empty());
    assert!(transliterate("").is_empty());
}
