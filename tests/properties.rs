//! Property tests for token scanning and substitution.

mod support;
use support::*;

use std::borrow::Cow;

use encvar::{contains_tokens, decrypt_in_place, decrypt_str, find_encrypted, find_tokens};
use proptest::prelude::*;

/// Text that can never contain `${enc:`.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.:{}=/_-]{0,48}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_token_free_strings_are_borrowed(s in plain_text()) {
        let key = fixture_key();
        prop_assert!(!contains_tokens(&s));
        match decrypt_str(&s, &key).unwrap() {
            Cow::Borrowed(out) => {
                prop_assert_eq!(out, s.as_str());
            }
            Cow::Owned(_) => {
                prop_assert!(false, "token-free string was rewritten");
            }
        }
    }

    #[test]
    fn prop_single_token_is_substituted(prefix in plain_text(), suffix in plain_text()) {
        let key = fixture_key();
        let input = format!("{}{}{}", prefix, FIXTURE_TOKEN, suffix);

        let tokens: Vec<_> = find_tokens(&input).collect();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].span.start, prefix.len());

        let out = decrypt_str(&input, &key).unwrap();
        prop_assert_eq!(out, format!("{}{}{}", prefix, FIXTURE_PLAINTEXT, suffix));
    }

    #[test]
    fn prop_vec_tokens_are_found_and_decrypted(mask in prop::collection::vec(any::<bool>(), 0..12)) {
        let key = fixture_key();
        let mut value: Vec<String> = mask
            .iter()
            .enumerate()
            .map(|(i, &enc)| if enc { FIXTURE_TOKEN.to_string() } else { format!("v{}", i) })
            .collect();

        let expected_paths: Vec<String> = mask
            .iter()
            .enumerate()
            .filter(|(_, enc)| **enc)
            .map(|(i, _)| format!("$[{}]", i))
            .collect();
        prop_assert_eq!(find_encrypted(&value).unwrap(), expected_paths);

        decrypt_in_place(&mut value, &key).unwrap();
        for (i, (s, &enc)) in value.iter().zip(mask.iter()).enumerate() {
            if enc {
                prop_assert_eq!(s.as_str(), FIXTURE_PLAINTEXT);
            } else {
                prop_assert_eq!(s.clone(), format!("v{}", i));
            }
        }
    }
}
