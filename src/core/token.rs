//! Encrypted token scanning.
//!
//! A token is `${enc:<payload>}` where the payload is a run of any
//! characters other than `}`. Tokens never nest; an unterminated `${enc:`
//! is plain text.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

use crate::core::constants::{TOKEN_EXCERPT_LEN, TOKEN_PREFIX, TOKEN_SUFFIX};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{enc:([^}]*)\}").expect("token pattern is a valid regex")
});

/// One token occurrence inside a host string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Byte range of the whole token, delimiters included.
    pub span: Range<usize>,
    /// The encoded envelope between the delimiters.
    pub payload: &'a str,
}

impl Token<'_> {
    /// Short form of the token for error messages.
    pub fn excerpt(&self) -> String {
        excerpt(self.payload)
    }
}

/// Lazy iterator over the tokens of a string, left to right.
pub struct Tokens<'a> {
    inner: CaptureMatches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.inner.next()?;
        let whole = caps.get(0)?;
        let payload = caps.get(1)?;
        Some(Token {
            span: whole.range(),
            payload: payload.as_str(),
        })
    }
}

/// Find all non-overlapping tokens in `s`.
///
/// Calling this again on the same string restarts the scan.
pub fn find_tokens(s: &str) -> Tokens<'_> {
    Tokens {
        inner: TOKEN_PATTERN.captures_iter(s),
    }
}

/// Check whether `s` contains at least one token.
pub fn contains_tokens(s: &str) -> bool {
    TOKEN_PATTERN.is_match(s)
}

/// Check whether `s` is exactly one token and nothing else.
pub fn is_token(s: &str) -> bool {
    let mut tokens = find_tokens(s);
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token.span == (0..s.len()),
        _ => false,
    }
}

/// Wrap an encoded envelope as a token.
pub fn wrap(payload: &str) -> String {
    format!("{}{}{}", TOKEN_PREFIX, payload, TOKEN_SUFFIX)
}

fn excerpt(payload: &str) -> String {
    let cut = payload
        .char_indices()
        .nth(TOKEN_EXCERPT_LEN)
        .map(|(i, _)| i)
        .unwrap_or(payload.len());
    if cut < payload.len() {
        format!("{}{}...{}", TOKEN_PREFIX, &payload[..cut], TOKEN_SUFFIX)
    } else {
        wrap(payload)
    }
}
