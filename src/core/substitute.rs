//! Token substitution over strings and value trees.
//!
//! Two entry points with different aliasing behavior:
//!
//! - [`decrypt_in_place`] rewrites string leaves of the tree it is given.
//! - [`copy_with_decrypted`] clones the top-level value and decrypts the
//!   clone. The clone is shallow: `Rc`/`Arc` handles are shared with the
//!   input, so tokens reached through them are decrypted for both.
//!
//! In-place decryption runs in two passes. The first pass decrypts every
//! token without touching the tree; the second writes the results. A
//! failing token therefore leaves the tree exactly as it was. Plaintexts
//! buffered between the passes are wiped when dropped.

use std::borrow::Cow;
use std::mem;

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::envelope::Envelope;
use crate::core::key::KeyWithType;
use crate::core::token::{contains_tokens, find_tokens, Token};
use crate::core::walk::{format_path, Segment, Walk, Walker};
use crate::error::{CipherError, Error, Result};

/// Encrypt a plaintext string and return it as a `${enc:...}` token.
pub fn encrypt_str(plaintext: &str, key: &KeyWithType) -> Result<String> {
    cipher::encrypt(plaintext.as_bytes(), key)?.to_token()
}

/// Replace every token in `s` with its plaintext.
///
/// Returns the input borrowed when it holds no tokens.
///
/// # Errors
///
/// Returns `Error::Value` naming the failing token if any token does not
/// decrypt.
pub fn decrypt_str<'s>(s: &'s str, key: &KeyWithType) -> Result<Cow<'s, str>> {
    Ok(match replace_tokens(s, key, &[])? {
        Some(mut replaced) => Cow::Owned(mem::take(&mut *replaced)),
        None => Cow::Borrowed(s),
    })
}

/// Decrypt every token reachable from `value`, rewriting it in place.
///
/// Strings without tokens are never written. On error nothing is written.
pub fn decrypt_in_place<T: Walk + ?Sized>(value: &mut T, key: &KeyWithType) -> Result<()> {
    let mut replacements: Vec<Option<Zeroizing<String>>> = Vec::new();
    let mut decrypt = |path: &[Segment], s: &mut String| -> Result<()> {
        replacements.push(replace_tokens(s, key, path)?);
        Ok(())
    };
    Walker::new(&mut decrypt).run(value)?;

    let changed = replacements.iter().filter(|r| r.is_some()).count();
    debug!(
        strings = replacements.len(),
        decrypted = changed,
        "decrypted value tree"
    );
    if changed == 0 {
        return Ok(());
    }

    let mut pending = replacements.into_iter();
    let mut write = |_: &[Segment], s: &mut String| -> Result<()> {
        if let Some(Some(mut plaintext)) = pending.next() {
            *s = mem::take(&mut *plaintext);
        }
        Ok(())
    };
    Walker::new(&mut write).run(value)
}

/// Return a shallow copy of `value` with every token decrypted.
pub fn copy_with_decrypted<T: Walk + Clone>(value: &T, key: &KeyWithType) -> Result<T> {
    let mut copy = value.clone();
    decrypt_in_place(&mut copy, key)?;
    Ok(copy)
}

/// Paths of every string leaf in `value` that holds a token.
///
/// Walks a shallow copy, so `value` is never touched. Shared pointees are
/// still borrowed during the walk; a `RefCell` the caller holds borrowed
/// yields `Error::SharedValue`.
pub fn find_encrypted<T: Walk + Clone>(value: &T) -> Result<Vec<String>> {
    let mut value = value.clone();
    let mut found = Vec::new();
    let mut check = |path: &[Segment], s: &mut String| -> Result<()> {
        if contains_tokens(s) {
            found.push(format_path(path));
        }
        Ok(())
    };
    Walker::new(&mut check).run(&mut value)?;
    Ok(found)
}

fn replace_tokens(
    s: &str,
    key: &KeyWithType,
    path: &[Segment],
) -> Result<Option<Zeroizing<String>>> {
    let mut out = Zeroizing::new(String::new());
    let mut last = 0;
    let mut found = false;
    for token in find_tokens(s) {
        if !found {
            // plaintext is never longer than its token, so this never grows
            out.reserve(s.len());
            found = true;
        }
        let plaintext = decrypt_token(&token, key).map_err(|e| locate(e, path, &token))?;
        trace!(path = %format_path(path), "decrypted token");
        out.push_str(&s[last..token.span.start]);
        out.push_str(&plaintext);
        last = token.span.end;
    }
    if !found {
        return Ok(None);
    }
    out.push_str(&s[last..]);
    Ok(Some(out))
}

fn decrypt_token(token: &Token<'_>, key: &KeyWithType) -> Result<Zeroizing<String>> {
    let envelope = Envelope::parse(token.payload)?;
    let plaintext = Zeroizing::new(cipher::decrypt(&envelope, key)?);
    match std::str::from_utf8(&plaintext) {
        Ok(text) => Ok(Zeroizing::new(text.to_string())),
        Err(e) => {
            Err(CipherError::DecryptionFailed(format!("plaintext is not UTF-8: {}", e)).into())
        }
    }
}

fn locate(err: Error, path: &[Segment], token: &Token<'_>) -> Error {
    match err {
        Error::Cipher(source) => Error::Value {
            path: format_path(path),
            token: token.excerpt(),
            source,
        },
        other => other,
    }
}
