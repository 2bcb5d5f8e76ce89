//! Keys tagged with the algorithm they belong to.
//!
//! The textual form is `<ALGO>:<base64-bytes>`, e.g.
//! `AES:LICx0yKzQm5a6IE13aJ3xOsRv+8AujqHocTFI4yk4Jw=`.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::constants::KEY_SEPARATOR;
use crate::error::{Error, KeyError, Result};

/// Key bytes paired with the algorithm they are valid for.
#[derive(Clone)]
pub struct KeyWithType {
    algorithm: String,
    bytes: Zeroizing<Vec<u8>>,
}

impl KeyWithType {
    /// Build a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnsupportedAlgorithm` if no algorithm is
    /// registered under `algorithm`, or `KeyError` if the algorithm rejects
    /// the key bytes.
    pub fn new(algorithm: &str, bytes: Vec<u8>) -> Result<Self> {
        let bytes = Zeroizing::new(bytes);
        cipher::lookup(algorithm)?.check_key(&bytes)?;
        Ok(Self {
            algorithm: algorithm.to_string(),
            bytes,
        })
    }

    /// Parse the textual `<ALGO>:<base64>` form.
    pub fn parse(text: &str) -> Result<Self> {
        let (algorithm, encoded) = text.trim().split_once(KEY_SEPARATOR).ok_or_else(|| {
            KeyError::InvalidKeyEncoding(format!(
                "expected <ALGO>{}<base64>, found no separator",
                KEY_SEPARATOR
            ))
        })?;
        if algorithm.is_empty() {
            return Err(KeyError::InvalidKeyEncoding("missing algorithm".to_string()).into());
        }
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| KeyError::InvalidKeyEncoding(format!("invalid base64: {}", e)))?;
        Self::new(algorithm, bytes)
    }

    /// Generate a fresh random key for `algorithm`.
    pub fn generate(algorithm: &str) -> Result<Self> {
        let bytes = cipher::lookup(algorithm)?.generate_key();
        Self::new(algorithm, bytes)
    }

    /// The algorithm tag.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The raw key bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The textual `<ALGO>:<base64>` form. Exposes the key.
    pub fn encode(&self) -> Zeroizing<String> {
        Zeroizing::new(format!(
            "{}{}{}",
            self.algorithm,
            KEY_SEPARATOR,
            STANDARD.encode(self.bytes.as_slice())
        ))
    }
}

impl FromStr for KeyWithType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Debug for KeyWithType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyWithType")
            .field("algorithm", &self.algorithm)
            .field("bytes", &"<redacted>")
            .finish()
    }
}

impl PartialEq for KeyWithType {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm && self.bytes.as_slice() == other.bytes.as_slice()
    }
}

impl Eq for KeyWithType {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    const FIXTURE_KEY: &str = "AES:LICx0yKzQm5a6IE13aJ3xOsRv+8AujqHocTFI4yk4Jw=";

    #[test]
    fn test_parse_fixture_key() {
        let key: KeyWithType = FIXTURE_KEY.parse().unwrap();
        assert_eq!(key.algorithm(), "AES");
        assert_eq!(key.bytes().len(), 32);
    }

    #[test]
    fn test_encode_roundtrip() {
        let key = KeyWithType::parse(FIXTURE_KEY).unwrap();
        assert_eq!(key.encode().as_str(), FIXTURE_KEY);
        assert_eq!(KeyWithType::parse(&key.encode()).unwrap(), key);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let key = KeyWithType::parse(&format!("  {}\n", FIXTURE_KEY)).unwrap();
        assert_eq!(key.encode().as_str(), FIXTURE_KEY);
    }

    #[test]
    fn test_generate() {
        let a = KeyWithType::generate("AES").unwrap();
        let b = KeyWithType::generate("AES").unwrap();
        assert_eq!(a.bytes().len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = KeyWithType::parse("ROT13:AAAA").unwrap_err();
        assert!(matches!(
            err,
            Error::Cipher(CipherError::UnsupportedAlgorithm(ref a)) if a == "ROT13"
        ));
    }

    #[test]
    fn test_invalid_encoding() {
        for text in ["AES", ":AAAA", "AES:not base64!"] {
            let err = KeyWithType::parse(text).unwrap_err();
            assert!(
                matches!(err, Error::Key(KeyError::InvalidKeyEncoding(_))),
                "{}: {:?}",
                text,
                err
            );
        }
    }

    #[test]
    fn test_invalid_length() {
        let err = KeyWithType::parse("AES:AAAA").unwrap_err();
        assert!(matches!(
            err,
            Error::Key(KeyError::InvalidKeyLength { len: 3, .. })
        ));
    }

    #[test]
    fn test_debug_redacts_bytes() {
        let key = KeyWithType::parse(FIXTURE_KEY).unwrap();
        let dbg = format!("{:?}", key);
        assert!(dbg.contains("AES"));
        assert!(!dbg.contains("LICx0y"));
    }
}
