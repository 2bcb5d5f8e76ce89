//! Envelope codec.
//!
//! The payload of a token is base64 of a compact JSON object:
//!
//! ```text
//! {"type":"AES","mode":"GCM","ciphertext":"<b64>","iv":"<b64>","tag":"<b64>"}
//! ```
//!
//! `iv` and `tag` are algorithm specific and optional at this level.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::token;
use crate::error::{CipherError, Result};

/// Decoded form of an encrypted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Algorithm tag, e.g. `AES`.
    #[serde(rename = "type")]
    pub algorithm: String,
    /// Algorithm mode, e.g. `GCM`.
    pub mode: String,
    #[serde(with = "b64")]
    pub ciphertext: Vec<u8>,
    #[serde(default, with = "b64_opt", skip_serializing_if = "Option::is_none")]
    pub iv: Option<Vec<u8>>,
    #[serde(default, with = "b64_opt", skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<u8>>,
}

impl Envelope {
    /// Parse the payload of a token.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedToken` if the payload is not base64,
    /// not JSON, or lacks a required field.
    pub fn parse(payload: &str) -> Result<Self> {
        let json = STANDARD
            .decode(payload)
            .map_err(|e| CipherError::MalformedToken(format!("invalid base64: {}", e)))?;
        serde_json::from_slice(&json)
            .map_err(|e| CipherError::MalformedToken(format!("invalid envelope: {}", e)).into())
    }

    /// Encode the envelope as a token payload.
    pub fn seal(&self) -> Result<String> {
        let json = serde_json::to_vec(self).map_err(|e| {
            CipherError::EncryptionFailed(format!("failed to serialize envelope: {}", e))
        })?;
        Ok(STANDARD.encode(json))
    }

    /// Encode the envelope as a complete `${enc:...}` token.
    pub fn to_token(&self) -> Result<String> {
        Ok(token::wrap(&self.seal()?))
    }
}

mod b64 {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(de::Error::custom)
    }
}

mod b64_opt {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        bytes: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match bytes {
            Some(b) => serializer.serialize_str(&STANDARD.encode(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| STANDARD.decode(s).map_err(de::Error::custom))
            .transpose()
    }
}
