//! AES-GCM algorithm implementation.
//!
//! The envelope carries the ciphertext and the 16-byte authentication tag
//! separately, plus the 96-bit nonce as `iv`.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce};
use rand::RngCore;
use tracing::trace;

use super::Algorithm;
use crate::core::envelope::Envelope;
use crate::error::{CipherError, KeyError, Result};

const NAME: &str = "AES";
const MODE: &str = "GCM";
const NONCE_SIZE: usize = 12;
const TAG_SIZE: usize = 16;
const KEY_SIZE: usize = 32;

/// AES in Galois/Counter mode with 128 or 256 bit keys.
pub struct AesGcm;

impl AesGcm {
    fn seal(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        let sealed = match key.len() {
            16 => Aes128Gcm::new_from_slice(key)
                .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?
                .encrypt(nonce, plaintext),
            _ => Aes256Gcm::new_from_slice(key)
                .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?
                .encrypt(nonce, plaintext),
        };
        sealed.map_err(|e| CipherError::EncryptionFailed(e.to_string()).into())
    }

    fn open(key: &[u8], nonce: &[u8], sealed: &[u8]) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        let opened = match key.len() {
            16 => Aes128Gcm::new_from_slice(key)
                .map_err(|e| CipherError::DecryptionFailed(e.to_string()))?
                .decrypt(nonce, sealed),
            _ => Aes256Gcm::new_from_slice(key)
                .map_err(|e| CipherError::DecryptionFailed(e.to_string()))?
                .decrypt(nonce, sealed),
        };
        // aead::Error is opaque; the only decrypt-time failure is the tag check
        opened.map_err(|_| CipherError::AuthenticationFailed.into())
    }
}

impl Algorithm for AesGcm {
    fn name(&self) -> &'static str {
        NAME
    }

    fn generate_key(&self) -> Vec<u8> {
        let mut key = vec![0u8; KEY_SIZE];
        rand::thread_rng().fill_bytes(&mut key);
        key
    }

    fn check_key(&self, key: &[u8]) -> Result<()> {
        match key.len() {
            16 | 32 => Ok(()),
            len => Err(KeyError::InvalidKeyLength {
                algorithm: NAME.to_string(),
                len,
            }
            .into()),
        }
    }

    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Envelope> {
        self.check_key(key)?;
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let mut nonce = [0u8; NONCE_SIZE];
        rand::thread_rng().fill_bytes(&mut nonce);

        let mut ciphertext = Self::seal(key, &nonce, plaintext)?;
        let tag = ciphertext.split_off(ciphertext.len() - TAG_SIZE);

        Ok(Envelope {
            algorithm: NAME.to_string(),
            mode: MODE.to_string(),
            ciphertext,
            iv: Some(nonce.to_vec()),
            tag: Some(tag),
        })
    }

    fn decrypt(&self, envelope: &Envelope, key: &[u8]) -> Result<Vec<u8>> {
        self.check_key(key)?;
        if envelope.mode != MODE {
            return Err(CipherError::MalformedToken(format!(
                "unsupported {} mode: {}",
                NAME, envelope.mode
            ))
            .into());
        }
        let iv = envelope
            .iv
            .as_deref()
            .filter(|iv| iv.len() == NONCE_SIZE)
            .ok_or_else(|| {
                CipherError::MalformedToken(format!("{} requires a {}-byte iv", NAME, NONCE_SIZE))
            })?;
        let tag = envelope
            .tag
            .as_deref()
            .filter(|tag| tag.len() == TAG_SIZE)
            .ok_or_else(|| {
                CipherError::MalformedToken(format!("{} requires a {}-byte tag", NAME, TAG_SIZE))
            })?;

        trace!(ciphertext_len = envelope.ciphertext.len(), "decrypting");

        let mut sealed = Vec::with_capacity(envelope.ciphertext.len() + TAG_SIZE);
        sealed.extend_from_slice(&envelope.ciphertext);
        sealed.extend_from_slice(tag);
        Self::open(key, iv, &sealed)
    }
}
