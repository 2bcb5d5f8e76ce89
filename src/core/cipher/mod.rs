//! Cryptographic operations.
//!
//! Algorithms are dispatched by tag through a process-wide registry that
//! starts with the built-in algorithms and grows only by explicit
//! [`register`] calls.
//!
//! ## Backends
//!
//! - **AES**: AES-GCM with 128 or 256 bit keys. Always available.
//!
//! ## Adding a New Algorithm
//!
//! 1. Implement the `Algorithm` trait
//! 2. Add the implementation in a new file
//! 3. Register it, either in `Registry::with_defaults` or at startup via
//!    [`register`]

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::core::envelope::Envelope;
use crate::core::key::KeyWithType;
use crate::error::{CipherError, Result};

mod aes;

pub use aes::AesGcm;

/// An encryption algorithm that can be looked up by tag.
pub trait Algorithm: Send + Sync {
    /// Tag used in keys and envelopes, e.g. `AES`.
    fn name(&self) -> &'static str;

    /// Generate fresh random key bytes.
    fn generate_key(&self) -> Vec<u8>;

    /// Validate key bytes for this algorithm.
    ///
    /// # Errors
    ///
    /// Returns `KeyError` if the key cannot be used.
    fn check_key(&self, key: &[u8]) -> Result<()>;

    /// Encrypt plaintext into an envelope tagged with [`name`](Self::name).
    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Envelope>;

    /// Decrypt an envelope produced by this algorithm.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::AuthenticationFailed` when the value was
    /// tampered with or the key is wrong, `CipherError::MalformedToken` when
    /// algorithm-specific fields are missing.
    fn decrypt(&self, envelope: &Envelope, key: &[u8]) -> Result<Vec<u8>>;
}

/// Mapping from algorithm tag to implementation.
#[derive(Default, Clone)]
pub struct Registry {
    algorithms: HashMap<String, Arc<dyn Algorithm>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in algorithms.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(AesGcm);
        registry
    }

    /// Add or replace an algorithm under its own tag.
    pub fn register<A: Algorithm + 'static>(&mut self, algorithm: A) {
        debug!(algorithm = algorithm.name(), "registering algorithm");
        self.algorithms
            .insert(algorithm.name().to_string(), Arc::new(algorithm));
    }

    /// Look up an algorithm by tag.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Algorithm>> {
        self.algorithms
            .get(name)
            .cloned()
            .ok_or_else(|| CipherError::UnsupportedAlgorithm(name.to_string()).into())
    }

    /// Registered tags, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.algorithms.keys().cloned().collect();
        names.sort();
        names
    }

    /// Encrypt with the algorithm the key belongs to.
    pub fn encrypt(&self, plaintext: &[u8], key: &KeyWithType) -> Result<Envelope> {
        self.lookup(key.algorithm())?.encrypt(plaintext, key.bytes())
    }

    /// Decrypt an envelope, dispatching on its algorithm tag.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::UnsupportedAlgorithm` for an unknown tag and
    /// `CipherError::KeyAlgorithmMismatch` if the key is for a different
    /// algorithm than the envelope.
    pub fn decrypt(&self, envelope: &Envelope, key: &KeyWithType) -> Result<Vec<u8>> {
        self.resolve(envelope, key)?.decrypt(envelope, key.bytes())
    }

    /// Pick the algorithm that can open `envelope` with `key`.
    ///
    /// Same checks and order as [`decrypt`](Self::decrypt), without
    /// running the cipher.
    pub fn resolve(&self, envelope: &Envelope, key: &KeyWithType) -> Result<Arc<dyn Algorithm>> {
        let algorithm = self.lookup(&envelope.algorithm)?;
        if envelope.algorithm != key.algorithm() {
            return Err(CipherError::KeyAlgorithmMismatch {
                key: key.algorithm().to_string(),
                envelope: envelope.algorithm.clone(),
            }
            .into());
        }
        Ok(algorithm)
    }
}

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::with_defaults()));

/// Register an algorithm in the process-wide registry.
pub fn register<A: Algorithm + 'static>(algorithm: A) {
    REGISTRY.write().register(algorithm);
}

/// Look up an algorithm in the process-wide registry.
pub fn lookup(name: &str) -> Result<Arc<dyn Algorithm>> {
    REGISTRY.read().lookup(name)
}

/// Tags known to the process-wide registry.
pub fn algorithms() -> Vec<String> {
    REGISTRY.read().names()
}

/// Encrypt plaintext bytes with `key`.
pub fn encrypt(plaintext: &[u8], key: &KeyWithType) -> Result<Envelope> {
    let algorithm = lookup(key.algorithm())?;
    algorithm.encrypt(plaintext, key.bytes())
}

/// Decrypt an envelope with `key`.
///
/// The registry lock is released before the cipher runs, so an algorithm
/// may itself use the registry.
pub fn decrypt(envelope: &Envelope, key: &KeyWithType) -> Result<Vec<u8>> {
    let algorithm = REGISTRY.read().resolve(envelope, key)?;
    algorithm.decrypt(envelope, key.bytes())
}
