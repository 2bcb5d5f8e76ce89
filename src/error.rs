//! Error types for encvar.
//!
//! Cipher and key failures have their own enums; [`Error`] wraps them and
//! adds the location of the offending value when the failure happened while
//! walking a value tree.

use thiserror::Error;

/// Failures of the token, envelope and cipher layers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("key is for {key} but value was encrypted with {envelope}")]
    KeyAlgorithmMismatch { key: String, envelope: String },

    #[error("authentication failed: wrong key or tampered value")]
    AuthenticationFailed,

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Failures constructing a [`KeyWithType`](crate::core::key::KeyWithType).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("invalid {algorithm} key length: {len} bytes")]
    InvalidKeyLength { algorithm: String, len: usize },
}

/// Failures of the key-loading layer used by the CLI.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no key configured: pass --key, set ENCVAR_KEY or create {0}")]
    NoKey(String),

    #[error("failed to read key file {path}: {source}")]
    ReadKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("key file already exists: {0} (use --force to overwrite)")]
    KeyFileExists(String),

    #[error("unsupported document format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("unable to determine config directory")]
    NoConfigDir,
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A token reached through a value tree failed to decrypt.
    #[error("{path}: {source} (token {token})")]
    Value {
        path: String,
        token: String,
        #[source]
        source: CipherError,
    },

    /// A shared value could not be borrowed for mutation.
    #[error("{path}: shared value is already borrowed or poisoned")]
    SharedValue { path: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// The cipher-level cause, whether raised directly or while walking.
    pub fn cipher_error(&self) -> Option<&CipherError> {
        match self {
            Self::Cipher(e) | Self::Value { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
