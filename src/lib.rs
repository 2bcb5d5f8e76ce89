//! encvar - inline encrypted values for configuration.
//!
//! A configuration value can carry a secret as a `${enc:...}` token. The
//! token wraps an encrypted envelope; loading the configuration with a key
//! replaces every token with its plaintext, wherever it sits in the value.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── keygen        # Generate keys
//! │   ├── encrypt       # Produce tokens
//! │   ├── decrypt       # Decrypt JSON/TOML documents
//! │   ├── check         # List encrypted paths
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── token         # ${enc:...} scanning
//!     ├── envelope      # base64 JSON envelope codec
//!     ├── cipher/       # Algorithm registry
//!     │   ├── mod       # Algorithm trait, registry
//!     │   └── aes       # AES-GCM
//!     ├── key           # KeyWithType
//!     ├── walk/         # Value tree traversal
//!     ├── substitute    # decrypt_in_place, copy_with_decrypted
//!     └── config        # Key resolution
//! ```
//!
//! # Example
//!
//! ```
//! use encvar::{copy_with_decrypted, encrypt_str, walk_fields, KeyWithType};
//!
//! #[derive(Clone)]
//! struct Database {
//!     url: String,
//!     password: String,
//! }
//!
//! walk_fields!(Database { url, password });
//!
//! let key = KeyWithType::generate("AES").unwrap();
//! let db = Database {
//!     url: "postgres://db".to_string(),
//!     password: encrypt_str("hunter2", &key).unwrap(),
//! };
//!
//! let plain = copy_with_decrypted(&db, &key).unwrap();
//! assert_eq!(plain.password, "hunter2");
//! assert_eq!(plain.url, "postgres://db");
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::cipher::{Algorithm, Registry};
pub use crate::core::envelope::Envelope;
pub use crate::core::key::KeyWithType;
pub use crate::core::substitute::{
    copy_with_decrypted, decrypt_in_place, decrypt_str, encrypt_str, find_encrypted,
};
pub use crate::core::token::{contains_tokens, find_tokens, is_token, Token};
pub use crate::core::walk::{DynWalk, Segment, Walk, Walker};
pub use crate::error::{Error, Result};
