//! Core library components.
//!
//! Token scanning, the envelope codec, the cipher registry and the value
//! walker. Everything here is an in-memory transform; file access lives in
//! `config` and the CLI.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod envelope;
pub mod key;
pub mod substitute;
pub mod token;
pub mod walk;
