//! Constants used throughout encvar.
//!
//! Centralizes the token grammar, env var names and file locations.

/// Opening delimiter of an encrypted token.
pub const TOKEN_PREFIX: &str = "${enc:";

/// Closing delimiter of an encrypted token.
pub const TOKEN_SUFFIX: &str = "}";

/// Separator between algorithm tag and key bytes in the textual key form.
pub const KEY_SEPARATOR: char = ':';

/// Environment variable holding a key in textual form.
pub const KEY_ENV: &str = "ENCVAR_KEY";

/// Environment variable holding the path of a key file.
pub const KEY_FILE_ENV: &str = "ENCVAR_KEY_FILE";

/// Environment variable controlling log output.
pub const LOG_ENV: &str = "ENCVAR_LOG";

/// Default key file location relative to the user config directory.
pub const DEFAULT_KEY_FILE: &str = "encvar/key";

/// Algorithm used when none is requested.
pub const DEFAULT_ALGORITHM: &str = "AES";

/// Longest token excerpt carried in error messages.
pub const TOKEN_EXCERPT_LEN: usize = 24;
