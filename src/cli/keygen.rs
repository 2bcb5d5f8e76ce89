//! Keygen command.
//!
//! Generates a random key and prints it or writes it to a key file.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::config;
use crate::core::key::KeyWithType;
use crate::error::Result;

/// Generate a key for `algorithm`.
pub fn execute(algorithm: &str, out: Option<&Path>, force: bool) -> Result<()> {
    let key = KeyWithType::generate(algorithm)?;
    debug!(
        algorithm = key.algorithm(),
        bits = key.bytes().len() * 8,
        "generated key"
    );

    match out {
        Some(path) => {
            config::write_key_file(path, &key, force)?;
            output::success(&format!(
                "wrote {} key to {}",
                key.algorithm(),
                output::file(path)
            ));
        }
        None => println!("{}", key.encode().as_str()),
    }
    Ok(())
}
