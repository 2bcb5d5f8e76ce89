//! Encrypt command.

use std::io::{self, Read};

use zeroize::Zeroizing;

use crate::core::key::KeyWithType;
use crate::core::substitute;
use crate::error::Result;

/// Encrypt `value` (or stdin) and print the token.
pub fn execute(value: Option<String>, key: KeyWithType) -> Result<()> {
    let plaintext = match value {
        Some(v) => Zeroizing::new(v),
        None => {
            let mut buf = Zeroizing::new(String::new());
            io::stdin().read_to_string(&mut buf)?;
            // a trailing newline from `echo` is not part of the secret
            let trimmed = buf.trim_end_matches(['\n', '\r']).len();
            buf.truncate(trimmed);
            buf
        }
    };

    println!("{}", substitute::encrypt_str(&plaintext, &key)?);
    Ok(())
}
