//! Decrypt command.
//!
//! Decrypts every token in a JSON or TOML document and prints the result,
//! or rewrites the file with `--in-place`.

use std::fs;
use std::path::Path;

use crate::cli::document::Document;
use crate::cli::output;
use crate::core::key::KeyWithType;
use crate::core::substitute;
use crate::error::Result;

/// Decrypt the document at `path`.
pub fn execute(path: &Path, in_place: bool, key: &KeyWithType) -> Result<()> {
    let mut doc = Document::load(path)?;
    substitute::decrypt_in_place(&mut doc, key)?;
    let rendered = doc.render()?;

    if in_place {
        fs::write(path, rendered)?;
        output::success(&format!("decrypted {}", output::file(path)));
    } else {
        print!("{}", rendered);
    }
    Ok(())
}
