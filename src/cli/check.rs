//! Check command.
//!
//! Lists the paths in a document that still hold encrypted tokens.

use std::path::Path;

use crate::cli::document::Document;
use crate::cli::output;
use crate::core::substitute;
use crate::error::Result;

/// List encrypted paths in the document at `path`.
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let doc = Document::load(path)?;
    let found = substitute::find_encrypted(&doc)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        output::hint(&format!("no encrypted values in {}", path.display()));
        return Ok(());
    }

    output::header(&format!("{} encrypted value(s)", found.len()));
    for p in &found {
        output::encrypted_path(p);
    }
    Ok(())
}
