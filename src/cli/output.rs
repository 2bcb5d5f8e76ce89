//! Terminal output for the CLI.
//!
//! Status lines go to stdout, errors and hints to stderr. Color is
//! dropped when `NO_COLOR` is set.

use std::path::Path;

use colored::{ColoredString, Colorize};

fn plain() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

fn paint(text: &str, style: fn(&str) -> ColoredString) -> String {
    if plain() {
        text.to_string()
    } else {
        style(text).to_string()
    }
}

/// `✓ wrote AES key to /home/me/.config/encvar/key`
pub fn success(msg: &str) {
    println!("{} {}", paint("✓", |s| s.green()), msg);
}

/// `✗ $["db"]["password"]: authentication failed: ...`
pub fn error(msg: &str) {
    eprintln!("{} {}", paint("✗", |s| s.red()), msg);
}

/// `→ run: encvar keygen --output <path>`
pub fn hint(msg: &str) {
    eprintln!("{} {}", paint("→", |s| s.cyan()), paint(msg, |s| s.cyan()));
}

/// Bold section header.
pub fn header(title: &str) {
    println!("{}", paint(title, |s| s.bold()));
}

/// One encrypted value path in a listing.
pub fn encrypted_path(path: &str) {
    println!("  • {}", paint(path, |s| s.cyan()));
}

/// A file path, highlighted.
pub fn file(path: &Path) -> String {
    paint(&path.display().to_string(), |s| s.cyan())
}
