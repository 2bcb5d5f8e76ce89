//! Command-line interface.

pub mod check;
pub mod completions;
pub mod decrypt;
pub mod document;
pub mod encrypt;
pub mod keygen;
pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::KeySource;
use crate::core::constants::{DEFAULT_ALGORITHM, KEY_ENV, KEY_FILE_ENV};
use crate::core::key::KeyWithType;
use crate::error::Result;

/// encvar - inline encrypted values for configuration files.
#[derive(Parser)]
#[command(
    name = "encvar",
    about = "Inline encrypted values for configuration files",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Key selection shared by commands that need a key.
#[derive(Args, Debug, Clone, Default)]
pub struct KeyArgs {
    /// Key in <ALGO>:<base64> form
    #[arg(long, env = KEY_ENV, hide_env_values = true)]
    pub key: Option<String>,

    /// File holding a key in <ALGO>:<base64> form
    #[arg(long, env = KEY_FILE_ENV)]
    pub key_file: Option<PathBuf>,
}

impl KeyArgs {
    /// Resolve and load the key.
    pub fn load(self) -> Result<KeyWithType> {
        KeySource::resolve(self.key, self.key_file)?.load()
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a new key
    Keygen {
        /// Algorithm of the key
        #[arg(short, long, default_value = DEFAULT_ALGORITHM)]
        algorithm: String,
        /// Write the key to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing key file
        #[arg(short, long)]
        force: bool,
    },

    /// Encrypt a value and print it as an ${enc:...} token
    Encrypt {
        /// Value to encrypt (read from stdin when omitted)
        value: Option<String>,
        #[command(flatten)]
        key: KeyArgs,
    },

    /// Decrypt every token in a JSON or TOML file
    Decrypt {
        /// Path to the document
        path: PathBuf,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        in_place: bool,
        #[command(flatten)]
        key: KeyArgs,
    },

    /// List the paths in a JSON or TOML file that hold tokens
    Check {
        /// Path to the document
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    use Command::*;

    match command {
        Keygen {
            algorithm,
            output,
            force,
        } => keygen::execute(&algorithm, output.as_deref(), force),
        Encrypt { value, key } => encrypt::execute(value, key.load()?),
        Decrypt {
            path,
            in_place,
            key,
        } => decrypt::execute(&path, in_place, &key.load()?),
        Check { path, json } => check::execute(&path, json),
        Completions { shell } => completions::execute(shell),
    }
}
