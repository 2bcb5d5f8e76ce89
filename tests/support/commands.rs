//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an encvar command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME pointing at the temporary home
    /// - key env vars cleared, colors and logging off
    /// - current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("encvar").expect("failed to find encvar binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path());
        cmd.env_remove("ENCVAR_KEY");
        cmd.env_remove("ENCVAR_KEY_FILE");
        cmd.env_remove("ENCVAR_LOG");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `encvar keygen --output <name>`.
    pub fn keygen(&self, name: &str) -> Output {
        self.cmd()
            .args(["keygen", "--output", name])
            .output()
            .expect("failed to run encvar keygen")
    }

    /// Shortcut for `encvar encrypt <value> --key <key>`.
    pub fn encrypt(&self, value: &str, key: &str) -> Output {
        self.cmd()
            .args(["encrypt", value, "--key", key])
            .output()
            .expect("failed to run encvar encrypt")
    }

    /// Shortcut for `encvar decrypt <file> --key <key>`.
    pub fn decrypt(&self, file: &str, key: &str) -> Output {
        self.cmd()
            .args(["decrypt", file, "--key", key])
            .output()
            .expect("failed to run encvar decrypt")
    }

    /// Shortcut for `encvar check <file>`.
    pub fn check(&self, file: &str) -> Output {
        self.cmd()
            .args(["check", file])
            .output()
            .expect("failed to run encvar check")
    }
}
