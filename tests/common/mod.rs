//! Common test utilities

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated home/config/working directory for running the binary
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Write a global config file under the isolated XDG config dir
    pub fn write_global_config(&self, content: &str) {
        let config_dir = self.config_home().join("palette-contrast");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Write a local .palette-contrast.toml in the working directory
    pub fn write_local_config(&self, content: &str) {
        std::fs::write(self.dir.path().join(".palette-contrast.toml"), content)
            .expect("Failed to write local config");
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// The binary, run inside this environment
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("palette-contrast").expect("binary should build");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home());
        cmd
    }
}

/// Lines of the text report that carry a contrast result
pub fn result_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| l.starts_with("  vs ")).collect()
}
