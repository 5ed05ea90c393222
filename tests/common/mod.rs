//! Common test utilities for argrt integration tests
//!
//! This module provides shared test infrastructure including:
//! - CLI invocation helpers with an isolated config directory
//! - Output capture and exit status mapping

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Exit status codes matching the Rust application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the argrt binary
#[derive(Debug)]
pub struct CliResponse {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status code
    pub exit_status: ExitStatus,
    /// Raw exit code
    pub exit_code: i32,
}

impl CliResponse {
    /// Check if stdout contains a substring
    pub fn contains(&self, needle: &str) -> bool {
        self.stdout.contains(needle)
    }
}

/// Mock environment for testing
pub struct MockEnvironment {
    /// Temporary config directory
    pub config_dir: TempDir,
    /// Environment variables to set
    pub env_vars: HashMap<String, String>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    /// Create a new mock environment
    pub fn new() -> Self {
        let config_dir = TempDir::new().expect("Failed to create temp config dir");
        Self {
            config_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Set an environment variable
    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&mut self, content: &str) -> &mut Self {
        fs::write(self.config_path().join("config.toml"), content)
            .expect("Failed to write config file");
        self
    }

    /// Get the config directory path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().to_path_buf()
    }
}

/// Build a command for the argrt binary isolated from the user's config
pub fn argrt_command(env: &MockEnvironment) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_argrt"));
    cmd.env("ARGRT_CONFIG_DIR", env.config_path());
    cmd.env_remove("ARGRT_LOG");
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd
}

/// Run the argrt binary with the given arguments
///
/// # Arguments
/// * `args` - Command line arguments (excluding the program name)
pub fn argrt(args: &[&str]) -> CliResponse {
    argrt_with_env(args, &MockEnvironment::new())
}

/// Run the argrt binary with the given arguments and environment
pub fn argrt_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let output = argrt_command(env)
        .args(args)
        .output()
        .expect("Failed to execute command");
    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(1);

    CliResponse {
        stdout,
        stderr,
        exit_status: ExitStatus::from(exit_code),
        exit_code,
    }
}
