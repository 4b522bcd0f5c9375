//! Remote execution port
//!
//! Commands that act on the deploy host (the `remote` command, server-side
//! maintenance) go through this trait. The real implementation rides ssh; the
//! test suite substitutes a recording fake.

use std::process::Command;

use crate::error::{WnError, WnResult};

/// Runs commands on the deploy host
pub trait RemoteExecutor {
    /// Execute `command` on `host`, returning combined stdout/stderr
    fn exec(&self, host: &str, command: &str) -> WnResult<String>;
}

/// ssh-backed executor, connecting as the `git` deploy user
#[derive(Debug, Default)]
pub struct SshExecutor;

impl SshExecutor {
    pub fn new() -> Self {
        SshExecutor
    }
}

impl RemoteExecutor for SshExecutor {
    fn exec(&self, host: &str, command: &str) -> WnResult<String> {
        let output = Command::new("ssh")
            .arg(format!("git@{host}"))
            .arg(command)
            .output()
            .map_err(|e| WnError::Git(format!("ssh failed to start: {e}")))?;

        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(text)
        } else {
            Err(WnError::Git(text))
        }
    }
}
