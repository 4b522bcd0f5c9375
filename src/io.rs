//! Io port - abstraction over subprocess execution and filesystem probes
//!
//! This trait is the only way the git layer and command behaviors touch the
//! operating system, so tests can substitute a scripted implementation and
//! assert on the exact commands that would have run.

use std::io;
use std::path::Path;
use std::process::Command;

/// Abstract OS interface
///
/// Implementations:
/// - `LocalIo` - real subprocesses and file I/O in the current directory
/// - scripted fakes in the test suite
pub trait Io {
    /// Run a shell command, capturing stdout and stderr combined as raw text
    fn exec(&self, command: &str) -> io::Result<String>;

    /// Check whether a directory exists at the given path
    fn directory_exists(&self, path: &str) -> bool;

    /// Check whether a regular file exists at the given path
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file's contents as a string
    fn read_file(&self, path: &str) -> io::Result<String>;

    /// Create a file with the given contents, skipping if one is present
    fn create_file(&self, path: &str, contents: &str) -> io::Result<()>;

    /// Mark a file as executable
    fn make_executable(&self, path: &str) -> io::Result<()>;

    /// The application name: the last segment of the working directory
    fn app_name(&self) -> String;

    /// Check whether a helper binary is reachable on PATH
    fn in_path(&self, binary: &str) -> bool;
}

/// Real OS implementation, operating on the current working directory
#[derive(Debug, Default)]
pub struct LocalIo;

impl LocalIo {
    pub fn new() -> Self {
        LocalIo
    }
}

impl Io for LocalIo {
    fn exec(&self, command: &str) -> io::Result<String> {
        let output = Command::new("sh").arg("-c").arg(command).output()?;
        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn create_file(&self, path: &str, contents: &str) -> io::Result<()> {
        if self.file_exists(path) {
            return Ok(());
        }
        std::fs::write(path, contents)
    }

    fn make_executable(&self, path: &str) -> io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(perms.mode() | 0o755);
            std::fs::set_permissions(path, perms)?;
        }
        #[cfg(not(unix))]
        let _ = path;
        Ok(())
    }

    fn app_name(&self) -> String {
        std::env::current_dir()
            .ok()
            .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "app".to_string())
    }

    fn in_path(&self, binary: &str) -> bool {
        Command::new("sh")
            .arg("-c")
            .arg(format!("command -v {binary}"))
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn exec_captures_stdout_and_stderr() {
        let io = LocalIo::new();
        let out = io.exec("echo visible; echo hidden 1>&2").unwrap();
        assert!(out.contains("visible"));
        assert!(out.contains("hidden"));
    }

    #[test]
    fn create_file_skips_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("descriptor");
        let path = path.to_str().unwrap();

        let io = LocalIo::new();
        io.create_file(path, "first").unwrap();
        io.create_file(path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "first");
    }

    #[test]
    fn probes_distinguish_files_from_directories() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let io = LocalIo::new();
        assert!(io.directory_exists(sub.to_str().unwrap()));
        assert!(!io.file_exists(sub.to_str().unwrap()));
        assert!(io.file_exists(file.to_str().unwrap()));
        assert!(!io.directory_exists(file.to_str().unwrap()));
    }
}
