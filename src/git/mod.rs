//! Local repository inspection and mutation
//!
//! Every git invocation funnels through a single output-interpretation step:
//! the "Not a git repository" marker always wins over an operation's own
//! success criterion, so the failure precedence is uniform no matter which
//! operation was attempted. Criteria are deliberately per-operation: `init`
//! succeeds only on its confirmation banner, everything else only on silence.

pub mod config;

use std::rc::Rc;

use regex::Regex;

use crate::error::{WnError, WnResult};
use crate::io::Io;

pub use config::ConfigTree;

/// The remote name wn deploys through
pub const REMOTE_NAME: &str = "webbynode";

const CONFIG_PATH: &str = ".git/config";

/// How a git invocation's raw output is judged
enum Criterion {
    /// Success iff the output is empty
    Silence,
    /// Success iff the output carries the init confirmation banner
    InitConfirmation,
    /// Silence, but an "already exists" collision gets its own error
    RemoteAdded,
}

/// Inspects and mutates the repository in the working directory.
///
/// Holds the parsed config and derived deploy host as computed-once values;
/// both live as long as this instance, so a fresh `Git` is the re-parse point
/// if the on-disk config changes.
pub struct Git {
    io: Rc<dyn Io>,
    config: Option<ConfigTree>,
    remote_ip: Option<String>,
}

impl Git {
    pub fn new(io: Rc<dyn Io>) -> Self {
        Git {
            io,
            config: None,
            remote_ip: None,
        }
    }

    /// Whether version-control metadata exists in the working directory
    pub fn present(&self) -> bool {
        self.io.directory_exists(".git")
    }

    /// Initialize a repository; succeeds only on git's confirmation banner
    pub fn init(&self) -> WnResult<()> {
        self.run("git init", Criterion::InitConfirmation)
    }

    /// Stage a pathspec
    pub fn add(&self, what: &str) -> WnResult<()> {
        self.run(&format!("git add {what}"), Criterion::Silence)
    }

    /// Add a named remote pointing at `git@host:repo`
    pub fn add_remote(&self, name: &str, host: &str, repo: &str) -> WnResult<()> {
        self.run(
            &format!("git remote add {name} git@{host}:{repo}"),
            Criterion::RemoteAdded,
        )
    }

    /// Commit staged changes; embedded double quotes are escaped
    pub fn commit(&self, message: &str) -> WnResult<()> {
        let message = message.replace('"', "\\\"");
        self.run(&format!("git commit -m \"{message}\""), Criterion::Silence)
    }

    /// Whether the remote list carries the webbynode marker name
    pub fn remote_configured(&self) -> bool {
        self.io
            .exec("git remote")
            .map(|output| output.contains(REMOTE_NAME))
            .unwrap_or(false)
    }

    /// Parse `.git/config`, computed once per instance.
    ///
    /// Repository presence is checked before remote presence; a missing repo
    /// always wins. Only the file read can fail with `ConfigParse` - the
    /// parser itself tolerates anything.
    pub fn parse_config(&mut self) -> WnResult<&ConfigTree> {
        let tree = match self.config.take() {
            Some(tree) => tree,
            None => {
                if !self.present() {
                    return Err(WnError::GitNotRepo(
                        "Git repository does not exist.".to_string(),
                    ));
                }
                if !self.remote_configured() {
                    return Err(WnError::GitRemoteDoesNotExist(
                        "Webbynode has not been initialized.".to_string(),
                    ));
                }
                let text = self
                    .io
                    .read_file(CONFIG_PATH)
                    .map_err(WnError::ConfigParse)?;
                ConfigTree::parse(&text)
            }
        };
        Ok(self.config.insert(tree))
    }

    /// Deploy host from the webbynode remote url, computed once per instance
    pub fn remote_ip(&mut self) -> WnResult<&str> {
        let ip = match self.remote_ip.take() {
            Some(ip) => ip,
            None => {
                let url = self
                    .parse_config()?
                    .subsection_value("remote", REMOTE_NAME, "url")
                    .ok_or_else(|| {
                        WnError::Git(format!("remote {REMOTE_NAME} has no url configured"))
                    })?
                    .to_string();
                host_of(&url).ok_or_else(|| {
                    WnError::Git(format!("could not derive deploy host from url {url}"))
                })?
            }
        };
        Ok(self.remote_ip.insert(ip).as_str())
    }

    fn run(&self, command: &str, criterion: Criterion) -> WnResult<()> {
        let output = self
            .io
            .exec(command)
            .map_err(|e| WnError::Git(e.to_string()))?;
        interpret(&output, criterion)
    }
}

/// Judge raw git output. The not-a-repository marker is checked first,
/// regardless of which operation produced the output.
fn interpret(output: &str, criterion: Criterion) -> WnResult<()> {
    if output.contains("Not a git repository") {
        return Err(WnError::GitNotRepo(output.to_string()));
    }

    match criterion {
        Criterion::Silence => {
            if output.is_empty() {
                Ok(())
            } else {
                Err(WnError::Git(output.to_string()))
            }
        }
        Criterion::InitConfirmation => {
            let confirmed = Regex::new(r"^Initialized empty Git repository in")
                .expect("valid init pattern")
                .is_match(output);
            if confirmed {
                Ok(())
            } else {
                Err(WnError::Git(output.to_string()))
            }
        }
        Criterion::RemoteAdded => {
            let collision = Regex::new(r"remote \w+ already exists")
                .expect("valid collision pattern")
                .is_match(output);
            if collision {
                return Err(WnError::GitRemoteAlreadyExists(output.to_string()));
            }
            if output.is_empty() {
                Ok(())
            } else {
                Err(WnError::Git(output.to_string()))
            }
        }
    }
}

/// Extract the host from a `user@host:repo` deploy url
fn host_of(url: &str) -> Option<String> {
    let re = Regex::new(r"^(\w+)@(.+):(.+)$").expect("valid url pattern");
    re.captures(url).map(|caps| caps[2].to_string())
}
