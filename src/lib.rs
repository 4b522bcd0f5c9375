//! wn - push-to-deploy command line client for Webbynode hosts
//!
//! wn drives a single local git repository toward a single named remote:
//! commands resolve by name through a registry into typed variants, run an
//! environment precondition chain when they act on an initialized deployment,
//! and shell out to git through an injectable OS boundary.

pub mod commands;
pub mod context;
pub mod error;
pub mod git;
pub mod io;
pub mod notify;
pub mod remote;

// Re-exports for convenience
pub use commands::executor;
pub use commands::resolver::{parse_args, OptionValue, Registry, ResolvedCommand};
pub use commands::schema::{CommandSpec, OptionDef, ParameterDef, ValueKind, PROGRAM};
pub use commands::CommandKind;
pub use context::Context;
pub use error::{WnError, WnResult};
pub use git::{ConfigTree, Git, REMOTE_NAME};
pub use io::{Io, LocalIo};
pub use notify::{DesktopNotifier, Notifier, NullNotifier};
pub use remote::{RemoteExecutor, SshExecutor};
