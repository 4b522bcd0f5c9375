//! Precondition chain and command dispatch
//!
//! Commands that act on an initialized deployment run the environment checks
//! first, strictly in order, stopping at the first failure. Behavior errors
//! propagate to the caller unwrapped.

use crate::commands::{init, push, remote, version, CommandKind};
use crate::context::Context;
use crate::error::{WnError, WnResult};
use crate::commands::resolver::ResolvedCommand;

/// Run a resolved command against the given collaborators
pub fn run(command: &ResolvedCommand, ctx: &mut Context) -> WnResult<()> {
    if command.kind.requires_initialization() {
        check_preconditions(ctx)?;
    }

    match command.kind {
        CommandKind::Init => init::run(command, ctx),
        CommandKind::Push => push::run(command, ctx),
        CommandKind::Remote => remote::run(command, ctx),
        CommandKind::Version => version::run(command, ctx),
    }
}

/// The initialization precondition chain.
///
/// Order is contractual: repository presence, then remote presence, then the
/// local marker directory, then the deployment descriptor. The marker probe
/// is observed but is never a failure on its own.
fn check_preconditions(ctx: &mut Context) -> WnResult<()> {
    if !ctx.git.present() {
        return Err(WnError::GitNotRepo(
            "Could not find a git repository.".to_string(),
        ));
    }

    if !ctx.git.remote_configured() {
        return Err(WnError::GitRemoteDoesNotExist(
            "Webbynode has not been initialized for this git repository.".to_string(),
        ));
    }

    let _initialized_locally = ctx.io.directory_exists(".webbynode");

    if !ctx.io.file_exists(".pushand") {
        return Err(WnError::PushAndFileNotFound(
            "Could not find .pushand file, has Webbynode been initialized for this repository?"
                .to_string(),
        ));
    }

    Ok(())
}
