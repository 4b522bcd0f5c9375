//! `wn remote` - run a command on the deploy host
//!
//! The host comes from the webbynode remote url in the repository config;
//! the command itself is whatever positional parameters were given, joined.

use crate::commands::resolver::ResolvedCommand;
use crate::commands::schema::{CommandSpec, ValueKind};
use crate::context::Context;
use crate::error::WnResult;

pub fn spec() -> CommandSpec {
    CommandSpec::new("Executes a command on the deploy host").parameter(
        "cmd",
        ValueKind::Text,
        "The command to execute remotely",
    )
}

pub fn run(command: &ResolvedCommand, ctx: &mut Context) -> WnResult<()> {
    if command.params.is_empty() {
        print!("{}", command.help());
        return Ok(());
    }

    let host = ctx.git.remote_ip()?.to_string();
    let output = ctx
        .remote_executor
        .exec(&host, &command.params.join(" "))?;
    print!("{output}");
    Ok(())
}
