//! `wn push` - publish committed changes to the deploy host

use crate::commands::resolver::ResolvedCommand;
use crate::commands::schema::CommandSpec;
use crate::context::Context;
use crate::error::{WnError, WnResult};
use crate::git::REMOTE_NAME;

pub fn spec() -> CommandSpec {
    CommandSpec::new("Publishes the application to your Webby")
}

pub fn run(_command: &ResolvedCommand, ctx: &mut Context) -> WnResult<()> {
    let app_name = ctx.io.app_name();
    println!("Publishing {app_name} to Webbynode...");

    // git push reports progress on stderr even on success, so its output is
    // streamed back rather than judged against a success shape
    let output = ctx
        .io
        .exec(&format!("git push {REMOTE_NAME} master"))
        .map_err(WnError::Io)?;
    print!("{output}");

    ctx.notifier
        .message(&format!("Application {app_name} successfully pushed."));
    Ok(())
}
