//! `wn version` - print the client version

use crate::commands::resolver::ResolvedCommand;
use crate::commands::schema::CommandSpec;
use crate::context::Context;
use crate::error::WnResult;

pub fn spec() -> CommandSpec {
    CommandSpec::new("Displays the client version")
}

pub fn run(_command: &ResolvedCommand, _ctx: &mut Context) -> WnResult<()> {
    println!("wn {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
