//! `wn init` - prepare the current folder for push-to-deploy
//!
//! Creates the deployment descriptor and ignore file idempotently, then
//! bootstraps the git repository and webbynode remote when none exists yet.

use crate::commands::resolver::ResolvedCommand;
use crate::commands::schema::{CommandSpec, ValueKind};
use crate::context::Context;
use crate::error::WnResult;
use crate::git::REMOTE_NAME;

const GITIGNORE: &str = "config/database.yml\nlog/*\ntmp/*\ndb/*.sqlite3\n";

pub fn spec() -> CommandSpec {
    CommandSpec::new("Initializes the current folder as a deployable application")
        .parameter("webby", ValueKind::Host, "Name or IP of the Webby to deploy to")
        .optional_parameter("dns", ValueKind::Text, "The DNS used for this application")
        .option(
            "passphrase",
            ValueKind::Text,
            "If present, passphrase will be used when creating a new SSH key",
            Some("words"),
        )
}

pub fn run(command: &ResolvedCommand, ctx: &mut Context) -> WnResult<()> {
    // Missing required parameter is reported via help, not a hard failure
    let Some(webby) = command.param(0) else {
        print!("{}", command.help());
        return Ok(());
    };

    let app_name = ctx.io.app_name();
    let dns = command.param(1).unwrap_or(&app_name);

    if command.option_value("passphrase").is_some() {
        println!("The passphrase will be applied when your SSH key is created.");
    }

    if !ctx.io.file_exists(".pushand") {
        println!("Initializing deployment descriptor for {dns}...");
        ctx.io
            .create_file(".pushand", &format!("#! /bin/bash\nphd $0 {dns}\n"))?;
        ctx.io.make_executable(".pushand")?;
    }

    if !ctx.io.file_exists(".gitignore") {
        println!("Creating .gitignore file...");
        ctx.io.create_file(".gitignore", GITIGNORE)?;
    }

    if !ctx.git.present() {
        println!("Initializing git repository...");
        ctx.git.init()?;
        ctx.git.add_remote(REMOTE_NAME, webby, &app_name)?;
        ctx.git.add(".")?;
        ctx.git.commit("Initial commit")?;
    }

    Ok(())
}
