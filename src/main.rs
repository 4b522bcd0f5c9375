//! wn CLI - push-to-deploy client for Webbynode hosts
//!
//! Usage: wn <command> [param...] [--option[=value]]...

use anyhow::Result;

use wn::{executor, CommandKind, Context, Registry, ResolvedCommand, PROGRAM};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some((name, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    let registry = Registry::with_builtins();
    let command = ResolvedCommand::resolve(&registry, name, rest)?;

    let mut ctx = Context::local();
    executor::run(&command, &mut ctx)?;
    Ok(())
}

fn print_usage() {
    println!("Usage: {PROGRAM} <command> [param...] [--option[=value]]...");
    println!();
    println!("Commands:");
    for kind in CommandKind::all() {
        println!("    {:<28}{}", kind.canonical_name(), kind.spec().description());
    }
}
