//! Command variants and their registration metadata
//!
//! The command set is closed: one enum variant per command, each carrying its
//! schema, aliases and precondition requirements. Resolution maps raw tokens
//! onto these variants through the registry in `resolver`.

pub mod executor;
pub mod resolver;
pub mod schema;

mod init;
mod push;
mod remote;
mod version;

use crate::commands::schema::CommandSpec;

/// Every command wn knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Init,
    Push,
    Remote,
    Version,
}

impl CommandKind {
    pub fn all() -> [CommandKind; 4] {
        [
            CommandKind::Init,
            CommandKind::Push,
            CommandKind::Remote,
            CommandKind::Version,
        ]
    }

    /// The declared type identifier, the registry's primary key
    pub fn type_ident(&self) -> &'static str {
        match self {
            CommandKind::Init => "Init",
            CommandKind::Push => "Push",
            CommandKind::Remote => "Remote",
            CommandKind::Version => "Version",
        }
    }

    /// Lowercase underscore-joined form of the type identifier
    pub fn canonical_name(&self) -> String {
        resolver::canonical_name(self.type_ident())
    }

    /// Extra lookup names beyond the canonical one
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CommandKind::Push => &["deploy"],
            _ => &[],
        }
    }

    /// Whether the initialization precondition chain runs before dispatch
    pub fn requires_initialization(&self) -> bool {
        matches!(self, CommandKind::Push | CommandKind::Remote)
    }

    /// The immutable parameter/option schema of this command
    pub fn spec(&self) -> CommandSpec {
        match self {
            CommandKind::Init => init::spec(),
            CommandKind::Push => push::spec(),
            CommandKind::Remote => remote::spec(),
            CommandKind::Version => version::spec(),
        }
    }
}
