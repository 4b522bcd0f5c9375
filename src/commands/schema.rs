//! Declarative command schemas and help rendering
//!
//! Each command variant owns one immutable `CommandSpec`, built at
//! registration time and never mutated per invocation. The spec drives the
//! help text; it does not hard-enforce required parameters at parse time -
//! "required" is surfaced to the user through the usage line only.

use std::fmt::Write as _;

/// Program name shown in usage lines
pub const PROGRAM: &str = "wn";

/// Names are padded into this field so help output is stable and diffable
const NAME_COLUMN: usize = 28;

/// Semantic type of a parameter or option value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free-form text
    Text,
    /// A hostname or IP address
    Host,
}

/// One positional parameter. Order of declaration is significant.
#[derive(Debug, Clone)]
pub struct ParameterDef {
    pub name: &'static str,
    pub kind: ValueKind,
    pub description: &'static str,
    pub required: bool,
}

/// One named option. Options are identified by name only.
#[derive(Debug, Clone)]
pub struct OptionDef {
    pub name: &'static str,
    pub kind: ValueKind,
    pub description: &'static str,
    /// Value label shown in help as `--name=placeholder`
    pub placeholder: Option<&'static str>,
}

/// Immutable per-command schema: description, ordered parameters, options
#[derive(Debug, Clone)]
pub struct CommandSpec {
    description: &'static str,
    parameters: Vec<ParameterDef>,
    options: Vec<OptionDef>,
}

impl CommandSpec {
    pub fn new(description: &'static str) -> Self {
        CommandSpec {
            description,
            parameters: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Declare a required positional parameter
    pub fn parameter(
        mut self,
        name: &'static str,
        kind: ValueKind,
        description: &'static str,
    ) -> Self {
        self.parameters.push(ParameterDef {
            name,
            kind,
            description,
            required: true,
        });
        self
    }

    /// Declare an optional positional parameter
    pub fn optional_parameter(
        mut self,
        name: &'static str,
        kind: ValueKind,
        description: &'static str,
    ) -> Self {
        self.parameters.push(ParameterDef {
            name,
            kind,
            description,
            required: false,
        });
        self
    }

    /// Declare a named option
    pub fn option(
        mut self,
        name: &'static str,
        kind: ValueKind,
        description: &'static str,
        placeholder: Option<&'static str>,
    ) -> Self {
        self.options.push(OptionDef {
            name,
            kind,
            description,
            placeholder,
        });
        self
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    /// Render help for a command invoked as `command_name`.
    ///
    /// Layout: usage line with required parameters bare and optional ones
    /// bracketed in declaration order, then a Parameters block, then an
    /// Options block, names left-padded into a fixed column.
    pub fn render_help(&self, command_name: &str) -> String {
        let mut help = String::new();
        let _ = writeln!(help, "{}", self.description);
        let _ = writeln!(help);

        let mut usage = format!("Usage: {PROGRAM} {command_name}");
        for param in &self.parameters {
            if param.required {
                let _ = write!(usage, " {}", param.name);
            } else {
                let _ = write!(usage, " [{}]", param.name);
            }
        }
        if !self.options.is_empty() {
            usage.push_str(" [options]");
        }
        let _ = writeln!(help, "{usage}");

        if !self.parameters.is_empty() {
            let _ = writeln!(help);
            let _ = writeln!(help, "Parameters:");
            for param in &self.parameters {
                let suffix = if param.required { "" } else { ", optional" };
                let _ = writeln!(
                    help,
                    "    {:<NAME_COLUMN$}{}{}",
                    param.name, param.description, suffix
                );
            }
        }

        if !self.options.is_empty() {
            let _ = writeln!(help);
            let _ = writeln!(help, "Options:");
            for option in &self.options {
                let label = match option.placeholder {
                    Some(placeholder) => format!("--{}={}", option.name, placeholder),
                    None => format!("--{}", option.name),
                };
                let _ = writeln!(help, "    {:<NAME_COLUMN$}{}", label, option.description);
            }
        }

        help
    }
}
