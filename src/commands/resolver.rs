//! Command resolution: name transforms, alias registry, token parsing
//!
//! A raw CLI token resolves through two tables: explicit aliases first, then
//! the type table keyed by the underscore-to-CamelCase form of the token. The
//! canonical name of a command (its type identifier lowercased and
//! underscore-joined) is therefore always a valid lookup key, alias or not.

use std::collections::{BTreeMap, HashMap};

use crate::commands::CommandKind;
use crate::error::{WnError, WnResult};

/// Value attached to a parsed `--option`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// The option was supplied bare, `--force`
    Flag,
    /// The option carried a value, `--name=value`
    Value(String),
}

impl OptionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Value(value) => Some(value),
        }
    }
}

/// Maps canonical names and aliases to command variants
pub struct Registry {
    aliases: HashMap<String, CommandKind>,
    types: HashMap<String, CommandKind>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            aliases: HashMap::new(),
            types: HashMap::new(),
        }
    }

    /// Registry preloaded with every built-in command
    pub fn with_builtins() -> Self {
        let mut registry = Registry::new();
        for kind in CommandKind::all() {
            registry.register(kind);
        }
        registry
    }

    /// Record a variant under its type identifier and declared aliases
    pub fn register(&mut self, kind: CommandKind) {
        self.types.insert(kind.type_ident().to_string(), kind);
        for alias in kind.aliases() {
            self.register_alias(alias, kind);
        }
    }

    /// Record an extra lookup name for an already-known variant
    pub fn register_alias(&mut self, alias: &str, kind: CommandKind) {
        self.aliases.insert(alias.to_string(), kind);
    }

    /// Resolve a raw command token to its variant.
    ///
    /// Aliases win over the derived type name; a miss on both is fatal.
    pub fn resolve(&self, token: &str) -> WnResult<CommandKind> {
        if let Some(kind) = self.aliases.get(token) {
            return Ok(*kind);
        }
        self.types
            .get(&type_name(token))
            .copied()
            .ok_or_else(|| WnError::UnknownCommand(token.to_string()))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::with_builtins()
    }
}

/// `SomeStrangeStuff` -> `some_strange_stuff`
pub fn canonical_name(type_ident: &str) -> String {
    let mut name = String::with_capacity(type_ident.len() + 4);
    for c in type_ident.chars() {
        if c.is_uppercase() {
            if !name.is_empty() {
                name.push('_');
            }
            name.extend(c.to_lowercase());
        } else {
            name.push(c);
        }
    }
    name
}

/// `some_strange_stuff` -> `SomeStrangeStuff`
pub fn type_name(token: &str) -> String {
    token
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Split raw tokens into positional parameters and an option map.
///
/// One left-to-right pass; options and positionals may interleave freely.
/// Positional order is preserved; a repeated option name is last-write-wins.
pub fn parse_args(tokens: &[String]) -> (Vec<String>, BTreeMap<String, OptionValue>) {
    let mut params = Vec::new();
    let mut options = BTreeMap::new();

    for token in tokens {
        let Some(option) = token.strip_prefix("--") else {
            params.push(token.clone());
            continue;
        };
        match option.split_once('=') {
            Some((name, value)) => {
                options.insert(name.to_string(), OptionValue::Value(unquote(value)));
            }
            None => {
                options.insert(option.to_string(), OptionValue::Flag);
            }
        }
    }

    (params, options)
}

/// Strip one pair of wrapping double quotes, if present
fn unquote(value: &str) -> String {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
        .to_string()
}

/// An instantiated command: variant plus the arguments it was invoked with
#[derive(Debug)]
pub struct ResolvedCommand {
    pub kind: CommandKind,
    pub params: Vec<String>,
    pub options: BTreeMap<String, OptionValue>,
}

impl ResolvedCommand {
    /// Resolve a command token and parse the remaining argument tokens
    pub fn resolve(registry: &Registry, token: &str, tokens: &[String]) -> WnResult<Self> {
        let kind = registry.resolve(token)?;
        let (params, options) = parse_args(tokens);
        Ok(ResolvedCommand {
            kind,
            params,
            options,
        })
    }

    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Value of `--name=value`; None for flags and absent options
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(OptionValue::as_str)
    }

    /// Help text for this command, rendered under its canonical name
    pub fn help(&self) -> String {
        self.kind.spec().render_help(&self.kind.canonical_name())
    }
}
