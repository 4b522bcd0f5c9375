//! Parser for the git configuration subset wn consumes
//!
//! Reads lines of the form `[section]`, `[section "subkey"]` and
//! `key = value`, as git itself writes them. wn only ever reads this format;
//! it never writes it back. Unrecognized lines are ignored rather than
//! rejected, matching git's own tolerance for decoration it didn't produce.

use std::collections::BTreeMap;

use regex::Regex;

/// Key/value pairs of one section, plus any `[section "subkey"]` nesting
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Section {
    values: BTreeMap<String, String>,
    subsections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Section {
    /// A direct `key = value` entry of this section
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// An entry of a named subsection, e.g. `[remote "origin"]`
    pub fn subsection_value(&self, subkey: &str, key: &str) -> Option<&str> {
        self.subsections
            .get(subkey)
            .and_then(|kv| kv.get(key))
            .map(String::as_str)
    }

    pub fn subsection(&self, subkey: &str) -> Option<&BTreeMap<String, String>> {
        self.subsections.get(subkey)
    }
}

/// Parsed git configuration: section name to its entries
///
/// Section and subsection names are case-preserving. Values are raw strings;
/// no type coercion happens here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigTree {
    /// Entries seen before any section header
    root: BTreeMap<String, String>,
    sections: BTreeMap<String, Section>,
}

/// Where the next `key = value` line lands
enum Cursor {
    Root,
    Section(String),
    Subsection(String, String),
}

impl ConfigTree {
    /// Parse configuration text line by line.
    ///
    /// Malformed lines are skipped, never an error; the fallible part of
    /// loading a config is reading the file, which the caller owns.
    pub fn parse(text: &str) -> ConfigTree {
        let header = Regex::new(r#"^\[(\w+)(?: "(.+)")?\]"#).expect("valid header pattern");

        let mut tree = ConfigTree::default();
        let mut cursor = Cursor::Root;

        for line in text.lines() {
            if let Some(caps) = header.captures(line) {
                let name = caps[1].to_string();
                let section = tree.sections.entry(name.clone()).or_default();
                cursor = match caps.get(2) {
                    Some(subkey) => {
                        let subkey = subkey.as_str().to_string();
                        section.subsections.entry(subkey.clone()).or_default();
                        Cursor::Subsection(name, subkey)
                    }
                    None => Cursor::Section(name),
                };
                continue;
            }

            let Some((key, value)) = line.trim().split_once(" = ") else {
                continue;
            };
            let (key, value) = (key.to_string(), value.to_string());
            match &cursor {
                Cursor::Root => {
                    tree.root.insert(key, value);
                }
                Cursor::Section(name) => {
                    if let Some(section) = tree.sections.get_mut(name) {
                        section.values.insert(key, value);
                    }
                }
                Cursor::Subsection(name, subkey) => {
                    if let Some(kv) = tree
                        .sections
                        .get_mut(name)
                        .and_then(|s| s.subsections.get_mut(subkey))
                    {
                        kv.insert(key, value);
                    }
                }
            }
        }

        tree
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// `key = value` entry of a plain section
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.value(key))
    }

    /// Entry of a `[section "subkey"]` block
    pub fn subsection_value(&self, section: &str, subkey: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.subsection_value(subkey, key))
    }

    /// Entry seen before any section header
    pub fn root_value(&self, key: &str) -> Option<&str> {
        self.root.get(key).map(String::as_str)
    }
}
