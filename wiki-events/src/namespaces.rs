//! Known page-title namespaces and their aliases.
//!
//! A table is built once per converter from the defaults plus caller supplied
//! aliases and is read-only while converting.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub key: i32,
    pub name: String,
    pub aliases: Vec<String>,
}

impl Namespace {
    fn new(key: i32, name: &str) -> Self {
        Self {
            key,
            name: name.to_string(),
            aliases: Vec::new(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name) || self.aliases.iter().any(|a| eq_ignore_case(a, name))
    }
}

/// Case-insensitive comparison over full Unicode lowercase mappings.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceTable {
    namespaces: BTreeMap<i32, Namespace>,
}

impl NamespaceTable {
    pub const MEDIA: i32 = -2;
    pub const SPECIAL: i32 = -1;
    pub const MAIN: i32 = 0;
    pub const USER: i32 = 2;
    pub const PROJECT: i32 = 4;
    pub const FILE: i32 = 6;
    pub const MEDIAWIKI: i32 = 8;
    pub const TEMPLATE: i32 = 10;
    pub const HELP: i32 = 12;
    pub const CATEGORY: i32 = 14;

    /// The default namespaces.
    pub fn new() -> Self {
        let mut table = Self::empty();
        for (key, name) in [
            (Self::MEDIA, "Media"),
            (Self::SPECIAL, "Special"),
            (Self::MAIN, ""),
            (Self::USER, "User"),
            (Self::PROJECT, "Project"),
            (Self::FILE, "File"),
            (Self::MEDIAWIKI, "MediaWiki"),
            (Self::TEMPLATE, "Template"),
            (Self::HELP, "Help"),
            (Self::CATEGORY, "Category"),
        ] {
            table.namespaces.insert(key, Namespace::new(key, name));
        }
        table.add_alias(Self::FILE, "Image");
        table
    }

    pub fn empty() -> Self {
        Self {
            namespaces: BTreeMap::new(),
        }
    }

    /// The defaults extended with additional aliases keyed by namespace number.
    pub fn with_custom(custom: &BTreeMap<i32, Vec<String>>) -> Self {
        let mut table = Self::new();
        for (key, aliases) in custom {
            for alias in aliases {
                table.add_alias(*key, alias);
            }
        }
        table
    }

    /// Adds an alias. An unknown key creates the namespace with the alias as
    /// its canonical name.
    pub fn add_alias(&mut self, key: i32, alias: &str) {
        match self.namespaces.get_mut(&key) {
            Some(namespace) => {
                if !namespace.matches(alias) {
                    namespace.aliases.push(alias.to_string());
                }
            }
            None => {
                self.namespaces.insert(key, Namespace::new(key, alias));
            }
        }
    }

    pub fn get(&self, key: i32) -> Option<&Namespace> {
        self.namespaces.get(&key)
    }

    /// Looks a namespace up by name or alias, ignoring case.
    pub fn key_of(&self, name: &str) -> Option<i32> {
        self.namespaces
            .values()
            .find(|namespace| namespace.matches(name))
            .map(|namespace| namespace.key)
    }

    /// Canonical name of the namespace `name` belongs to.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let key = self.key_of(name)?;
        self.get(key).map(|namespace| namespace.name.as_str())
    }

    pub fn is_namespace(&self, key: i32, name: &str) -> bool {
        self.get(key).is_some_and(|namespace| namespace.matches(name))
    }

    /// File-like namespaces: files themselves and direct media links.
    pub fn is_file_namespace(&self, name: &str) -> bool {
        self.is_namespace(Self::FILE, name) || self.is_namespace(Self::MEDIA, name)
    }

    /// Returns the file name when `title` lives in a file namespace.
    pub fn file_name<'t>(&self, title: &'t str) -> Option<&'t str> {
        let (namespace, rest) = split_namespace(title)?;
        self.is_file_namespace(namespace).then_some(rest)
    }
}

impl Default for NamespaceTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `ns:rest` at the first colon that is not the first character.
pub fn split_namespace(title: &str) -> Option<(&str, &str)> {
    let first_len = title.chars().next()?.len_utf8();
    let colon = title[first_len..].find(':')? + first_len;
    Some((&title[..colon], &title[colon + 1..]))
}
