//! Options consumed by a conversion.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Recursion ceiling used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// How raw link and image targets are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceTypePolicy {
    /// Targets are opaque paths.
    None,
    /// Targets go through the structured reference parser.
    #[default]
    Structured,
    /// Targets follow wiki title conventions (underscores, capital first letter).
    Native,
}

impl ReferenceTypePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceTypePolicy::None => "none",
            ReferenceTypePolicy::Structured => "structured",
            ReferenceTypePolicy::Native => "native",
        }
    }
}

impl FromStr for ReferenceTypePolicy {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ReferenceTypePolicy::None),
            "structured" | "xwiki" => Ok(ReferenceTypePolicy::Structured),
            "native" | "mediawiki" => Ok(ReferenceTypePolicy::Native),
            _ => Err(ConvertError::UnknownReferenceType(s.to_string())),
        }
    }
}

impl fmt::Display for ReferenceTypePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    pub reference_type: ReferenceTypePolicy,
    /// Additional namespace aliases keyed by namespace number.
    pub custom_namespaces: BTreeMap<i32, Vec<String>>,
    /// Suppresses table-of-contents markers that were not explicitly requested.
    pub no_toc: bool,
    /// Prefix for macro ids synthesized from template calls.
    pub template_macro_prefix: String,
    pub max_depth: usize,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            reference_type: ReferenceTypePolicy::default(),
            custom_namespaces: BTreeMap::new(),
            no_toc: false,
            template_macro_prefix: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ConverterOptions {
    pub fn with_reference_type(mut self, policy: ReferenceTypePolicy) -> Self {
        self.reference_type = policy;
        self
    }

    pub fn with_no_toc(mut self, no_toc: bool) -> Self {
        self.no_toc = no_toc;
        self
    }

    pub fn with_template_macro_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.template_macro_prefix = prefix.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_namespace_alias(mut self, key: i32, alias: impl Into<String>) -> Self {
        self.custom_namespaces.entry(key).or_default().push(alias.into());
        self
    }
}

/// Parses string-keyed namespace aliases (as found in TOML tables).
pub fn parse_namespace_keys(
    raw: &BTreeMap<String, Vec<String>>,
) -> Result<BTreeMap<i32, Vec<String>>, ConvertError> {
    raw.iter()
        .map(|(key, aliases)| {
            key.trim()
                .parse::<i32>()
                .map(|key| (key, aliases.clone()))
                .map_err(|_| ConvertError::InvalidNamespaceKey(key.clone()))
        })
        .collect()
}
