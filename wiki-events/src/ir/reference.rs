//! Typed resource references carried by link and image events.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Url,
    /// Opaque path, used when references are not interpreted.
    Path,
    Document,
    Attachment,
    Mailto,
}

impl ResourceType {
    pub fn scheme(self) -> &'static str {
        match self {
            ResourceType::Url => "url",
            ResourceType::Path => "path",
            ResourceType::Document => "doc",
            ResourceType::Attachment => "attach",
            ResourceType::Mailto => "mailto",
        }
    }
}

/// Immutable reference to a page, file, URL or mail address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceReference {
    pub kind: ResourceType,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Whether the reference was explicitly typed in the source.
    #[serde(default)]
    pub typed: bool,
}

impl ResourceReference {
    pub fn new(kind: ResourceType, reference: impl Into<String>) -> Self {
        Self {
            kind,
            reference: reference.into(),
            anchor: None,
            typed: true,
        }
    }

    pub fn url(reference: impl Into<String>) -> Self {
        Self::new(ResourceType::Url, reference)
    }

    pub fn path(reference: impl Into<String>) -> Self {
        Self::new(ResourceType::Path, reference)
    }

    pub fn document(reference: impl Into<String>) -> Self {
        Self::new(ResourceType::Document, reference)
    }

    pub fn attachment(reference: impl Into<String>) -> Self {
        Self::new(ResourceType::Attachment, reference)
    }

    pub fn mailto(reference: impl Into<String>) -> Self {
        Self::new(ResourceType::Mailto, reference)
    }

    pub fn with_anchor(mut self, anchor: Option<String>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn untyped(mut self) -> Self {
        self.typed = false;
        self
    }
}

impl fmt::Display for ResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.typed {
            write!(f, "{}:", self.kind.scheme())?;
        }
        f.write_str(&self.reference)?;
        if let Some(anchor) = &self.anchor {
            write!(f, "#{anchor}")?;
        }
        Ok(())
    }
}
