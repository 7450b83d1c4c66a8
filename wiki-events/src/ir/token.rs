//! The token tree consumed by the converter.
//!
//! Tokens are produced by an upstream wiki tokenizer. A tree is a sequence of
//! [`Token`]s; text lives in content tokens, everything else is a
//! [`TagToken`] whose [`TagKind`] says which structural shape it carries.
//! Lists and tables do not map onto a plain children vector, so they carry
//! their own payloads ([`WikiList`], [`WikiTable`]).

use crate::ir::attributes::Attributes;
use serde::{Deserialize, Serialize};

/// Well-known tag names used by the tokenizer for wiki (non-HTML) constructs.
pub mod tags {
    pub const WIKI_LINK: &str = "wikilink";
    pub const WIKI_IMAGE: &str = "wikiimage";
    pub const WIKI_LIST: &str = "wikilist";
    pub const WIKI_TABLE: &str = "wikitable";
    pub const EXPLICIT_MACRO: &str = "xmacro";
    pub const BOLD_ITALIC: &str = "bolditalic";
    pub const TOC: &str = "toc";
    pub const TEMPLATE: &str = "template";
}

/// Parent contexts that count as block level for macro inline detection.
pub const BLOCK_CONTEXTS: &[&str] = &[
    "document", "body", "blockquote", "caption", "center", "dd", "div", "dl", "dt", "form", "h1",
    "h2", "h3", "h4", "h5", "h6", "li", "ol", "pre", "table", "tbody", "td", "tfoot", "th",
    "thead", "tr", "ul",
];

/// A node of the input tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    Content(ContentToken),
    Tag(TagToken),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentToken {
    pub text: String,
}

/// An element of the token tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagToken {
    pub name: String,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Token>,
    /// Raw body text for tags whose body is not parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "TagKind::is_element")]
    pub kind: TagKind,
    /// Declared parent context, compared against [`BLOCK_CONTEXTS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Shape of a tag token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    #[default]
    Element,
    /// Opaque body, never parsed recursively.
    NoBodyParsing,
    List(WikiList),
    Table(WikiTable),
    TableOfContents {
        show: bool,
        explicit: bool,
    },
    Template,
    Macro(MacroSpec),
    Link(LinkSpec),
    Image(ImageSpec),
}

impl TagKind {
    pub fn is_element(&self) -> bool {
        matches!(self, TagKind::Element)
    }
}

/// Nested list runs keyed by marker character.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WikiList {
    pub elements: Vec<ListNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListNode {
    Run(ListRun),
    Element(ListElement),
}

/// Consecutive list lines sharing one marker at one nesting level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRun {
    pub marker: char,
    #[serde(default)]
    pub elements: Vec<ListNode>,
}

impl ListRun {
    pub const BULLET: char = '*';
    pub const NUMBERED: char = '#';
    pub const TERM: char = ';';
    pub const DESCRIPTION: char = ':';
}

/// A single list line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListElement {
    /// Full marker prefix of the line, such as `"*#"`.
    pub sequence: String,
    #[serde(default)]
    pub content: Vec<Token>,
}

impl ListElement {
    /// The marker that decides the item kind: the last character of the sequence.
    pub fn marker(&self) -> Option<char> {
        self.sequence.chars().last()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WikiTable {
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub kind: CellKind,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default)]
    pub content: Vec<Token>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Header,
    #[default]
    Body,
    Caption,
}

/// Explicit macro metadata for tags the tokenizer recognised as macros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Self-reported inline status; overrides context detection when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
    #[serde(default = "default_true")]
    pub has_content: bool,
}

impl Default for MacroSpec {
    fn default() -> Self {
        Self {
            id: None,
            inline: None,
            has_content: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub target: LinkTarget,
    #[serde(default)]
    pub freestanding: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    Internal {
        topic: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        anchor: Option<String>,
    },
    External {
        url: String,
    },
    Mailto {
        address: String,
    },
}

/// An embedded file reference (`[[File:x.png|thumb|...]]`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSpec {
    pub filename: String,
    #[serde(default = "default_image_namespace")]
    pub namespace: String,
    /// `None` links to the file page, `Some("")` disables the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

fn default_image_namespace() -> String {
    "File".to_string()
}

/// Classification applied once per token before dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenCategory<'t> {
    Content(&'t str),
    TocMarker {
        token: &'t TagToken,
        show: bool,
        explicit: bool,
    },
    TemplateCall(&'t TagToken),
    Tag(&'t TagToken),
}

impl Token {
    pub fn text(text: impl Into<String>) -> Self {
        Token::Content(ContentToken { text: text.into() })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Content(content) => Some(&content.text),
            Token::Tag(_) => None,
        }
    }

    pub fn as_tag(&self) -> Option<&TagToken> {
        match self {
            Token::Tag(tag) => Some(tag),
            Token::Content(_) => None,
        }
    }

    pub fn classify(&self) -> TokenCategory<'_> {
        match self {
            Token::Content(content) => TokenCategory::Content(&content.text),
            Token::Tag(tag) => match &tag.kind {
                TagKind::TableOfContents { show, explicit } => TokenCategory::TocMarker {
                    token: tag,
                    show: *show,
                    explicit: *explicit,
                },
                TagKind::Template => TokenCategory::TemplateCall(tag),
                _ => TokenCategory::Tag(tag),
            },
        }
    }
}

impl From<TagToken> for Token {
    fn from(tag: TagToken) -> Self {
        Token::Tag(tag)
    }
}

impl TagToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn with_children(mut self, children: Vec<Token>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: impl Into<Token>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Token::text(text))
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_kind(mut self, kind: TagKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Raw body text, empty when the tokenizer kept none.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Whether the body of this tag must not be parsed recursively.
    pub fn is_opaque(&self) -> bool {
        matches!(self.kind, TagKind::NoBodyParsing | TagKind::Macro(_))
    }

    /// Whether the tag sits in a block-level parent context.
    pub fn in_block_context(&self) -> bool {
        match self.context.as_deref() {
            None => true,
            Some(context) => BLOCK_CONTEXTS.contains(&context),
        }
    }
}

impl From<ContentToken> for Token {
    fn from(content: ContentToken) -> Self {
        Token::Content(content)
    }
}
