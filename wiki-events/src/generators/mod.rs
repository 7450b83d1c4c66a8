//! Event generators: the per-tag behaviors of a conversion.
//!
//! # Dispatch
//!
//!     The registry maps tag names to a [`GeneratorKind`], a plain value that
//!     describes *what* to emit. When a tag is dispatched its kind is
//!     instantiated against the concrete token, giving a short-lived
//!     [`EventGenerator`] that knows *how* to emit it. There is no prototype
//!     copying: instantiation builds a fresh value from the stored kind.
//!
//! # The generator contract
//!
//!     A generator may emit a begin event, asks the traversal to walk the
//!     token's children, and may emit an end event. That is the default
//!     [`EventGenerator::traverse`]; variants override only what differs:
//!     headers and paragraphs suppress themselves when empty, lists and
//!     tables flatten their own payloads, macros and verbatim blocks emit a
//!     single event and never look at children.

mod block;
mod format;
mod image;
mod link;
mod macros;
mod structure;
mod unknown;
mod verbatim;

pub use block::{Block, BlockGenerator, HeaderGenerator, OnEventGenerator, ParagraphGenerator};
pub use format::{BoldItalicGenerator, FontGenerator};
pub use image::ImageGenerator;
pub use link::{AnchorLinkGenerator, WikiLinkGenerator};
pub use macros::{
    GalleryGenerator, MacroGenerator, TableOfContentsGenerator, TemplateGenerator,
};
pub use structure::{WikiListGenerator, WikiTableGenerator};
pub use unknown::UnknownGenerator;
pub use verbatim::{SourceGenerator, VerbatimGenerator};

use crate::converter::Traversal;
use crate::ir::attributes::Attributes;
use crate::ir::events::{Format, HeaderLevel};
use crate::ir::token::{TagToken, Token};

/// A generator bound to one token occurrence.
pub trait EventGenerator {
    fn begin(&self, _cx: &mut Traversal<'_>) {}

    fn end(&self, _cx: &mut Traversal<'_>) {}

    /// Tokens walked between begin and end.
    fn children(&self) -> &[Token] {
        &[]
    }

    fn traverse(&self, cx: &mut Traversal<'_>) {
        self.begin(cx);
        cx.traverse(self.children());
        self.end(cx);
    }
}

/// What a registered tag name turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorKind {
    /// Begin/end pair around the children, parameters first then the tag's
    /// attributes.
    Block { block: Block, parameters: Attributes },
    Paragraph,
    Header(HeaderLevel),
    NewLine,
    HorizontalLine,
    BoldItalic,
    Font,
    AnchorLink,
    WikiLink,
    Image,
    Verbatim { inline: bool },
    Source,
    Macro {
        id: Option<String>,
        inline: Option<bool>,
    },
    Gallery,
    TableOfContents,
    Template,
    WikiList,
    WikiTable,
    Unknown,
}

impl GeneratorKind {
    pub fn block(block: Block) -> Self {
        GeneratorKind::Block {
            block,
            parameters: Attributes::new(),
        }
    }

    pub fn format(format: Format) -> Self {
        Self::block(Block::Format(format))
    }

    pub fn styled(block: Block, style: &str) -> Self {
        GeneratorKind::Block {
            block,
            parameters: Attributes::new().with("style", style),
        }
    }

    pub fn named_macro(id: &str, inline: Option<bool>) -> Self {
        GeneratorKind::Macro {
            id: Some(id.to_string()),
            inline,
        }
    }

    /// Short name used in dispatch traces.
    pub fn label(&self) -> &'static str {
        match self {
            GeneratorKind::Block { block, .. } => block.label(),
            GeneratorKind::Paragraph => "paragraph",
            GeneratorKind::Header(_) => "header",
            GeneratorKind::NewLine => "new_line",
            GeneratorKind::HorizontalLine => "horizontal_line",
            GeneratorKind::BoldItalic => "bold_italic",
            GeneratorKind::Font => "font",
            GeneratorKind::AnchorLink => "anchor_link",
            GeneratorKind::WikiLink => "wiki_link",
            GeneratorKind::Image => "image",
            GeneratorKind::Verbatim { .. } => "verbatim",
            GeneratorKind::Source => "source",
            GeneratorKind::Macro { .. } => "macro",
            GeneratorKind::Gallery => "gallery",
            GeneratorKind::TableOfContents => "toc",
            GeneratorKind::Template => "template",
            GeneratorKind::WikiList => "wiki_list",
            GeneratorKind::WikiTable => "wiki_table",
            GeneratorKind::Unknown => "unknown",
        }
    }

    /// Binds the kind to a token, producing a fresh generator.
    pub fn instantiate<'t>(
        &self,
        token: &'t TagToken,
        cx: &Traversal<'_>,
    ) -> Box<dyn EventGenerator + 't> {
        match self {
            GeneratorKind::Block { block, parameters } => {
                Box::new(BlockGenerator::new(token, *block, parameters))
            }
            GeneratorKind::Paragraph => Box::new(ParagraphGenerator::new(token)),
            GeneratorKind::Header(level) => Box::new(HeaderGenerator::new(token, *level)),
            GeneratorKind::NewLine => Box::new(OnEventGenerator::new_line()),
            GeneratorKind::HorizontalLine => Box::new(OnEventGenerator::horizontal_line(token)),
            GeneratorKind::BoldItalic => Box::new(BoldItalicGenerator::new(token)),
            GeneratorKind::Font => Box::new(FontGenerator::new(token)),
            GeneratorKind::AnchorLink => Box::new(AnchorLinkGenerator::new(token)),
            GeneratorKind::WikiLink => Box::new(WikiLinkGenerator::new(token, cx.resolver())),
            GeneratorKind::Image => Box::new(ImageGenerator::new(token, cx.resolver())),
            GeneratorKind::Verbatim { inline } => Box::new(VerbatimGenerator::new(token, *inline)),
            GeneratorKind::Source => Box::new(SourceGenerator::new(token)),
            GeneratorKind::Macro { id, inline } => {
                Box::new(MacroGenerator::new(token, id.as_deref(), *inline))
            }
            GeneratorKind::Gallery => {
                Box::new(GalleryGenerator::new(token, cx.resolver().namespaces()))
            }
            GeneratorKind::TableOfContents => {
                Box::new(TableOfContentsGenerator::new(token, cx.options().no_toc))
            }
            GeneratorKind::Template => Box::new(TemplateGenerator::new(
                token,
                &cx.options().template_macro_prefix,
            )),
            GeneratorKind::WikiList => Box::new(WikiListGenerator::new(token)),
            GeneratorKind::WikiTable => Box::new(WikiTableGenerator::new(token)),
            GeneratorKind::Unknown => Box::new(UnknownGenerator::new(token)),
        }
    }
}
