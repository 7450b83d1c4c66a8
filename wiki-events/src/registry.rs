//! Dispatch registry mapping tag names to generator kinds
//!
//! The registry is built once and only read while converting, so one
//! instance can be shared by every converter (and thread) of a process.
//! Lookup is an exact, case-sensitive match on the tag name produced by the
//! tokenizer.

use crate::generators::{Block, GeneratorKind};
use crate::ir::events::{Format, HeaderLevel, ListKind};
use crate::ir::token::{tags, TagToken};
use std::collections::HashMap;

const CENTER_STYLE: &str = "margin-right: auto; margin-left: auto;text-align: center";
const SMALL_STYLE: &str = "font-size:small";

/// Registry of event generators
///
/// # Examples
///
/// ```ignore
/// let mut registry = GeneratorRegistry::with_defaults();
/// registry.register("kbd", GeneratorKind::format(Format::Monospace));
///
/// let kind = registry.get("kbd");
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorRegistry {
    generators: HashMap<String, GeneratorKind>,
}

impl GeneratorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        GeneratorRegistry {
            generators: HashMap::new(),
        }
    }

    /// Register a generator kind for a tag name
    ///
    /// An existing entry for the same name is replaced.
    pub fn register(&mut self, name: impl Into<String>, kind: GeneratorKind) {
        self.generators.insert(name.into(), kind);
    }

    /// Look up the generator kind registered for a tag name
    pub fn get(&self, name: &str) -> Option<&GeneratorKind> {
        self.generators.get(name)
    }

    /// Check if a tag name is registered
    pub fn has(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// List all registered tag names (sorted)
    pub fn list_tags(&self) -> Vec<String> {
        let mut names: Vec<_> = self.generators.keys().cloned().collect();
        names.sort();
        names
    }

    /// Kind used for a tag with no registry entry: opaque tags become a
    /// generic macro, everything else is unknown.
    pub fn fallback_for(tag: &TagToken) -> GeneratorKind {
        if tag.is_opaque() {
            GeneratorKind::Macro {
                id: None,
                inline: None,
            }
        } else {
            GeneratorKind::Unknown
        }
    }

    /// Create a registry with the wiki and HTML constructs
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("br", GeneratorKind::NewLine);
        registry.register("hr", GeneratorKind::HorizontalLine);

        registry.register("nowiki", GeneratorKind::Verbatim { inline: true });
        registry.register("pre", GeneratorKind::Verbatim { inline: false });
        registry.register("syntaxhighlight", GeneratorKind::Source);
        registry.register("source", GeneratorKind::Source);
        registry.register("code", GeneratorKind::Source);

        registry.register("math", GeneratorKind::named_macro("formula", None));
        registry.register("ref", GeneratorKind::named_macro("footnote", Some(true)));
        registry.register(
            "references",
            GeneratorKind::named_macro("putFootnotes", Some(false)),
        );
        registry.register("gallery", GeneratorKind::Gallery);
        registry.register(
            tags::EXPLICIT_MACRO,
            GeneratorKind::Macro {
                id: None,
                inline: None,
            },
        );

        for level in 1..=6u8 {
            registry.register(
                format!("h{level}"),
                GeneratorKind::Header(HeaderLevel::clamped(level)),
            );
        }
        registry.register("p", GeneratorKind::Paragraph);

        for (name, format) in [
            ("b", Format::Bold),
            ("strong", Format::Bold),
            ("em", Format::Bold),
            ("i", Format::Italic),
            ("var", Format::Italic),
            ("cite", Format::Italic),
            ("abbr", Format::Italic),
            ("u", Format::Underlined),
            ("tt", Format::Monospace),
            ("s", Format::Strikedout),
            ("strike", Format::Strikedout),
            ("del", Format::Strikedout),
            ("sub", Format::Subscript),
            ("sup", Format::Superscript),
            ("span", Format::None),
        ] {
            registry.register(name, GeneratorKind::format(format));
        }
        registry.register(
            "small",
            GeneratorKind::styled(Block::Format(Format::None), SMALL_STYLE),
        );
        registry.register(
            "big",
            GeneratorKind::styled(Block::Format(Format::None), SMALL_STYLE),
        );
        registry.register(tags::BOLD_ITALIC, GeneratorKind::BoldItalic);
        registry.register("font", GeneratorKind::Font);

        registry.register("div", GeneratorKind::block(Block::Group));
        registry.register("center", GeneratorKind::styled(Block::Group, CENTER_STYLE));
        registry.register("figure", GeneratorKind::block(Block::Figure));
        registry.register("figurecaption", GeneratorKind::block(Block::FigureCaption));

        registry.register("table", GeneratorKind::block(Block::Table));
        registry.register("tr", GeneratorKind::block(Block::TableRow));
        registry.register("td", GeneratorKind::block(Block::TableCell));
        registry.register("th", GeneratorKind::block(Block::TableHeadCell));
        registry.register(tags::WIKI_TABLE, GeneratorKind::WikiTable);

        registry.register("ul", GeneratorKind::block(Block::List(ListKind::Bulleted)));
        registry.register("ol", GeneratorKind::block(Block::List(ListKind::Numbered)));
        registry.register("li", GeneratorKind::block(Block::ListItem));
        registry.register("dl", GeneratorKind::block(Block::DefinitionList));
        registry.register("dt", GeneratorKind::block(Block::DefinitionTerm));
        registry.register("dd", GeneratorKind::block(Block::DefinitionDescription));
        registry.register(tags::WIKI_LIST, GeneratorKind::WikiList);

        registry.register("a", GeneratorKind::AnchorLink);
        registry.register(tags::WIKI_LINK, GeneratorKind::WikiLink);
        registry.register(tags::WIKI_IMAGE, GeneratorKind::Image);

        registry.register(tags::TOC, GeneratorKind::TableOfContents);
        registry.register(tags::TEMPLATE, GeneratorKind::Template);

        registry
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
