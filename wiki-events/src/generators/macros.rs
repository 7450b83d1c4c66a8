use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::attributes::Attributes;
use crate::ir::token::{TagKind, TagToken};
use crate::namespaces::{split_namespace, NamespaceTable};

pub const TOC_MACRO: &str = "toc";
pub const GALLERY_MACRO: &str = "gallery";

/// Macro-like tags: an opaque body forwarded as one macro event.
///
/// The id comes from the token's macro metadata, then from the registry
/// entry, then from the tag name. Inline status follows the same order and
/// finally falls back to the tag's parent context.
pub struct MacroGenerator {
    id: String,
    parameters: Attributes,
    content: Option<String>,
    inline: bool,
}

impl MacroGenerator {
    pub fn new(token: &TagToken, default_id: Option<&str>, default_inline: Option<bool>) -> Self {
        let spec = match &token.kind {
            TagKind::Macro(spec) => Some(spec),
            _ => None,
        };

        let id = spec
            .and_then(|spec| spec.id.clone())
            .or_else(|| default_id.map(str::to_string))
            .unwrap_or_else(|| token.name.clone());
        let inline = spec
            .and_then(|spec| spec.inline)
            .or(default_inline)
            .unwrap_or_else(|| !token.in_block_context());
        let has_content = spec.map_or(true, |spec| spec.has_content);

        let content = if has_content {
            token.body.as_deref().map(|body| {
                if inline {
                    body.to_string()
                } else {
                    strip_block_newlines(body).to_string()
                }
            })
        } else {
            None
        };

        Self {
            id,
            parameters: token.attributes.clone(),
            content,
            inline,
        }
    }
}

/// Drops one leading and one trailing new line.
fn strip_block_newlines(body: &str) -> &str {
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);
    body.strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .unwrap_or(body)
}

impl EventGenerator for MacroGenerator {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        cx.listener().on_macro(
            &self.id,
            &self.parameters,
            self.content.as_deref(),
            self.inline,
        );
    }
}

/// `<gallery>`: every non-empty line becomes an image link, `File:` is
/// prepended unless the line already names a file namespace.
pub struct GalleryGenerator {
    inner: MacroGenerator,
}

impl GalleryGenerator {
    pub fn new(token: &TagToken, namespaces: &NamespaceTable) -> Self {
        let mut inner = MacroGenerator::new(token, Some(GALLERY_MACRO), None);
        inner.content = inner
            .content
            .map(|source| gallery_content(&source, namespaces));
        Self { inner }
    }
}

fn gallery_content(source: &str, namespaces: &NamespaceTable) -> String {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let has_namespace = split_namespace(line)
                .is_some_and(|(namespace, _)| {
                    namespaces.is_namespace(NamespaceTable::FILE, namespace)
                });
            if has_namespace {
                format!("[[{line}]]")
            } else {
                format!("[[File:{line}]]")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl EventGenerator for GalleryGenerator {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        self.inner.traverse(cx);
    }
}

/// Template calls become macros named after the template. Positional
/// parameter `1` is the macro content, the rest are forwarded.
pub struct TemplateGenerator {
    id: String,
    parameters: Attributes,
    content: Option<String>,
}

impl TemplateGenerator {
    pub fn new(token: &TagToken, prefix: &str) -> Self {
        let mut parameters = token.attributes.clone();
        let content = parameters.remove("1");
        Self {
            id: format!("{prefix}{}", token.name),
            parameters,
            content,
        }
    }
}

impl EventGenerator for TemplateGenerator {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        cx.listener()
            .on_macro(&self.id, &self.parameters, self.content.as_deref(), false);
    }
}

/// `__TOC__` and friends. Automatic tables of contents are dropped when the
/// caller disabled them; explicit ones are always kept.
pub struct TableOfContentsGenerator {
    emit: bool,
}

impl TableOfContentsGenerator {
    pub fn new(token: &TagToken, no_toc: bool) -> Self {
        let (show, explicit) = match token.kind {
            TagKind::TableOfContents { show, explicit } => (show, explicit),
            _ => (true, true),
        };
        Self {
            emit: show && (explicit || !no_toc),
        }
    }
}

impl EventGenerator for TableOfContentsGenerator {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        if self.emit {
            cx.listener()
                .on_macro(TOC_MACRO, &Attributes::new(), None, false);
        }
    }
}
