//! Resolution of raw link and image targets into typed references.
//!
//! The resolver owns the reference policy, the namespace table and two
//! pluggable collaborators: a [`StructuredReferenceParser`] used under
//! [`ReferenceTypePolicy::Structured`], and a [`MediaTypeSniffer`] deciding
//! whether an embedded file is displayable as an image.

use crate::ir::attributes::Attributes;
use crate::ir::reference::{ResourceReference, ResourceType};
use crate::ir::token::ImageSpec;
use crate::namespaces::NamespaceTable;
use crate::options::ReferenceTypePolicy;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write as _;
use std::path::Path;

static URI_SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9+.-]*://").expect("scheme pattern is valid"));

/// Whether `target` starts with a `scheme://` prefix.
pub fn has_uri_scheme(target: &str) -> bool {
    URI_SCHEME_PREFIX.is_match(target)
}

/// Parses reference strings written in the structured document reference
/// grammar (`doc:Space.Page#anchor`, `attach:file.png`, bare page names...).
pub trait StructuredReferenceParser {
    fn parse_link(&self, raw: &str) -> ResourceReference;

    fn parse_image(&self, raw: &str) -> ResourceReference {
        let reference = self.parse_link(raw);
        match reference.kind {
            ResourceType::Document if !reference.typed => {
                ResourceReference::attachment(raw).untyped()
            }
            _ => reference,
        }
    }
}

/// Default structured parser: explicit `type:` prefixes, URLs, otherwise an
/// untyped document reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultReferenceParser;

impl DefaultReferenceParser {
    fn typed_prefix(raw: &str) -> Option<(ResourceType, &str)> {
        let (prefix, rest) = raw.split_once(':')?;
        let kind = match prefix {
            "doc" | "page" => ResourceType::Document,
            "attach" => ResourceType::Attachment,
            "url" => ResourceType::Url,
            "mailto" => ResourceType::Mailto,
            "path" => ResourceType::Path,
            _ => return None,
        };
        // `url://host` is a URL with a strange scheme, not a typed reference.
        if rest.starts_with("//") {
            return None;
        }
        Some((kind, rest))
    }
}

impl StructuredReferenceParser for DefaultReferenceParser {
    fn parse_link(&self, raw: &str) -> ResourceReference {
        if let Some((kind, rest)) = Self::typed_prefix(raw) {
            return match kind {
                ResourceType::Document => split_anchor(rest, ResourceReference::document),
                _ => ResourceReference::new(kind, rest),
            };
        }
        if has_uri_scheme(raw) {
            return ResourceReference::url(raw).untyped();
        }
        split_anchor(raw, ResourceReference::document).untyped()
    }
}

fn split_anchor(raw: &str, build: fn(String) -> ResourceReference) -> ResourceReference {
    match raw.split_once('#') {
        Some((page, anchor)) if !anchor.is_empty() => {
            build(page.to_string()).with_anchor(Some(anchor.to_string()))
        }
        Some((page, _)) => build(page.to_string()),
        None => build(raw.to_string()),
    }
}

/// Detects the media type of a file from its name.
pub trait MediaTypeSniffer {
    fn detect(&self, filename: &str) -> String;

    fn is_image(&self, filename: &str) -> bool {
        self.detect(filename).starts_with("image/")
    }
}

/// Media type detection from the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionSniffer;

impl MediaTypeSniffer for ExtensionSniffer {
    fn detect(&self, filename: &str) -> String {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let mime = match extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" | "jpe" => "image/jpeg",
            "gif" => "image/gif",
            "svg" => "image/svg+xml",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            "tif" | "tiff" => "image/tiff",
            "ico" => "image/x-icon",
            "xcf" => "image/x-xcf",
            "pdf" => "application/pdf",
            "djvu" => "image/vnd.djvu",
            "txt" => "text/plain",
            "ogg" | "oga" => "audio/ogg",
            "ogv" => "video/ogg",
            "mp3" => "audio/mpeg",
            "wav" => "audio/x-wav",
            "mp4" => "video/mp4",
            "webm" => "video/webm",
            "zip" => "application/zip",
            "odt" => "application/vnd.oasis.opendocument.text",
            "doc" => "application/msword",
            _ => "application/octet-stream",
        };
        mime.to_string()
    }
}

/// Outcome of resolving an embedded file.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageResolution {
    Image {
        reference: ResourceReference,
        link: Option<ResourceReference>,
        parameters: Attributes,
    },
    /// The file is not an image and becomes a plain link to the attachment.
    Attachment(ResourceReference),
}

pub struct ReferenceResolver {
    policy: ReferenceTypePolicy,
    namespaces: NamespaceTable,
    parser: Box<dyn StructuredReferenceParser>,
    sniffer: Box<dyn MediaTypeSniffer>,
}

impl ReferenceResolver {
    pub fn new(policy: ReferenceTypePolicy, namespaces: NamespaceTable) -> Self {
        Self {
            policy,
            namespaces,
            parser: Box::new(DefaultReferenceParser),
            sniffer: Box::new(ExtensionSniffer),
        }
    }

    pub fn with_parser(mut self, parser: Box<dyn StructuredReferenceParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_sniffer(mut self, sniffer: Box<dyn MediaTypeSniffer>) -> Self {
        self.sniffer = sniffer;
        self
    }

    pub fn policy(&self) -> ReferenceTypePolicy {
        self.policy
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Wiki title conventions, applied only under the native policy.
    pub fn clean(&self, reference: &str) -> String {
        match self.policy {
            ReferenceTypePolicy::Native => capitalize(&reference.replace(' ', "_")),
            _ => reference.to_string(),
        }
    }

    /// Resolves a page or file title plus an optional anchor.
    pub fn resolve(&self, target: &str, anchor: Option<&str>) -> ResourceReference {
        let anchor = anchor.filter(|a| !a.is_empty()).map(encode_anchor);

        if self.policy == ReferenceTypePolicy::None || target.is_empty() {
            return match anchor {
                Some(anchor) => ResourceReference::path(format!("{target}#{anchor}")),
                None => ResourceReference::path(target),
            };
        }

        if let Some(file) = self.namespaces.file_name(target) {
            return ResourceReference::attachment(self.clean(file));
        }

        let reference = match self.policy {
            ReferenceTypePolicy::Structured => self.parser.parse_link(target),
            _ => ResourceReference::document(self.clean(target)),
        };
        match anchor {
            None => reference,
            Some(anchor) if reference.kind == ResourceType::Document => {
                reference.with_anchor(Some(anchor))
            }
            Some(anchor) => self.parser.parse_link(&format!("{target}#{anchor}")),
        }
    }

    /// Resolves an embedded file into an image (with its optional link) or,
    /// for non-image media, an attachment link.
    pub fn resolve_image(&self, image: &ImageSpec) -> ImageResolution {
        if !self.sniffer.is_image(&image.filename) {
            return ImageResolution::Attachment(ResourceReference::attachment(
                self.clean(&image.filename),
            ));
        }

        let reference = match self.policy {
            ReferenceTypePolicy::Structured => self.parser.parse_image(&image.filename),
            _ => ResourceReference::attachment(self.clean(&image.filename)).untyped(),
        };

        let link = match image.link.as_deref() {
            None => Some(self.resolve(&format!("{}:{}", image.namespace, image.filename), None)),
            Some("") => None,
            Some(link) if is_full_uri(link) => Some(ResourceReference::url(link)),
            Some(link) => Some(self.resolve(link, None)),
        };

        ImageResolution::Image {
            reference,
            link,
            parameters: image_parameters(image),
        }
    }
}

fn is_full_uri(link: &str) -> bool {
    has_uri_scheme(link)
}

fn image_parameters(image: &ImageSpec) -> Attributes {
    let mut parameters = Attributes::new();
    if let Some(alt) = image.alt.as_ref().or(image.caption.as_ref()) {
        parameters.insert("alt", alt.as_str());
    }
    if let Some(width) = &image.width {
        parameters.insert("width", width.as_str());
    }
    if let Some(height) = &image.height {
        parameters.insert("height", height.as_str());
    }
    if let Some(align) = image.align.as_deref().filter(|a| *a != "none") {
        parameters.insert("style", format!("float:{align}"));
    }
    parameters
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Encodes a section anchor the way wiki titles are dot-encoded: spaces
/// become underscores, `[A-Za-z0-9-_.:]` pass through and every other byte
/// becomes `.XX`.
pub fn encode_anchor(anchor: &str) -> String {
    let mut encoded = String::with_capacity(anchor.len());
    for c in anchor.chars() {
        match c {
            ' ' => encoded.push('_'),
            c if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':') => {
                encoded.push(c)
            }
            c => {
                let mut buffer = [0u8; 4];
                for byte in c.encode_utf8(&mut buffer).bytes() {
                    let _ = write!(encoded, ".{byte:02X}");
                }
            }
        }
    }
    encoded
}
