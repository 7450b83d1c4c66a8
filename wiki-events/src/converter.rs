//! The traversal engine
//!
//! # The High-Level Concept
//!
//!     A conversion walks a token tree depth first and turns it into listener
//!     calls. Text goes through the content normalizer and the inline parser;
//!     tags go through the dispatch registry and the generator it selects.
//!     Generators recurse by handing child token lists back to the same
//!     [`Traversal`], so there is exactly one walk and one depth counter per
//!     conversion.
//!
//! # The Algorithm
//!
//!     1. The cleanup pass trims the edges of every tag once. Borrowed input
//!        is copied first; the `_owned` entry points trim in place.
//!     2. `traverse(tokens)` on an empty list does nothing. Otherwise the depth
//!        counter is incremented; past `max_depth` the list is dropped and
//!        counted in the report. The counter is always decremented on the way
//!        out.
//!     3. Each token is classified once: table-of-contents markers and
//!        template calls bypass the registry, other tags are looked up by
//!        name and fall back to a generic macro (opaque body) or the unknown
//!        generator.
//!
//!     Nothing in a conversion is fatal. Dropped subtrees and text runs the
//!     inline parser rejected are logged and counted in the
//!     [`ConversionReport`].

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::common::cleanup::cleanup;
use crate::generators::GeneratorKind;
use crate::inline::{InlineParser, PlainTextParser};
use crate::ir::token::{TagToken, Token, TokenCategory};
use crate::listener::Listener;
use crate::namespaces::NamespaceTable;
use crate::normalize::normalize_content;
use crate::options::ConverterOptions;
use crate::reference::{MediaTypeSniffer, ReferenceResolver, StructuredReferenceParser};
use crate::registry::GeneratorRegistry;

/// What a conversion had to leave out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub truncated_subtrees: usize,
    pub skipped_text_runs: usize,
}

impl ConversionReport {
    pub fn is_lossless(&self) -> bool {
        self.truncated_subtrees == 0 && self.skipped_text_runs == 0
    }
}

/// A configured converter
///
/// The registry is shared; everything mutable lives in the [`Traversal`]
/// created for each call, so one converter can serve any number of
/// conversions.
pub struct Converter {
    registry: Arc<GeneratorRegistry>,
    options: ConverterOptions,
    resolver: ReferenceResolver,
    inline: Box<dyn InlineParser>,
}

impl Converter {
    pub fn new(options: ConverterOptions) -> Self {
        let namespaces = NamespaceTable::with_custom(&options.custom_namespaces);
        let resolver = ReferenceResolver::new(options.reference_type, namespaces);
        Converter {
            registry: Arc::new(GeneratorRegistry::with_defaults()),
            options,
            resolver,
            inline: Box::new(PlainTextParser),
        }
    }

    pub fn with_registry(mut self, registry: Arc<GeneratorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_inline_parser(mut self, parser: Box<dyn InlineParser>) -> Self {
        self.inline = parser;
        self
    }

    pub fn with_reference_parser(mut self, parser: Box<dyn StructuredReferenceParser>) -> Self {
        self.resolver = self.resolver.with_parser(parser);
        self
    }

    pub fn with_media_sniffer(mut self, sniffer: Box<dyn MediaTypeSniffer>) -> Self {
        self.resolver = self.resolver.with_sniffer(sniffer);
        self
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Converts a whole document, wrapped in begin/end document events.
    pub fn convert(&self, tokens: &[Token], listener: &mut dyn Listener) -> ConversionReport {
        self.convert_owned(tokens.to_vec(), listener)
    }

    /// Like [`Converter::convert`], cleaning up `tokens` in place instead of
    /// copying them.
    pub fn convert_owned(
        &self,
        tokens: Vec<Token>,
        listener: &mut dyn Listener,
    ) -> ConversionReport {
        listener.begin_document();
        let report = self.convert_fragment_owned(tokens, listener);
        listener.end_document();
        report
    }

    /// Converts tokens without the document events, for embedding the
    /// result into a stream the caller already opened.
    pub fn convert_fragment(
        &self,
        tokens: &[Token],
        listener: &mut dyn Listener,
    ) -> ConversionReport {
        self.convert_fragment_owned(tokens.to_vec(), listener)
    }

    pub fn convert_fragment_owned(
        &self,
        mut tokens: Vec<Token>,
        listener: &mut dyn Listener,
    ) -> ConversionReport {
        cleanup(&mut tokens);

        let mut traversal = Traversal::new(self, listener);
        traversal.traverse(&tokens);
        traversal.report
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConverterOptions::default())
    }
}

/// Mutable state of one conversion, handed to every generator.
pub struct Traversal<'a> {
    converter: &'a Converter,
    listener: &'a mut dyn Listener,
    depth: usize,
    report: ConversionReport,
}

impl<'a> Traversal<'a> {
    fn new(converter: &'a Converter, listener: &'a mut dyn Listener) -> Self {
        Traversal {
            converter,
            listener,
            depth: 0,
            report: ConversionReport::default(),
        }
    }

    pub fn listener(&mut self) -> &mut dyn Listener {
        &mut *self.listener
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.converter.options
    }

    pub fn resolver(&self) -> &ReferenceResolver {
        &self.converter.resolver
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Walks a token list one level deeper. Past the depth ceiling the list
    /// is dropped; the caller still closes whatever it opened.
    pub fn traverse(&mut self, tokens: &[Token]) {
        if tokens.is_empty() {
            return;
        }

        self.depth += 1;
        if self.depth > self.converter.options.max_depth {
            warn!(
                depth = self.depth,
                tokens = tokens.len(),
                "recursion ceiling reached, dropping subtree"
            );
            self.report.truncated_subtrees += 1;
        } else {
            for token in tokens {
                self.visit(token);
            }
        }
        self.depth -= 1;
    }

    fn visit(&mut self, token: &Token) {
        match token.classify() {
            TokenCategory::Content(text) => self.emit_text(text),
            TokenCategory::TocMarker { token, .. } => {
                self.dispatch(token, &GeneratorKind::TableOfContents)
            }
            TokenCategory::TemplateCall(token) => self.dispatch(token, &GeneratorKind::Template),
            TokenCategory::Tag(token) => {
                let converter = self.converter;
                match converter.registry.get(&token.name) {
                    Some(kind) => self.dispatch(token, kind),
                    None => {
                        let fallback = GeneratorRegistry::fallback_for(token);
                        self.dispatch(token, &fallback);
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, token: &TagToken, kind: &GeneratorKind) {
        trace!(tag = %token.name, generator = kind.label(), "dispatch");
        let generator = kind.instantiate(token, self);
        generator.traverse(self);
    }

    fn emit_text(&mut self, text: &str) {
        let normalized = normalize_content(text);
        if normalized.is_empty() {
            return;
        }

        match self.converter.inline.parse(&normalized) {
            Ok(events) => {
                for event in &events {
                    event.emit(&mut *self.listener);
                }
            }
            Err(err) => {
                debug!(error = %err, text = %normalized, "skipping text run");
                self.report.skipped_text_runs += 1;
            }
        }
    }
}
