//! Wiki token trees to document events
//!
//!     This crate turns the token tree produced by a wiki markup tokenizer into an ordered stream
//!     of begin/end and single-shot events sent to a [`Listener`]. It does not tokenize markup
//!     itself: input is a tree of [`Token`]s (text or tags with attributes, children and a shape
//!     classification), output is whatever the listener does with the events.
//!
//!     TLDR:
//!         - One conversion is one depth-first walk (./converter.rs), with a recursion ceiling.
//!         - Tags are dispatched by name through a registry (./registry.rs) to a generator kind
//!           (./generators), which is instantiated per token and emits the events.
//!         - Lists and tables carry their own nested payloads and are flattened by ./common.
//!         - Link and image targets go through the reference resolver (./reference.rs).
//!         - Nothing in a conversion is fatal; what was dropped is reported, not raised.
//!
//! Architecture
//!
//!     This is a pure lib, it powers the wikiev cli but is shell agnostic: no printing, no env
//!     vars. Logging goes through `tracing`, installing a subscriber is the caller's business.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── ir
//!     │   ├── token.rs            # Token tree (input)
//!     │   ├── events.rs           # Event enum (recorded output)
//!     │   ├── attributes.rs       # Ordered attribute map
//!     │   └── reference.rs        # Resource references
//!     ├── listener.rs             # Event consumer trait
//!     ├── recorder.rs             # Listener that records events
//!     ├── normalize.rs            # Content normalizer
//!     ├── namespaces.rs           # Namespace table
//!     ├── options.rs              # Converter options
//!     ├── reference.rs            # Reference resolver
//!     ├── inline.rs               # Inline sub-parser
//!     ├── registry.rs             # Tag name -> generator kind
//!     ├── generators              # Per-tag event emission
//!     ├── common                  # Cleanup, list and table flattening
//!     ├── converter.rs            # Traversal engine
//!     ├── format.rs               # EventFormat trait and registry
//!     └── formats                 # trace, json
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common
//!     └── <area>.rs
//!
//!     Rust does not discover tests in subdirectories, so every area is a module included from
//!     tests/lib.rs.
//!
//! Core Algorithms
//!
//!     Two places do real work: the traversal (depth accounting, classification, dispatch and the
//!     text path) and the flatteners, which turn list runs and table rows into strictly nested
//!     events. Every emitted stream is balanced: each begin has exactly one end, emitted after
//!     the construct's children. The generators are small on purpose and only decide which
//!     events surround their children.
//!
//! Text
//!
//!     Text is cleaned in two stages that never overlap. A cleanup pass trims the edges of every
//!     tag once before the walk; during the walk each text run has its interior whitespace
//!     collapsed, entities decoded and non-breaking spaces replaced, then goes through the inline
//!     parser. Verbatim and macro bodies bypass both stages.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod inline;
pub mod ir;
pub mod listener;
pub mod namespaces;
pub mod normalize;
pub mod options;
pub mod recorder;
pub mod reference;
pub mod registry;

pub mod common;
pub mod converter;
pub mod generators;

pub use converter::{ConversionReport, Converter, Traversal};
pub use error::{ConvertError, InlineParseError};
pub use format::{EventFormat, EventFormatRegistry};
pub use ir::events::Event;
pub use ir::token::{TagToken, Token};
pub use listener::Listener;
pub use options::{ConverterOptions, ReferenceTypePolicy};
pub use recorder::EventRecorder;
pub use registry::GeneratorRegistry;

use serde::Deserialize;

/// Converts a token tree with default options.
pub fn convert(tokens: &[Token], listener: &mut dyn Listener) -> ConversionReport {
    Converter::default().convert(tokens, listener)
}

/// Converts a token tree and records the emitted events.
pub fn to_events(tokens: &[Token], options: &ConverterOptions) -> (Vec<Event>, ConversionReport) {
    let mut recorder = EventRecorder::new();
    let report = Converter::new(options.clone()).convert(tokens, &mut recorder);
    (recorder.into_events(), report)
}

/// Reads a token tree from its JSON form.
///
/// Nesting is not limited here; deep trees are truncated by the converter's
/// `max_depth` instead.
pub fn parse_tokens(json: &str) -> Result<Vec<Token>, ConvertError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let tokens = Vec::<Token>::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(tokens)
}
