use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::token::{TagToken, Token};

/// Fallback for unrecognised tags.
///
/// An empty tag becomes a begin/end unknown pair. A tag with children is
/// flattened into its children followed by a single unknown event. Listeners
/// without the unknown channel only see the children.
pub struct UnknownGenerator<'t> {
    token: &'t TagToken,
    with_children: bool,
}

impl<'t> UnknownGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        Self {
            token,
            with_children: !token.children.is_empty(),
        }
    }
}

impl EventGenerator for UnknownGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        let listener = cx.listener();
        if listener.supports_unknown() && !self.with_children {
            listener.begin_unknown(&self.token.name, &self.token.attributes);
        }
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        let listener = cx.listener();
        if !listener.supports_unknown() {
            return;
        }
        if self.with_children {
            listener.on_unknown(&self.token.name, &self.token.attributes);
        } else {
            listener.end_unknown(&self.token.name, &self.token.attributes);
        }
    }

    fn children(&self) -> &[Token] {
        &self.token.children
    }
}
