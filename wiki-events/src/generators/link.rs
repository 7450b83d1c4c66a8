use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::attributes::Attributes;
use crate::ir::reference::ResourceReference;
use crate::ir::token::{LinkSpec, LinkTarget, TagKind, TagToken, Token};
use crate::reference::{has_uri_scheme, ReferenceResolver};

/// HTML `<a href>`: the href becomes a URL or path reference and is removed
/// from the forwarded parameters. Without an href only the children remain.
pub struct AnchorLinkGenerator<'t> {
    token: &'t TagToken,
    reference: Option<ResourceReference>,
    parameters: Attributes,
}

impl<'t> AnchorLinkGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        let mut parameters = token.attributes.clone();
        let reference = parameters.remove_ignore_case("href").map(|href| {
            if has_uri_scheme(&href) {
                ResourceReference::url(href)
            } else {
                ResourceReference::path(href)
            }
        });
        Self {
            token,
            reference,
            parameters,
        }
    }
}

impl EventGenerator for AnchorLinkGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        if let Some(reference) = &self.reference {
            cx.listener().begin_link(reference, false, &self.parameters);
        }
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        if let Some(reference) = &self.reference {
            cx.listener().end_link(reference, false, &self.parameters);
        }
    }

    fn children(&self) -> &[Token] {
        &self.token.children
    }
}

/// Wiki links (`[[Page#anchor|label]]`, `[http://x label]`, mail links);
/// the children are the link label.
pub struct WikiLinkGenerator<'t> {
    token: &'t TagToken,
    link: Option<(ResourceReference, bool)>,
}

impl<'t> WikiLinkGenerator<'t> {
    pub fn new(token: &'t TagToken, resolver: &ReferenceResolver) -> Self {
        let link = match &token.kind {
            TagKind::Link(LinkSpec {
                target,
                freestanding,
            }) => Some((resolve_target(target, resolver), *freestanding)),
            _ => None,
        };
        Self { token, link }
    }
}

fn resolve_target(target: &LinkTarget, resolver: &ReferenceResolver) -> ResourceReference {
    match target {
        LinkTarget::Internal { topic, anchor } => resolver.resolve(topic, anchor.as_deref()),
        LinkTarget::External { url } => ResourceReference::url(url.as_str()),
        LinkTarget::Mailto { address } => {
            let address = address.strip_prefix("mailto:").unwrap_or(address.as_str());
            ResourceReference::mailto(address)
        }
    }
}

impl EventGenerator for WikiLinkGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        if let Some((reference, freestanding)) = &self.link {
            cx.listener()
                .begin_link(reference, *freestanding, &self.token.attributes);
        }
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        if let Some((reference, freestanding)) = &self.link {
            cx.listener()
                .end_link(reference, *freestanding, &self.token.attributes);
        }
    }

    fn children(&self) -> &[Token] {
        &self.token.children
    }
}
