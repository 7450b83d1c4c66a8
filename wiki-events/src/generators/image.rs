use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::attributes::Attributes;
use crate::ir::token::{TagKind, TagToken};
use crate::reference::{ImageResolution, ReferenceResolver};

/// Embedded files. Images may be wrapped in a link; other media become a
/// link to the attachment.
pub struct ImageGenerator {
    resolution: Option<ImageResolution>,
}

impl ImageGenerator {
    pub fn new(token: &TagToken, resolver: &ReferenceResolver) -> Self {
        let resolution = match &token.kind {
            TagKind::Image(spec) => Some(resolver.resolve_image(spec)),
            _ => None,
        };
        Self { resolution }
    }
}

impl EventGenerator for ImageGenerator {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        let listener = cx.listener();
        match &self.resolution {
            Some(ImageResolution::Image {
                reference,
                link,
                parameters,
            }) => {
                let empty = Attributes::new();
                if let Some(link) = link {
                    listener.begin_link(link, false, &empty);
                }
                listener.on_image(reference, false, parameters);
                if let Some(link) = link {
                    listener.end_link(link, false, &empty);
                }
            }
            Some(ImageResolution::Attachment(reference)) => {
                let empty = Attributes::new();
                listener.begin_link(reference, false, &empty);
                listener.end_link(reference, false, &empty);
            }
            None => {}
        }
    }
}
