use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::attributes::Attributes;
use crate::ir::events::Format;
use crate::ir::token::{TagToken, Token};

/// `'''''text'''''`: bold wrapping italic, closed in reverse order.
pub struct BoldItalicGenerator<'t> {
    token: &'t TagToken,
}

impl<'t> BoldItalicGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        Self { token }
    }
}

impl EventGenerator for BoldItalicGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        let listener = cx.listener();
        listener.begin_format(Format::Bold, &self.token.attributes);
        listener.begin_format(Format::Italic, &Attributes::new());
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        let listener = cx.listener();
        listener.end_format(Format::Italic, &Attributes::new());
        listener.end_format(Format::Bold, &self.token.attributes);
    }

    fn children(&self) -> &[Token] {
        &self.token.children
    }
}

/// `<font size color face>` becomes an unformatted span with a CSS style.
pub struct FontGenerator<'t> {
    token: &'t TagToken,
    parameters: Attributes,
}

/// HTML font sizes 1..=7 in em; 3 is the default size and adds nothing.
fn font_size(size: &str) -> Option<&'static str> {
    match size.trim() {
        "1" => Some("0.63em"),
        "2" => Some("0.82em"),
        "4" => Some("1.13em"),
        "5" => Some("1.5em"),
        "6" => Some("2em"),
        "7" => Some("3em"),
        _ => None,
    }
}

impl<'t> FontGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        let attributes = &token.attributes;
        let mut style = String::new();
        if let Some(size) = attributes.get("size").and_then(font_size) {
            style.push_str(&format!("font-size: {size};"));
        }
        if let Some(color) = attributes.get("color") {
            style.push_str(&format!("color: {color};"));
        }
        if let Some(face) = attributes.get("face") {
            style.push_str(&format!("font-family: {face};"));
        }

        let mut parameters = Attributes::new();
        if !style.is_empty() {
            parameters.insert("style", style);
        }
        Self { token, parameters }
    }
}

impl EventGenerator for FontGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        cx.listener().begin_format(Format::None, &self.parameters);
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        cx.listener().end_format(Format::None, &self.parameters);
    }

    fn children(&self) -> &[Token] {
        &self.token.children
    }
}
