use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::attributes::Attributes;
use crate::ir::token::TagToken;

/// `<nowiki>` (inline) and `<pre>` (block). The body is forwarded untouched.
pub struct VerbatimGenerator<'t> {
    token: &'t TagToken,
    inline: bool,
}

impl<'t> VerbatimGenerator<'t> {
    pub fn new(token: &'t TagToken, inline: bool) -> Self {
        Self { token, inline }
    }
}

impl EventGenerator for VerbatimGenerator<'_> {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        cx.listener()
            .on_verbatim(self.token.body_text(), self.inline, &self.token.attributes);
    }
}

pub const CODE_MACRO: &str = "code";

/// `<source>`, `<syntaxhighlight>` and `<code>` become the code macro.
pub struct SourceGenerator<'t> {
    token: &'t TagToken,
    parameters: Attributes,
    inline: bool,
}

impl<'t> SourceGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        let mut parameters = Attributes::new();
        if let Some(language) = token.attributes.get("lang") {
            parameters.insert("language", language);
        }
        let inline = token.attributes.contains_key("inline");
        Self {
            token,
            parameters,
            inline,
        }
    }
}

impl EventGenerator for SourceGenerator<'_> {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        cx.listener().on_macro(
            CODE_MACRO,
            &self.parameters,
            Some(self.token.body_text()),
            self.inline,
        );
    }
}
