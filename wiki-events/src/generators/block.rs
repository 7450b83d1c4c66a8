use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::attributes::Attributes;
use crate::ir::events::{Format, HeaderLevel, ListKind};
use crate::ir::token::{TagToken, Token};
use crate::listener::Listener;

/// Structural constructs emitted as a plain begin/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    Format(Format),
    Group,
    Figure,
    FigureCaption,
    List(ListKind),
    ListItem,
    DefinitionList,
    DefinitionTerm,
    DefinitionDescription,
    Table,
    TableRow,
    TableCell,
    TableHeadCell,
}

impl Block {
    pub fn label(self) -> &'static str {
        match self {
            Block::Format(_) => "format",
            Block::Group => "group",
            Block::Figure => "figure",
            Block::FigureCaption => "figure_caption",
            Block::List(_) => "list",
            Block::ListItem => "list_item",
            Block::DefinitionList => "definition_list",
            Block::DefinitionTerm => "definition_term",
            Block::DefinitionDescription => "definition_description",
            Block::Table => "table",
            Block::TableRow => "table_row",
            Block::TableCell => "table_cell",
            Block::TableHeadCell => "table_head_cell",
        }
    }

    pub fn begin(self, listener: &mut dyn Listener, parameters: &Attributes) {
        match self {
            Block::Format(format) => listener.begin_format(format, parameters),
            Block::Group => listener.begin_group(parameters),
            Block::Figure => listener.begin_figure(parameters),
            Block::FigureCaption => listener.begin_figure_caption(parameters),
            Block::List(kind) => listener.begin_list(kind, parameters),
            Block::ListItem => listener.begin_list_item(parameters),
            Block::DefinitionList => listener.begin_definition_list(parameters),
            Block::DefinitionTerm => listener.begin_definition_term(),
            Block::DefinitionDescription => listener.begin_definition_description(),
            Block::Table => listener.begin_table(parameters),
            Block::TableRow => listener.begin_table_row(parameters),
            Block::TableCell => listener.begin_table_cell(parameters),
            Block::TableHeadCell => listener.begin_table_head_cell(parameters),
        }
    }

    pub fn end(self, listener: &mut dyn Listener, parameters: &Attributes) {
        match self {
            Block::Format(format) => listener.end_format(format, parameters),
            Block::Group => listener.end_group(parameters),
            Block::Figure => listener.end_figure(parameters),
            Block::FigureCaption => listener.end_figure_caption(parameters),
            Block::List(kind) => listener.end_list(kind, parameters),
            Block::ListItem => listener.end_list_item(parameters),
            Block::DefinitionList => listener.end_definition_list(parameters),
            Block::DefinitionTerm => listener.end_definition_term(),
            Block::DefinitionDescription => listener.end_definition_description(),
            Block::Table => listener.end_table(parameters),
            Block::TableRow => listener.end_table_row(parameters),
            Block::TableCell => listener.end_table_cell(parameters),
            Block::TableHeadCell => listener.end_table_head_cell(parameters),
        }
    }
}

/// Emits `block` around the token's children.
pub struct BlockGenerator<'t> {
    token: &'t TagToken,
    block: Block,
    parameters: Attributes,
}

impl<'t> BlockGenerator<'t> {
    pub fn new(token: &'t TagToken, block: Block, defaults: &Attributes) -> Self {
        let mut parameters = defaults.clone();
        for (key, value) in token.attributes.iter() {
            parameters.insert(key, value);
        }
        Self {
            token,
            block,
            parameters,
        }
    }
}

impl EventGenerator for BlockGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        self.block.begin(cx.listener(), &self.parameters);
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        self.block.end(cx.listener(), &self.parameters);
    }

    fn children(&self) -> &[Token] {
        &self.token.children
    }
}

/// Paragraphs without children are dropped: the tokenizer always opens one.
pub struct ParagraphGenerator<'t> {
    token: &'t TagToken,
}

impl<'t> ParagraphGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        Self { token }
    }
}

impl EventGenerator for ParagraphGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        cx.listener().begin_paragraph(&self.token.attributes);
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        cx.listener().end_paragraph(&self.token.attributes);
    }

    fn children(&self) -> &[Token] {
        &self.token.children
    }

    fn traverse(&self, cx: &mut Traversal<'_>) {
        if self.token.children.is_empty() {
            return;
        }
        self.begin(cx);
        cx.traverse(self.children());
        self.end(cx);
    }
}

/// Headers hoist the id of a leading `<span id=...>` anchor and render the
/// span's children in its place.
pub struct HeaderGenerator<'t> {
    token: &'t TagToken,
    level: HeaderLevel,
    id: Option<&'t str>,
    children: &'t [Token],
}

impl<'t> HeaderGenerator<'t> {
    pub fn new(token: &'t TagToken, level: HeaderLevel) -> Self {
        let anchor = token
            .children
            .first()
            .and_then(Token::as_tag)
            .filter(|child| child.name == "span")
            .and_then(|span| span.attributes.get("id").map(|id| (id, span)));

        let (id, children) = match anchor {
            Some((id, span)) => (Some(id), span.children.as_slice()),
            None => (None, token.children.as_slice()),
        };
        Self {
            token,
            level,
            id,
            children,
        }
    }
}

impl EventGenerator for HeaderGenerator<'_> {
    fn begin(&self, cx: &mut Traversal<'_>) {
        cx.listener()
            .begin_header(self.level, self.id, &self.token.attributes);
    }

    fn end(&self, cx: &mut Traversal<'_>) {
        cx.listener()
            .end_header(self.level, self.id, &self.token.attributes);
    }

    fn children(&self) -> &[Token] {
        self.children
    }

    fn traverse(&self, cx: &mut Traversal<'_>) {
        if self.token.children.is_empty() {
            return;
        }
        self.begin(cx);
        cx.traverse(self.children);
        self.end(cx);
    }
}

/// Single-shot events standing for a whole tag (`br`, `hr`).
pub enum OnEventGenerator {
    NewLine,
    HorizontalLine(Attributes),
}

impl OnEventGenerator {
    pub fn new_line() -> Self {
        OnEventGenerator::NewLine
    }

    pub fn horizontal_line(token: &TagToken) -> Self {
        OnEventGenerator::HorizontalLine(token.attributes.clone())
    }
}

impl EventGenerator for OnEventGenerator {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        match self {
            OnEventGenerator::NewLine => cx.listener().on_new_line(),
            OnEventGenerator::HorizontalLine(parameters) => {
                cx.listener().on_horizontal_line(parameters)
            }
        }
    }
}
