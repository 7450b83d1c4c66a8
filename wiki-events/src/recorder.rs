//! A listener that records the emitted events.

use crate::ir::attributes::Attributes;
use crate::ir::events::{Event, Format, HeaderLevel, ListKind};
use crate::ir::reference::ResourceReference;
use crate::listener::Listener;

/// Collects every event into a `Vec<Event>`.
#[derive(Debug, Clone)]
pub struct EventRecorder {
    events: Vec<Event>,
    unknown_channel: bool,
}

impl EventRecorder {
    /// A recorder that accepts the unknown-construct channel.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            unknown_channel: true,
        }
    }

    /// A recorder that declines unknown events, so unknown tags with children
    /// are flattened into their children.
    pub fn without_unknown() -> Self {
        Self {
            events: Vec::new(),
            unknown_channel: false,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn push(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener for EventRecorder {
    fn begin_document(&mut self) {
        self.push(Event::StartDocument);
    }

    fn end_document(&mut self) {
        self.push(Event::EndDocument);
    }

    fn begin_header(&mut self, level: HeaderLevel, id: Option<&str>, parameters: &Attributes) {
        self.push(Event::StartHeader {
            level,
            id: id.map(str::to_string),
            parameters: parameters.clone(),
        });
    }

    fn end_header(&mut self, level: HeaderLevel, _id: Option<&str>, _parameters: &Attributes) {
        self.push(Event::EndHeader { level });
    }

    fn begin_paragraph(&mut self, parameters: &Attributes) {
        self.push(Event::StartParagraph {
            parameters: parameters.clone(),
        });
    }

    fn end_paragraph(&mut self, _parameters: &Attributes) {
        self.push(Event::EndParagraph);
    }

    fn begin_list(&mut self, kind: ListKind, parameters: &Attributes) {
        self.push(Event::StartList {
            kind,
            parameters: parameters.clone(),
        });
    }

    fn end_list(&mut self, kind: ListKind, _parameters: &Attributes) {
        self.push(Event::EndList { kind });
    }

    fn begin_list_item(&mut self, parameters: &Attributes) {
        self.push(Event::StartListItem {
            parameters: parameters.clone(),
        });
    }

    fn end_list_item(&mut self, _parameters: &Attributes) {
        self.push(Event::EndListItem);
    }

    fn begin_definition_list(&mut self, parameters: &Attributes) {
        self.push(Event::StartDefinitionList {
            parameters: parameters.clone(),
        });
    }

    fn end_definition_list(&mut self, _parameters: &Attributes) {
        self.push(Event::EndDefinitionList);
    }

    fn begin_definition_term(&mut self) {
        self.push(Event::StartDefinitionTerm);
    }

    fn end_definition_term(&mut self) {
        self.push(Event::EndDefinitionTerm);
    }

    fn begin_definition_description(&mut self) {
        self.push(Event::StartDefinitionDescription);
    }

    fn end_definition_description(&mut self) {
        self.push(Event::EndDefinitionDescription);
    }

    fn begin_table(&mut self, parameters: &Attributes) {
        self.push(Event::StartTable {
            parameters: parameters.clone(),
        });
    }

    fn end_table(&mut self, _parameters: &Attributes) {
        self.push(Event::EndTable);
    }

    fn begin_table_row(&mut self, parameters: &Attributes) {
        self.push(Event::StartTableRow {
            parameters: parameters.clone(),
        });
    }

    fn end_table_row(&mut self, _parameters: &Attributes) {
        self.push(Event::EndTableRow);
    }

    fn begin_table_cell(&mut self, parameters: &Attributes) {
        self.push(Event::StartTableCell {
            parameters: parameters.clone(),
        });
    }

    fn end_table_cell(&mut self, _parameters: &Attributes) {
        self.push(Event::EndTableCell);
    }

    fn begin_table_head_cell(&mut self, parameters: &Attributes) {
        self.push(Event::StartTableHeadCell {
            parameters: parameters.clone(),
        });
    }

    fn end_table_head_cell(&mut self, _parameters: &Attributes) {
        self.push(Event::EndTableHeadCell);
    }

    fn begin_link(
        &mut self,
        reference: &ResourceReference,
        freestanding: bool,
        parameters: &Attributes,
    ) {
        self.push(Event::StartLink {
            reference: reference.clone(),
            freestanding,
            parameters: parameters.clone(),
        });
    }

    fn end_link(
        &mut self,
        _reference: &ResourceReference,
        _freestanding: bool,
        _parameters: &Attributes,
    ) {
        self.push(Event::EndLink);
    }

    fn begin_group(&mut self, parameters: &Attributes) {
        self.push(Event::StartGroup {
            parameters: parameters.clone(),
        });
    }

    fn end_group(&mut self, _parameters: &Attributes) {
        self.push(Event::EndGroup);
    }

    fn begin_format(&mut self, format: Format, parameters: &Attributes) {
        self.push(Event::StartFormat {
            format,
            parameters: parameters.clone(),
        });
    }

    fn end_format(&mut self, format: Format, _parameters: &Attributes) {
        self.push(Event::EndFormat { format });
    }

    fn begin_figure(&mut self, parameters: &Attributes) {
        self.push(Event::StartFigure {
            parameters: parameters.clone(),
        });
    }

    fn end_figure(&mut self, _parameters: &Attributes) {
        self.push(Event::EndFigure);
    }

    fn begin_figure_caption(&mut self, _parameters: &Attributes) {
        self.push(Event::StartFigureCaption);
    }

    fn end_figure_caption(&mut self, _parameters: &Attributes) {
        self.push(Event::EndFigureCaption);
    }

    fn on_image(&mut self, reference: &ResourceReference, freestanding: bool, parameters: &Attributes) {
        self.push(Event::Image {
            reference: reference.clone(),
            freestanding,
            parameters: parameters.clone(),
        });
    }

    fn on_verbatim(&mut self, content: &str, inline: bool, parameters: &Attributes) {
        self.push(Event::Verbatim {
            content: content.to_string(),
            inline,
            parameters: parameters.clone(),
        });
    }

    fn on_macro(&mut self, id: &str, parameters: &Attributes, content: Option<&str>, inline: bool) {
        self.push(Event::Macro {
            id: id.to_string(),
            parameters: parameters.clone(),
            content: content.map(str::to_string),
            inline,
        });
    }

    fn on_horizontal_line(&mut self, parameters: &Attributes) {
        self.push(Event::HorizontalLine {
            parameters: parameters.clone(),
        });
    }

    fn on_new_line(&mut self) {
        self.push(Event::NewLine);
    }

    fn on_word(&mut self, word: &str) {
        self.push(Event::Word {
            text: word.to_string(),
        });
    }

    fn on_space(&mut self) {
        self.push(Event::Space);
    }

    fn on_special_symbol(&mut self, symbol: char) {
        self.push(Event::SpecialSymbol { symbol });
    }

    fn supports_unknown(&self) -> bool {
        self.unknown_channel
    }

    fn begin_unknown(&mut self, id: &str, parameters: &Attributes) {
        self.push(Event::StartUnknown {
            id: id.to_string(),
            parameters: parameters.clone(),
        });
    }

    fn end_unknown(&mut self, id: &str, _parameters: &Attributes) {
        self.push(Event::EndUnknown { id: id.to_string() });
    }

    fn on_unknown(&mut self, id: &str, parameters: &Attributes) {
        self.push(Event::Unknown {
            id: id.to_string(),
            parameters: parameters.clone(),
        });
    }
}
