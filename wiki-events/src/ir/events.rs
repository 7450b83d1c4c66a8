//! Defines the event stream produced by a conversion.
//!
//! Every structural construct is a `Start*`/`End*` pair; images, verbatim
//! blocks, macros and the inline text events are single-shot. End events
//! only repeat what a consumer needs to match them up (level, list kind,
//! format), the parameters travel on the start event.

use crate::ir::attributes::Attributes;
use crate::ir::reference::ResourceReference;
use serde::Serialize;
use std::fmt;

/// Header level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeaderLevel(u8);

impl HeaderLevel {
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    /// Clamps out-of-range levels into `1..=6`.
    pub fn clamped(level: u8) -> Self {
        Self(level.clamp(1, 6))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HeaderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bulleted,
    Numbered,
}

impl ListKind {
    pub fn name(self) -> &'static str {
        match self {
            ListKind::Bulleted => "bulleted",
            ListKind::Numbered => "numbered",
        }
    }
}

/// Kind of an inline format span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// A span that only carries parameters (`span`, `font`, `small`).
    None,
    Bold,
    Italic,
    Underlined,
    Strikedout,
    Superscript,
    Subscript,
    Monospace,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::None => "none",
            Format::Bold => "bold",
            Format::Italic => "italic",
            Format::Underlined => "underlined",
            Format::Strikedout => "strikedout",
            Format::Superscript => "superscript",
            Format::Subscript => "subscript",
            Format::Monospace => "monospace",
        }
    }
}

/// A single event in the emitted stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    StartDocument,
    EndDocument,
    StartHeader {
        level: HeaderLevel,
        id: Option<String>,
        parameters: Attributes,
    },
    EndHeader {
        level: HeaderLevel,
    },
    StartParagraph {
        parameters: Attributes,
    },
    EndParagraph,
    StartList {
        kind: ListKind,
        parameters: Attributes,
    },
    EndList {
        kind: ListKind,
    },
    StartListItem {
        parameters: Attributes,
    },
    EndListItem,
    StartDefinitionList {
        parameters: Attributes,
    },
    EndDefinitionList,
    StartDefinitionTerm,
    EndDefinitionTerm,
    StartDefinitionDescription,
    EndDefinitionDescription,
    StartTable {
        parameters: Attributes,
    },
    EndTable,
    StartTableRow {
        parameters: Attributes,
    },
    EndTableRow,
    StartTableCell {
        parameters: Attributes,
    },
    EndTableCell,
    StartTableHeadCell {
        parameters: Attributes,
    },
    EndTableHeadCell,
    StartLink {
        reference: ResourceReference,
        freestanding: bool,
        parameters: Attributes,
    },
    EndLink,
    StartGroup {
        parameters: Attributes,
    },
    EndGroup,
    StartFormat {
        format: Format,
        parameters: Attributes,
    },
    EndFormat {
        format: Format,
    },
    StartFigure {
        parameters: Attributes,
    },
    EndFigure,
    StartFigureCaption,
    EndFigureCaption,
    StartUnknown {
        id: String,
        parameters: Attributes,
    },
    EndUnknown {
        id: String,
    },
    Unknown {
        id: String,
        parameters: Attributes,
    },
    Image {
        reference: ResourceReference,
        freestanding: bool,
        parameters: Attributes,
    },
    Verbatim {
        content: String,
        inline: bool,
        parameters: Attributes,
    },
    Macro {
        id: String,
        parameters: Attributes,
        content: Option<String>,
        inline: bool,
    },
    NewLine,
    HorizontalLine {
        parameters: Attributes,
    },
    Word {
        text: String,
    },
    Space,
    SpecialSymbol {
        symbol: char,
    },
}

/// How an event affects nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    Open(&'static str),
    Close(&'static str),
    Single,
}

impl Event {
    /// Classifies the event as opening, closing or single-shot, naming the
    /// construct so a stack can match pairs.
    pub fn nesting(&self) -> Nesting {
        use Event::*;
        match self {
            StartDocument => Nesting::Open("document"),
            EndDocument => Nesting::Close("document"),
            StartHeader { .. } => Nesting::Open("header"),
            EndHeader { .. } => Nesting::Close("header"),
            StartParagraph { .. } => Nesting::Open("paragraph"),
            EndParagraph => Nesting::Close("paragraph"),
            StartList { .. } => Nesting::Open("list"),
            EndList { .. } => Nesting::Close("list"),
            StartListItem { .. } => Nesting::Open("list_item"),
            EndListItem => Nesting::Close("list_item"),
            StartDefinitionList { .. } => Nesting::Open("definition_list"),
            EndDefinitionList => Nesting::Close("definition_list"),
            StartDefinitionTerm => Nesting::Open("definition_term"),
            EndDefinitionTerm => Nesting::Close("definition_term"),
            StartDefinitionDescription => Nesting::Open("definition_description"),
            EndDefinitionDescription => Nesting::Close("definition_description"),
            StartTable { .. } => Nesting::Open("table"),
            EndTable => Nesting::Close("table"),
            StartTableRow { .. } => Nesting::Open("table_row"),
            EndTableRow => Nesting::Close("table_row"),
            StartTableCell { .. } => Nesting::Open("table_cell"),
            EndTableCell => Nesting::Close("table_cell"),
            StartTableHeadCell { .. } => Nesting::Open("table_head_cell"),
            EndTableHeadCell => Nesting::Close("table_head_cell"),
            StartLink { .. } => Nesting::Open("link"),
            EndLink => Nesting::Close("link"),
            StartGroup { .. } => Nesting::Open("group"),
            EndGroup => Nesting::Close("group"),
            StartFormat { .. } => Nesting::Open("format"),
            EndFormat { .. } => Nesting::Close("format"),
            StartFigure { .. } => Nesting::Open("figure"),
            EndFigure => Nesting::Close("figure"),
            StartFigureCaption => Nesting::Open("figure_caption"),
            EndFigureCaption => Nesting::Close("figure_caption"),
            StartUnknown { .. } => Nesting::Open("unknown"),
            EndUnknown { .. } => Nesting::Close("unknown"),
            Unknown { .. }
            | Image { .. }
            | Verbatim { .. }
            | Macro { .. }
            | NewLine
            | HorizontalLine { .. }
            | Word { .. }
            | Space
            | SpecialSymbol { .. } => Nesting::Single,
        }
    }
}

/// Checks that every start event is closed by its matching end event.
///
/// Returns the index of the first offending event, or the stream length when
/// events are left open.
pub fn check_nesting(events: &[Event]) -> Result<(), usize> {
    let mut stack = Vec::new();
    for (index, event) in events.iter().enumerate() {
        match event.nesting() {
            Nesting::Open(name) => stack.push(name),
            Nesting::Close(name) => {
                if stack.pop() != Some(name) {
                    return Err(index);
                }
            }
            Nesting::Single => {}
        }
    }
    if stack.is_empty() {
        Ok(())
    } else {
        Err(events.len())
    }
}
