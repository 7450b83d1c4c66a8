//! Token tree builders and conversion helpers shared by the integration tests.
#![allow(dead_code)]

use wiki_events::format::EventFormat;
use wiki_events::formats::TraceFormat;
use wiki_events::ir::token::{
    CellKind, ListElement, ListNode, ListRun, TableCell, TableRow, TagKind, TagToken, Token,
    WikiList, WikiTable,
};
use wiki_events::{to_events, ConverterOptions, Event};

pub fn text(text: &str) -> Token {
    Token::text(text)
}

/// Trace of a whole conversion with default options.
pub fn trace(tokens: &[Token]) -> String {
    trace_with(tokens, &ConverterOptions::default())
}

pub fn trace_with(tokens: &[Token], options: &ConverterOptions) -> String {
    let (events, _) = to_events(tokens, options);
    TraceFormat
        .write(&events)
        .expect("trace format never fails")
        .trim_end()
        .to_string()
}

pub fn events(tokens: &[Token]) -> Vec<Event> {
    events_with(tokens, &ConverterOptions::default())
}

pub fn events_with(tokens: &[Token], options: &ConverterOptions) -> Vec<Event> {
    to_events(tokens, options).0
}

/// Events between the document pair.
pub fn body_events(tokens: &[Token]) -> Vec<Event> {
    let mut events = events(tokens);
    assert_eq!(events.first(), Some(&Event::StartDocument));
    assert_eq!(events.last(), Some(&Event::EndDocument));
    events.pop();
    events.remove(0);
    events
}

pub fn word(text: &str) -> Event {
    Event::Word {
        text: text.to_string(),
    }
}

pub fn run(marker: char, elements: Vec<ListNode>) -> ListNode {
    ListNode::Run(ListRun { marker, elements })
}

pub fn line(sequence: &str, content: &str) -> ListNode {
    ListNode::Element(ListElement {
        sequence: sequence.to_string(),
        content: vec![text(content)],
    })
}

pub fn wikilist(elements: Vec<ListNode>) -> Token {
    TagToken::new("wikilist")
        .with_kind(TagKind::List(WikiList { elements }))
        .into()
}

pub fn cell(kind: CellKind, content: &str) -> TableCell {
    TableCell {
        kind,
        content: vec![text(content)],
        ..Default::default()
    }
}

pub fn row(cells: Vec<TableCell>) -> TableRow {
    TableRow {
        cells,
        ..Default::default()
    }
}

pub fn wikitable(table: WikiTable) -> Token {
    TagToken::new("wikitable")
        .with_kind(TagKind::Table(table))
        .into()
}

/// A tag whose body the tokenizer kept raw.
pub fn opaque(name: &str, body: &str) -> TagToken {
    TagToken::new(name)
        .with_kind(TagKind::NoBodyParsing)
        .with_body(body)
}
