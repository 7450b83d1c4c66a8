//! Every conversion emits a balanced stream, whatever the input looks like.

use proptest::prelude::*;
use wiki_events::ir::events::check_nesting;
use wiki_events::ir::token::{
    CellKind, ListElement, ListNode, ListRun, TableCell, TableRow, TagKind, WikiList, WikiTable,
};
use wiki_events::{to_events, Converter, ConverterOptions, Event, EventRecorder, TagToken, Token};

const TAG_NAMES: &[&str] = &[
    "p", "b", "i", "div", "span", "h2", "h7", "ul", "ol", "li", "dl", "dt", "dd", "table", "tr",
    "td", "th", "a", "br", "hr", "center", "font", "bolditalic", "figure", "blink", "wikilink",
    "wikiimage",
];

fn text() -> impl Strategy<Value = Token> {
    "[a-z &;\\n\\t]{0,10}".prop_map(Token::text)
}

fn marker() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['*', '#', ';', ':'])
}

fn cell_kind() -> impl Strategy<Value = CellKind> {
    prop::sample::select(vec![CellKind::Header, CellKind::Body, CellKind::Caption])
}

fn list_node(content: BoxedStrategy<Vec<Token>>) -> impl Strategy<Value = ListNode> {
    let leaf = ("[*#;:]{1,3}", content.clone()).prop_map(|(sequence, content)| {
        ListNode::Element(ListElement { sequence, content })
    });
    leaf.prop_recursive(3, 12, 4, |inner| {
        (marker(), prop::collection::vec(inner, 0..4))
            .prop_map(|(marker, elements)| ListNode::Run(ListRun { marker, elements }))
    })
}

fn table(content: BoxedStrategy<Vec<Token>>) -> impl Strategy<Value = WikiTable> {
    let cell = (cell_kind(), content).prop_map(|(kind, content)| TableCell {
        kind,
        content,
        ..Default::default()
    });
    let row = prop::collection::vec(cell, 0..3).prop_map(|cells| TableRow {
        cells,
        ..Default::default()
    });
    prop::collection::vec(row, 0..3).prop_map(|rows| WikiTable {
        rows,
        ..Default::default()
    })
}

fn token_tree() -> impl Strategy<Value = Token> {
    text().prop_recursive(5, 48, 4, |inner| {
        let children = prop::collection::vec(inner, 0..4).boxed();
        prop_oneof![
            4 => (prop::sample::select(TAG_NAMES), children.clone()).prop_map(
                |(name, children)| Token::from(TagToken::new(name).with_children(children))
            ),
            1 => prop::collection::vec(list_node(children.clone()), 0..3).prop_map(|elements| {
                Token::from(
                    TagToken::new("wikilist").with_kind(TagKind::List(WikiList { elements })),
                )
            }),
            1 => table(children).prop_map(|table| {
                Token::from(TagToken::new("wikitable").with_kind(TagKind::Table(table)))
            }),
        ]
    })
}

proptest! {
    #[test]
    fn conversions_are_balanced(tokens in prop::collection::vec(token_tree(), 0..4)) {
        let (events, _) = to_events(&tokens, &ConverterOptions::default());
        prop_assert_eq!(check_nesting(&events), Ok(()));
    }

    #[test]
    fn truncated_conversions_are_balanced(
        tokens in prop::collection::vec(token_tree(), 0..4),
        max_depth in 1usize..5,
    ) {
        let options = ConverterOptions::default().with_max_depth(max_depth);
        let (events, _) = to_events(&tokens, &options);
        prop_assert_eq!(check_nesting(&events), Ok(()));
    }

    #[test]
    fn unknown_channel_does_not_affect_balance(tokens in prop::collection::vec(token_tree(), 0..4)) {
        let mut recorder = EventRecorder::without_unknown();
        Converter::default().convert(&tokens, &mut recorder);
        let events: Vec<Event> = recorder.into_events();
        prop_assert_eq!(check_nesting(&events), Ok(()));
    }
}
