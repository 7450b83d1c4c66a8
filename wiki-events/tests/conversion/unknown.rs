use crate::common::{body_events, word};
use wiki_events::ir::attributes::Attributes;
use wiki_events::{Converter, Event, EventRecorder, TagToken, Token};

fn blink(children: bool) -> Vec<Token> {
    let tag = TagToken::new("blink").with_attribute("rate", "fast");
    let tag = if children { tag.with_text("hi") } else { tag };
    vec![tag.into()]
}

fn without_channel(tokens: &[Token]) -> Vec<Event> {
    let mut recorder = EventRecorder::without_unknown();
    Converter::default().convert_fragment(tokens, &mut recorder);
    recorder.into_events()
}

#[test]
fn test_empty_unknown_tag_is_a_pair() {
    let parameters = Attributes::new().with("rate", "fast");
    assert_eq!(
        body_events(&blink(false)),
        vec![
            Event::StartUnknown {
                id: "blink".to_string(),
                parameters,
            },
            Event::EndUnknown {
                id: "blink".to_string()
            },
        ]
    );
}

#[test]
fn test_unknown_tag_with_children_is_flattened() {
    assert_eq!(
        body_events(&blink(true)),
        vec![
            word("hi"),
            Event::Unknown {
                id: "blink".to_string(),
                parameters: Attributes::new().with("rate", "fast"),
            },
        ]
    );
}

#[test]
fn test_listener_without_unknown_channel() {
    assert!(without_channel(&blink(false)).is_empty());
    assert_eq!(without_channel(&blink(true)), vec![word("hi")]);
}

#[test]
fn test_lookup_is_case_sensitive() {
    let tokens: Vec<Token> = vec![TagToken::new("B").with_text("x").into()];
    assert!(matches!(
        body_events(&tokens).last(),
        Some(Event::Unknown { id, .. }) if id == "B"
    ));
}
