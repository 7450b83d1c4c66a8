use crate::common::word;
use wiki_events::ir::events::check_nesting;
use wiki_events::options::DEFAULT_MAX_DEPTH;
use wiki_events::{parse_tokens, to_events, ConverterOptions, Event, TagToken, Token};

/// `levels` nested groups around one word. The word's list sits at
/// traversal depth `levels + 1`.
fn nested(levels: usize) -> Vec<Token> {
    let mut tokens = vec![Token::text("leaf")];
    for _ in 0..levels {
        tokens = vec![TagToken::new("div").with_children(tokens).into()];
    }
    tokens
}

fn count(events: &[Event], wanted: fn(&Event) -> bool) -> usize {
    events.iter().filter(|event| wanted(event)).count()
}

#[test]
fn test_tree_at_the_ceiling_is_complete() {
    let options = ConverterOptions::default().with_max_depth(4);
    let (events, report) = to_events(&nested(3), &options);

    assert!(report.is_lossless());
    assert!(events.contains(&word("leaf")));
    assert_eq!(check_nesting(&events), Ok(()));
}

#[test]
fn test_one_level_deeper_drops_only_the_deepest_subtree() {
    let options = ConverterOptions::default().with_max_depth(4);
    let (events, report) = to_events(&nested(4), &options);

    assert_eq!(report.truncated_subtrees, 1);
    assert!(!events.contains(&word("leaf")));
    assert_eq!(
        count(&events, |e| matches!(e, Event::StartGroup { .. })),
        4
    );
    assert_eq!(count(&events, |e| matches!(e, Event::EndGroup)), 4);
    assert_eq!(check_nesting(&events), Ok(()));
}

#[test]
fn test_siblings_after_a_truncated_subtree_still_render() {
    let options = ConverterOptions::default().with_max_depth(2);
    let tokens: Vec<Token> = vec![
        TagToken::new("div")
            .with_child(TagToken::new("div").with_text("too deep"))
            .into(),
        Token::text("after"),
    ];
    let (events, report) = to_events(&tokens, &options);

    assert_eq!(report.truncated_subtrees, 1);
    assert_eq!(events[events.len() - 2], word("after"));
    assert_eq!(check_nesting(&events), Ok(()));
}

#[test]
fn test_default_ceiling() {
    assert_eq!(ConverterOptions::default().max_depth, DEFAULT_MAX_DEPTH);

    let (events, report) = to_events(&nested(DEFAULT_MAX_DEPTH - 1), &ConverterOptions::default());
    assert!(report.is_lossless());
    assert!(events.contains(&word("leaf")));

    let (_, report) = to_events(&nested(DEFAULT_MAX_DEPTH), &ConverterOptions::default());
    assert_eq!(report.truncated_subtrees, 1);
}

fn nested_json(levels: usize) -> String {
    let mut json = r#"{"type":"content","text":"leaf"}"#.to_string();
    for _ in 0..levels {
        json = format!(r#"{{"type":"tag","name":"div","children":[{json}]}}"#);
    }
    format!("[{json}]")
}

#[test]
fn test_deep_json_reaches_the_ceiling_instead_of_failing_to_parse() {
    let tokens = parse_tokens(&nested_json(100)).expect("deep tree parses");
    assert_eq!(tokens, nested(100));

    let (events, report) = to_events(&tokens, &ConverterOptions::default());
    assert_eq!(report.truncated_subtrees, 1);
    assert!(!events.contains(&word("leaf")));
    assert_eq!(check_nesting(&events), Ok(()));

    let options = ConverterOptions::default().with_max_depth(101);
    let (events, report) = to_events(&tokens, &options);
    assert!(report.is_lossless());
    assert!(events.contains(&word("leaf")));
}

#[test]
fn test_trailing_garbage_is_still_rejected() {
    assert!(parse_tokens(&format!("{} x", nested_json(3))).is_err());
}
