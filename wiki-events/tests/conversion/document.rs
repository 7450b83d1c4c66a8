use crate::common::{trace, trace_with};
use insta::assert_snapshot;
use wiki_events::{parse_tokens, ConverterOptions, ReferenceTypePolicy};

const KITCHENSINK: &str = include_str!("../fixtures/kitchensink.json");

#[test]
fn test_kitchensink_document() {
    let tokens = parse_tokens(KITCHENSINK).expect("fixture parses");

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin header level=2 id="intro"
        word "Introduction"
      end header level=2
      begin paragraph
        word "See"
        space
        begin link Main Page#History
          word "the"
          space
          word "main"
          space
          word "page"
        end link
        space
        symbol '&'
        space
        word "more"
        symbol '.'
      end paragraph
      macro toc
      begin list bulleted
        begin list_item
          word "first"
        end list_item
        begin list_item
          word "second"
        end list_item
      end list bulleted
      verbatim "  keep   this  "
    end document
    "###);
}

#[test]
fn test_kitchensink_with_native_references_and_no_toc() {
    let tokens = parse_tokens(KITCHENSINK).expect("fixture parses");
    let options = ConverterOptions::default()
        .with_reference_type(ReferenceTypePolicy::Native)
        .with_no_toc(true);
    let trace = trace_with(&tokens, &options);

    assert!(trace.contains("begin link doc:Main_Page#History"));
    assert!(!trace.contains("macro toc"));
}

#[test]
fn test_input_is_not_modified() {
    let tokens = parse_tokens(KITCHENSINK).expect("fixture parses");
    let before = tokens.clone();
    trace(&tokens);
    assert_eq!(tokens, before);
}

#[test]
fn test_invalid_token_json_is_an_error() {
    let err = parse_tokens(r#"[{"type": "paragraph"}]"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid token tree"));
}
