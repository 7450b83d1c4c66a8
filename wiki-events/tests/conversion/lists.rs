use crate::common::{events, line, run, trace, wikilist};
use insta::assert_snapshot;
use wiki_events::ir::events::check_nesting;
use wiki_events::ir::token::{ListElement, ListNode};
use wiki_events::{TagToken, Token};

#[test]
fn test_runs_with_different_markers_become_separate_lists() {
    let tokens = vec![wikilist(vec![
        run('*', vec![line("*", "one"), line("*", "two")]),
        run('#', vec![line("#", "three")]),
    ])];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin list bulleted
        begin list_item
          word "one"
        end list_item
        begin list_item
          word "two"
        end list_item
      end list bulleted
      begin list numbered
        begin list_item
          word "three"
        end list_item
      end list numbered
    end document
    "###);
}

#[test]
fn test_nested_run_stays_inside_open_item() {
    let tokens = vec![wikilist(vec![run(
        '*',
        vec![
            line("*", "a"),
            run('#', vec![line("*#", "b")]),
            line("*", "c"),
        ],
    )])];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin list bulleted
        begin list_item
          word "a"
          begin list numbered
            begin list_item
              word "b"
            end list_item
          end list numbered
        end list_item
        begin list_item
          word "c"
        end list_item
      end list bulleted
    end document
    "###);
}

#[test]
fn test_definition_run_alternates_terms_and_descriptions() {
    let tokens = vec![wikilist(vec![run(
        ';',
        vec![line(";", "term"), line(":", "first"), line(":", "second")],
    )])];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin definition_list
        begin definition_term
          word "term"
        end definition_term
        begin definition_description
          word "first"
        end definition_description
        begin definition_description
          word "second"
        end definition_description
      end definition_list
    end document
    "###);
}

#[test]
fn test_list_attributes_go_to_containers() {
    let tokens: Vec<Token> = vec![TagToken::new("wikilist")
        .with_attribute("class", "compact")
        .with_kind(wiki_events::ir::token::TagKind::List(
            wiki_events::ir::token::WikiList {
                elements: vec![run('*', vec![line("*", "x")])],
            },
        ))
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin list bulleted {class="compact"}
        begin list_item
          word "x"
        end list_item
      end list bulleted
    end document
    "###);
}

#[test]
fn test_line_content_is_trimmed_and_stray_lines_pass_through() {
    let tokens = vec![wikilist(vec![
        ListNode::Element(ListElement {
            sequence: "*".to_string(),
            content: vec![Token::text("  stray ")],
        }),
        run('*', vec![line("*", "  kept  ")]),
    ])];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      word "stray"
      begin list bulleted
        begin list_item
          word "kept"
        end list_item
      end list bulleted
    end document
    "###);
}

#[test]
fn test_deep_lists_stay_balanced() {
    let mut node = run('#', vec![line("****#", "deep")]);
    for marker in ['*', '#', '*', '*'] {
        node = run(marker, vec![line("*", "level"), node]);
    }
    let events = events(&[wikilist(vec![node])]);

    assert_eq!(check_nesting(&events), Ok(()));
}
