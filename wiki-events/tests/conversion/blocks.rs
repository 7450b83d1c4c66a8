use crate::common::{body_events, text, trace, word};
use insta::assert_snapshot;
use wiki_events::ir::attributes::Attributes;
use wiki_events::ir::events::HeaderLevel;
use wiki_events::{Event, TagToken, Token};

#[test]
fn test_paragraph_with_formatting() {
    let tokens: Vec<Token> = vec![TagToken::new("p")
        .with_text("Hello ")
        .with_child(TagToken::new("b").with_text("wiki"))
        .with_text(" world")
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin paragraph
        word "Hello"
        space
        begin format bold
          word "wiki"
        end format bold
        space
        word "world"
      end paragraph
    end document
    "###);
}

#[test]
fn test_empty_paragraph_is_suppressed() {
    let tokens: Vec<Token> = vec![
        TagToken::new("p").into(),
        TagToken::new("p").with_text("x").into(),
    ];

    assert_eq!(
        body_events(&tokens),
        vec![
            Event::StartParagraph {
                parameters: Attributes::new()
            },
            word("x"),
            Event::EndParagraph,
        ]
    );
}

#[test]
fn test_header_hoists_span_anchor() {
    let tokens: Vec<Token> = vec![TagToken::new("h2")
        .with_child(
            TagToken::new("span")
                .with_attribute("id", "sec1")
                .with_text("Intro"),
        )
        .into()];

    assert_eq!(
        body_events(&tokens),
        vec![
            Event::StartHeader {
                level: HeaderLevel::clamped(2),
                id: Some("sec1".to_string()),
                parameters: Attributes::new(),
            },
            word("Intro"),
            Event::EndHeader {
                level: HeaderLevel::clamped(2)
            },
        ]
    );
}

#[test]
fn test_header_keeps_span_without_id() {
    let tokens: Vec<Token> = vec![TagToken::new("h1")
        .with_child(
            TagToken::new("span")
                .with_attribute("class", "x")
                .with_text("A"),
        )
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin header level=1
        begin format none {class="x"}
          word "A"
        end format none
      end header level=1
    end document
    "###);
}

#[test]
fn test_empty_header_is_suppressed() {
    let tokens: Vec<Token> = vec![TagToken::new("h3").into()];
    assert!(body_events(&tokens).is_empty());
}

#[test]
fn test_text_is_normalized_once() {
    let tokens: Vec<Token> = vec![TagToken::new("p")
        .with_text("a &amp;  b&nbsp;c &amp;lt;")
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin paragraph
        word "a"
        space
        symbol '&'
        space
        word "b"
        space
        word "c"
        space
        symbol '&'
        word "lt"
        symbol ';'
      end paragraph
    end document
    "###);
}

#[test]
fn test_top_level_text_keeps_edges() {
    assert_eq!(
        body_events(&[text(" x ")]),
        vec![Event::Space, word("x"), Event::Space]
    );
}

#[test]
fn test_line_break_and_rule() {
    let tokens: Vec<Token> = vec![
        TagToken::new("p")
            .with_text("a")
            .with_child(TagToken::new("br"))
            .with_text("b")
            .into(),
        TagToken::new("hr").with_attribute("class", "sep").into(),
    ];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin paragraph
        word "a"
        new_line
        word "b"
      end paragraph
      horizontal_line {class="sep"}
    end document
    "###);
}

#[test]
fn test_bold_italic_closes_in_reverse() {
    let tokens: Vec<Token> = vec![TagToken::new("bolditalic").with_text("both").into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin format bold
        begin format italic
          word "both"
        end format italic
      end format bold
    end document
    "###);
}

#[test]
fn test_font_becomes_styled_span() {
    let tokens: Vec<Token> = vec![TagToken::new("font")
        .with_attribute("size", "5")
        .with_attribute("color", "red")
        .with_attribute("face", "Arial")
        .with_text("x")
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin format none {style="font-size: 1.5em;color: red;font-family: Arial;"}
        word "x"
      end format none
    end document
    "###);
}

#[test]
fn test_default_font_size_adds_nothing() {
    let tokens: Vec<Token> = vec![TagToken::new("font")
        .with_attribute("size", "3")
        .with_text("x")
        .into()];

    assert_eq!(
        body_events(&tokens)[0],
        Event::StartFormat {
            format: wiki_events::ir::events::Format::None,
            parameters: Attributes::new(),
        }
    );
}

#[test]
fn test_registered_style_comes_before_attributes() {
    let tokens: Vec<Token> = vec![
        TagToken::new("small")
            .with_attribute("class", "c")
            .with_text("s")
            .into(),
        TagToken::new("center").with_text("c").into(),
    ];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin format none {style="font-size:small", class="c"}
        word "s"
      end format none
      begin group {style="margin-right: auto; margin-left: auto;text-align: center"}
        word "c"
      end group
    end document
    "###);
}

#[test]
fn test_html_lists_and_definitions() {
    let tokens: Vec<Token> = vec![
        TagToken::new("ol")
            .with_child(TagToken::new("li").with_text("one"))
            .into(),
        TagToken::new("dl")
            .with_child(TagToken::new("dt").with_text("term"))
            .with_child(TagToken::new("dd").with_text("means"))
            .into(),
    ];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin list numbered
        begin list_item
          word "one"
        end list_item
      end list numbered
      begin definition_list
        begin definition_term
          word "term"
        end definition_term
        begin definition_description
          word "means"
        end definition_description
      end definition_list
    end document
    "###);
}
