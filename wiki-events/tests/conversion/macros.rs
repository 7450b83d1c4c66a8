use crate::common::{body_events, events_with, opaque, trace, trace_with};
use insta::assert_snapshot;
use wiki_events::ir::attributes::Attributes;
use wiki_events::ir::token::{MacroSpec, TagKind};
use wiki_events::{ConverterOptions, Event, TagToken, Token};

fn toc(show: bool, explicit: bool) -> Token {
    TagToken::new("toc")
        .with_kind(TagKind::TableOfContents { show, explicit })
        .into()
}

fn toc_macro() -> Event {
    Event::Macro {
        id: "toc".to_string(),
        parameters: Attributes::new(),
        content: None,
        inline: false,
    }
}

#[test]
fn test_footnotes() {
    let tokens: Vec<Token> = vec![
        TagToken::new("p")
            .with_text("Claim")
            .with_child(opaque("ref", "See [[Source]]").with_context("p"))
            .into(),
        TagToken::new("references").with_kind(TagKind::NoBodyParsing).into(),
    ];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin paragraph
        word "Claim"
        macro footnote inline content="See [[Source]]"
      end paragraph
      macro putFootnotes
    end document
    "###);
}

#[test]
fn test_macro_inline_follows_parent_context() {
    let inline: Vec<Token> = vec![opaque("math", "\nE=mc^2\n").with_context("p").into()];
    assert_eq!(
        body_events(&inline),
        vec![Event::Macro {
            id: "formula".to_string(),
            parameters: Attributes::new(),
            content: Some("\nE=mc^2\n".to_string()),
            inline: true,
        }]
    );

    let block: Vec<Token> = vec![opaque("math", "\nE=mc^2\n").with_context("td").into()];
    assert_eq!(
        body_events(&block),
        vec![Event::Macro {
            id: "formula".to_string(),
            parameters: Attributes::new(),
            content: Some("E=mc^2".to_string()),
            inline: false,
        }]
    );
}

#[test]
fn test_source_becomes_code_macro() {
    let tokens: Vec<Token> = vec![
        opaque("syntaxhighlight", "fn main() {}")
            .with_attribute("lang", "rust")
            .into(),
        opaque("source", "x")
            .with_attribute("inline", "")
            .into(),
    ];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      macro code {language="rust"} content="fn main() {}"
      macro code inline content="x"
    end document
    "###);
}

#[test]
fn test_unregistered_opaque_tag_is_a_generic_macro() {
    let tokens: Vec<Token> = vec![opaque("poem", "\nroses  are red\n")
        .with_attribute("style", "float:left")
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      macro poem {style="float:left"} content="roses  are red"
    end document
    "###);
}

#[test]
fn test_declared_macro_metadata_wins() {
    let tokens: Vec<Token> = vec![TagToken::new("xmacro")
        .with_kind(TagKind::Macro(MacroSpec {
            id: Some("info".to_string()),
            inline: Some(true),
            has_content: false,
        }))
        .with_attribute("title", "Note")
        .with_body("ignored")
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      macro info inline {title="Note"}
    end document
    "###);
}

#[test]
fn test_gallery_lines_become_image_links() {
    let tokens: Vec<Token> = vec![opaque("gallery", "\na.png|First\nImage:b.jpg\n\n").into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      macro gallery content="[[File:a.png|First]]\n[[Image:b.jpg]]"
    end document
    "###);
}

#[test]
fn test_gallery_keeps_custom_alias_in_any_case() {
    let tokens: Vec<Token> = vec![opaque("gallery", "ФАЙЛ:c.png\nd.png").into()];
    let options = ConverterOptions::default()
        .with_namespace_alias(6, "Файл");

    assert_snapshot!(trace_with(&tokens, &options), @r###"
    begin document
      macro gallery content="[[ФАЙЛ:c.png]]\n[[File:d.png]]"
    end document
    "###);
}

#[test]
fn test_verbatim_keeps_bytes() {
    let tokens: Vec<Token> = vec![
        opaque("nowiki", "  ''raw'' &amp; ").into(),
        opaque("pre", "a\n   b").with_attribute("class", "x").into(),
    ];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      verbatim inline "  ''raw'' &amp; "
      verbatim {class="x"} "a\n   b"
    end document
    "###);
}

#[test]
fn test_template_call_with_prefix() {
    let tokens: Vec<Token> = vec![TagToken::new("Infobox")
        .with_kind(TagKind::Template)
        .with_attribute("1", "Body text")
        .with_attribute("name", "Rust")
        .into()];

    let options = ConverterOptions::default().with_template_macro_prefix("tpl_");
    assert_snapshot!(trace_with(&tokens, &options), @r###"
    begin document
      macro tpl_Infobox {name="Rust"} content="Body text"
    end document
    "###);
}

#[test]
fn test_template_without_positional_content() {
    let tokens: Vec<Token> = vec![TagToken::new("Stub").with_kind(TagKind::Template).into()];

    assert_eq!(
        body_events(&tokens),
        vec![Event::Macro {
            id: "Stub".to_string(),
            parameters: Attributes::new(),
            content: None,
            inline: false,
        }]
    );
}

#[test]
fn test_table_of_contents_rules() {
    let defaults = ConverterOptions::default();
    let no_toc = ConverterOptions::default().with_no_toc(true);
    let body = |tokens: &[Token], options: &ConverterOptions| {
        let mut events = events_with(tokens, options);
        events.pop();
        events.remove(0);
        events
    };

    assert_eq!(body(&[toc(true, false)], &defaults), vec![toc_macro()]);
    assert_eq!(body(&[toc(true, false)], &no_toc), Vec::<Event>::new());
    assert_eq!(body(&[toc(true, true)], &no_toc), vec![toc_macro()]);
    assert_eq!(body(&[toc(false, true)], &defaults), Vec::<Event>::new());
}

#[test]
fn test_toc_marker_bypasses_registry_by_name() {
    let tokens: Vec<Token> = vec![TagToken::new("__TOC__")
        .with_kind(TagKind::TableOfContents {
            show: true,
            explicit: true,
        })
        .into()];

    assert_eq!(body_events(&tokens), vec![toc_macro()]);
}
