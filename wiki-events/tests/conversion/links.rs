use crate::common::{body_events, trace, trace_with};
use insta::assert_snapshot;
use wiki_events::ir::attributes::Attributes;
use wiki_events::ir::reference::ResourceReference;
use wiki_events::ir::token::{ImageSpec, LinkSpec, LinkTarget, TagKind};
use wiki_events::{ConverterOptions, Event, ReferenceTypePolicy, TagToken, Token};

fn internal(topic: &str, anchor: Option<&str>) -> TagToken {
    TagToken::new("wikilink").with_kind(TagKind::Link(LinkSpec {
        target: LinkTarget::Internal {
            topic: topic.to_string(),
            anchor: anchor.map(str::to_string),
        },
        freestanding: false,
    }))
}

fn image(spec: ImageSpec) -> Token {
    TagToken::new("wikiimage")
        .with_kind(TagKind::Image(spec))
        .into()
}

fn native() -> ConverterOptions {
    ConverterOptions::default().with_reference_type(ReferenceTypePolicy::Native)
}

#[test]
fn test_anchor_href_becomes_url_and_is_not_forwarded() {
    let tokens: Vec<Token> = vec![TagToken::new("a")
        .with_attribute("HREF", "http://example.com")
        .with_attribute("title", "t")
        .with_text("site")
        .into()];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin link url:http://example.com {title="t"}
        word "site"
      end link
    end document
    "###);
}

#[test]
fn test_anchor_without_scheme_is_a_path() {
    let tokens: Vec<Token> = vec![TagToken::new("a")
        .with_attribute("href", "Main_Page")
        .with_text("home")
        .into()];

    assert!(matches!(
        &body_events(&tokens)[0],
        Event::StartLink { reference, .. } if *reference == ResourceReference::path("Main_Page")
    ));
}

#[test]
fn test_anchor_without_href_only_emits_children() {
    let tokens: Vec<Token> = vec![TagToken::new("a")
        .with_attribute("name", "x")
        .with_text("label")
        .into()];

    assert_eq!(
        body_events(&tokens),
        vec![Event::Word {
            text: "label".to_string()
        }]
    );
}

#[test]
fn test_internal_link_under_each_policy() {
    let tokens: Vec<Token> = vec![internal("main page", Some("Section 1"))
        .with_text("label")
        .into()];

    assert_snapshot!(trace_with(&tokens, &native()), @r###"
    begin document
      begin link doc:Main_page#Section_1
        word "label"
      end link
    end document
    "###);

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin link main page#Section_1
        word "label"
      end link
    end document
    "###);

    let none = ConverterOptions::default().with_reference_type(ReferenceTypePolicy::None);
    assert_snapshot!(trace_with(&tokens, &none), @r###"
    begin document
      begin link path:main page#Section_1
        word "label"
      end link
    end document
    "###);
}

#[test]
fn test_file_namespace_link_is_an_attachment() {
    let tokens: Vec<Token> = vec![internal("File:Example.png", None).into()];

    assert_eq!(
        body_events(&tokens),
        vec![
            Event::StartLink {
                reference: ResourceReference::attachment("Example.png"),
                freestanding: false,
                parameters: Attributes::new(),
            },
            Event::EndLink,
        ]
    );
}

#[test]
fn test_custom_file_alias() {
    let options = native().with_namespace_alias(6, "Fichier");
    let tokens: Vec<Token> = vec![internal("fichier:plan du site.pdf", None).into()];

    assert_snapshot!(trace_with(&tokens, &options), @r###"
    begin document
      begin link attach:Plan_du_site.pdf
      end link
    end document
    "###);
}

#[test]
fn test_external_and_mail_links() {
    let tokens: Vec<Token> = vec![
        TagToken::new("wikilink")
            .with_kind(TagKind::Link(LinkSpec {
                target: LinkTarget::External {
                    url: "https://example.org/a?b=c".to_string(),
                },
                freestanding: true,
            }))
            .into(),
        TagToken::new("wikilink")
            .with_kind(TagKind::Link(LinkSpec {
                target: LinkTarget::Mailto {
                    address: "mailto:someone@example.org".to_string(),
                },
                freestanding: false,
            }))
            .with_text("mail")
            .into(),
    ];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin link url:https://example.org/a?b=c freestanding
      end link
      begin link mailto:someone@example.org
        word "mail"
      end link
    end document
    "###);
}

#[test]
fn test_image_wrapped_in_file_link() {
    let tokens = vec![image(ImageSpec {
        filename: "Example.png".to_string(),
        namespace: "File".to_string(),
        width: Some("100px".to_string()),
        caption: Some("An example".to_string()),
        align: Some("right".to_string()),
        ..Default::default()
    })];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin link attach:Example.png
        image Example.png {alt="An example", width="100px", style="float:right"}
      end link
    end document
    "###);
}

#[test]
fn test_image_link_variants() {
    let unlinked = vec![image(ImageSpec {
        filename: "a.jpg".to_string(),
        namespace: "File".to_string(),
        link: Some(String::new()),
        align: Some("none".to_string()),
        ..Default::default()
    })];
    assert_snapshot!(trace_with(&unlinked, &native()), @r###"
    begin document
      image A.jpg
    end document
    "###);

    let external = vec![image(ImageSpec {
        filename: "a.jpg".to_string(),
        namespace: "File".to_string(),
        link: Some("http://example.com".to_string()),
        ..Default::default()
    })];
    assert_snapshot!(trace_with(&external, &native()), @r###"
    begin document
      begin link url:http://example.com
        image A.jpg
      end link
    end document
    "###);

    let page = vec![image(ImageSpec {
        filename: "a.jpg".to_string(),
        namespace: "File".to_string(),
        link: Some("Gallery page".to_string()),
        ..Default::default()
    })];
    assert_snapshot!(trace_with(&page, &native()), @r###"
    begin document
      begin link doc:Gallery_page
        image A.jpg
      end link
    end document
    "###);
}

#[test]
fn test_non_image_media_falls_back_to_attachment_link() {
    let tokens = vec![image(ImageSpec {
        filename: "Report.pdf".to_string(),
        namespace: "File".to_string(),
        alt: Some("ignored".to_string()),
        ..Default::default()
    })];

    assert_snapshot!(trace(&tokens), @r###"
    begin document
      begin link attach:Report.pdf
      end link
    end document
    "###);
}
