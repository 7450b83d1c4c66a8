//! Structural cleanup run once over a token tree before traversal.
//!
//! Whitespace at the edges of a tag's content is not meaningful in wiki
//! markup, so the first and last child of every tag (and of every list line
//! and table cell) lose their leading and trailing whitespace. When an edge
//! child is itself a tag, the trim continues into that tag's edge. Top-level
//! tokens are left alone, and interior text is untouched: collapsing and
//! entity decoding happen later, once, when text is emitted.

use crate::ir::token::{ListNode, TagKind, TagToken, Token};
use crate::normalize::{strip_leading, strip_trailing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Leading,
    Trailing,
}

/// Trims the edges of every tag in `tokens`, recursively.
pub fn cleanup(tokens: &mut [Token]) {
    for token in tokens {
        if let Token::Tag(tag) = token {
            cleanup_tag(tag);
        }
    }
}

fn cleanup_tag(tag: &mut TagToken) {
    trim_content(&mut tag.children);

    match &mut tag.kind {
        TagKind::List(list) => cleanup_list(&mut list.elements),
        TagKind::Table(table) => {
            for cell in table.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
                trim_content(&mut cell.content);
            }
        }
        _ => {}
    }
}

fn cleanup_list(nodes: &mut [ListNode]) {
    for node in nodes {
        match node {
            ListNode::Run(run) => cleanup_list(&mut run.elements),
            ListNode::Element(element) => trim_content(&mut element.content),
        }
    }
}

fn trim_content(children: &mut [Token]) {
    trim_edge(children, Edge::Leading);
    trim_edge(children, Edge::Trailing);
    cleanup(children);
}

fn trim_edge(children: &mut [Token], edge: Edge) {
    let child = match edge {
        Edge::Leading => children.first_mut(),
        Edge::Trailing => children.last_mut(),
    };
    match child {
        Some(Token::Content(content)) => {
            let trimmed = match edge {
                Edge::Leading => strip_leading(&content.text),
                Edge::Trailing => strip_trailing(&content.text),
            };
            if trimmed.len() != content.text.len() {
                content.text = trimmed.to_string();
            }
        }
        Some(Token::Tag(tag)) => trim_edge(&mut tag.children, edge),
        None => {}
    }
}
