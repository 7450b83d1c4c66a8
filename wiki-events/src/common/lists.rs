//! Flattens wiki list runs into nested list events.
//!
//! # The High-Level Concept
//!
//! A wiki list is a sequence of lines, each prefixed with a marker sequence
//! such as `*`, `*#` or `;`. The tokenizer groups consecutive lines sharing a
//! marker at the same depth into a run; deeper lines become nested runs
//! inside the run they continue. Each run maps to one list container and
//! each line to one item, but the item kind is decided by the *last* marker
//! of the line, so a definition run can alternate terms and descriptions.
//!
//! # The Algorithm
//!
//! 1. **Top level:** nested runs are flattened recursively, stray elements
//!    (no enclosing run) only have their content traversed.
//!
//! 2. **Entering a run:**
//!    - `*` opens a bulleted list, `#` a numbered list, anything else a
//!      definition list
//!    - an item matching the run's marker is opened right away
//!
//! 3. **Walking the run:**
//!    - nested runs recurse, staying inside the open item
//!    - the first leaf reuses the open item
//!    - every following leaf closes the open item and opens a new one for
//!      the last character of its own marker sequence
//!
//! 4. **Leaving a run:** the open item is closed, then the container.
//!
//! Given runs `*`, `*`, `#` at one level this yields a bulleted list with two
//! items followed by a numbered list with one item.

use crate::converter::Traversal;
use crate::generators::Block;
use crate::ir::attributes::Attributes;
use crate::ir::events::ListKind;
use crate::ir::token::{ListElement, ListNode, ListRun, WikiList};

/// Emits the events for a whole wiki list.
pub fn flatten_list(list: &WikiList, parameters: &Attributes, cx: &mut Traversal<'_>) {
    for node in &list.elements {
        match node {
            ListNode::Run(run) => walk_run(run, parameters, cx),
            ListNode::Element(element) => {
                cx.traverse(&element.content);
            }
        }
    }
}

/// Container block for a run marker.
pub fn container_for(marker: char) -> Block {
    match marker {
        ListRun::BULLET => Block::List(ListKind::Bulleted),
        ListRun::NUMBERED => Block::List(ListKind::Numbered),
        _ => Block::DefinitionList,
    }
}

/// Item block for an item marker.
pub fn item_for(marker: char) -> Block {
    match marker {
        ListRun::TERM => Block::DefinitionTerm,
        ListRun::DESCRIPTION => Block::DefinitionDescription,
        _ => Block::ListItem,
    }
}

fn walk_run(run: &ListRun, parameters: &Attributes, cx: &mut Traversal<'_>) {
    let container = container_for(run.marker);
    container.begin(cx.listener(), parameters);
    walk_elements(run, parameters, cx);
    container.end(cx.listener(), parameters);
}

fn walk_elements(run: &ListRun, parameters: &Attributes, cx: &mut Traversal<'_>) {
    let empty = Attributes::new();
    let mut current = run.marker;
    let mut item_open = false;

    item_for(current).begin(cx.listener(), &empty);
    for node in &run.elements {
        match node {
            ListNode::Run(nested) => walk_run(nested, parameters, cx),
            ListNode::Element(element) => {
                if item_open {
                    item_for(current).end(cx.listener(), &empty);
                    current = item_marker(element);
                    item_for(current).begin(cx.listener(), &empty);
                }
                item_open = true;
                cx.traverse(&element.content);
            }
        }
    }
    item_for(current).end(cx.listener(), &empty);
}

fn item_marker(element: &ListElement) -> char {
    element.marker().unwrap_or(ListRun::BULLET)
}
