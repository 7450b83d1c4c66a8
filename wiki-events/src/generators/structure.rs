use crate::common::lists::flatten_list;
use crate::common::tables::flatten_table;
use crate::converter::Traversal;
use crate::generators::EventGenerator;
use crate::ir::token::{TagKind, TagToken};

/// Wiki list markup (`*`, `#`, `;`, `:`).
pub struct WikiListGenerator<'t> {
    token: &'t TagToken,
}

impl<'t> WikiListGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        Self { token }
    }
}

impl EventGenerator for WikiListGenerator<'_> {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        match &self.token.kind {
            TagKind::List(list) => flatten_list(list, &self.token.attributes, cx),
            _ => {
                cx.traverse(&self.token.children);
            }
        }
    }
}

/// Wiki table markup (`{| ... |}`).
pub struct WikiTableGenerator<'t> {
    token: &'t TagToken,
}

impl<'t> WikiTableGenerator<'t> {
    pub fn new(token: &'t TagToken) -> Self {
        Self { token }
    }
}

impl EventGenerator for WikiTableGenerator<'_> {
    fn traverse(&self, cx: &mut Traversal<'_>) {
        match &self.token.kind {
            TagKind::Table(table) => flatten_table(table, cx),
            _ => {
                cx.traverse(&self.token.children);
            }
        }
    }
}
