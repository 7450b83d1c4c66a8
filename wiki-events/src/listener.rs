//! The document event consumer interface.
//!
//! Every method has a no-op default so consumers only implement what they
//! render. The "unknown" channel is opt-in: a listener that does not return
//! `true` from [`Listener::supports_unknown`] never receives those events,
//! and unrecognised tags with children are flattened into their children
//! instead.

use crate::ir::attributes::Attributes;
use crate::ir::events::{Format, HeaderLevel, ListKind};
use crate::ir::reference::ResourceReference;

pub trait Listener {
    fn begin_document(&mut self) {}
    fn end_document(&mut self) {}

    fn begin_header(&mut self, _level: HeaderLevel, _id: Option<&str>, _parameters: &Attributes) {}
    fn end_header(&mut self, _level: HeaderLevel, _id: Option<&str>, _parameters: &Attributes) {}

    fn begin_paragraph(&mut self, _parameters: &Attributes) {}
    fn end_paragraph(&mut self, _parameters: &Attributes) {}

    fn begin_list(&mut self, _kind: ListKind, _parameters: &Attributes) {}
    fn end_list(&mut self, _kind: ListKind, _parameters: &Attributes) {}
    fn begin_list_item(&mut self, _parameters: &Attributes) {}
    fn end_list_item(&mut self, _parameters: &Attributes) {}

    fn begin_definition_list(&mut self, _parameters: &Attributes) {}
    fn end_definition_list(&mut self, _parameters: &Attributes) {}
    fn begin_definition_term(&mut self) {}
    fn end_definition_term(&mut self) {}
    fn begin_definition_description(&mut self) {}
    fn end_definition_description(&mut self) {}

    fn begin_table(&mut self, _parameters: &Attributes) {}
    fn end_table(&mut self, _parameters: &Attributes) {}
    fn begin_table_row(&mut self, _parameters: &Attributes) {}
    fn end_table_row(&mut self, _parameters: &Attributes) {}
    fn begin_table_cell(&mut self, _parameters: &Attributes) {}
    fn end_table_cell(&mut self, _parameters: &Attributes) {}
    fn begin_table_head_cell(&mut self, _parameters: &Attributes) {}
    fn end_table_head_cell(&mut self, _parameters: &Attributes) {}

    fn begin_link(
        &mut self,
        _reference: &ResourceReference,
        _freestanding: bool,
        _parameters: &Attributes,
    ) {
    }
    fn end_link(
        &mut self,
        _reference: &ResourceReference,
        _freestanding: bool,
        _parameters: &Attributes,
    ) {
    }

    fn begin_group(&mut self, _parameters: &Attributes) {}
    fn end_group(&mut self, _parameters: &Attributes) {}

    fn begin_format(&mut self, _format: Format, _parameters: &Attributes) {}
    fn end_format(&mut self, _format: Format, _parameters: &Attributes) {}

    fn begin_figure(&mut self, _parameters: &Attributes) {}
    fn end_figure(&mut self, _parameters: &Attributes) {}
    fn begin_figure_caption(&mut self, _parameters: &Attributes) {}
    fn end_figure_caption(&mut self, _parameters: &Attributes) {}

    fn on_image(
        &mut self,
        _reference: &ResourceReference,
        _freestanding: bool,
        _parameters: &Attributes,
    ) {
    }
    fn on_verbatim(&mut self, _content: &str, _inline: bool, _parameters: &Attributes) {}
    fn on_macro(
        &mut self,
        _id: &str,
        _parameters: &Attributes,
        _content: Option<&str>,
        _inline: bool,
    ) {
    }
    fn on_horizontal_line(&mut self, _parameters: &Attributes) {}

    fn on_new_line(&mut self) {}
    fn on_word(&mut self, _word: &str) {}
    fn on_space(&mut self) {}
    fn on_special_symbol(&mut self, _symbol: char) {}

    /// Whether this listener accepts the unknown-construct channel.
    fn supports_unknown(&self) -> bool {
        false
    }
    fn begin_unknown(&mut self, _id: &str, _parameters: &Attributes) {}
    fn end_unknown(&mut self, _id: &str, _parameters: &Attributes) {}
    fn on_unknown(&mut self, _id: &str, _parameters: &Attributes) {}
}
