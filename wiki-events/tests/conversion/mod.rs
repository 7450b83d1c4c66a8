//! Whole conversions, token tree in, event stream out.

mod blocks;
mod depth;
mod document;
mod links;
mod lists;
mod macros;
mod nesting;
mod tables;
mod unknown;
