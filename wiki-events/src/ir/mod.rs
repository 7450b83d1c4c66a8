//! Intermediate representations shared by every stage of a conversion.
//!
//! The converter reads a tree of [`token::Token`]s and emits a stream of
//! [`events::Event`]s through a [`crate::listener::Listener`]. Both sides
//! share the ordered [`attributes::Attributes`] map, links and images carry a
//! typed [`reference::ResourceReference`].

pub mod attributes;
pub mod events;
pub mod reference;
pub mod token;
