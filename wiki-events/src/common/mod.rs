//! Traversal logic shared by several generators: the structural cleanup
//! pass and the list and table flatteners.

pub mod cleanup;
pub mod lists;
pub mod tables;
