//! Directory tree walking logic
//!
//! The walk reads the filesystem once and produces a `TreeListing`: the root
//! name plus a flat, pre-order list of `TreeEntry` records. Formatters in
//! `crate::output` turn that listing into markup or text.

mod entry;
mod utils;
mod walker;

pub use entry::{TreeEntry, TreeListing};
pub use walker::walk_tree;
