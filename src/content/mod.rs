//! Content assembly module
//!
//! Reads the content directory once at startup and expands transclusion
//! directives into an immutable page table. Nothing here runs at request time.

mod error;
mod resolver;
mod table;

pub use error::ContentError;
pub use resolver::{directive_target, resolve, Resolver, DIRECTIVE_MARKER};
pub use table::PageTable;
