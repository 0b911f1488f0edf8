//! Position-annotated YAML parsing for config-augment
//!
//! Provides a read-only node tree carrying the source line and column of
//! every node, plus the line-level helpers used to splice new text into a
//! document without re-serializing it.

pub mod edit;
pub mod error;
pub mod lines;
pub mod node;
pub mod parser;

pub use edit::{Edit, EditKind};
pub use error::{Error, Result};
pub use node::{CollectionStyle, Mark, NodeKind, PositionedDocument, PositionedNode};
pub use parser::parse;
