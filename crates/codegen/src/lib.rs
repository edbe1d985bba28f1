//! Static string-lookup code generator.
//!
//! Given an ordered set of distinct string keys mapped to opaque
//! target-language value expressions, builds a decision tree that
//! discriminates a query first on its length and then on individual
//! character positions, and renders the tree as C++ source: a keys array, a
//! values array, and a lookup class exposing `findIndex` and `valueAtIndex`.

pub use crate::emit::{CharWidth, Config};
pub use crate::keys::{Key, KeyTable};
pub use crate::tree::DecisionNode;

pub mod emit;
pub mod keys;
pub mod names;
pub mod partition;
pub mod tree;

use common::sink::CodeSink;
use std::fmt;
use std::io;

/// Generates the lookup table source for `table` into `sink`.
///
/// This is the whole pipeline: partition the keys by length, discriminate
/// each group on character positions, and render the arrays and the lookup
/// class. Generation is all-or-nothing; nothing is retried on failure.
///
/// # Panics
///
/// Contract violations (duplicate keys, non-ASCII keys in a narrow-width
/// table) are bugs in the caller, not recoverable conditions, and panic.
pub fn generate(
    table: &KeyTable,
    config: &Config,
    sink: &mut dyn CodeSink,
) -> Result<(), EmitError> {
    let tree = tree::build_tree(table);
    emit_tree(table, &tree, config, sink)
}

/// Renders an already-built decision tree for `table` into `sink`.
///
/// [`generate`] is the usual entry point; this seam exists because the tree
/// is built fully before any text is written, and a caller holding the IR
/// can render it against several configurations.
pub fn emit_tree(
    table: &KeyTable,
    tree: &DecisionNode,
    config: &Config,
    sink: &mut dyn CodeSink,
) -> Result<(), EmitError> {
    emit::Emitter::new(table, config, sink).emit(tree)
}

/// Failure to render generated code through the output sink.
#[derive(Debug)]
pub enum EmitError {
    Sink(io::Error),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::Sink(err) => write!(f, "sink write error: {err}"),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmitError::Sink(err) => Some(err),
        }
    }
}

impl From<io::Error> for EmitError {
    fn from(err: io::Error) -> Self {
        EmitError::Sink(err)
    }
}
