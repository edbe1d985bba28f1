//! The key table: an indexed, immutable view of the caller's ordered
//! key→value-expression mapping.

use indexmap::IndexMap;
use smol_str::SmolStr;

/// One entry of a lookup table: a distinct key string with a stable index
/// and the opaque target-language expression for its value.
#[derive(Debug, Clone)]
pub struct Key {
    index: usize,
    text: SmolStr,
    chars: Vec<char>,
    value_expr: String,
}

impl Key {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The key text as characters, for positional access.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    pub fn value_expr(&self) -> &str {
        &self.value_expr
    }
}

/// All keys of one lookup table, in input order.
///
/// Indices are assigned at construction (the first entry is index 0) and are
/// the values the generated `findIndex` reports. Key distinctness is the
/// caller's precondition; taking an `IndexMap` makes it structural.
#[derive(Debug, Default)]
pub struct KeyTable {
    keys: Vec<Key>,
}

impl KeyTable {
    pub fn build(entries: IndexMap<SmolStr, String>) -> Self {
        let keys = entries
            .into_iter()
            .enumerate()
            .map(|(index, (text, value_expr))| Key {
                index,
                chars: text.chars().collect(),
                text,
                value_expr,
            })
            .collect();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn key(&self, index: usize) -> &Key {
        &self.keys[index]
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }
}
