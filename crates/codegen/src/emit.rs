//! Rendering of the key table and decision tree as C++ source text.
//!
//! The emitter is the only target-language-specific piece of the pipeline.
//! It writes a keys array, a values array, and a lookup class through the
//! caller's [`CodeSink`] and performs no I/O of its own.

use crate::keys::KeyTable;
use crate::names;
use crate::tree::DecisionNode;
use crate::EmitError;
use common::sink::CodeSink;
use smol_str::SmolStr;
use std::fmt::Write;

/// Character width of the generated arrays and of the query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharWidth {
    /// `char` keys and unprefixed literals.
    Narrow,
    /// `wchar_t` keys and `L`-prefixed literals.
    Wide,
}

impl CharWidth {
    fn char_type(self) -> &'static str {
        match self {
            CharWidth::Narrow => "char",
            CharWidth::Wide => "wchar_t",
        }
    }

    fn literal_prefix(self) -> &'static str {
        match self {
            CharWidth::Narrow => "",
            CharWidth::Wide => "L",
        }
    }

    fn compare_fn(self) -> &'static str {
        match self {
            CharWidth::Narrow => "std::memcmp",
            CharWidth::Wide => "std::wmemcmp",
        }
    }
}

/// Emitter configuration for one lookup table.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix of the generated array and class names.
    pub prefix: SmolStr,
    /// Element type of the values array, inserted verbatim.
    pub value_type: String,
    pub char_width: CharWidth,
    /// Hide the backing arrays inside an anonymous namespace.
    pub encapsulate: bool,
}

pub(crate) struct Emitter<'a> {
    table: &'a KeyTable,
    config: &'a Config,
    sink: &'a mut dyn CodeSink,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(table: &'a KeyTable, config: &'a Config, sink: &'a mut dyn CodeSink) -> Self {
        Self { table, config, sink }
    }

    /// Emits the arrays and the lookup class. An empty table emits only the
    /// class: `findIndex` always misses and `valueAtIndex` always aborts, so
    /// there is nothing for arrays to back.
    pub(crate) fn emit(&mut self, tree: &DecisionNode) -> Result<(), EmitError> {
        if self.table.is_empty() {
            return self.emit_lookup_class(tree);
        }

        if self.config.encapsulate {
            self.line("namespace {")?;
            self.blank()?;
        }
        self.emit_keys_array()?;
        self.blank()?;
        self.emit_values_array()?;
        self.blank()?;
        if self.config.encapsulate {
            self.line("} // namespace")?;
            self.blank()?;
        }
        self.emit_lookup_class(tree)
    }

    fn emit_keys_array(&mut self) -> Result<(), EmitError> {
        let width = self.config.char_width;
        self.line(&format!(
            "static const {} *const {}[] = {{",
            width.char_type(),
            names::keys_array(&self.config.prefix)
        ))?;
        self.sink.indent();
        for key in self.table.keys() {
            self.line(&format!("{},", string_literal(key.chars(), width)))?;
        }
        self.sink.dedent();
        self.line("};")
    }

    fn emit_values_array(&mut self) -> Result<(), EmitError> {
        self.line(&format!(
            "static const {} {}[] = {{",
            self.config.value_type,
            names::values_array(&self.config.prefix)
        ))?;
        self.sink.indent();
        for key in self.table.keys() {
            self.line(&format!("{},", key.value_expr()))?;
        }
        self.sink.dedent();
        self.line("};")
    }

    fn emit_lookup_class(&mut self, tree: &DecisionNode) -> Result<(), EmitError> {
        self.line(&format!(
            "class {} {{",
            names::lookup_class(&self.config.prefix)
        ))?;
        self.line("public:")?;
        self.sink.indent();
        self.emit_find_index(tree)?;
        self.blank()?;
        self.emit_value_at_index()?;
        self.sink.dedent();
        self.line("};")
    }

    fn emit_find_index(&mut self, tree: &DecisionNode) -> Result<(), EmitError> {
        self.line(&format!(
            "static int findIndex(const {} *query, int length) {{",
            self.config.char_width.char_type()
        ))?;
        self.sink.indent();
        if self.table.is_empty() {
            self.line("(void)query;")?;
            self.line("(void)length;")?;
            self.line("return -1;")?;
        } else {
            self.line("int index = -1;")?;
            self.emit_node(tree)?;
            self.line("return index;")?;
        }
        self.sink.dedent();
        self.line("}")
    }

    fn emit_value_at_index(&mut self) -> Result<(), EmitError> {
        self.line(&format!(
            "static {} valueAtIndex(int index) {{",
            self.config.value_type
        ))?;
        self.sink.indent();
        if self.table.is_empty() {
            self.line("(void)index;")?;
            self.line(&format!(
                "assert(!\"{} is empty\");",
                names::lookup_class(&self.config.prefix)
            ))?;
            self.line("std::abort();")?;
        } else {
            self.line(&format!(
                "assert(index >= 0 && index < {});",
                self.table.len()
            ))?;
            self.line(&format!(
                "return {}[index];",
                names::values_array(&self.config.prefix)
            ))?;
        }
        self.sink.dedent();
        self.line("}")
    }

    fn emit_node(&mut self, node: &DecisionNode) -> Result<(), EmitError> {
        match node {
            DecisionNode::Leaf(index) => self.emit_leaf(*index),
            DecisionNode::SwitchOnChar { position, branches } => {
                let width = self.config.char_width;
                let scrutinee = format!("query[{position}]");
                // A one-case switch degenerates to an equality guard.
                if let [(ch, child)] = branches.as_slice() {
                    self.emit_guard(&format!("{scrutinee} == {}", char_literal(*ch, width)), child)
                } else {
                    self.emit_switch(
                        &scrutinee,
                        branches.iter().map(|(ch, child)| (char_literal(*ch, width), child)),
                    )
                }
            }
            DecisionNode::SwitchOnLength { branches } => {
                if let [(length, child)] = branches.as_slice() {
                    self.emit_guard(&format!("length == {length}"), child)
                } else {
                    self.emit_switch(
                        "length",
                        branches.iter().map(|(len, child)| (len.to_string(), child)),
                    )
                }
            }
        }
    }

    fn emit_switch<'n>(
        &mut self,
        scrutinee: &str,
        branches: impl Iterator<Item = (String, &'n DecisionNode)>,
    ) -> Result<(), EmitError> {
        self.line(&format!("switch ({scrutinee}) {{"))?;
        for (label, child) in branches {
            self.line(&format!("case {label}:"))?;
            self.sink.indent();
            self.emit_node(child)?;
            self.line("break;")?;
            self.sink.dedent();
        }
        self.line("}")
    }

    fn emit_guard(&mut self, condition: &str, child: &DecisionNode) -> Result<(), EmitError> {
        self.line(&format!("if ({condition}) {{"))?;
        self.sink.indent();
        self.emit_node(child)?;
        self.sink.dedent();
        self.line("}")
    }

    fn emit_leaf(&mut self, index: usize) -> Result<(), EmitError> {
        let key = self.table.key(index);
        // A zero-length key is equal to the query by the time the length
        // dispatch reaches it.
        if key.is_empty() {
            return self.line(&format!("index = {index};"));
        }

        let width = self.config.char_width;
        self.line(&format!(
            "if ({}(query, {}[{}], {}) == 0) {{",
            width.compare_fn(),
            names::keys_array(&self.config.prefix),
            index,
            key.len()
        ))?;
        self.sink.indent();
        self.line(&format!("index = {index};"))?;
        self.sink.dedent();
        self.line("}")
    }

    fn line(&mut self, line: &str) -> Result<(), EmitError> {
        self.sink.write_line(line)?;
        Ok(())
    }

    fn blank(&mut self) -> Result<(), EmitError> {
        self.line("")
    }
}

fn string_literal(chars: &[char], width: CharWidth) -> String {
    let mut out = String::from(width.literal_prefix());
    out.push('"');
    for &ch in chars {
        escape_into(ch, '"', width, &mut out);
    }
    out.push('"');
    out
}

fn char_literal(ch: char, width: CharWidth) -> String {
    let mut out = String::from(width.literal_prefix());
    out.push('\'');
    escape_into(ch, '\'', width, &mut out);
    out.push('\'');
    out
}

/// Escapes one character for a C++ literal quoted with `quote`.
///
/// Non-printable ASCII uses exactly-three-digit octal escapes; unlike hex
/// escapes, those cannot be extended by a following literal character.
///
/// # Panics
///
/// Panics on a non-ASCII character under [`CharWidth::Narrow`]; the driver
/// validates key texts before generation, so this is a caller bug.
fn escape_into(ch: char, quote: char, width: CharWidth, out: &mut String) {
    match ch {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\r' => out.push_str("\\r"),
        _ if ch == quote => {
            out.push('\\');
            out.push(ch);
        }
        ' '..='~' => out.push(ch),
        _ if (ch as u32) < 0x80 => write!(out, "\\{:03o}", ch as u32).unwrap(),
        _ => {
            assert!(
                width == CharWidth::Wide,
                "non-ASCII character {ch:?} in a narrow-width table"
            );
            if (ch as u32) <= 0xFFFF {
                write!(out, "\\u{:04X}", ch as u32).unwrap();
            } else {
                write!(out, "\\U{:08X}", ch as u32).unwrap();
            }
        }
    }
}
