//! Indentation-aware sinks for generated source text.
//!
//! Generators write through the [`CodeSink`] trait and never touch files or
//! buffers directly; persistence is the caller's concern.

use std::io;
use std::io::Write;

const INDENT_UNIT: &str = "    ";

/// Scoped text sink for emitted source code.
pub trait CodeSink {
    /// Writes raw text at the current position, without indentation.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Writes one line, indented to the current level. Empty lines are
    /// written without indentation.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Increments the indentation level for subsequent lines.
    fn indent(&mut self);

    /// Decrements the indentation level.
    ///
    /// # Panics
    ///
    /// Panics if the level is already zero; an unbalanced dedent is a bug in
    /// the emitter.
    fn dedent(&mut self);
}

/// Sink that indents lines and forwards them to an [`io::Write`].
pub struct IndentWriter<W> {
    inner: W,
    level: usize,
}

impl<W: Write> IndentWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, level: 0 }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CodeSink for IndentWriter<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if !line.is_empty() {
            for _ in 0..self.level {
                self.inner.write_all(INDENT_UNIT.as_bytes())?;
            }
            self.inner.write_all(line.as_bytes())?;
        }
        self.inner.write_all(b"\n")
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        assert!(self.level > 0, "dedent below indentation level zero");
        self.level -= 1;
    }
}

/// In-memory sink that records everything written to it.
///
/// Callers that postpone persistence (for example to compare the new output
/// against an existing file) generate into a `StringSink` first.
pub struct StringSink(IndentWriter<Vec<u8>>);

impl StringSink {
    pub fn new() -> Self {
        Self(IndentWriter::new(Vec::new()))
    }

    pub fn into_string(self) -> String {
        String::from_utf8(self.0.into_inner()).expect("sink input is UTF-8")
    }
}

impl Default for StringSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeSink for StringSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.0.write(text)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.0.write_line(line)
    }

    fn indent(&mut self) {
        self.0.indent()
    }

    fn dedent(&mut self) {
        self.0.dedent()
    }
}
