/// Plain text accumulator backing every scope.
///
/// Only raw concatenation lives here: no indentation, no statement
/// terminators. Callers decide where semicolons and newlines go.
use std::fmt::{self, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    buf: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Append anything displayable to the end of the buffer.
    pub fn append<T: fmt::Display>(&mut self, text: T) -> &mut Self {
        // Formatting into a String is infallible.
        let _ = write!(self.buf, "{text}");
        self
    }

    /// Insert text at the start, shifting existing content after it.
    pub fn prepend<T: fmt::Display>(&mut self, text: T) -> &mut Self {
        self.buf.insert_str(0, &text.to_string());
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Current content. Leaves the buffer untouched.
    pub fn render(&self) -> String {
        self.buf.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
