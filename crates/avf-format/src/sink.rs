//! Append-only text sink with an indentation cursor.

use std::fmt;

/// A growable text buffer that renderers append to.
///
/// The sink tracks the column of the write position on the last line so
/// that a renderer invoked mid-line can align its continuation lines under
/// its own first character. Renderers never write a trailing newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSink {
    buf: String,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current column, i.e. the number of characters written
    /// since the last newline.
    pub fn indent(&self) -> usize {
        let line_start = self.buf.rfind('\n').map_or(0, |pos| pos + 1);
        self.buf[line_start..].chars().count()
    }

    /// Starts a new line and pads it to `indent` columns.
    pub fn newline(&mut self, indent: usize) {
        self.buf.push('\n');
        self.pad(indent);
    }

    /// Appends `n` spaces.
    pub fn pad(&mut self, n: usize) {
        self.buf.extend(std::iter::repeat(' ').take(n));
    }

    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Embeds another renderer at the current position.
    pub fn put<R: Render + ?Sized>(&mut self, item: &R) {
        item.render(self);
    }

    /// Formats into the sink; used by `write!`. Formatting into a `String`
    /// cannot fail.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(&mut self.buf, args);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Display for TextSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

impl From<TextSink> for String {
    fn from(sink: TextSink) -> String {
        sink.buf
    }
}

/// Something that can append itself to a [`TextSink`].
pub trait Render {
    /// Appends zero or more lines, starting at the sink's current column.
    fn render(&self, out: &mut TextSink);

    /// Renders into a fresh sink and returns the text.
    fn to_text(&self) -> String {
        let mut out = TextSink::new();
        self.render(&mut out);
        out.into_string()
    }
}

impl<R: Render + ?Sized> Render for &R {
    fn render(&self, out: &mut TextSink) {
        (**self).render(out);
    }
}
