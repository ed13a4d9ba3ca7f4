//! Host text-buffer interface.
//!
//! The generator never owns the editor document. It reads whole lines by
//! byte offset through [`TextBuffer`], and treats an offset at or past the
//! end of the document as "no more input".

/// One physical line of the buffer, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLine<'a> {
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Line content, excluding `\n` and a trailing `\r`.
    pub text: &'a str,
    /// Byte offset of the first character of the following line.
    pub next: usize,
}

/// Read access to a document by byte offset.
pub trait TextBuffer {
    /// The line containing `offset`, or `None` when `offset >= self.len()`.
    fn line_at(&self, offset: usize) -> Option<BufferLine<'_>>;

    /// Document length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate lines starting with the one containing `offset`.
    fn lines_from(&self, offset: usize) -> Lines<'_, Self>
    where
        Self: Sized,
    {
        Lines {
            buffer: self,
            offset,
        }
    }
}

/// Iterator over consecutive buffer lines, see [`TextBuffer::lines_from`].
pub struct Lines<'a, B: TextBuffer> {
    buffer: &'a B,
    offset: usize,
}

impl<'a, B: TextBuffer> Iterator for Lines<'a, B> {
    type Item = BufferLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.buffer.line_at(self.offset)?;
        self.offset = line.next;
        Some(line)
    }
}

/// In-memory document, used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    text: String,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset of the start of the zero-based line `line`.
    #[must_use]
    pub fn offset_of_line(&self, line: usize) -> Option<usize> {
        if line == 0 {
            return Some(0);
        }
        self.text
            .bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .nth(line - 1)
            .map(|(idx, _)| idx + 1)
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl TextBuffer for SourceText {
    fn line_at(&self, offset: usize) -> Option<BufferLine<'_>> {
        let bytes = self.text.as_bytes();
        if offset >= bytes.len() {
            return None;
        }

        let start = bytes[..offset]
            .iter()
            .rposition(|b| *b == b'\n')
            .map_or(0, |idx| idx + 1);
        let end = bytes[start..]
            .iter()
            .position(|b| *b == b'\n')
            .map_or(bytes.len(), |idx| start + idx);

        let text = &self.text[start..end];
        Some(BufferLine {
            start,
            text: text.strip_suffix('\r').unwrap_or(text),
            next: end + 1,
        })
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}
