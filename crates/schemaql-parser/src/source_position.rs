/// A location within SDL source text.
///
/// **All position values are 0-based.** `col` counts characters (not bytes)
/// from the start of the line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col,
            byte_offset,
        }
    }

    /// Computes the line and column of `byte_offset` within `source`.
    ///
    /// Offsets past the end of `source` are clamped to its length.
    pub fn from_offset(source: &str, byte_offset: usize) -> Self {
        let byte_offset = byte_offset.min(source.len());
        let prefix = &source[..byte_offset];
        let line = memchr::memchr_iter(b'\n', prefix.as_bytes()).count();
        let line_start = memchr::memrchr(b'\n', prefix.as_bytes())
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let col = prefix[line_start..].chars().count();
        Self::new(line, col, byte_offset)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character column within the line.
    pub fn col(&self) -> usize {
        self.col
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
