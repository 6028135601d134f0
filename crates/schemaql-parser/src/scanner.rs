use crate::ScanPattern;
use crate::SdlParseError;
use crate::SdlParseErrorKind;
use crate::scan_pattern::is_name_continue;

/// Cursor over SDL source text.
///
/// Holds the immutable original source and how much of it has been
/// consumed. Every `match_*` method first skips insignificant characters and
/// then tries to match at the first significant one. A failed match leaves
/// the scanner exactly where it was.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    source: &'src str,
    offset: usize,
}

/// Characters that separate tokens but carry no meaning: newline, comma,
/// and the horizontal/Unicode space separators.
fn is_insignificant(ch: char) -> bool {
    matches!(
        ch,
        '\n' | ','
            | ' '
            | '\u{0C}'
            | '\r'
            | '\t'
            | '\u{0B}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, offset: 0 }
    }

    /// The full original source.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset of everything consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset of the next significant character (or the end of input).
    pub fn significant_offset(&self) -> usize {
        let rest = &self.source[self.offset..];
        let skipped = rest
            .char_indices()
            .find(|(_, ch)| !is_insignificant(*ch))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        self.offset + skipped
    }

    fn remaining(&self) -> &'src str {
        &self.source[self.significant_offset()..]
    }

    /// Returns `true` when only insignificant characters remain.
    pub fn is_at_end(&self) -> bool {
        self.remaining().is_empty()
    }

    /// The next significant character, without consuming it.
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance_to(&mut self, start: usize, len: usize) -> &'src str {
        let matched = &self.source[start..start + len];
        self.offset = start + len;
        matched
    }

    /// Matches `literal` exactly.
    pub fn match_literal(&mut self, literal: &str) -> Option<&'src str> {
        let start = self.significant_offset();
        if self.source[start..].starts_with(literal) {
            Some(self.advance_to(start, literal.len()))
        } else {
            None
        }
    }

    /// Matches `word` only when it is not immediately followed by a character
    /// that could continue a name, so `typeFoo` does not match `type`.
    pub fn match_keyword(&mut self, word: &str) -> Option<&'src str> {
        let start = self.significant_offset();
        let rest = &self.source[start..];
        let at_boundary = rest
            .as_bytes()
            .get(word.len())
            .is_none_or(|b| !is_name_continue(*b));
        if rest.starts_with(word) && at_boundary {
            Some(self.advance_to(start, word.len()))
        } else {
            None
        }
    }

    pub fn match_pattern(&mut self, pattern: ScanPattern) -> Option<&'src str> {
        let start = self.significant_offset();
        let len = pattern.match_len(&self.source[start..])?;
        Some(self.advance_to(start, len))
    }

    /// Matches `literal` or fails with a positioned syntax error.
    pub fn expect(&mut self, literal: &str) -> Result<&'src str, SdlParseError> {
        let matched = self.match_literal(literal);
        self.required(matched, &format!("\"{literal}\""))
    }

    /// Unwraps `value`, or fails with a positioned
    /// `Expected {expected_name} but got "{char}"` error.
    pub fn required<T>(
        &self,
        value: Option<T>,
        expected_name: &str,
    ) -> Result<T, SdlParseError> {
        value.ok_or_else(|| self.expected_error(expected_name))
    }

    fn expected_error(&self, expected_name: &str) -> SdlParseError {
        let found = self.peek_char().map(String::from);
        let message = match &found {
            Some(ch) => format!("Expected {expected_name} but got \"{ch}\""),
            None => format!("Expected {expected_name} but got end of input"),
        };
        self.error(
            message,
            SdlParseErrorKind::ExpectedToken {
                expected: expected_name.to_string(),
                found,
            },
        )
    }

    /// Builds an error positioned at the next significant character.
    pub fn error(
        &self,
        message: impl Into<String>,
        kind: SdlParseErrorKind,
    ) -> SdlParseError {
        SdlParseError::new(message, kind, self.source, self.significant_offset())
    }
}
