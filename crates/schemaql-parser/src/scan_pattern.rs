/// The token shapes the [`Scanner`](crate::Scanner) can match beyond plain
/// literals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScanPattern {
    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name,

    /// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
    Number,

    /// A double-quoted string. Only `\\` and `\"` escapes are allowed and the
    /// string may not span lines.
    String,

    /// `#` up to (not including) the end of the line. A trailing `\r` is not
    /// part of the comment.
    Comment,
}

impl ScanPattern {
    /// Returns the byte length of the match at the very start of `input`, if
    /// any.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        let bytes = input.as_bytes();
        match self {
            Self::Name => match_name(bytes),
            Self::Number => match_number(bytes),
            Self::String => match_string(bytes),
            Self::Comment => match_comment(bytes),
        }
    }

    /// A short human-readable description, used in error messages.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::String => "string",
            Self::Comment => "comment",
        }
    }
}

pub(crate) fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

pub(crate) fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}

fn match_name(bytes: &[u8]) -> Option<usize> {
    if !bytes.first().is_some_and(|b| is_name_start(*b)) {
        return None;
    }
    let rest = bytes[1..]
        .iter()
        .take_while(|b| is_name_continue(**b))
        .count();
    Some(1 + rest)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn match_number(bytes: &[u8]) -> Option<usize> {
    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    // Integer part
    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => pos += 1 + count_digits(&bytes[pos + 1..]),
        _ => return None,
    }

    // Fractional part is only taken when at least one digit follows the `.`
    if bytes.get(pos) == Some(&b'.') {
        let digits = count_digits(&bytes[pos + 1..]);
        if digits > 0 {
            pos += 1 + digits;
        }
    }

    // Exponent, same rule
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let digits = count_digits(&bytes[exp_pos.min(bytes.len())..]);
        if digits > 0 {
            pos = exp_pos + digits;
        }
    }

    Some(pos)
}

fn match_string(bytes: &[u8]) -> Option<usize> {
    if bytes.first() != Some(&b'"') {
        return None;
    }
    let mut pos = 1;
    loop {
        match bytes.get(pos)? {
            b'"' => return Some(pos + 1),
            b'\n' => return None,
            b'\\' => match bytes.get(pos + 1)? {
                b'\\' | b'"' => pos += 2,
                _ => return None,
            },
            _ => pos += 1,
        }
    }
}

fn match_comment(bytes: &[u8]) -> Option<usize> {
    if bytes.first() != Some(&b'#') {
        return None;
    }
    let mut end = memchr::memchr(b'\n', bytes).unwrap_or(bytes.len());
    if end > 1 && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    Some(end)
}

/// Resolves the `\\` and `\"` escapes of a string matched by
/// [`ScanPattern::String`] and strips its quotes.
pub(crate) fn unescape_string(lexeme: &str) -> String {
    let inner = &lexeme[1..lexeme.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(escaped) = chars.next() {
                result.push(escaped);
            }
        } else {
            result.push(ch);
        }
    }
    result
}
