use crate::SdlParseErrorKind;
use crate::SmallVec;
use crate::SourcePosition;

/// Extra context attached to a parse error. Most errors carry none.
pub type SdlParseErrorNotes = SmallVec<[String; 2]>;

/// A fatal SDL syntax error.
///
/// Carries everything needed to present the error without holding onto the
/// source: the message, its kind, where it happened, and a pre-rendered
/// excerpt of the surrounding lines.
///
/// `Display` renders the message followed by the excerpt:
///
/// ```text
/// Expected ":" but got "S"
///
///     type User {
///       name String
///            ^
///     }
/// ```
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}{excerpt}")]
pub struct SdlParseError {
    /// Human-readable primary error message.
    message: String,

    /// Categorized error kind for programmatic handling.
    kind: SdlParseErrorKind,

    /// Where the error was detected (the first significant character at or
    /// after the point of failure).
    position: SourcePosition,

    /// The rendered source excerpt, beginning with a blank line.
    excerpt: String,

    notes: SdlParseErrorNotes,
}

impl SdlParseError {
    /// Creates a new parse error located at `byte_offset` within `source`.
    pub fn new(
        message: impl Into<String>,
        kind: SdlParseErrorKind,
        source: &str,
        byte_offset: usize,
    ) -> Self {
        let position = SourcePosition::from_offset(source, byte_offset);
        Self {
            message: message.into(),
            kind,
            excerpt: render_excerpt(source, &position),
            position,
            notes: SdlParseErrorNotes::new(),
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &SdlParseErrorKind {
        &self.kind
    }

    pub fn position(&self) -> &SourcePosition {
        &self.position
    }

    pub fn byte_offset(&self) -> usize {
        self.position.byte_offset()
    }

    /// Returns the rendered source excerpt.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn notes(&self) -> &SdlParseErrorNotes {
        &self.notes
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub(crate) fn with_note(mut self, note: impl Into<String>) -> Self {
        self.add_note(note);
        self
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// <input>:5:12: error: Expected ":" but got "S"
    /// ```
    pub fn format_oneline(&self) -> String {
        self.format_oneline_with_file_name("<input>")
    }

    /// Like [`format_oneline`](Self::format_oneline), naming the file the
    /// source came from.
    pub fn format_oneline_with_file_name(&self, file_name: &str) -> String {
        let line = self.position.line() + 1;
        let column = self.position.col() + 1;
        format!("{file_name}:{line}:{column}: error: {}", self.message)
    }

    /// Formats this error for CLI output: the one-line summary, the excerpt,
    /// then any notes.
    pub fn format_detailed(&self, file_name: &str) -> String {
        let mut output = self.format_oneline_with_file_name(file_name);
        output.push_str(&self.excerpt);
        for note in &self.notes {
            output.push_str(&format!("    = note: {note}\n"));
        }
        output
    }
}

/// Renders the line before, the offending line, a caret under the offending
/// column, and the line after. Each source line is indented by four spaces.
fn render_excerpt(source: &str, position: &SourcePosition) -> String {
    const INDENT: &str = "    ";
    let lines: Vec<&str> = source.split('\n').collect();
    let line_at = |idx: Option<usize>| {
        idx.and_then(|idx| lines.get(idx))
            .map(|line| line.trim_end_matches('\r'))
            .unwrap_or("")
    };

    let line = position.line();
    let before = line_at(line.checked_sub(1));
    let current = line_at(Some(line));
    let after = line_at(Some(line + 1));
    let padding = " ".repeat(INDENT.len() + position.col());

    format!("\n\n{INDENT}{before}\n{INDENT}{current}\n{padding}^\n{INDENT}{after}\n")
}
