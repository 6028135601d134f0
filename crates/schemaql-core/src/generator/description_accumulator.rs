/// Collects consecutive `#` comment lines and folds them into the
/// documentation of whatever is defined next.
///
/// One accumulator lives for exactly one generation run. Every consumer
/// drains it, so a comment block is attached at most once.
#[derive(Debug, Default)]
pub struct DescriptionAccumulator {
    lines: Vec<String>,
}
impl DescriptionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores one comment line. The leading `#` is stripped if present.
    pub fn push(&mut self, comment: &str) {
        let line = comment.strip_prefix('#').unwrap_or(comment);
        self.lines.push(line.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Folds the stored lines into one description and resets.
    ///
    /// The smallest indentation among the non-blank lines is removed from
    /// every line. Returns `None` when nothing was stored or every line is
    /// blank.
    pub fn take(&mut self) -> Option<String> {
        let lines = std::mem::take(&mut self.lines);
        let indent = lines.iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| leading_whitespace(line))
            .min()?;

        let description = lines.iter()
            .map(|line| {
                if line.trim().is_empty() {
                    String::new()
                } else {
                    line.chars().skip(indent).collect()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        Some(description)
    }

    /// Drops any pending lines.
    pub fn discard(&mut self) {
        if !self.lines.is_empty() {
            log::trace!(
                "Discarding {} trailing comment line(s) that document nothing.",
                self.lines.len(),
            );
        }
        self.lines.clear();
    }
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}
