// Cursor and line location utilities

/// First non-space character marking a comment line
pub const COMMENT_MARKER: char = '#';

/// Two-character prefix marking a comment line
pub const LINE_COMMENT_MARKER: &str = "//";

/// Byte range of the line containing a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Offset of the first byte of the line
    pub start: usize,
    /// Offset of the line separator, or the end of the buffer
    pub end: usize,
    /// Bytes examined to find both ends, separators included
    pub scanned: usize,
}

impl LineSpan {
    /// Line text without its separator (a trailing `\r` is dropped too)
    pub fn content<'a>(&self, text: &'a str) -> &'a str {
        let line = &text[self.start..self.end];
        line.strip_suffix('\r').unwrap_or(line)
    }
}

/// Clamp a cursor into `[0, text.len()]`, snapping back to a char boundary
pub fn clamp_cursor(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}

/// Find the line around an already-clamped cursor
///
/// Scans outward from the cursor and stops at the first separator on each
/// side, so the work done is the length of the cursor line.
pub fn locate_line(text: &str, cursor: usize) -> LineSpan {
    let bytes = text.as_bytes();

    let back = bytes[..cursor]
        .iter()
        .rev()
        .take_while(|&&b| b != b'\n')
        .count();
    let start = cursor - back;
    let forward = bytes[cursor..]
        .iter()
        .take_while(|&&b| b != b'\n')
        .count();
    let end = cursor + forward;

    let separators = usize::from(start > 0) + usize::from(end < text.len());
    LineSpan {
        start,
        end,
        scanned: back + forward + separators,
    }
}

/// Zero-based index of the line beginning at `line_start`
///
/// Counts every separator before the line. Hosts that already track the
/// cursor row should pass it to
/// [`ContextAnalyzer::analyze_context_on_line`](super::ContextAnalyzer::analyze_context_on_line)
/// instead.
pub fn line_number_at(text: &str, line_start: usize) -> usize {
    text.as_bytes()[..line_start]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
}

/// Whether a trimmed line is a comment
pub fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with(COMMENT_MARKER) || trimmed.starts_with(LINE_COMMENT_MARKER)
}

/// First whitespace-delimited token of a line, or `""`
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Whether a token may be a partially typed command name
pub fn is_prefix_candidate(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
