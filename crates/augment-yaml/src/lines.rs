//! Line-level text surgery.
//!
//! Documents are handled as the sequence produced by splitting on `\n`, so
//! `join(&split(text)) == text` for every input, trailing newline included.

/// Line terminator of a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// `CrLf` when the text contains any `\r\n`
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Rewrite every line break of `text` as `\n`
    pub fn normalize(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::CrLf => text.replace("\r\n", "\n"),
        }
    }

    /// Rewrite every `\n` of normalized `text` with this ending
    pub fn restore(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::CrLf => text.replace('\n', self.as_str()),
        }
    }
}

/// Split text into lines, keeping a trailing empty line when `text` ends with `\n`
pub fn split(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_owned).collect()
}

/// Inverse of [`split`]
pub fn join(lines: &[String]) -> String {
    lines.join("\n")
}

/// Number of leading spaces
pub fn indentation(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Blank or comment-only line
pub fn is_trivia(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Build a line indented by `indent` spaces
pub fn indented(indent: usize, content: impl AsRef<str>) -> String {
    format!("{}{}", " ".repeat(indent), content.as_ref())
}

/// Index of the last line belonging to the sequence item that starts at
/// `start`, whose dash sits at `column` (0-based).
///
/// Every following line indented deeper than the dash continues the item.
/// Blank and comment lines are skipped and never end up as the extent's last
/// line, so comments leading the next item stay attached to it.
pub fn item_extent_end(lines: &[String], start: usize, column: usize) -> usize {
    let mut last = start;
    for (index, line) in lines.iter().enumerate().skip(start + 1) {
        if is_trivia(line) {
            continue;
        }
        if indentation(line) <= column {
            break;
        }
        last = index;
    }
    last
}

/// Insert `new_lines` directly after the line at `index`
pub fn insert_after(lines: &mut Vec<String>, index: usize, new_lines: Vec<String>) {
    let at = (index + 1).min(lines.len());
    lines.splice(at..at, new_lines);
}

/// Append `new_lines` after the last line
pub fn append(lines: &mut Vec<String>, new_lines: Vec<String>) {
    lines.extend(new_lines);
}
