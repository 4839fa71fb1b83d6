//! Markdown rendering: bold prefixes as `**strong**` emphasis.

use std::io::{self, Write};

use crate::transform::{Segment, StyledOutput};

use super::{Renderer, write_layout};

/// Renders bold prefixes with `**` delimiters.
///
/// When the delimiter would not close (the prefix ends in punctuation and the
/// suffix starts with a letter), that word falls back to inline
/// `<strong>` HTML so the emphasis still renders.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for MarkdownRenderer {
    fn render<W: Write>(&self, output: &StyledOutput, writer: &mut W) -> io::Result<()> {
        write_layout(output, writer, |w, segment, line_start| {
            write_segment(w, segment, line_start)
        })
    }
}

fn write_segment<W: Write>(w: &mut W, segment: &Segment, line_start: bool) -> io::Result<()> {
    let Segment { bold, normal } = segment;

    if bold.is_empty() {
        return w.write_all(escape_markdown(normal, line_start).as_bytes());
    }

    if closes_cleanly(bold, normal) {
        write!(
            w,
            "**{}**{}",
            escape_markdown(bold, line_start),
            escape_markdown(normal, false)
        )
    } else {
        write!(
            w,
            "<strong>{}</strong>{}",
            escape_markdown(bold, line_start).replace('&', "&amp;"),
            escape_markdown(normal, false)
        )
    }
}

/// Whether a `**` run between `bold` and `normal` is right-flanking.
fn closes_cleanly(bold: &str, normal: &str) -> bool {
    let ends_in_punct = bold.chars().next_back().is_some_and(is_punctuation);
    let next = normal.chars().next();
    !ends_in_punct || next.is_none_or(|c| c.is_whitespace() || is_punctuation(c))
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || (!c.is_alphanumeric() && !c.is_whitespace() && !c.is_control())
}

/// Escape Markdown syntax in a word fragment.
///
/// Inline syntax (`\`, `*`, `_`, `` ` ``, `[`, `]`, `<`, `>`, `|`, `!`) is
/// always escaped. With `line_start` set, block markers that only matter at
/// the start of a line are escaped too: headings (`#`), bullets (`-`, `+`)
/// and ordered-list numbers (`1.`, `2)`).
///
/// # Examples
///
/// ```
/// use bionic::render::escape_markdown;
///
/// assert_eq!(escape_markdown("*word*", false), "\\*word\\*");
/// assert_eq!(escape_markdown("#tag", true), "\\#tag");
/// assert_eq!(escape_markdown("#tag", false), "#tag");
/// assert_eq!(escape_markdown("1.", true), "1\\.");
/// ```
pub fn escape_markdown(text: &str, line_start: bool) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    let digits = text.chars().take_while(char::is_ascii_digit).count();
    let ordered_marker = line_start
        && digits > 0
        && matches!(text[digits..].chars().next(), Some('.' | ')'));

    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' | '*' | '_' | '`' | '[' | ']' | '<' | '>' | '|' | '!' => {
                result.push('\\');
                result.push(c);
            }
            '#' | '-' | '+' if line_start && i == 0 => {
                result.push('\\');
                result.push(c);
            }
            '.' | ')' if ordered_marker && i == digits => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
