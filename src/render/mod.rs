//! Renderers that paint a [`StyledOutput`] in a concrete format.
//!
//! Provides the [`Renderer`] trait and format-specific implementations.
//!
//! # Architecture
//!
//! Renderers hold their configuration and write to any [`Write`]
//! destination. The text formats share one layout: a single space between
//! consecutive words of a paragraph and a blank line (two newlines) between
//! paragraphs. Empty paragraphs still contribute their break.
//!
//! # Example
//!
//! ```
//! use bionic::render::{MarkdownRenderer, Renderer};
//!
//! let out = bionic::transform("hello world", 0.5);
//! let md = MarkdownRenderer::new().render_to_string(&out)?;
//!
//! assert_eq!(md, "**hel**lo **wor**ld\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;
use crate::transform::{Segment, StyledOutput};

mod ansi;
mod html;
#[cfg(feature = "serde")]
mod json;
mod markdown;

pub use ansi::AnsiRenderer;
pub use html::{HtmlRenderer, escape_xml};
#[cfg(feature = "serde")]
pub use json::JsonRenderer;
pub use markdown::{MarkdownRenderer, escape_markdown};

/// Separator between consecutive words of a paragraph.
pub const WORD_SEPARATOR: &str = " ";

/// Separator between paragraphs.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Trait for painting transform output in a specific format.
pub trait Renderer {
    /// Render `output` to the provided writer.
    fn render<W: Write>(&self, output: &StyledOutput, writer: &mut W) -> io::Result<()>;

    /// Render `output` into a new string.
    fn render_to_string(&self, output: &StyledOutput) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(output, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Walk `output` with the shared text layout, calling `segment` for each
/// word. The flag passed to `segment` is true for the first word of a
/// paragraph. A final newline is written if anything was.
pub(crate) fn write_layout<W, F>(
    output: &StyledOutput,
    writer: &mut W,
    mut segment: F,
) -> io::Result<()>
where
    W: Write,
    F: FnMut(&mut W, &Segment, bool) -> io::Result<()>,
{
    let mut wrote = false;
    for (i, paragraph) in output.iter().enumerate() {
        if i > 0 {
            writer.write_all(PARAGRAPH_BREAK.as_bytes())?;
            wrote = true;
        }
        for (j, seg) in paragraph.iter().enumerate() {
            if j > 0 {
                writer.write_all(WORD_SEPARATOR.as_bytes())?;
            }
            segment(writer, seg, j == 0)?;
            wrote = true;
        }
    }
    if wrote {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Output formats known to the command-line front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Html,
    Ansi,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "markdown",
            OutputFormat::Html => "html",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Json => "json",
        }
    }

    /// Detect a format from a file extension. Returns `None` for unknown
    /// extensions; ANSI has no file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(OutputFormat::Markdown),
            "html" | "htm" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "html" | "htm" => Ok(OutputFormat::Html),
            "ansi" | "terminal" => Ok(OutputFormat::Ansi),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform;

    fn plain(output: &StyledOutput) -> String {
        let mut buf = Vec::new();
        write_layout(output, &mut buf, |w, seg, _| {
            write!(w, "{}|{}", seg.bold, seg.normal)
        })
        .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_layout_words_and_paragraphs() {
        assert_eq!(plain(&transform("ab cd\nef", 0.5)), "a|b c|d\n\ne|f\n");
    }

    #[test]
    fn test_layout_keeps_empty_paragraphs() {
        assert_eq!(plain(&transform("a\n\nb", 0.5)), "a|\n\n\n\nb|\n");
    }

    #[test]
    fn test_layout_empty_input() {
        assert_eq!(plain(&transform("", 0.5)), "");
        assert_eq!(plain(&transform("   ", 0.5)), "");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("terminal".parse::<OutputFormat>().unwrap(), OutputFormat::Ansi);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(f)) if f == "pdf"
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("out.HTML"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::from_path("notes.md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_path("dump.json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_path("out.txt"), None);
        assert_eq!(OutputFormat::from_path("README"), None);
    }
}
