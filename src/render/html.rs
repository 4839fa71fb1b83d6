//! HTML rendering with the font settings of a [`StyleConfig`].

use std::io::{self, Write};

use crate::style::StyleConfig;
use crate::transform::StyledOutput;

use super::Renderer;

/// Renders each paragraph as `<p>` with bold prefixes in `<b>`.
///
/// The font family, point size and line height come from the
/// [`StyleConfig`] the renderer was built with. By default a complete
/// document is written; [`HtmlRenderer::fragment`] switches to a single
/// styled `<div>` for embedding.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    font_name: String,
    font_size: u32,
    line_spacing: u32,
    fragment: bool,
    title: String,
}

impl HtmlRenderer {
    pub fn new(config: &StyleConfig) -> Self {
        Self {
            font_name: config.font_name.clone(),
            font_size: config.font_size,
            line_spacing: config.line_spacing,
            fragment: false,
            title: "Bionic Reading".to_string(),
        }
    }

    /// Emit a `<div>` fragment instead of a full document.
    pub fn fragment(mut self, fragment: bool) -> Self {
        self.fragment = fragment;
        self
    }

    /// Set the document `<title>`. Ignored for fragments.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// CSS declarations for the text block.
    pub fn css_declarations(&self) -> String {
        format!(
            "font-family: \"{}\"; font-size: {}pt; line-height: {}",
            escape_css_string(&self.font_name),
            self.font_size,
            self.line_spacing
        )
    }

    fn write_paragraphs<W: Write>(&self, output: &StyledOutput, w: &mut W) -> io::Result<()> {
        for paragraph in output {
            w.write_all(b"<p>")?;
            for (i, segment) in paragraph.iter().enumerate() {
                if i > 0 {
                    w.write_all(b" ")?;
                }
                if !segment.bold.is_empty() {
                    write!(w, "<b>{}</b>", escape_xml(&segment.bold))?;
                }
                w.write_all(escape_xml(&segment.normal).as_bytes())?;
            }
            w.write_all(b"</p>\n")?;
        }
        Ok(())
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(&StyleConfig::default())
    }
}

impl Renderer for HtmlRenderer {
    fn render<W: Write>(&self, output: &StyledOutput, writer: &mut W) -> io::Result<()> {
        let css = self.css_declarations();

        if self.fragment {
            writeln!(writer, "<div class=\"bionic\" style=\"{}\">", escape_xml(&css))?;
            self.write_paragraphs(output, writer)?;
            return writer.write_all(b"</div>\n");
        }

        writeln!(writer, "<!DOCTYPE html>")?;
        writeln!(writer, "<html>")?;
        writeln!(writer, "<head>")?;
        writeln!(writer, "<meta charset=\"utf-8\">")?;
        writeln!(writer, "<title>{}</title>", escape_xml(&self.title))?;
        writeln!(writer, "<style>")?;
        writeln!(writer, "body {{ {css}; }}")?;
        writeln!(writer, "b {{ font-weight: bold; }}")?;
        writeln!(writer, "</style>")?;
        writeln!(writer, "</head>")?;
        writeln!(writer, "<body>")?;
        self.write_paragraphs(output, writer)?;
        writeln!(writer, "</body>")?;
        writeln!(writer, "</html>")
    }
}

/// Escape special characters for XML/HTML text and attribute content.
pub fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a value for use inside a double-quoted CSS string.
///
/// `<` is hex-escaped so the value cannot close a `<style>` element.
fn escape_css_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            '<' => result.push_str("\\3c "),
            '\n' | '\r' => result.push(' '),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform;

    #[test]
    fn test_fragment() {
        let html = HtmlRenderer::default()
            .fragment(true)
            .render_to_string(&transform("hello world\n\nbye", 0.5))
            .unwrap();
        assert_eq!(
            html,
            "<div class=\"bionic\" style=\"font-family: &quot;Aptos Display&quot;; font-size: 12pt; line-height: 1\">\n\
             <p><b>hel</b>lo <b>wor</b>ld</p>\n\
             <p></p>\n\
             <p><b>by</b>e</p>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_document_uses_config() {
        let config = StyleConfig {
            font_name: "OpenDyslexic".to_string(),
            font_size: 16,
            line_spacing: 2,
            bionic_ratio: 0.5,
        };
        let html = HtmlRenderer::new(&config)
            .with_title("Notes")
            .render_to_string(&transform("x", 0.5))
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Notes</title>"));
        assert!(html.contains(
            "body { font-family: \"OpenDyslexic\"; font-size: 16pt; line-height: 2; }"
        ));
        assert!(html.contains("<p><b>x</b></p>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = HtmlRenderer::default()
            .fragment(true)
            .render_to_string(&transform("<a&b>", 0.4))
            .unwrap();
        assert!(html.contains("<p><b>&lt;a</b>&amp;b&gt;</p>"));
    }

    #[test]
    fn test_font_name_cannot_break_out() {
        let config = StyleConfig {
            font_name: "Evil\"</style>".to_string(),
            ..StyleConfig::default()
        };
        let css = HtmlRenderer::new(&config).css_declarations();
        assert!(css.starts_with("font-family: \"Evil\\\"\\3c /style>\";"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("'q'"), "&#39;q&#39;");
    }
}
