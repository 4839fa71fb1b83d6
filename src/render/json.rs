//! JSON rendering of the raw segment structure.

use std::io::{self, Write};

use crate::transform::StyledOutput;

use super::Renderer;

/// Serializes the output as `{"paragraphs": [[{"bold", "normal"}, ...], ...]}`.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Renderer for JsonRenderer {
    fn render<W: Write>(&self, output: &StyledOutput, writer: &mut W) -> io::Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, output)?;
        } else {
            serde_json::to_writer(&mut *writer, output)?;
        }
        writer.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform;

    #[test]
    fn test_compact_shape() {
        let json = JsonRenderer::new()
            .render_to_string(&transform("ab\n", 0.5))
            .unwrap();
        assert_eq!(
            json,
            "{\"paragraphs\":[[{\"bold\":\"a\",\"normal\":\"b\"}],[]]}\n"
        );
    }

    #[test]
    fn test_parses_back() {
        let out = transform("one two\n\nthree", 0.3);
        let json = JsonRenderer::new()
            .pretty(true)
            .render_to_string(&out)
            .unwrap();
        let parsed: StyledOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, out);
    }
}
