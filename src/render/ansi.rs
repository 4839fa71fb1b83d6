//! Terminal rendering with SGR bold.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::transform::StyledOutput;

use super::{Renderer, write_layout};

const BOLD: &str = "\x1b[1m";
const NORMAL_INTENSITY: &str = "\x1b[22m";

/// Renders bold prefixes with ANSI `ESC[1m` / `ESC[22m` escapes.
///
/// Control characters in the text itself (other than tab) are written as
/// U+FFFD, so only the renderer's own escapes reach the terminal.
#[derive(Debug, Clone, Default)]
pub struct AnsiRenderer;

impl AnsiRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for AnsiRenderer {
    fn render<W: Write>(&self, output: &StyledOutput, writer: &mut W) -> io::Result<()> {
        write_layout(output, writer, |w, segment, _| {
            if !segment.bold.is_empty() {
                write!(w, "{BOLD}{}{NORMAL_INTENSITY}", neutralize(&segment.bold))?;
            }
            w.write_all(neutralize(&segment.normal).as_bytes())
        })
    }
}

fn is_unsafe(c: char) -> bool {
    c.is_control() && c != '\t'
}

fn neutralize(text: &str) -> Cow<'_, str> {
    if text.contains(is_unsafe) {
        Cow::Owned(
            text.chars()
                .map(|c| if is_unsafe(c) { char::REPLACEMENT_CHARACTER } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}
