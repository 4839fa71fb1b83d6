//! The bionic reading transform.
//!
//! Text is split into paragraphs on `'\n'` and each paragraph into words on
//! runs of whitespace, with the ASCII information separators `\x1c`..`\x1f`
//! counted as whitespace. Every word is then cut at
//! `ceil(char_len * ratio)` characters, clamped to the word, into a bold
//! prefix and a normal suffix:
//!
//! ```
//! use bionic::transform;
//!
//! let out = transform("hello world\n\nbye", 0.5);
//!
//! assert_eq!(out.len(), 3);
//! let first = out.paragraphs()[0].segments();
//! assert_eq!((first[0].bold.as_str(), first[0].normal.as_str()), ("hel", "lo"));
//! assert!(out.paragraphs()[1].is_empty());
//! ```
//!
//! The transform is pure and total: it holds no state, never panics and
//! accepts any ratio, including NaN and infinities (see [`split_point`]).

mod output;
mod split;

pub use output::{Paragraph, Segment, StyledOutput};
pub use split::{split_point, split_word};

use crate::style::StyleConfig;

/// A transform bound to a ratio.
///
/// Built from a [`StyleConfig`] snapshot so that later edits to the config do
/// not affect a transform in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BionicTransform {
    ratio: f64,
}

impl BionicTransform {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }

    pub fn from_config(config: &StyleConfig) -> Self {
        Self::new(config.bionic_ratio)
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Transform `text` into styled paragraphs.
    pub fn apply(&self, text: &str) -> StyledOutput {
        let output: StyledOutput = text
            .split('\n')
            .map(|line| self.paragraph(line))
            .collect();

        tracing::debug!(
            ratio = self.ratio,
            paragraphs = output.len(),
            segments = output.segment_count(),
            "bionic transform complete"
        );
        output
    }

    fn paragraph(&self, line: &str) -> Paragraph {
        line.split(is_separator)
            .filter(|word| !word.is_empty())
            .map(|word| split_word(word, self.ratio))
            .collect()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl Default for BionicTransform {
    fn default() -> Self {
        Self::new(StyleConfig::DEFAULT_RATIO)
    }
}

/// Transform `text` with the given bold `ratio`.
///
/// Shorthand for `BionicTransform::new(ratio).apply(text)`.
pub fn transform(text: &str, ratio: f64) -> StyledOutput {
    BionicTransform::new(ratio).apply(text)
}
