//! Transform output types.

use std::borrow::Cow;

/// One word split into an emphasized prefix and a plain suffix.
///
/// `bold + normal` always reproduces the original word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub bold: String,
    pub normal: String,
}

impl Segment {
    pub fn new(bold: impl Into<String>, normal: impl Into<String>) -> Self {
        Self {
            bold: bold.into(),
            normal: normal.into(),
        }
    }

    /// The original word.
    pub fn word(&self) -> String {
        let mut word = String::with_capacity(self.bold.len() + self.normal.len());
        word.push_str(&self.bold);
        word.push_str(&self.normal);
        word
    }

    /// Character count of the whole word.
    pub fn char_len(&self) -> usize {
        self.bold.chars().count() + self.normal.chars().count()
    }
}

impl From<(&str, &str)> for Segment {
    fn from((bold, normal): (&str, &str)) -> Self {
        Self::new(bold, normal)
    }
}

/// The segments of one input line, in order. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Paragraph {
    segments: Vec<Segment>,
}

impl Paragraph {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// The original words, rebuilt from their segments.
    pub fn words(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.segments.iter().map(|s| {
            if s.normal.is_empty() {
                Cow::Borrowed(s.bold.as_str())
            } else if s.bold.is_empty() {
                Cow::Borrowed(s.normal.as_str())
            } else {
                Cow::Owned(s.word())
            }
        })
    }
}

impl<'a> IntoIterator for &'a Paragraph {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromIterator<Segment> for Paragraph {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A transformed text: paragraphs of segments, mirroring the input's lines.
///
/// Always holds at least one paragraph when produced by the transform, since
/// even empty input is one (empty) line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledOutput {
    paragraphs: Vec<Paragraph>,
}

impl StyledOutput {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Total number of segments across all paragraphs.
    pub fn segment_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::len).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Paragraph> {
        self.paragraphs.iter()
    }

    pub fn into_paragraphs(self) -> Vec<Paragraph> {
        self.paragraphs
    }
}

impl<'a> IntoIterator for &'a StyledOutput {
    type Item = &'a Paragraph;
    type IntoIter = std::slice::Iter<'a, Paragraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.paragraphs.iter()
    }
}

impl FromIterator<Paragraph> for StyledOutput {
    fn from_iter<I: IntoIterator<Item = Paragraph>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
