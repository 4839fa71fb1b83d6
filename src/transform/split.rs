//! Split-point arithmetic for a single word.

use super::output::Segment;

/// Number of leading characters of a `char_len`-character word that are bold.
///
/// Computes `ceil(char_len * ratio)` and clamps it into `[0, char_len]`. The
/// function is total: a NaN product (including `0 * inf`) yields 0, negative
/// ratios yield 0 and ratios above 1 yield `char_len`.
///
/// # Examples
///
/// ```
/// use bionic::split_point;
///
/// assert_eq!(split_point(5, 0.5), 3);
/// assert_eq!(split_point(4, -1.0), 0);
/// assert_eq!(split_point(4, 2.0), 4);
/// assert_eq!(split_point(4, f64::NAN), 0);
/// ```
pub fn split_point(char_len: usize, ratio: f64) -> usize {
    let idx = (char_len as f64 * ratio).ceil();
    // NaN fails both comparisons and falls through to 0.
    if idx >= char_len as f64 {
        char_len
    } else if idx > 0.0 {
        idx as usize
    } else {
        0
    }
}

/// Split one word into its bold prefix and normal suffix.
///
/// Lengths are counted in `char`s, so multi-byte characters are never cut.
pub fn split_word(word: &str, ratio: f64) -> Segment {
    let char_len = word.chars().count();
    let idx = split_point(char_len, ratio);
    let byte_idx = word
        .char_indices()
        .nth(idx)
        .map_or(word.len(), |(offset, _)| offset);
    let (bold, normal) = word.split_at(byte_idx);
    Segment::new(bold, normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_point_ceil() {
        assert_eq!(split_point(5, 0.5), 3);
        assert_eq!(split_point(4, 0.5), 2);
        assert_eq!(split_point(1, 0.5), 1);
        assert_eq!(split_point(5, 0.25), 2);
        assert_eq!(split_point(4, 0.25), 1);
        assert_eq!(split_point(3, 0.01), 1);
    }

    #[test]
    fn test_split_point_non_finite() {
        assert_eq!(split_point(4, f64::NAN), 0);
        assert_eq!(split_point(4, f64::INFINITY), 4);
        assert_eq!(split_point(4, f64::NEG_INFINITY), 0);
        assert_eq!(split_point(0, f64::INFINITY), 0);
        assert_eq!(split_point(0, f64::NAN), 0);
        assert_eq!(split_point(0, 0.5), 0);
    }

    #[test]
    fn test_split_word_multibyte() {
        assert_eq!(split_word("héllo", 0.5), Segment::new("hél", "lo"));
        assert_eq!(split_word("日本語", 0.5), Segment::new("日本", "語"));
        assert_eq!(split_word("🦀🦀", 1.0), Segment::new("🦀🦀", ""));
    }

    #[test]
    fn test_split_word_keeps_punctuation() {
        assert_eq!(split_word("world!", 0.5), Segment::new("wor", "ld!"));
        assert_eq!(split_word("\"quoted\"", 0.25), Segment::new("\"q", "uoted\""));
    }

    proptest! {
        #[test]
        fn prop_split_word_is_lossless(word in "\\PC{0,24}", ratio in -2.0f64..3.0) {
            let segment = split_word(&word, ratio);
            prop_assert_eq!(segment.word(), word);
        }

        #[test]
        fn prop_split_point_is_monotonic(len in 0usize..200, a in -1.5f64..2.5, b in -1.5f64..2.5) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(split_point(len, lo) <= split_point(len, hi));
        }

        #[test]
        fn prop_split_point_in_bounds(len in 0usize..200, ratio in proptest::num::f64::ANY) {
            prop_assert!(split_point(len, ratio) <= len);
        }
    }
}
