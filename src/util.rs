//! Input decoding helpers.

use std::borrow::Cow;

/// Decode raw input bytes to text.
///
/// This function:
/// 1. Tries UTF-8 first (a leading BOM is stripped by encoding_rs)
/// 2. Falls back to Windows-1252 for anything malformed, which maps every
///    byte to some character so decoding never fails
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8 without
/// a BOM.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    tracing::debug!("input is not valid UTF-8, decoding as Windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}
