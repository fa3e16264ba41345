//! Hex text input.
//!
//! Sensors and gateways hand frame streams around as hex strings such as
//! `c11508000000aa`. This module turns that text into the byte buffers the
//! decoder works on.

use crate::{MoveeError, Result};

/// Decode one hex-encoded frame stream.
///
/// Case is ignored, whitespace anywhere in the text is skipped and a leading
/// `0x` is accepted. `index` identifies the input in the returned error.
///
/// ```rust
/// use movee::input::decode_hex;
///
/// assert_eq!(decode_hex(0, "C1 15 01 aa").unwrap(), vec![0xC1, 0x15, 0x01, 0xAA]);
/// assert!(decode_hex(0, "c11").is_err());
/// ```
pub fn decode_hex(index: usize, text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let compact: String = digits.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact).map_err(|e| MoveeError::invalid_hex(index, e))
}
