//! Configured splitter + decoder over whole buffers.

use tracing::{debug, trace};

use crate::config::DecoderConfig;
use crate::decode::decode_frame;
use crate::split::split_frames;
use crate::types::{DecodedSegment, Frame};

/// Splits buffers on the configured sentinel and decodes every segment.
///
/// ```rust
/// use movee::{Decoder, DecodeErrorKind};
///
/// let decoder = Decoder::default();
/// let stream = [0xC1, 0x1A, 0x20, 0x00, 0xAA, 0xC1, 0x15, 0xAA];
/// let segments = decoder.decode(&stream);
///
/// assert_eq!(segments.len(), 2);
/// assert!(segments[0].is_ok());
/// assert_eq!(segments[1].error().map(|e| e.kind()), Some(DecodeErrorKind::TooShort));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decoder splitting on `sentinel`.
    pub fn with_sentinel(sentinel: u8) -> Self {
        Self::new(DecoderConfig { sentinel })
    }

    pub fn sentinel(&self) -> u8 {
        self.config.sentinel
    }

    /// Split `data` into its non-empty payload segments.
    pub fn split<'a>(&self, data: &'a [u8]) -> Vec<&'a [u8]> {
        split_frames(data, self.config.sentinel).collect()
    }

    /// Decode every segment of `data`, in input order.
    ///
    /// A rejected segment never affects its siblings; each result carries the
    /// index of the segment it came from.
    pub fn decode(&self, data: &[u8]) -> Vec<DecodedSegment> {
        self.decode_from(data, 0)
    }

    /// Like [`Decoder::decode`] but numbers segments starting at `first_index`.
    pub(crate) fn decode_from(&self, data: &[u8], first_index: usize) -> Vec<DecodedSegment> {
        let segments: Vec<DecodedSegment> = split_frames(data, self.config.sentinel)
            .enumerate()
            .map(|(i, payload)| {
                let index = first_index + i;
                trace!(index, len = payload.len(), "Decoding segment");
                DecodedSegment::new(index, decode_frame(payload))
            })
            .collect();

        debug!(
            bytes = data.len(),
            segments = segments.len(),
            rejected = segments.iter().filter(|s| !s.is_ok()).count(),
            "Decoded buffer"
        );

        segments
    }

    /// Decode `data` and keep only the frames that decoded successfully.
    pub fn frames(&self, data: &[u8]) -> Vec<Frame> {
        self.decode(data).into_iter().filter_map(|s| s.result.ok()).collect()
    }

    /// Decode `data`, failing on the first rejected segment.
    pub fn decode_strict(&self, data: &[u8]) -> crate::Result<Vec<Frame>> {
        self.decode(data).into_iter().map(DecodedSegment::into_result).collect()
    }
}
