//! Frame splitting on a sentinel byte.
//!
//! A Movee stream is a flat run of payloads separated by a one-byte sentinel
//! (`0xAA` on every sensor seen so far). Splitting never looks inside the
//! segments; rejecting malformed ones is the decoder's job.
//!
//! ```rust
//! use movee::split::split_frames;
//!
//! let stream = [0xAA, 0xC1, 0x15, 0x01, 0xAA, 0xAA, 0xC1, 0x15, 0x04, 0xAA];
//! let segments: Vec<&[u8]> = split_frames(&stream, 0xAA).collect();
//! assert_eq!(segments, vec![&[0xC1, 0x15, 0x01][..], &[0xC1, 0x15, 0x04][..]]);
//! ```

use std::iter::FusedIterator;

/// Sentinel byte used by Movee sensors between frames.
pub const DEFAULT_SENTINEL: u8 = 0xAA;

/// Split `data` on `sentinel`, yielding the non-empty segments in order.
///
/// Segments borrow from `data`; nothing is copied.
pub fn split_frames(data: &[u8], sentinel: u8) -> SplitFrames<'_> {
    SplitFrames { remaining: data, sentinel }
}

/// Iterator over the non-empty segments of a sentinel-delimited buffer.
#[derive(Debug, Clone)]
pub struct SplitFrames<'a> {
    remaining: &'a [u8],
    sentinel: u8,
}

impl<'a> Iterator for SplitFrames<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining.is_empty() {
                return None;
            }

            let (segment, rest) = match self.remaining.iter().position(|&b| b == self.sentinel) {
                Some(pos) => (&self.remaining[..pos], &self.remaining[pos + 1..]),
                None => (self.remaining, &self.remaining[self.remaining.len()..]),
            };
            self.remaining = rest;

            if !segment.is_empty() {
                return Some(segment);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At most one segment per byte
        (0, Some(self.remaining.len()))
    }
}

impl FusedIterator for SplitFrames<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn collect(data: &[u8], sentinel: u8) -> Vec<&[u8]> {
        split_frames(data, sentinel).collect()
    }

    proptest! {
        #[test]
        fn prop_join_reproduces_input_without_empties(
            data in prop::collection::vec(prop::sample::select(vec![0x00u8, 0x01, 0x15, 0xAA, 0xC1]), 0..64),
            sentinel in prop::sample::select(vec![0xAAu8, 0x00]),
        ) {
            let segments = collect(&data, sentinel);
            let joined = segments.join(&sentinel);

            let expected = data
                .split(|&b| b == sentinel)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(&sentinel);

            prop_assert_eq!(joined, expected);
        }

        #[test]
        fn prop_segments_are_non_empty_and_sentinel_free(
            data in prop::collection::vec(any::<u8>(), 0..128),
            sentinel in any::<u8>(),
        ) {
            let segments = collect(&data, sentinel);
            for segment in &segments {
                prop_assert!(!segment.is_empty());
                prop_assert!(!segment.contains(&sentinel));
            }

            let kept: usize = segments.iter().map(|s| s.len()).sum();
            let non_sentinel = data.iter().filter(|&&b| b != sentinel).count();
            prop_assert_eq!(kept, non_sentinel);
        }

        #[test]
        fn prop_split_is_idempotent_on_sentinel_free_input(
            data in prop::collection::vec(0x00u8..0xAA, 1..64),
        ) {
            let first = collect(&data, DEFAULT_SENTINEL);
            prop_assert_eq!(first.len(), 1);
            let again = collect(first[0], DEFAULT_SENTINEL);
            prop_assert_eq!(again, first);
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(collect(&[], DEFAULT_SENTINEL).is_empty());
    }

    #[test]
    fn sentinel_only_input_yields_nothing() {
        assert!(collect(&[0xAA, 0xAA, 0xAA], DEFAULT_SENTINEL).is_empty());
    }

    #[test]
    fn missing_sentinel_yields_whole_input() {
        let data = [0xC1, 0x15, 0x01];
        assert_eq!(collect(&data, DEFAULT_SENTINEL), vec![&data[..]]);
    }

    #[test]
    fn leading_and_trailing_sentinels_are_dropped() {
        let data = [0xAA, 0x01, 0xAA, 0x02, 0x03, 0xAA];
        assert_eq!(collect(&data, DEFAULT_SENTINEL), vec![&[0x01][..], &[0x02, 0x03][..]]);
    }

    #[test]
    fn recorded_tilt_stream_splits_into_three() {
        // c1150800000000aac115080000ffecaac115080064ffecaa
        let data = [
            0xC1, 0x15, 0x08, 0x00, 0x00, 0x00, 0x00, 0xAA, 0xC1, 0x15, 0x08, 0x00, 0x00, 0xFF,
            0xEC, 0xAA, 0xC1, 0x15, 0x08, 0x00, 0x64, 0xFF, 0xEC, 0xAA,
        ];
        let segments = collect(&data, DEFAULT_SENTINEL);
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| s.len() == 7));
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut iter = split_frames(&[0x01], DEFAULT_SENTINEL);
        assert_eq!(iter.next(), Some(&[0x01][..]));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
