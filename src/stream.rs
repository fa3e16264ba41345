//! Stream adapter for decoding sequences of buffers

use futures::Stream;
use pin_project_lite::pin_project;
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::Decoder;
use crate::types::DecodedSegment;

/// Extension trait to decode frames out of any stream of byte buffers.
pub trait FrameStreamExt: Stream {
    /// Split and decode every buffer, yielding one [`DecodedSegment`] per segment.
    ///
    /// Each buffer must hold whole frames; a frame is never stitched together
    /// from two items. Segment indexes keep counting across buffers so every
    /// result can be attributed to its position in the whole stream.
    fn decode_frames(self, decoder: Decoder) -> DecodeFrames<Self>
    where
        Self: Sized,
        Self::Item: AsRef<[u8]>,
    {
        DecodeFrames::new(self, decoder)
    }
}

impl<T: Stream> FrameStreamExt for T {}

pin_project! {
    /// A stream combinator that flattens buffers into decoded segments
    pub struct DecodeFrames<S> {
        #[pin]
        stream: S,
        decoder: Decoder,
        pending: VecDeque<DecodedSegment>,
        next_index: usize,
    }
}

impl<S> DecodeFrames<S>
where
    S: Stream,
    S::Item: AsRef<[u8]>,
{
    pub fn new(stream: S, decoder: Decoder) -> Self {
        Self { stream, decoder, pending: VecDeque::new(), next_index: 0 }
    }
}

impl<S> Stream for DecodeFrames<S>
where
    S: Stream,
    S::Item: AsRef<[u8]>,
{
    type Item = DecodedSegment;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(segment) = this.pending.pop_front() {
                return Poll::Ready(Some(segment));
            }

            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(buffer)) => {
                    let segments = this.decoder.decode_from(buffer.as_ref(), *this.next_index);
                    *this.next_index += segments.len();
                    this.pending.extend(segments);
                    // Buffers without any segment yield nothing; keep polling
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.stream.size_hint();
        let buffered = self.pending.len();
        // An item can hold any number of segments
        (buffered, if upper == Some(0) { Some(buffered) } else { None })
    }
}
