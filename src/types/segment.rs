//! Index-attributed decode results

use super::Frame;
use crate::{DecodeError, MoveeError};

/// Outcome of decoding one payload segment, tagged with its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSegment {
    /// Zero-based position of the segment after empty fragments were dropped
    pub index: usize,
    pub result: Result<Frame, DecodeError>,
}

impl DecodedSegment {
    pub fn new(index: usize, result: Result<Frame, DecodeError>) -> Self {
        Self { index, result }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&DecodeError> {
        self.result.as_ref().err()
    }

    /// Convert into a crate result, attributing any failure to this segment.
    pub fn into_result(self) -> crate::Result<Frame> {
        let index = self.index;
        self.result.map_err(|source| MoveeError::decode(index, source))
    }
}
