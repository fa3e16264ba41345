//! Payload builders shared by unit tests and benchmarks
//!
//! Every builder uses the same header bytes as the recorded sensor captures:
//! battery `0xC1` (≈3.41 V) and temperature `0x15` (21 °C).

#![cfg(any(test, feature = "benchmark"))]

use crate::split::DEFAULT_SENTINEL;
use crate::types::FrameType;

/// Battery byte used by the builders.
pub const BATTERY: u8 = 0xC1;

/// Temperature byte used by the builders.
pub const TEMPERATURE: u8 = 0x15;

/// A complete Alive payload, which is header only.
pub const HEADER: [u8; 3] = [BATTERY, TEMPERATURE, 0x01];

/// Build a payload of the given type with `body` after the header.
pub fn payload(frame_type: FrameType, body: &[u8]) -> Vec<u8> {
    let mut data = vec![BATTERY, TEMPERATURE, frame_type.as_byte()];
    data.extend_from_slice(body);
    data
}

/// Join payloads into one stream, each followed by `sentinel`.
pub fn stream_of(payloads: &[Vec<u8>], sentinel: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(payloads.iter().map(|p| p.len() + 1).sum());
    for payload in payloads {
        data.extend_from_slice(payload);
        data.push(sentinel);
    }
    data
}

/// One valid payload of every frame type, in discriminant order.
///
/// No body byte equals the default sentinel, so the payloads survive a
/// round trip through [`stream_of`].
pub fn one_of_each() -> Vec<Vec<u8>> {
    FrameType::ALL
        .iter()
        .map(|&frame_type| {
            let body: &[u8] = match frame_type {
                FrameType::Temperature => &[0x15, 0x16],
                FrameType::Tilt => &[0x00, 0x00, 0xFF, 0xEC],
                FrameType::Orient => &[0x00, 0x64, 0xFF, 0x9C, 0x00, 0x0A],
                FrameType::Motion => &[0x00],
                FrameType::Activity => &[0x01, 0x00, 0x00, 0x03, 0xE8],
                FrameType::Rotation => &[0x00, 0x03],
                _ => &[],
            };
            payload(frame_type, body)
        })
        .collect()
}

/// A mixed stream of `count` valid frames cycling through every type.
pub fn mixed_stream(count: usize) -> Vec<u8> {
    let frames = one_of_each();
    let payloads: Vec<Vec<u8>> = frames.iter().cycle().take(count).cloned().collect();
    stream_of(&payloads, DEFAULT_SENTINEL)
}
