//! Payload decoding into typed frames.
//!
//! ## Payload layout
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 1    | battery level (2.8 V + 0.8 V × b / 255) |
//! | 1      | 1    | temperature (°C, signed)                |
//! | 2      | 1    | frame type discriminant                 |
//! | 3..    | var  | frame-specific fields, big-endian       |
//!
//! Frame-specific fields:
//!
//! - Temperature: one signed byte per sample from offset 3
//! - Tilt (7 bytes): pitch `i16` @3, roll `i16` @5, tenths of a degree truncated to whole degrees
//! - Orient (9 bytes): pitch `i16` @3, roll `i16` @5, yaw `i16` @7
//! - Motion (4 bytes): status @3, `0x00` means moving
//! - Activity (8 bytes): status @3, duration `u32` ms @4
//! - Rotation (5 bytes): turns `i16` @3
//!
//! Decoding is a single pass over one payload with no state carried between
//! calls. A malformed payload is rejected whole; no partially filled frame is
//! ever returned.

use tracing::trace;

use crate::DecodeError;
use crate::types::{
    ActivityFrame, AliveFrame, Frame, FrameType, HEADER_LEN, Header, InformationFrame,
    MotionFrame, OrientFrame, RotationFrame, ServiceFrame, ShockFrame, TemperatureFrame,
    TiltFrame, VibrationFrame,
};

/// Offset of the first frame-specific byte.
const BODY_OFFSET: usize = HEADER_LEN;

/// Tilt angles are transmitted in tenths of a degree.
const TILT_SCALE: i16 = 10;

/// Status byte value reported while the sensor is moving.
const MOVING_STATUS: u8 = 0x00;

/// Decode one payload segment into a typed [`Frame`].
///
/// # Errors
///
/// - [`DecodeError::TooShort`] if the payload cannot hold a header
/// - [`DecodeError::UnknownType`] if byte 2 is not a known discriminant
/// - [`DecodeError::BadLength`] if the payload length does not fit the frame type
///
/// # Example
///
/// ```rust
/// use movee::{Frame, decode_frame};
///
/// let frame = decode_frame(&[0xC1, 0x1A, 0x20, 0x00]).unwrap();
/// assert!(matches!(frame, Frame::Motion(m) if m.on_move));
/// ```
pub fn decode_frame(payload: &[u8]) -> Result<Frame, DecodeError> {
    let header = Header::parse(payload)?;
    let frame_type = header.frame_type();

    let expected = frame_type.length_rule();
    if !expected.accepts(payload.len()) {
        return Err(DecodeError::BadLength { frame_type, expected, actual: payload.len() });
    }

    trace!(%frame_type, len = payload.len(), "Decoding frame payload");

    let frame = match frame_type {
        FrameType::Alive => Frame::Alive(AliveFrame { header }),
        FrameType::Temperature => Frame::Temperature(TemperatureFrame {
            header,
            samples: payload[BODY_OFFSET..].iter().map(|&b| b as i8).collect(),
        }),
        FrameType::Shock => Frame::Shock(ShockFrame { header }),
        FrameType::Tilt => Frame::Tilt(TiltFrame {
            header,
            pitch_angle: read_i16_be(payload, 3, "pitch_angle")? / TILT_SCALE,
            roll_angle: read_i16_be(payload, 5, "roll_angle")? / TILT_SCALE,
        }),
        FrameType::Orient => Frame::Orient(OrientFrame {
            header,
            pitch_angle: read_i16_be(payload, 3, "pitch_angle")?,
            roll_angle: read_i16_be(payload, 5, "roll_angle")?,
            yaw_angle: read_i16_be(payload, 7, "yaw_angle")?,
        }),
        FrameType::Motion => {
            Frame::Motion(MotionFrame { header, on_move: read_on_move(payload)? })
        }
        FrameType::Activity => Frame::Activity(ActivityFrame {
            header,
            on_move: read_on_move(payload)?,
            duration_ms: read_u32_be(payload, 4, "duration")?,
        }),
        FrameType::Rotation => Frame::Rotation(RotationFrame {
            header,
            turns_number: read_i16_be(payload, 3, "turns_number")?,
        }),
        FrameType::Vibration => Frame::Vibration(VibrationFrame { header }),
        FrameType::Information => Frame::Information(InformationFrame { header }),
        FrameType::Service => Frame::Service(ServiceFrame { header }),
    };

    Ok(frame)
}

fn read_on_move(payload: &[u8]) -> Result<bool, DecodeError> {
    let status = payload
        .get(BODY_OFFSET)
        .ok_or(DecodeError::MalformedField { field: "on_move", offset: BODY_OFFSET })?;
    Ok(*status == MOVING_STATUS)
}

fn read_array<const N: usize>(
    payload: &[u8],
    offset: usize,
    field: &'static str,
) -> Result<[u8; N], DecodeError> {
    payload
        .get(offset..offset + N)
        .and_then(|bytes| <[u8; N]>::try_from(bytes).ok())
        .ok_or(DecodeError::MalformedField { field, offset })
}

fn read_i16_be(payload: &[u8], offset: usize, field: &'static str) -> Result<i16, DecodeError> {
    read_array::<2>(payload, offset, field).map(i16::from_be_bytes)
}

fn read_u32_be(payload: &[u8], offset: usize, field: &'static str) -> Result<u32, DecodeError> {
    read_array::<4>(payload, offset, field).map(u32::from_be_bytes)
}
