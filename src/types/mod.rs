//! Core types for Movee frame representation.
//!
//! ## Architecture
//!
//! The type system mirrors the on-air layout of a Movee payload:
//! - [`Header`] is the 3-byte prefix (battery, temperature, discriminant)
//! - [`FrameType`] maps the discriminant byte and knows each variant's [`LengthRule`]
//! - [`Frame`] is a closed set of eleven variants, each owning its [`Header`]
//! - [`DecodedSegment`] pairs a decode result with the segment index it came from
//!
//! ## Usage Example
//!
//! ```rust
//! use movee::types::{FrameType, Header, LengthRule};
//!
//! let header = Header::parse(&[0xFF, 0xEC, 0x08]).unwrap();
//! assert_eq!(header.frame_type(), FrameType::Tilt);
//! assert_eq!(header.temperature(), -20);
//! assert!((header.battery_level() - 3.6).abs() < 1e-6);
//! assert_eq!(FrameType::Tilt.length_rule(), LengthRule::Exactly(7));
//! ```

mod frame;
mod frame_type;
mod header;
mod segment;

// Re-export all public types
pub use frame::{
    ActivityFrame, AliveFrame, Frame, InformationFrame, MotionFrame, OrientFrame, RotationFrame,
    ServiceFrame, ShockFrame, TemperatureFrame, TiltFrame, VibrationFrame,
};
pub use frame_type::{FrameType, LengthRule};
pub use header::{
    BATTERY_MAX_VOLTS, BATTERY_MIN_VOLTS, HEADER_LEN, Header, battery_level_from_byte,
    temperature_from_byte,
};
pub use segment::DecodedSegment;
