//! Common 3-byte frame header

use serde::Serialize;
use std::fmt;

use super::FrameType;
use crate::DecodeError;

/// Number of header bytes at the start of every payload.
pub const HEADER_LEN: usize = 3;

/// Battery voltage for a raw byte of 0.
pub const BATTERY_MIN_VOLTS: f32 = 2.8;

/// Battery voltage for a raw byte of 255.
pub const BATTERY_MAX_VOLTS: f32 = 3.6;

/// Header shared by every frame variant.
///
/// Only ever produced from payload bytes, see [`Header::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Header {
    battery_level: f32,
    temperature: i8,
    frame_type: FrameType,
}

impl Header {
    /// Read the header from the first three bytes of a payload.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::TooShort`] when fewer than 3 bytes are available
    /// - [`DecodeError::UnknownType`] when byte 2 is not a known discriminant
    pub fn parse(payload: &[u8]) -> Result<Self, DecodeError> {
        let [battery, temperature, discriminant, ..] = *payload else {
            return Err(DecodeError::TooShort { actual: payload.len() });
        };

        Ok(Self {
            battery_level: battery_level_from_byte(battery),
            temperature: temperature_from_byte(temperature),
            frame_type: FrameType::try_from(discriminant)?,
        })
    }

    /// Battery level in volts, within [2.8, 3.6].
    pub fn battery_level(&self) -> f32 {
        self.battery_level
    }

    /// Sensor temperature in degrees Celsius.
    pub fn temperature(&self) -> i8 {
        self.temperature
    }

    pub fn frame_type(&self) -> FrameType {
        self.frame_type
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "battery={:.2}V temp={}°C", self.battery_level, self.temperature)
    }
}

/// Map a raw battery byte linearly onto [2.8 V, 3.6 V].
pub fn battery_level_from_byte(byte: u8) -> f32 {
    let volts = ((BATTERY_MAX_VOLTS - BATTERY_MIN_VOLTS) / 255.0) * f32::from(byte)
        + BATTERY_MIN_VOLTS;
    // f32 rounding can land one ulp outside the range at the ends
    volts.clamp(BATTERY_MIN_VOLTS, BATTERY_MAX_VOLTS)
}

/// Reinterpret a raw temperature byte as two's-complement degrees.
pub fn temperature_from_byte(byte: u8) -> i8 {
    byte as i8
}
