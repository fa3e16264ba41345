//! Frame type discriminants and their length rules

use serde::Serialize;
use std::fmt;

use crate::DecodeError;

/// Frame type discriminant carried in byte 2 of every payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum FrameType {
    /// Periodic keep-alive
    Alive = 0x01,
    /// Temperature samples
    Temperature = 0x02,
    /// Shock detected
    Shock = 0x04,
    /// Pitch and roll in tenths of a degree
    Tilt = 0x08,
    /// Pitch, roll and yaw
    Orient = 0x10,
    /// Start or end of movement
    Motion = 0x20,
    /// Movement state with its duration
    Activity = 0x40,
    /// Turn counter
    Rotation = 0x80,
    Vibration = 0x86,
    Information = 0xFE,
    Service = 0xFF,
}

impl FrameType {
    /// Every known frame type, in discriminant order.
    pub const ALL: [FrameType; 11] = [
        FrameType::Alive,
        FrameType::Temperature,
        FrameType::Shock,
        FrameType::Tilt,
        FrameType::Orient,
        FrameType::Motion,
        FrameType::Activity,
        FrameType::Rotation,
        FrameType::Vibration,
        FrameType::Information,
        FrameType::Service,
    ];

    /// Look up the frame type for a discriminant byte.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(FrameType::Alive),
            0x02 => Some(FrameType::Temperature),
            0x04 => Some(FrameType::Shock),
            0x08 => Some(FrameType::Tilt),
            0x10 => Some(FrameType::Orient),
            0x20 => Some(FrameType::Motion),
            0x40 => Some(FrameType::Activity),
            0x80 => Some(FrameType::Rotation),
            0x86 => Some(FrameType::Vibration),
            0xFE => Some(FrameType::Information),
            0xFF => Some(FrameType::Service),
            _ => None,
        }
    }

    /// Discriminant byte of this frame type.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Total payload length (header included) accepted for this frame type.
    pub const fn length_rule(self) -> LengthRule {
        match self {
            FrameType::Tilt => LengthRule::Exactly(7),
            FrameType::Orient => LengthRule::Exactly(9),
            FrameType::Motion => LengthRule::Exactly(4),
            FrameType::Activity => LengthRule::Exactly(8),
            FrameType::Rotation => LengthRule::Exactly(5),
            FrameType::Alive
            | FrameType::Temperature
            | FrameType::Shock
            | FrameType::Vibration
            | FrameType::Information
            | FrameType::Service => LengthRule::AtLeast(super::HEADER_LEN),
        }
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            FrameType::Alive => "Alive",
            FrameType::Temperature => "Temperature",
            FrameType::Shock => "Shock",
            FrameType::Tilt => "Tilt",
            FrameType::Orient => "Orient",
            FrameType::Motion => "Motion",
            FrameType::Activity => "Activity",
            FrameType::Rotation => "Rotation",
            FrameType::Vibration => "Vibration",
            FrameType::Information => "Information",
            FrameType::Service => "Service",
        }
    }
}

impl TryFrom<u8> for FrameType {
    type Error = DecodeError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        FrameType::from_byte(byte).ok_or(DecodeError::UnknownType { discriminant: byte })
    }
}

impl From<FrameType> for u8 {
    fn from(frame_type: FrameType) -> Self {
        frame_type.as_byte()
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload length requirement of a frame type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LengthRule {
    Exactly(usize),
    AtLeast(usize),
}

impl LengthRule {
    /// Check whether a payload of `len` bytes satisfies this rule.
    pub const fn accepts(self, len: usize) -> bool {
        match self {
            LengthRule::Exactly(n) => len == n,
            LengthRule::AtLeast(n) => len >= n,
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthRule::Exactly(n) => write!(f, "exactly {n}"),
            LengthRule::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}
