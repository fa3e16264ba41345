//! Decoded frame variants

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use super::{FrameType, Header};

/// A decoded sensor report.
///
/// Each variant owns its own [`Header`]; frames hold no reference back to the
/// buffer they were decoded from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Frame {
    Alive(AliveFrame),
    Temperature(TemperatureFrame),
    Shock(ShockFrame),
    Tilt(TiltFrame),
    Orient(OrientFrame),
    Motion(MotionFrame),
    Activity(ActivityFrame),
    Rotation(RotationFrame),
    Vibration(VibrationFrame),
    Information(InformationFrame),
    Service(ServiceFrame),
}

impl Frame {
    /// Header common to every variant.
    pub fn header(&self) -> &Header {
        match self {
            Frame::Alive(f) => &f.header,
            Frame::Temperature(f) => &f.header,
            Frame::Shock(f) => &f.header,
            Frame::Tilt(f) => &f.header,
            Frame::Orient(f) => &f.header,
            Frame::Motion(f) => &f.header,
            Frame::Activity(f) => &f.header,
            Frame::Rotation(f) => &f.header,
            Frame::Vibration(f) => &f.header,
            Frame::Information(f) => &f.header,
            Frame::Service(f) => &f.header,
        }
    }

    pub fn frame_type(&self) -> FrameType {
        self.header().frame_type()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliveFrame {
    pub header: Header,
}

/// Temperature samples, one signed byte per sample after the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureFrame {
    pub header: Header,
    pub samples: Vec<i8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShockFrame {
    pub header: Header,
}

/// Tilt angles in whole degrees, truncated from tenths of a degree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TiltFrame {
    pub header: Header,
    pub pitch_angle: i16,
    pub roll_angle: i16,
}

/// Orientation angles as reported by the sensor, unscaled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientFrame {
    pub header: Header,
    pub pitch_angle: i16,
    pub roll_angle: i16,
    pub yaw_angle: i16,
}

/// Motion state change.
///
/// `on_move` is `true` when the status byte is `0x00`. The polarity is kept as
/// the sensor reports it even though it reads inverted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionFrame {
    pub header: Header,
    pub on_move: bool,
}

/// Motion state with the time spent in it. Same `on_move` polarity as
/// [`MotionFrame`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityFrame {
    pub header: Header,
    pub on_move: bool,
    pub duration_ms: u32,
}

impl ActivityFrame {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotationFrame {
    pub header: Header,
    pub turns_number: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VibrationFrame {
    pub header: Header,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InformationFrame {
    pub header: Header,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceFrame {
    pub header: Header,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.frame_type(), self.header())?;

        match self {
            Frame::Temperature(t) => write!(f, " samples={:?}", t.samples),
            Frame::Tilt(t) => write!(f, " pitch={}° roll={}°", t.pitch_angle, t.roll_angle),
            Frame::Orient(o) => write!(
                f,
                " pitch={} roll={} yaw={}",
                o.pitch_angle, o.roll_angle, o.yaw_angle
            ),
            Frame::Motion(m) => write!(f, " on_move={}", m.on_move),
            Frame::Activity(a) => {
                write!(f, " on_move={} duration={}ms", a.on_move, a.duration_ms)
            }
            Frame::Rotation(r) => write!(f, " turns={}", r.turns_number),
            Frame::Alive(_)
            | Frame::Shock(_)
            | Frame::Vibration(_)
            | Frame::Information(_)
            | Frame::Service(_) => Ok(()),
        }
    }
}
