//! Type-safe decoder for Movee sensor telemetry.
//!
//! Movee motion, shock and tilt sensors emit a stream of short binary frames
//! separated by a sentinel byte. Every frame starts with a 3-byte header
//! (battery level, temperature, frame type) followed by a type-specific body.
//!
//! # Features
//!
//! - **Splitting**: borrow the payload segments out of a sentinel-delimited buffer
//! - **Typed decoding**: eleven frame variants with strict per-type length checks
//! - **Per-frame errors**: a bad frame is reported with its index and never
//!   stops its siblings from decoding
//! - **Streams**: decode a `futures::Stream` of buffers with [`FrameStreamExt`]
//!
//! # Quick Start
//!
//! ```rust
//! use movee::{Decoder, Frame};
//! use movee::input::decode_hex;
//!
//! let data = decode_hex(0, "c1150800000000aac115080000ffecaa")?;
//! for segment in Decoder::default().decode(&data) {
//!     match segment.result {
//!         Ok(Frame::Tilt(tilt)) => println!("frame {}: roll {}", segment.index, tilt.roll_angle),
//!         Ok(other) => println!("frame {}: {}", segment.index, other),
//!         Err(e) => eprintln!("frame {}: {}", segment.index, e),
//!     }
//! }
//! # Ok::<(), movee::MoveeError>(())
//! ```

// Core types and error handling
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;
pub mod types;

// Decoding engine
pub mod decode;
pub mod decoder;
pub mod split;
pub mod stream;

// Boundaries
pub mod config;
pub mod input;

// Core exports
pub use error::*;
pub use types::*;

// Main API exports
pub use config::{DecoderConfig, MoveeConfig};
pub use decode::decode_frame;
pub use decoder::Decoder;
pub use split::{DEFAULT_SENTINEL, split_frames};
pub use stream::FrameStreamExt;
