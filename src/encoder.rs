//! Pixel encoder
//!
//! Turns a color and a luminance into the 24-bit wire run of one slot.
//! Invalid input never fails the call: a bad color or luminance degrades
//! to an off pixel. Only an out of range slot index aborts, leaving the
//! buffer untouched.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Color, Luminance, Rgb};
use crate::frame::FrameBuffer;

/// Constant added per unit of luminance to every lit channel
const LUMINANCE_OFFSET: f32 = 14.0;

/// Error returned when a pixel cannot be encoded at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Slot index is past the end of the strip
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {index} is out of range for {len} pixels")
            }
        }
    }
}

/// Result of a successful encode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    /// Channels written to the slot
    pub channels: Rgb,
    /// The color was out of range and was replaced by black
    pub color_degraded: bool,
    /// The luminance was out of range and was replaced by zero
    pub luminance_degraded: bool,
}

impl Encoded {
    /// Check if any input had to be degraded
    pub const fn is_degraded(&self) -> bool {
        self.color_degraded || self.luminance_degraded
    }
}

/// Scale one base channel by luminance
///
/// Below a luminance of 1 the dimming law `l * c + 14 * l` keeps low
/// brightness visible; from 1 upwards the linear law `c + 14 * l` is used.
/// A zero channel or a zero luminance always yields 0.
///
/// The result may exceed one byte; only its low 8 bits reach the wire.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_channel(channel: u8, luminance: Luminance) -> u32 {
    let lum = luminance.value();
    if channel == 0 || luminance.is_off() {
        return 0;
    }

    let channel = f32::from(channel);
    let scaled = if lum < 1.0 {
        lum * channel + LUMINANCE_OFFSET * lum
    } else {
        channel + LUMINANCE_OFFSET * lum
    };
    libm::floorf(scaled) as u32
}

/// Pack scaled channels into a green/red/blue wire run
///
/// Every channel is cut to its low byte.
pub const fn pack_run(red: u32, green: u32, blue: u32) -> u32 {
    ((green & 0xFF) << 16) | ((red & 0xFF) << 8) | (blue & 0xFF)
}

/// Encode a pixel into its slot of the frame buffer
///
/// Only `[index * 24, index * 24 + 24)` is touched. The slot is cleared
/// before the new channels are written.
pub fn set_pixel<const N: usize>(
    color: Color,
    luminance: impl Into<Luminance>,
    index: usize,
    frame: &mut FrameBuffer<N>,
) -> Result<Encoded, EncodeError> {
    if index >= N {
        #[cfg(feature = "esp32-log")]
        println!(
            "[set_pixel] index {} is past the last pixel ({}), skipping",
            index,
            N.saturating_sub(1)
        );
        return Err(EncodeError::IndexOutOfRange { index, len: N });
    }

    let color_degraded = !color.is_valid();
    #[cfg(feature = "esp32-log")]
    if color_degraded {
        println!(
            "[set_pixel] color {:?} exceeds 100 per channel, pixel {} set to off",
            color, index
        );
    }
    let color = color.validated();

    let luminance: Luminance = luminance.into();
    let luminance_degraded = !luminance.is_valid();
    #[cfg(feature = "esp32-log")]
    if luminance_degraded {
        println!(
            "[set_pixel] luminance {:?} is outside [0, 10], pixel {} set to off",
            luminance.value(),
            index
        );
    }
    let luminance = luminance.validated();

    let red = scale_channel(color.red, luminance);
    let green = scale_channel(color.green, luminance);
    let blue = scale_channel(color.blue, luminance);

    frame.write_run(index, pack_run(red, green, blue));

    #[allow(clippy::cast_possible_truncation)]
    let channels = Rgb {
        r: red as u8,
        g: green as u8,
        b: blue as u8,
    };
    Ok(Encoded {
        channels,
        color_degraded,
        luminance_degraded,
    })
}
