#![no_std]

pub mod color;
pub mod encoder;
pub mod frame;
pub mod pattern;
pub mod random;
pub mod strip;

pub use color::{Color, Luminance, Rgb};
pub use encoder::{EncodeError, Encoded, set_pixel};
pub use frame::{BITS_PER_PIXEL, DEFAULT_PIXEL_COUNT, FrameBuffer};
pub use pattern::{
    FadePattern, LightningPattern, Pattern, PatternId, PatternSlot, SolidPattern, StrobePattern,
    TwinklePattern,
};
pub use random::RandomSource;
pub use strip::{Strip, StripConfig};

pub use embassy_time::Duration;
pub use embedded_hal::delay::DelayNs;

/// Abstract data line trait
///
/// Implement this trait to support different hardware platforms. Bit
/// timing is entirely up to the implementation: the strip only decides
/// which bits are sent and in what order.
pub trait DataLine {
    /// Configure the pin as a digital output
    ///
    /// Called once, before the first frame.
    fn configure_output(&mut self, pin: u8);

    /// Send a single bit as a timed high/low pulse pair
    fn send_bit(&mut self, pin: u8, bit: bool);
}
