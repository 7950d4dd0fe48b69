mod luminance;
mod palette;

use smart_leds::RGB8;

pub use luminance::{Luminance, MAX_LUMINANCE};
pub use palette::{
    BLACK, BLUE, BRIGHT_PINK, ELECTRIC_BLUE, GREEN, ORANGE, PALE_PINK, RAINBOW, RED, VIOLET,
    WHITE, YELLOW,
};

/// Channel triple as it lands on the wire (after brightness scaling)
pub type Rgb = RGB8;

/// Highest accepted base channel value
pub const MAX_CHANNEL: u8 = 100;

/// Unscaled color intent
///
/// Each channel is expected in `0..=100`. Brightness is not part of the
/// color and is applied separately when the pixel is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Check that every channel is within `0..=100`
    pub const fn is_valid(self) -> bool {
        self.red <= MAX_CHANNEL && self.green <= MAX_CHANNEL && self.blue <= MAX_CHANNEL
    }

    /// Returns the color itself, or [`BLACK`] if any channel is out of range
    pub const fn validated(self) -> Self {
        if self.is_valid() { self } else { BLACK }
    }

    /// Check if the color has no lit channel
    pub const fn is_off(self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}
