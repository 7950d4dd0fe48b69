//! Brightness multiplier layered on top of a [`Color`](super::Color)

/// Highest accepted luminance
pub const MAX_LUMINANCE: f32 = 10.0;

/// Brightness multiplier in `0.0..=10.0`
///
/// Anything outside that range (NaN included) is invalid and
/// degrades to `0.0`, which turns the pixel off.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Luminance(f32);

impl Luminance {
    /// Luminance that always turns the pixel off
    pub const OFF: Self = Self(0.0);

    /// Create a new luminance, unchecked until encoded
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Raw multiplier
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Check that the value is within `0.0..=10.0`
    pub fn is_valid(self) -> bool {
        (0.0..=MAX_LUMINANCE).contains(&self.0)
    }

    /// Returns the luminance itself, or [`Luminance::OFF`] if out of range
    #[must_use]
    pub fn validated(self) -> Self {
        if self.is_valid() { self } else { Self::OFF }
    }

    /// Check if the pixel is forced off regardless of color
    #[allow(clippy::float_cmp)]
    pub fn is_off(self) -> bool {
        self.0 == 0.0
    }
}

impl From<f32> for Luminance {
    fn from(value: f32) -> Self {
        Self(value)
    }
}
