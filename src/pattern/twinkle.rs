//! Twinkle pattern
//!
//! Lights a random share of the strip with random colors from a candidate
//! set at randomly attenuated brightness, like string lights. All draws land
//! in one frame that is emitted once.
//!
//! Draws may hit the same pixel twice and most of them come out dim, so
//! fewer pixels visibly light up than `percent_on` suggests.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::Pattern;
use crate::{
    DataLine, color::Color, encoder::set_pixel, frame::FrameBuffer, random::RandomSource,
    strip::Strip,
};

/// Maximum number of candidate colors
pub const MAX_TWINKLE_COLORS: usize = 16;

/// Largest luminance divisor; each pixel gets `max_luminance / u`, `u` in `1..=100`
const MAX_ATTENUATION: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct TwinklePattern {
    /// Candidate colors; repeat a color to make it more likely
    colors: Vec<Color, MAX_TWINKLE_COLORS>,
    /// Share of the strip to draw, in percent
    percent_on: u8,
    /// Brightest luminance a pixel can get
    max_luminance: f32,
}

impl TwinklePattern {
    /// Create a new twinkle pattern
    ///
    /// Colors past [`MAX_TWINKLE_COLORS`] are ignored, `percent_on` is capped
    /// at 100.
    pub fn new(colors: &[Color], percent_on: u8, max_luminance: f32) -> Self {
        Self {
            colors: colors.iter().take(MAX_TWINKLE_COLORS).copied().collect(),
            percent_on: percent_on.min(100),
            max_luminance,
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub const fn percent_on(&self) -> u8 {
        self.percent_on
    }

    /// Number of draws for a strip of `len` pixels
    pub fn draw_count(&self, len: usize) -> usize {
        len * usize::from(self.percent_on) / 100
    }

    /// Perform all draws into the frame without emitting
    #[allow(clippy::cast_precision_loss)]
    pub fn fill<R: RandomSource, const N: usize>(&self, frame: &mut FrameBuffer<N>, rng: &mut R) {
        if self.colors.is_empty() {
            #[cfg(feature = "esp32-log")]
            println!("[TwinklePattern.fill] no candidate colors, nothing to draw");
            return;
        }

        for _ in 0..self.draw_count(N) {
            let index = rng.index(N);
            let Some(&color) = self.colors.get(rng.index(self.colors.len())) else {
                continue;
            };
            let attenuation = rng.between(1, MAX_ATTENUATION);
            let luminance = self.max_luminance / attenuation as f32;
            let _ = set_pixel(color, luminance, index, frame);
        }
    }
}

impl Pattern for TwinklePattern {
    fn run<L, D, R, const N: usize>(
        &self,
        strip: &mut Strip<L, D>,
        frame: &mut FrameBuffer<N>,
        rng: &mut R,
    ) where
        L: DataLine,
        D: DelayNs,
        R: RandomSource,
    {
        self.fill(frame, rng);
        strip.emit(frame);
    }
}
