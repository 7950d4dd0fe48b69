//! Solid color fill pattern
//!
//! Sets every pixel to one color and luminance, then emits once.

use embedded_hal::delay::DelayNs;

use super::Pattern;
use crate::{
    DataLine,
    color::{Color, Luminance},
    encoder::set_pixel,
    frame::FrameBuffer,
    random::RandomSource,
    strip::Strip,
};

/// Solid color pattern - one color on every pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidPattern {
    color: Color,
    luminance: Luminance,
}

impl SolidPattern {
    pub const fn new(color: Color, luminance: f32) -> Self {
        Self {
            color,
            luminance: Luminance::new(luminance),
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn luminance(&self) -> Luminance {
        self.luminance
    }

    /// Encode every pixel without emitting
    pub fn fill<const N: usize>(&self, frame: &mut FrameBuffer<N>) {
        for index in 0..N {
            let _ = set_pixel(self.color, self.luminance, index, frame);
        }
    }

    /// Fill the frame and emit it
    pub fn show<L: DataLine, D: DelayNs, const N: usize>(
        &self,
        strip: &mut Strip<L, D>,
        frame: &mut FrameBuffer<N>,
    ) {
        self.fill(frame);
        strip.emit(frame);
    }
}

impl Pattern for SolidPattern {
    fn run<L, D, R, const N: usize>(
        &self,
        strip: &mut Strip<L, D>,
        frame: &mut FrameBuffer<N>,
        _rng: &mut R,
    ) where
        L: DataLine,
        D: DelayNs,
        R: RandomSource,
    {
        self.show(strip, frame);
    }
}
