//! Lightning pattern
//!
//! A white flash over the whole strip followed by a bolt that travels from a
//! random pixel for a random number of steps. The bolt is two pixels wide
//! and is emitted after every step, so it animates along the strip. A final
//! empty frame clears the strip.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::{Pattern, StrobePattern};
use crate::{
    DataLine,
    color::{BLACK, WHITE},
    encoder::set_pixel,
    frame::FrameBuffer,
    random::RandomSource,
    strip::Strip,
};

const FLASH: StrobePattern = StrobePattern::new(WHITE, BLACK, 3.0, Duration::from_millis(3));
const BOLT_LUMINANCE: f32 = 1.0;

/// Direction the bolt travels in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrikeDirection {
    /// Towards higher pixel indices
    Forward,
    /// Towards pixel 0
    Backward,
}

/// Start and extent of one bolt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub start: usize,
    pub length: usize,
}

impl Strike {
    /// Draw a random strike for a strip of `len` pixels
    ///
    /// Start is in `0..len`, length in `0..=len / 2`.
    pub fn draw<R: RandomSource>(rng: &mut R, len: usize) -> Self {
        let start = rng.index(len);
        let half = u32::try_from(len / 2).unwrap_or(u32::MAX);
        let length = rng.between(0, half) as usize;
        Self { start, length }
    }

    /// Even lengths travel forward, odd lengths backward
    pub const fn direction(&self) -> StrikeDirection {
        if self.length % 2 == 0 {
            StrikeDirection::Forward
        } else {
            StrikeDirection::Backward
        }
    }

    /// Draw the bolt step by step, emitting after each one
    pub fn animate<L: DataLine, D: DelayNs, const N: usize>(
        &self,
        strip: &mut Strip<L, D>,
        frame: &mut FrameBuffer<N>,
    ) {
        match self.direction() {
            StrikeDirection::Forward => {
                for step in 0..self.length {
                    let head = self.start + step;
                    if head >= N {
                        break;
                    }
                    let _ = set_pixel(WHITE, BOLT_LUMINANCE, head, frame);
                    if head + 1 < N {
                        let _ = set_pixel(WHITE, BOLT_LUMINANCE, head + 1, frame);
                    }
                    strip.emit(frame);
                }
            }
            StrikeDirection::Backward => {
                // Pixel 0 is only ever lit as the neighbor of pixel 1
                for step in 0..self.length {
                    if step >= self.start {
                        break;
                    }
                    let head = self.start - step;
                    let _ = set_pixel(WHITE, BOLT_LUMINANCE, head - 1, frame);
                    let _ = set_pixel(WHITE, BOLT_LUMINANCE, head, frame);
                    strip.emit(frame);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightningPattern;

impl Pattern for LightningPattern {
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
        FLASH.run(strip, frame, rng);

        Strike::draw(rng, N).animate(strip, frame);

        // Buffer is already zeroed by the last emit
        strip.emit(frame);
    }
}
