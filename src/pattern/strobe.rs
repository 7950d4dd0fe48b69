//! Strobe pattern
//!
//! One call is one on/off pair: solid `first`, pause, solid `second`,
//! pause. Callers loop for a strobe train.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::{Pattern, SolidPattern};
use crate::{
    DataLine, color::Color, frame::FrameBuffer, random::RandomSource, strip::Strip,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrobePattern {
    first: SolidPattern,
    second: SolidPattern,
    /// Pause after each half-cycle
    pace: Duration,
}

impl StrobePattern {
    pub const fn new(first: Color, second: Color, luminance: f32, pace: Duration) -> Self {
        Self {
            first: SolidPattern::new(first, luminance),
            second: SolidPattern::new(second, luminance),
            pace,
        }
    }

    pub const fn pace(&self) -> Duration {
        self.pace
    }
}

impl Pattern for StrobePattern {
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
        self.first.show(strip, frame);
        strip.pause(self.pace);
        self.second.show(strip, frame);
        strip.pause(self.pace);
    }
}
