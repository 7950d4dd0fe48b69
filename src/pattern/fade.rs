//! Fade in/out pattern
//!
//! Ramps the whole strip from luminance 0.20 up to 1.98 in steps of 0.02,
//! then back down to 0.22. The way down stops short of the dimmest steps so
//! the cycle never ends on a near-black frame.

use core::ops::Range;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use super::{Pattern, SolidPattern};
use crate::{
    DataLine,
    color::{Color, Luminance},
    frame::FrameBuffer,
    random::RandomSource,
    strip::Strip,
};

const FADE_STEP: f64 = 0.02;
const ASCENT_STEPS: Range<u16> = 10..100;
const DESCENT_STEPS: Range<u16> = 11..100;

#[allow(clippy::cast_possible_truncation)]
fn step_luminance(step: u16) -> Luminance {
    // Step 50 must land on exactly 1.0
    Luminance::new((FADE_STEP * f64::from(step)) as f32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadePattern {
    color: Color,
    /// Pause after every step
    pace: Duration,
}

impl FadePattern {
    pub const fn new(color: Color, pace: Duration) -> Self {
        Self { color, pace }
    }

    /// Luminance of each step on the way up (90 steps, 0.20..=1.98)
    pub fn ascending() -> impl Iterator<Item = Luminance> {
        ASCENT_STEPS.map(step_luminance)
    }

    /// Luminance of each step on the way down (89 steps, 1.98..=0.22)
    pub fn descending() -> impl Iterator<Item = Luminance> {
        DESCENT_STEPS.rev().map(step_luminance)
    }
}

impl Pattern for FadePattern {
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
        for luminance in Self::ascending().chain(Self::descending()) {
            SolidPattern::new(self.color, luminance.value()).show(strip, frame);
            strip.pause(self.pace);
        }
    }
}
