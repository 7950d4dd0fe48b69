//! Pattern generators with compile-time known variants
//!
//! Every pattern drives the same pipeline: encode pixels into the caller's
//! frame buffer, emit it through the [`Strip`], pause, repeat. Patterns run
//! to completion and block the caller for their whole duration.
//!
//! All patterns are stored in an enum to avoid heap allocations.

mod fade;
mod lightning;
mod solid;
mod strobe;
mod twinkle;

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

pub use fade::FadePattern;
pub use lightning::{LightningPattern, Strike, StrikeDirection};
pub use solid::SolidPattern;
pub use strobe::StrobePattern;
pub use twinkle::{MAX_TWINKLE_COLORS, TwinklePattern};

use crate::{
    DataLine,
    color::{BLACK, Color, RAINBOW},
    frame::FrameBuffer,
    random::RandomSource,
    strip::Strip,
};

const PATTERN_NAME_SOLID: &str = "solid";
const PATTERN_NAME_STROBE: &str = "strobe";
const PATTERN_NAME_FADE: &str = "fade";
const PATTERN_NAME_TWINKLE: &str = "twinkle";
const PATTERN_NAME_LIGHTNING: &str = "lightning";

const PATTERN_ID_SOLID: u8 = 0;
const PATTERN_ID_STROBE: u8 = 1;
const PATTERN_ID_FADE: u8 = 2;
const PATTERN_ID_TWINKLE: u8 = 3;
const PATTERN_ID_LIGHTNING: u8 = 4;

// Defaults used when a pattern is picked by id
const DEFAULT_SOLID_LUMINANCE: f32 = 2.0;
const DEFAULT_STROBE_LUMINANCE: f32 = 1.0;
const DEFAULT_STROBE_PACE: Duration = Duration::from_millis(50);
const DEFAULT_FADE_PACE: Duration = Duration::from_millis(1);
const DEFAULT_TWINKLE_PERCENT: u8 = 100;
const DEFAULT_TWINKLE_LUMINANCE: f32 = 6.0;

pub trait Pattern {
    /// Run one full cycle of the pattern
    ///
    /// `frame` is expected to be all off on entry and is left all off.
    fn run<L, D, R, const N: usize>(
        &self,
        strip: &mut Strip<L, D>,
        frame: &mut FrameBuffer<N>,
        rng: &mut R,
    ) where
        L: DataLine,
        D: DelayNs,
        R: RandomSource;
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone, PartialEq)]
pub enum PatternSlot {
    Solid(SolidPattern),
    Strobe(StrobePattern),
    Fade(FadePattern),
    Twinkle(TwinklePattern),
    Lightning(LightningPattern),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    Solid = PATTERN_ID_SOLID,
    Strobe = PATTERN_ID_STROBE,
    Fade = PATTERN_ID_FADE,
    Twinkle = PATTERN_ID_TWINKLE,
    Lightning = PATTERN_ID_LIGHTNING,
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_SOLID => Self::Solid,
            PATTERN_ID_STROBE => Self::Strobe,
            PATTERN_ID_FADE => Self::Fade,
            PATTERN_ID_TWINKLE => Self::Twinkle,
            PATTERN_ID_LIGHTNING => Self::Lightning,
            _ => return None,
        })
    }

    /// Build the pattern with its default parameters
    ///
    /// `color` is used by the single-color patterns; twinkle uses the
    /// rainbow palette and lightning is always white.
    pub fn to_slot(self, color: Color) -> PatternSlot {
        match self {
            Self::Solid => PatternSlot::Solid(SolidPattern::new(color, DEFAULT_SOLID_LUMINANCE)),
            Self::Strobe => PatternSlot::Strobe(StrobePattern::new(
                color,
                BLACK,
                DEFAULT_STROBE_LUMINANCE,
                DEFAULT_STROBE_PACE,
            )),
            Self::Fade => PatternSlot::Fade(FadePattern::new(color, DEFAULT_FADE_PACE)),
            Self::Twinkle => PatternSlot::Twinkle(TwinklePattern::new(
                &RAINBOW,
                DEFAULT_TWINKLE_PERCENT,
                DEFAULT_TWINKLE_LUMINANCE,
            )),
            Self::Lightning => PatternSlot::Lightning(LightningPattern),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => PATTERN_NAME_SOLID,
            Self::Strobe => PATTERN_NAME_STROBE,
            Self::Fade => PATTERN_NAME_FADE,
            Self::Twinkle => PATTERN_NAME_TWINKLE,
            Self::Lightning => PATTERN_NAME_LIGHTNING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_SOLID => Some(Self::Solid),
            PATTERN_NAME_STROBE => Some(Self::Strobe),
            PATTERN_NAME_FADE => Some(Self::Fade),
            PATTERN_NAME_TWINKLE => Some(Self::Twinkle),
            PATTERN_NAME_LIGHTNING => Some(Self::Lightning),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Run the current pattern
    pub fn run<L, D, R, const N: usize>(
        &self,
        strip: &mut Strip<L, D>,
        frame: &mut FrameBuffer<N>,
        rng: &mut R,
    ) where
        L: DataLine,
        D: DelayNs,
        R: RandomSource,
    {
        match self {
            Self::Solid(pattern) => pattern.run(strip, frame, rng),
            Self::Strobe(pattern) => pattern.run(strip, frame, rng),
            Self::Fade(pattern) => pattern.run(strip, frame, rng),
            Self::Twinkle(pattern) => pattern.run(strip, frame, rng),
            Self::Lightning(pattern) => pattern.run(strip, frame, rng),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::Solid(_) => PatternId::Solid,
            Self::Strobe(_) => PatternId::Strobe,
            Self::Fade(_) => PatternId::Fade,
            Self::Twinkle(_) => PatternId::Twinkle,
            Self::Lightning(_) => PatternId::Lightning,
        }
    }
}
