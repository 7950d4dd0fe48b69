//! Transmission of frame buffers onto the data line.
//!
//! The strip has no acknowledgment channel, so a transmission cannot fail
//! from the point of view of the caller. A torn frame is simply replaced by
//! the next complete one.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::DataLine;
use crate::frame::FrameBuffer;

/// Default output pin
pub const DEFAULT_OUTPUT_PIN: u8 = 18;

/// Reset interval for current device batches
pub const RESET_INTERVAL_CURRENT: Duration = Duration::from_micros(300);

/// Reset interval for older device batches
pub const RESET_INTERVAL_LEGACY: Duration = Duration::from_micros(50);

/// Configuration for the strip output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Output pin the data line is attached to
    pub pin: u8,
    /// Low period held before every frame
    pub reset_interval: Duration,
}

impl StripConfig {
    /// Config for current devices on the given pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            reset_interval: RESET_INTERVAL_CURRENT,
        }
    }

    /// Config for older devices on the given pin
    pub const fn legacy(pin: u8) -> Self {
        Self {
            pin,
            reset_interval: RESET_INTERVAL_LEGACY,
        }
    }

    #[must_use]
    pub const fn with_reset_interval(mut self, reset_interval: Duration) -> Self {
        self.reset_interval = reset_interval;
        self
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_PIN)
    }
}

/// Blocking strip output
///
/// Owns the data line and the delay source. The frame buffer stays with the
/// caller and is only borrowed for the duration of one [`Strip::emit`].
pub struct Strip<L: DataLine, D: DelayNs> {
    line: L,
    delay: D,
    config: StripConfig,
}

impl<L: DataLine, D: DelayNs> Strip<L, D> {
    /// Create a new strip output
    ///
    /// Configures the output pin once.
    pub fn new(mut line: L, delay: D, config: StripConfig) -> Self {
        line.configure_output(config.pin);
        Self {
            line,
            delay,
            config,
        }
    }

    pub const fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Send a frame and clear it
    ///
    /// Holds the line low for the reset interval, sends every bit in order,
    /// then zeroes the buffer so the next frame starts all off. Blocks for
    /// the whole transmission.
    pub fn emit<const N: usize>(&mut self, frame: &mut FrameBuffer<N>) {
        self.delay.delay_us(duration_to_u32(self.config.reset_interval.as_micros()));

        let pin = self.config.pin;
        for bit in frame.bits() {
            self.line.send_bit(pin, bit);
        }

        frame.zero();
    }

    /// Block between animation frames
    pub fn pause(&mut self, duration: Duration) {
        self.delay.delay_ms(duration_to_u32(duration.as_millis()));
    }

    /// Release the data line and the delay source
    pub fn release(self) -> (L, D) {
        (self.line, self.delay)
    }
}

fn duration_to_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
