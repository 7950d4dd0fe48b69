#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use myrtio_neopixel::{
    BITS_PER_PIXEL, DataLine, DelayNs, RandomSource, Rgb, Strip, StripConfig,
};

/// Everything the hardware layer was asked to do, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Configure(u8),
    Bit(u8, bool),
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

/// Shared event log for the mock line and delay
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    /// Bits of every transmitted frame
    ///
    /// A frame starts with the reset delay and runs until the next one.
    pub fn frames(&self) -> Vec<Vec<bool>> {
        let mut frames: Vec<Vec<bool>> = Vec::new();
        for event in self.0.borrow().iter() {
            match event {
                Event::DelayUs(_) => frames.push(Vec::new()),
                Event::Bit(_, bit) => {
                    if let Some(frame) = frames.last_mut() {
                        frame.push(*bit);
                    }
                }
                _ => {}
            }
        }
        frames
    }

    /// Reset intervals, in microseconds
    pub fn resets(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::DelayUs(us) => Some(*us),
                _ => None,
            })
            .collect()
    }

    /// Pauses between frames, in milliseconds
    pub fn pauses(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }
}

pub struct MockLine {
    log: EventLog,
}

impl DataLine for MockLine {
    fn configure_output(&mut self, pin: u8) {
        self.log.push(Event::Configure(pin));
    }

    fn send_bit(&mut self, pin: u8, bit: bool) {
        self.log.push(Event::Bit(pin, bit));
    }
}

pub struct MockDelay {
    log: EventLog,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

pub type MockStrip = Strip<MockLine, MockDelay>;

pub fn mock_strip(config: StripConfig) -> (MockStrip, EventLog) {
    let log = EventLog::default();
    let line = MockLine { log: log.clone() };
    let delay = MockDelay { log: log.clone() };
    (Strip::new(line, delay, config), log)
}

/// Random source replaying a fixed script, then returning 0
///
/// Every requested bound is recorded so tests can check draw ranges.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
    bounds: Vec<u32>,
}

impl ScriptedRandom {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            bounds: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    /// Exclusive upper bounds requested so far, in order
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: u32) -> u32 {
        self.bounds.push(bound);
        let value = self.values.pop_front().unwrap_or(0);
        assert!(
            bound == 0 || value < bound,
            "scripted value {value} not below {bound}"
        );
        value
    }
}

fn byte_at(bits: &[bool], offset: usize) -> u8 {
    bits[offset..offset + 8]
        .iter()
        .fold(0, |acc, bit| (acc << 1) | u8::from(*bit))
}

/// Decode one pixel of a transmitted frame (green, red, blue MSB first)
pub fn decode_pixel(bits: &[bool], index: usize) -> Rgb {
    let start = index * BITS_PER_PIXEL;
    Rgb {
        g: byte_at(bits, start),
        r: byte_at(bits, start + 8),
        b: byte_at(bits, start + 16),
    }
}

/// Indices of all pixels with at least one bit set
pub fn lit_pixels(bits: &[bool]) -> Vec<usize> {
    bits.chunks(BITS_PER_PIXEL)
        .enumerate()
        .filter(|(_, run)| run.iter().any(|bit| *bit))
        .map(|(index, _)| index)
        .collect()
}
