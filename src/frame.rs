//! Frame buffer holding the wire bits of one full strip frame.
//!
//! Each pixel slot owns a 24-bit run laid out MSB first as
//! green[8] red[8] blue[8], which is the order the strip expects on the
//! data line. Runs are stored packed, one word per slot, and are read back
//! bit by bit in wire order by [`FrameBuffer::bits`].

use crate::color::Rgb;

/// Number of wire bits per pixel slot
pub const BITS_PER_PIXEL: usize = 24;

/// Default strip length
pub const DEFAULT_PIXEL_COUNT: usize = 300;

const RUN_MASK: u32 = 0x00FF_FFFF;

/// Wire bits for a strip of `N` pixels
///
/// Allocated once and reused for every frame. Starts zeroed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    runs: [u32; N],
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FrameBuffer<N> {
    /// Create a new zeroed buffer
    pub const fn new() -> Self {
        Self { runs: [0; N] }
    }

    /// Number of pixel slots
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Number of wire bits in one frame
    pub const fn bit_len(&self) -> usize {
        N * BITS_PER_PIXEL
    }

    /// Set every bit to zero
    pub fn zero(&mut self) {
        self.runs.fill(0);
    }

    /// Check if every bit is zero
    pub fn is_off(&self) -> bool {
        self.runs.iter().all(|run| *run == 0)
    }

    /// Get the 24-bit run of a slot
    pub fn run(&self, index: usize) -> Option<u32> {
        self.runs.get(index).copied()
    }

    /// Get a single wire bit by its position in the frame
    pub fn bit(&self, position: usize) -> Option<bool> {
        let run = self.run(position / BITS_PER_PIXEL)?;
        let shift = BITS_PER_PIXEL - 1 - position % BITS_PER_PIXEL;
        Some((run >> shift) & 1 == 1)
    }

    /// Iterate over all wire bits in transmission order
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.runs.iter().flat_map(|run| {
            (0..BITS_PER_PIXEL)
                .rev()
                .map(move |shift| (run >> shift) & 1 == 1)
        })
    }

    /// Decode the channels stored at a slot
    #[allow(clippy::cast_possible_truncation)]
    pub fn pixel(&self, index: usize) -> Option<Rgb> {
        let run = self.run(index)?;
        Some(Rgb {
            g: (run >> 16) as u8,
            r: (run >> 8) as u8,
            b: run as u8,
        })
    }

    /// Replace the run of a slot
    ///
    /// Only the low 24 bits are kept. Out of range slots are ignored.
    pub(crate) fn write_run(&mut self, index: usize, run: u32) {
        if let Some(slot) = self.runs.get_mut(index) {
            *slot = run & RUN_MASK;
        }
    }
}
