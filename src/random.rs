//! Randomness used by the randomized patterns.
//!
//! Patterns take the source as an argument instead of reaching for a global
//! generator, so a seeded or scripted source makes every frame reproducible.

/// Source of uniformly distributed integers
pub trait RandomSource {
    /// Uniform value in `0..bound`
    ///
    /// Returns 0 when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32;

    /// Uniform value in `low..=high`
    fn between(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        low + self.below((high - low).saturating_add(1))
    }

    /// Uniform index into a collection of `len` items
    fn index(&mut self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.below(bound) as usize
    }
}

impl RandomSource for fastrand::Rng {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.u32(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}
