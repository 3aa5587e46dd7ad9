//! Injectable random source.
//!
//! The engine draws uniform integers in caller-chosen inclusive ranges and
//! nothing else. Hosts pick the generator; tests inject [`ScriptedRandom`] or
//! a seeded [`PcgRandom`] to make outcomes reproducible.

/// Source of uniform integers.
pub trait RandomSource {
    /// Returns a uniform integer in `[min, max]`.
    ///
    /// When `max <= min` the range is degenerate and `min` is returned.
    fn draw(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        (**self).draw(min, max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        (**self).draw(min, max)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. Same seed, same
/// sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug)]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9e37_79b9_7f4a_7c15,
        }
    }

    /// Advances the state and returns the next 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        Self::output(self.state)
    }

    /// XSH-RR: xorshift high bits, then rotate by the top five bits.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRandom {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }
}

/// Replays a fixed script of draws.
///
/// Each draw takes the next scripted value (cycling back to the start once the
/// script is exhausted) and clamps it into the requested range. An empty
/// script always yields `min`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    cursor: usize,
    draws: usize,
}

impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
            draws: 0,
        }
    }

    /// A source that answers every draw with `value` (clamped).
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.draws += 1;
        let Some(&value) = self.values.get(self.cursor) else {
            return min;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        if max <= min {
            return min;
        }
        value.clamp(min, max)
    }
}
