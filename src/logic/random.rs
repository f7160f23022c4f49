// The one source of randomness for the whole engine.
use rand::{Rng, RngCore, rngs::{StdRng, ThreadRng}};

pub trait RandomSource {
    // A uniform draw in [0, 1).
    fn draw(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn draw(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl RandomSource for StdRng {
    fn draw(&mut self) -> f64 {
        self.random::<f64>()
    }
}

// Replays a fixed sequence of draws, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct FixedDraws {
    draws: Vec<f64>,
    index: usize,
}

impl FixedDraws {
    // An empty list replays a single 0.0.
    pub fn build(draws: Vec<f64>) -> Self {
        let draws = if draws.is_empty() { vec![0.0] } else { draws };
        Self { draws, index: 0 }
    }

    // Always draw the same value.
    pub fn constant(value: f64) -> Self {
        Self::build(vec![value])
    }
}

impl RandomSource for FixedDraws {
    fn draw(&mut self) -> f64 {
        let value = self.draws[self.index % self.draws.len()];
        self.index += 1;
        return value;
    }
}

// Uniform value in [min, max).
pub fn range_f64(rng: &mut dyn RandomSource, min: f64, max: f64) -> f64 {
    min + rng.draw() * (max - min)
}

// Lets the rand crate's sampling and shuffling run on a random source.
// Every 32 or 64 bit word comes from a single draw.
pub struct SourceRng<'a> {
    source: &'a mut dyn RandomSource,
}

impl<'a> SourceRng<'a> {
    pub fn new(source: &'a mut dyn RandomSource) -> Self {
        Self { source }
    }
}

impl RngCore for SourceRng<'_> {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        // The cast saturates for a draw of 1.0.
        (self.source.draw().clamp(0.0, 1.0) * 18_446_744_073_709_551_616.0) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

// Uniform integer in [min, max], inclusive.
pub fn range_u8(rng: &mut dyn RandomSource, min: u8, max: u8) -> u8 {
    SourceRng::new(rng).random_range(min..=max.max(min))
}

// Uniform index in [0, len). Zero for an empty range.
pub fn index(rng: &mut dyn RandomSource, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    SourceRng::new(rng).random_range(0..len)
}
