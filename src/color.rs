use std::collections::hash_map::{DefaultHasher, RandomState};
use std::hash::{BuildHasher, BuildHasherDefault};

/// Hands out per-element colors with one random channel.
///
/// Red and green are saturated; blue is drawn from [0, 1).
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    source: Source,
    counter: u64,
}

#[derive(Debug, Clone)]
enum Source {
    Seeded(u64),
    Random(RandomState),
}

impl ColorGenerator {
    /// Randomly keyed generator, different on every run
    pub fn random() -> Self {
        Self {
            source: Source::Random(RandomState::new()),
            counter: 0,
        }
    }

    /// Deterministic generator for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: Source::Seeded(seed),
            counter: 0,
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::random, Self::seeded)
    }

    /// Next value in [0, 1)
    pub fn next_channel(&mut self) -> f32 {
        self.counter += 1;
        let hash = match &self.source {
            Source::Seeded(seed) => {
                BuildHasherDefault::<DefaultHasher>::default().hash_one((*seed, self.counter))
            }
            Source::Random(state) => state.hash_one(self.counter),
        };
        // Top 24 bits fit an f32 mantissa exactly
        (hash >> 40) as f32 / (1u64 << 24) as f32
    }

    pub fn next_color(&mut self) -> [f32; 3] {
        [1.0, 1.0, self.next_channel()]
    }
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::random()
    }
}
