// src/rng.rs

//! Seedable random streams.
//!
//! One seed drives the whole run. Each concern draws from its own ChaCha
//! stream so the venues can be stepped in any order (or in parallel) without
//! changing a single draw.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type SimRng = ChaCha8Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Population,
    Conditions,
    Traditional,
    Tokenized,
}

impl Stream {
    fn id(self) -> u64 {
        match self {
            Stream::Population => 0,
            Stream::Conditions => 1,
            Stream::Traditional => 2,
            Stream::Tokenized => 3,
        }
    }
}

/// A fresh generator for `stream`, fully determined by `seed`.
pub fn stream_rng(seed: u64, stream: Stream) -> SimRng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream.id());
    rng
}
