// src/population/universe.rs
//! The paired bond universe: every traditional issue and its tokenized twin.

use crate::types::{Bond, Venue};
use std::collections::HashMap;

/// Traditional bonds carry ids `1..=n`; the twin of bond `k` is `k + n`.
#[derive(Debug, Clone)]
pub struct BondUniverse {
    traditional: Vec<Bond>,
    tokenized: Vec<Bond>,
    /// Bond id to (venue, position) for fast lookups.
    index: HashMap<u64, (Venue, usize)>,
}

impl BondUniverse {
    /// Mirrors every traditional bond onto the tokenized venue.
    pub fn from_traditional(traditional: Vec<Bond>) -> Self {
        let offset = traditional.len() as u64;
        let tokenized = traditional
            .iter()
            .map(|b| b.tokenized_mirror(b.id + offset))
            .collect();
        let mut universe = Self {
            traditional,
            tokenized,
            index: HashMap::new(),
        };
        universe.rebuild_index();
        universe
    }

    fn rebuild_index(&mut self) {
        self.index = Venue::ALL
            .iter()
            .flat_map(|&venue| {
                self.for_venue(venue)
                    .iter()
                    .enumerate()
                    .map(move |(pos, b)| (b.id, (venue, pos)))
            })
            .collect();
    }

    /// Number of traditional bonds (equal to the number of tokenized ones).
    pub fn pair_count(&self) -> usize {
        self.traditional.len()
    }

    pub fn total_count(&self) -> usize {
        self.traditional.len() + self.tokenized.len()
    }

    pub fn for_venue(&self, venue: Venue) -> &[Bond] {
        match venue {
            Venue::Traditional => &self.traditional,
            Venue::Tokenized => &self.tokenized,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Bond> {
        let &(venue, pos) = self.index.get(&id)?;
        self.for_venue(venue).get(pos)
    }

    /// The bond on the other venue with identical terms.
    pub fn counterpart(&self, id: u64) -> Option<&Bond> {
        let &(venue, pos) = self.index.get(&id)?;
        let other = match venue {
            Venue::Traditional => Venue::Tokenized,
            Venue::Tokenized => Venue::Traditional,
        };
        self.for_venue(other).get(pos)
    }

    /// Traditional/tokenized pairs in id order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Bond, &Bond)> {
        self.traditional.iter().zip(self.tokenized.iter())
    }
}
