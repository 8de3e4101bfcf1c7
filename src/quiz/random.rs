//! Randomness source for shuffling rounds and picking the correct slot.

use crate::quiz::catalog::Country;
use crate::quiz::slot::{Slot, SLOT_COUNT};
use rand::seq::SliceRandom;
use rand::RngExt;

pub trait QuizRng {
    /// Shuffle the countries in place.
    fn shuffle(&mut self, countries: &mut [Country]);

    /// Pick a slot uniformly at random.
    fn pick_slot(&mut self) -> Slot;
}

/// Thread-local `rand` generator.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl QuizRng for ThreadRandom {
    fn shuffle(&mut self, countries: &mut [Country]) {
        countries.shuffle(&mut rand::rng());
    }

    fn pick_slot(&mut self) -> Slot {
        let index = rand::rng().random_range(0..SLOT_COUNT);
        Slot::ALL[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shuffle_keeps_every_country() {
        let mut rng = ThreadRandom;
        let mut countries = Country::ALL;
        rng.shuffle(&mut countries);
        let unique: HashSet<_> = countries.iter().collect();
        assert_eq!(unique.len(), Country::ALL.len());
    }

    #[test]
    fn test_pick_slot_covers_all_slots() {
        let mut rng = ThreadRandom;
        let seen: HashSet<_> = (0..500).map(|_| rng.pick_slot()).collect();
        assert_eq!(seen.len(), SLOT_COUNT);
    }
}
