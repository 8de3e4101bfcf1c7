use crate::quiz::catalog::Country;
use crate::quiz::random::QuizRng;
use crate::quiz::slot::{Slot, SLOT_COUNT};

/// A shuffled permutation of the catalog. The first three entries are the
/// flags on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSet {
    countries: Vec<Country>,
}

impl RoundSet {
    pub fn shuffled(rng: &mut dyn QuizRng) -> Self {
        let mut countries = Country::ALL.to_vec();
        rng.shuffle(&mut countries);
        Self { countries }
    }

    /// Reshuffle the whole catalog, not just the rounds still to play.
    pub fn reshuffle(&mut self, rng: &mut dyn QuizRng) {
        rng.shuffle(&mut self.countries);
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn country_at(&self, slot: Slot) -> Country {
        self.countries[slot.index()]
    }

    pub fn candidates(&self) -> [Country; SLOT_COUNT] {
        Slot::ALL.map(|slot| self.country_at(slot))
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::testing::FixedRandom;

    #[test]
    fn test_candidates_are_leading_entries() {
        let mut rng = FixedRandom::new(0);
        let rounds = RoundSet::shuffled(&mut rng);
        assert_eq!(
            rounds.candidates(),
            [Country::Estonia, Country::France, Country::Germany]
        );
        assert_eq!(rounds.country_at(Slot::ALL[2]), Country::Germany);
    }

    #[test]
    fn test_reshuffle_is_permutation() {
        let mut rng = FixedRandom::new(0).rotating();
        let mut rounds = RoundSet::shuffled(&mut rng);
        for _ in 0..5 {
            rounds.reshuffle(&mut rng);
            assert_eq!(rounds.len(), Country::ALL.len());
            let mut sorted = rounds.countries().to_vec();
            sorted.sort();
            assert_eq!(sorted, Country::ALL.to_vec());
        }
    }
}
