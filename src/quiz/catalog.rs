//! The fixed country catalog.
//!
//! Every game plays exactly one round per catalog entry, so the catalog size
//! is also the number of rounds.

use std::fmt;

/// A country whose flag can appear on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Country {
    Estonia,
    France,
    Germany,
    Ireland,
    Italy,
    Nigeria,
    Poland,
    Spain,
    Uk,
    Us,
}

impl Country {
    pub const ALL: [Country; 10] = [
        Country::Estonia,
        Country::France,
        Country::Germany,
        Country::Ireland,
        Country::Italy,
        Country::Nigeria,
        Country::Poland,
        Country::Spain,
        Country::Uk,
        Country::Us,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Country::Estonia => "Estonia",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Ireland => "Ireland",
            Country::Italy => "Italy",
            Country::Nigeria => "Nigeria",
            Country::Poland => "Poland",
            Country::Spain => "Spain",
            Country::Uk => "UK",
            Country::Us => "US",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rounds per game: one per catalog entry.
pub const ROUNDS_PER_GAME: usize = Country::ALL.len();

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_distinct() {
        let unique: HashSet<_> = Country::ALL.iter().collect();
        assert_eq!(unique.len(), Country::ALL.len());
        assert_eq!(ROUNDS_PER_GAME, 10);
    }

    #[test]
    fn test_display_uses_short_names() {
        assert_eq!(Country::Uk.to_string(), "UK");
        assert_eq!(Country::Us.to_string(), "US");
        assert_eq!(Country::Estonia.to_string(), "Estonia");
    }
}
