//! Spots Dubs, Trips and Quads on the dice labeled `Z`, `Y`, `X` and `W`.

use tracing::debug;

use crate::dice::Die;

/// The only labels that take part in classification, in the order they chain.
pub const DESIGNATED_LABELS: [char; 4] = ['Z', 'Y', 'X', 'W'];

/// Patterns from the highest priority down, the first one to match wins.
const PATTERNS: [Tier; 3] = [Tier::Quads, Tier::Trips, Tier::Dubs];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    #[default]
    None,
    /// `Z` and `Y` match.
    Dubs,
    /// `Z`, `Y` and `X` match.
    Trips,
    /// `Z`, `Y`, `X` and `W` match.
    Quads,
}

impl Tier {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Tier::None => None,
            Tier::Dubs => Some("You got Dubs!"),
            Tier::Trips => Some("You got Trips!"),
            Tier::Quads => Some("You got Quads!"),
        }
    }

    /// Labels that have to match for this tier.
    pub fn labels(self) -> &'static [char] {
        let all: &'static [char; 4] = &DESIGNATED_LABELS;
        &all[..self.width()]
    }

    fn width(self) -> usize {
        match self {
            Tier::None => 0,
            Tier::Dubs => 2,
            Tier::Trips => 3,
            Tier::Quads => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    tier: Tier,
}

impl Classification {
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn message(&self) -> Option<&'static str> {
        self.tier.message()
    }

    pub fn highlighted(&self) -> &'static [char] {
        self.tier.labels()
    }

    pub fn is_highlighted(&self, label: char) -> bool {
        self.highlighted().contains(&label)
    }
}

/// Finds the best pattern formed by the designated dice.
/// Dice with any other label are ignored and missing labels never match.
pub fn classify<'a>(dice: impl IntoIterator<Item = &'a Die>) -> Classification {
    let values = designated_values(dice);

    let tier = PATTERNS
        .into_iter()
        .find(|tier| all_equal(&values[..tier.width()]))
        .unwrap_or(Tier::None);

    debug!(?tier, ?values, "classified dice");
    Classification { tier }
}

fn designated_values<'a>(dice: impl IntoIterator<Item = &'a Die>) -> [Option<u32>; 4] {
    let mut values = [None; 4];
    for die in dice {
        if let Some(slot) = DESIGNATED_LABELS.iter().position(|&l| l == die.label) {
            values[slot] = Some(die.value);
        }
    }
    values
}

fn all_equal(values: &[Option<u32>]) -> bool {
    match values.first() {
        Some(Some(first)) => values.iter().all(|v| *v == Some(*first)),
        _ => false,
    }
}
