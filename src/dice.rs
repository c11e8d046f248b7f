use std::fmt::Display;

use tracing::info;

use crate::{
    classify::{classify, Classification},
    error::{Error, Result},
    roll::{RollConfig, RollSource},
};

/// Labels are handed out from `'Z'` backwards, one letter per die.
pub const MAX_DICE: u32 = 26;

/// A single labeled die and the value it currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    pub(crate) label: char,
    pub(crate) value: u32,
}

impl Die {
    pub fn new(label: char, value: u32) -> Self {
        Self { label, value }
    }

    pub fn label(&self) -> char {
        self.label
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Every die on the table, kept in the order they were first rolled.
/// No two dice share a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollSet {
    dice: Vec<Die>,
}

impl RollSet {
    /// Rolls `num_dice` new dice labeled `Z`, `Y`, `X`, ...
    /// Every die is rolled against the ones created before it.
    pub fn roll<S: RollSource + ?Sized>(
        num_dice: u32,
        config: &RollConfig,
        source: &mut S,
    ) -> Result<Self> {
        if num_dice < 1 {
            return Err(Error::BelowMinimum {
                what: "number of dice",
                value: num_dice.into(),
            });
        }
        if num_dice > MAX_DICE {
            return Err(Error::TooManyDice {
                max: MAX_DICE,
                value: num_dice.into(),
            });
        }

        let mut dice = Vec::with_capacity(num_dice as usize);
        for label in ('A'..='Z').rev().take(num_dice as usize) {
            let value = config.roll(&dice, source);
            dice.push(Die::new(label, value));
        }

        Ok(Self { dice })
    }

    /// Builds a set from dice whose values are already known.
    pub fn from_dice(dice: impl IntoIterator<Item = Die>) -> Result<Self> {
        let mut set = Self { dice: Vec::new() };
        for die in dice {
            if set.get(die.label).is_some() {
                return Err(Error::DuplicateLabel(die.label));
            }
            set.dice.push(die);
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn get(&self, label: char) -> Option<u32> {
        self.dice.iter().find(|d| d.label == label).map(Die::value)
    }

    /// The dice in ascending label order, the order they are shown in.
    pub fn sorted(&self) -> Vec<Die> {
        let mut sorted = self.dice.clone();
        sorted.sort_by_key(Die::label);
        sorted
    }

    pub fn classify(&self) -> Classification {
        classify(&self.dice)
    }

    /// Rerolls the die with the given label and returns its new value.
    /// The old value is still on the table while the new one is rolled.
    pub fn reroll<S: RollSource + ?Sized>(
        &mut self,
        label: char,
        config: &RollConfig,
        source: &mut S,
    ) -> Result<u32> {
        let index = self
            .dice
            .iter()
            .position(|d| d.label == label)
            .ok_or(Error::NoMatchingDie(label))?;

        let value = config.roll(&self.dice, source);
        let old = std::mem::replace(&mut self.dice[index].value, value);

        info!(%label, old, new = value, "rerolled die");
        Ok(value)
    }

    /// Rerolls every die. Each new value is rolled against the dice as they
    /// were before this reroll started.
    pub fn reroll_all<S: RollSource + ?Sized>(&mut self, config: &RollConfig, source: &mut S) {
        let before = self.dice.clone();
        for die in &mut self.dice {
            die.value = config.roll(&before, source);
        }

        info!(dice = self.dice.len(), "rerolled all dice");
    }
}

impl<'a> IntoIterator for &'a RollSet {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}

impl Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dice {}: {}", self.label, self.value)
    }
}
