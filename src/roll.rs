use std::{fmt::Display, num::NonZeroU32};

use rand::Rng;
use tracing::debug;

use crate::{
    dice::Die,
    error::{Error, Result},
};

/// Chance for a Bad Gambler roll to copy the value of a die already on the table.
pub const MATCH_CHANCE: f64 = 0.30;
/// Chance for a Bad Gambler roll that didn't copy a die to land in the top half.
pub const TOP_HALF_CHANCE: f64 = 0.70;

/// The random draws a roll needs.
///
/// Every [`rand::Rng`] is a `RollSource`, so callers usually pass `thread_rng()`
/// or a seeded `StdRng`. Implement it yourself to script the draws.
pub trait RollSource {
    /// Returns `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
    /// Uniform integer in `low..=high`.
    fn between(&mut self, low: u32, high: u32) -> u32;
    /// Uniform index in `0..len`, `len` is never 0.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RollSource for R {
    fn chance(&mut self, probability: f64) -> bool {
        self.gen_bool(probability)
    }

    fn between(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Which rule produced a rolled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollBranch {
    /// Plain roll over every side of the die.
    Uniform,
    /// Bad Gambler copied the value of a die already rolled.
    ForcedMatch,
    /// Bad Gambler rolled over the upper half of the die.
    TopHalf,
}

/// Die size plus whether rolls are skewed Bad Gambler style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollConfig {
    sides: NonZeroU32,
    bad_gambler: bool,
}

impl RollConfig {
    pub fn new(sides: NonZeroU32, bad_gambler: bool) -> Self {
        Self { sides, bad_gambler }
    }

    /// Same as `new()` but checks that the die has at least one side.
    pub fn with_sides(sides: u32, bad_gambler: bool) -> Result<Self> {
        let sides = NonZeroU32::new(sides).ok_or(Error::BelowMinimum {
            what: "number of sides",
            value: 0,
        })?;
        Ok(Self::new(sides, bad_gambler))
    }

    pub fn sides(&self) -> u32 {
        self.sides.get()
    }

    pub fn is_bad_gambler(&self) -> bool {
        self.bad_gambler
    }

    /// Rolls a single die, `existing` being the dice already on the table.
    /// The result is always in `1..=sides`.
    pub fn roll<S: RollSource + ?Sized>(&self, existing: &[Die], source: &mut S) -> u32 {
        self.roll_detailed(existing, source).0
    }

    /// Same as `roll()` but also reports which rule picked the value.
    pub fn roll_detailed<S: RollSource + ?Sized>(
        &self,
        existing: &[Die],
        source: &mut S,
    ) -> (u32, RollBranch) {
        let (value, branch) = if self.bad_gambler {
            self.roll_bad_gambler(existing, source)
        } else {
            (self.roll_uniform(source), RollBranch::Uniform)
        };

        debug!(sides = self.sides(), %branch, value, "rolled die");
        (value, branch)
    }

    fn roll_bad_gambler<S: RollSource + ?Sized>(
        &self,
        existing: &[Die],
        source: &mut S,
    ) -> (u32, RollBranch) {
        // No draw is spent on the match chance when there is nothing to match.
        if !existing.is_empty() && source.chance(MATCH_CHANCE) {
            let picked = existing[source.index(existing.len())];
            return (picked.value(), RollBranch::ForcedMatch);
        }

        if source.chance(TOP_HALF_CHANCE) {
            let sides = self.sides();
            let lower = sides / 2 + 1;
            let value = if lower <= sides {
                source.between(lower, sides)
            } else {
                self.roll_uniform(source)
            };
            return (value, RollBranch::TopHalf);
        }

        (self.roll_uniform(source), RollBranch::Uniform)
    }

    fn roll_uniform<S: RollSource + ?Sized>(&self, source: &mut S) -> u32 {
        source.between(1, self.sides())
    }
}

impl Display for RollBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            RollBranch::Uniform => "uniform",
            RollBranch::ForcedMatch => "forced_match",
            RollBranch::TopHalf => "top_half",
        };
        write!(f, "{str}")
    }
}
