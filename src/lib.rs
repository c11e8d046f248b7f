//! Roll labeled dice, optionally as a Bad Gambler, and spot Dubs, Trips and Quads.
//!
//! ```rust
//! # use dubs_roller::{classify, roll_with, Die, RollConfig, RollSet, Tier};
//! # use rand::rngs::StdRng;
//! # use rand::SeedableRng;
//! #
//! # fn main() -> Result<(), dubs_roller::Error> {
//! // Roll 4 d6 labeled Z, Y, X and W with the Bad Gambler skew.
//! let config = RollConfig::with_sides(6, true)?;
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut dice = roll_with(4, &config, &mut rng)?;
//!
//! // Reroll a single die, the others keep their values.
//! let value = dice.reroll('X', &config, &mut rng)?;
//! assert_eq!(dice.get('X'), Some(value));
//!
//! // Classify dice with known values.
//! let dice = RollSet::from_dice([Die::new('Z', 4), Die::new('Y', 4), Die::new('X', 4)])?;
//! let result = classify(&dice);
//! assert_eq!(result.tier(), Tier::Trips);
//! assert_eq!(result.message(), Some("You got Trips!"));
//! assert_eq!(result.highlighted(), ['Z', 'Y', 'X']);
//! # Ok(())
//! # }
//! ```

mod classify;
mod dice;
mod error;
mod parse;
mod render;
mod roll;
mod session;

pub use classify::{classify, Classification, Tier, DESIGNATED_LABELS};
pub use dice::{Die, RollSet, MAX_DICE};
pub use error::{Error, Result};
pub use parse::{parse_bad_gambler, parse_count, Command};
pub use render::{clear_screen, tier_color, Renderer};
pub use roll::{RollBranch, RollConfig, RollSource, MATCH_CHANCE, TOP_HALF_CHANCE};
pub use session::{Session, SessionConfig};

/// Rolls `num_dice` dice labeled from `Z` backwards.
pub fn roll(num_dice: u32, config: &RollConfig) -> Result<RollSet> {
    RollSet::roll(num_dice, config, &mut rand::thread_rng())
}

/// Same as `roll()` but allows you to choose the rng you prefer to use.
pub fn roll_with(num_dice: u32, config: &RollConfig, rng: &mut impl rand::Rng) -> Result<RollSet> {
    RollSet::roll(num_dice, config, rng)
}
