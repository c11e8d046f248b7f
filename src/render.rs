use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::{
    classify::{Classification, Tier},
    dice::RollSet,
};

/// Turns a roll set and its classification into terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// With `color` off the same text is produced without any escape codes.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// One `Dice {label}: {value}` line per die in ascending label order,
    /// followed by the achievement message if there is one.
    pub fn render(&self, dice: &RollSet, classification: &Classification) -> String {
        let color = tier_color(classification.tier());
        let mut out = String::new();

        for die in dice.sorted() {
            let line = die.to_string();
            match color {
                Some(color) if self.color && classification.is_highlighted(die.label()) => {
                    out.push_str(&line.with(color).to_string())
                }
                _ => out.push_str(&line),
            }
            out.push('\n');
        }

        if let Some(message) = classification.message() {
            if self.color {
                out.push_str(&message.with(Color::Yellow).slow_blink().to_string());
            } else {
                out.push_str(message);
            }
            out.push('\n');
        }

        out
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Color used for the highlighted dice of a tier.
pub fn tier_color(tier: Tier) -> Option<Color> {
    match tier {
        Tier::None => None,
        Tier::Dubs => Some(Color::Green),
        Tier::Trips => Some(Color::Red),
        Tier::Quads => Some(Color::Blue),
    }
}

/// Clears the terminal and moves the cursor to the top left corner.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
    out.flush()
}
