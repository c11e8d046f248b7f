use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::{
    dice::{RollSet, MAX_DICE},
    error::{Error, Result},
    parse::{parse_bad_gambler, parse_count, Command},
    render::{clear_screen, Renderer},
    roll::{RollConfig, RollSource},
};

const DICE_PROMPT: &str = "How many dice would you like to roll? ";
const SIDES_PROMPT: &str = "How many sides should each die have? ";
const BAD_GAMBLER_PROMPT: &str = "Enable 'Bad Gambler' mode? (y/n): ";
const COMMAND_PROMPT: &str =
    "Enter a dice label to reroll it, type 'all' to reroll all dice, or 'done' to finish: ";

/// Options for a [`Session`]. Anything left as `None` is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub num_dice: Option<u32>,
    pub num_sides: Option<u32>,
    pub bad_gambler: Option<bool>,
    /// Show the first roll and stop, without offering rerolls.
    pub once: bool,
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            num_dice: None,
            num_sides: None,
            bad_gambler: None,
            once: false,
            color: true,
            clear_screen: true,
        }
    }
}

/// The interactive roll, reroll, done loop.
pub struct Session<R, W, S> {
    input: R,
    output: W,
    source: S,
    config: SessionConfig,
    renderer: Renderer,
}

impl<R: BufRead, W: Write, S: RollSource> Session<R, W, S> {
    pub fn new(input: R, output: W, source: S, config: SessionConfig) -> Self {
        let renderer = Renderer::new(config.color);
        Self {
            input,
            output,
            source,
            config,
            renderer,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the session to the end and returns the final dice.
    pub fn run(&mut self) -> Result<RollSet> {
        if self.config.clear_screen {
            clear_screen(&mut self.output)?;
        }

        let num_dice = match self.config.num_dice {
            Some(num_dice) => num_dice,
            None => self.prompt_count(DICE_PROMPT, "number of dice", Some(MAX_DICE))?,
        };
        let num_sides = match self.config.num_sides {
            Some(num_sides) => num_sides,
            None => self.prompt_count(SIDES_PROMPT, "number of sides", None)?,
        };
        let bad_gambler = match self.config.bad_gambler {
            Some(bad_gambler) => bad_gambler,
            None => {
                let answer = self
                    .prompt(BAD_GAMBLER_PROMPT)?
                    .ok_or_else(|| input_closed("Bad Gambler answer"))?;
                parse_bad_gambler(&answer)
            }
        };

        let roll_config = RollConfig::with_sides(num_sides, bad_gambler)?;
        debug!(num_dice, num_sides, bad_gambler, "starting session");

        let mut dice = RollSet::roll(num_dice, &roll_config, &mut self.source)?;
        self.show("Initial Roll Results:", &dice)?;

        if !self.config.once {
            self.reroll_loop(&mut dice, &roll_config)?;
            self.show("Final Dice Results:", &dice)?;
        }

        Ok(dice)
    }

    fn reroll_loop(&mut self, dice: &mut RollSet, roll_config: &RollConfig) -> Result<()> {
        loop {
            writeln!(self.output)?;
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                // Treat a closed input like `done`.
                writeln!(self.output)?;
                return Ok(());
            };

            match Command::parse(&line) {
                Some(Command::Done) => return Ok(()),
                Some(Command::All) => {
                    dice.reroll_all(roll_config, &mut self.source);
                    writeln!(self.output, "\nAll dice have been rerolled.")?;
                    self.show("Current Dice Results:", dice)?;
                }
                Some(Command::Reroll(label)) => {
                    match dice.reroll(label, roll_config, &mut self.source) {
                        Ok(value) => {
                            writeln!(
                                self.output,
                                "\nDice {label} was rerolled. New result: {value}"
                            )?;
                            self.show("Current Dice Results:", dice)?;
                        }
                        Err(Error::NoMatchingDie(_)) => self.no_matching_die()?,
                        Err(err) => return Err(err),
                    }
                }
                None => self.no_matching_die()?,
            }
        }
    }

    fn no_matching_die(&mut self) -> Result<()> {
        writeln!(self.output, "No dice found with that label. Please try again.")?;
        Ok(())
    }

    fn show(&mut self, heading: &str, dice: &RollSet) -> Result<()> {
        let rendered = self.renderer.render(dice, &dice.classify());
        write!(self.output, "\n{heading}\n{rendered}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Asks until a valid count is given. Running out of input is an error.
    fn prompt_count(
        &mut self,
        prompt: &str,
        what: &'static str,
        max: Option<u32>,
    ) -> Result<u32> {
        loop {
            let line = self.prompt(prompt)?.ok_or_else(|| input_closed(what))?;

            let count = parse_count(&line, what).and_then(|count| match max {
                Some(max) if count > max => Err(Error::TooManyDice {
                    max,
                    value: count.into(),
                }),
                _ => Ok(count),
            });

            match count {
                Ok(count) => return Ok(count),
                Err(err) => {
                    warn!(%err, "rejected input");
                    writeln!(self.output, "{err}. Please try again.")?;
                }
            }
        }
    }

    /// Prints the prompt and reads one line, `None` once the input is closed.
    /// Bytes that aren't UTF-8 are replaced so the line is rejected by the parsers.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).into_owned()))
    }
}

fn input_closed(what: &str) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("input closed while asking for the {what}"),
    ))
}
