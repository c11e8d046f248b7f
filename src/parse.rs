use winnow::{
    ascii::{digit1, multispace0, Caseless},
    combinator::{alt, delimited, opt},
    error::{
        StrContext::{Expected, Label},
        StrContextValue::{CharLiteral, Description, StringLiteral},
    },
    token::one_of,
    PResult, Parser,
};

use crate::error::{Error, Result};

/// What the player typed at the reroll prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `done`
    Done,
    /// `all`
    All,
    /// A single letter, always uppercase.
    Reroll(char),
}

impl Command {
    /// Commands are case insensitive and may be padded with whitespace.
    /// Returns `None` for anything that isn't `done`, `all` or a single letter.
    pub fn parse(input: &str) -> Option<Command> {
        command.parse(input).ok()
    }
}

/// Parses a count such as the number of dice or sides, which must be at least 1.
pub fn parse_count(input: &str, what: &'static str) -> Result<u32> {
    let value = signed_number
        .parse(input)
        .map_err(|_| Error::NotANumber(input.trim().to_string()))?;

    if value < 1 {
        return Err(Error::BelowMinimum { what, value });
    }
    u32::try_from(value).map_err(|_| Error::TooLarge { what, value })
}

/// `y` or `yes` in any case turns on Bad Gambler mode, anything else leaves it off.
pub fn parse_bad_gambler(input: &str) -> bool {
    yes.parse(input).is_ok()
}

fn command(input: &mut &str) -> PResult<Command> {
    delimited(
        multispace0,
        alt((
            Caseless("done")
                .value(Command::Done)
                .context(Expected(StringLiteral("done"))),
            Caseless("all")
                .value(Command::All)
                .context(Expected(StringLiteral("all"))),
            one_of(|c: char| c.is_ascii_alphabetic())
                .map(|c: char| Command::Reroll(c.to_ascii_uppercase()))
                .context(Label("dice label"))
                .context(Expected(Description("a single letter"))),
        )),
        multispace0,
    )
    .parse_next(input)
}

/// Leading zeros are allowed, `007` is 7.
fn signed_number(input: &mut &str) -> PResult<i64> {
    delimited(
        multispace0,
        (opt(one_of(['+', '-'])), digit1)
            .take()
            .try_map(str::parse::<i64>),
        multispace0,
    )
    .context(Label("count"))
    .parse_next(input)
}

fn yes<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited(
        multispace0,
        alt((Caseless("yes"), Caseless("y"))).context(Expected(CharLiteral('y'))),
        multispace0,
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use winnow::Parser;

    use super::*;

    #[test]
    fn test_command_done() {
        assert_eq!(Command::parse("done"), Some(Command::Done));
        assert_eq!(Command::parse("  DoNe \n"), Some(Command::Done));
    }

    #[test]
    fn test_command_all() {
        assert_eq!(Command::parse("ALL"), Some(Command::All));
        assert_eq!(Command::parse("all\n"), Some(Command::All));
    }

    #[test]
    fn test_command_label_uppercased() {
        assert_eq!(Command::parse("z"), Some(Command::Reroll('Z')));
        assert_eq!(Command::parse(" W "), Some(Command::Reroll('W')));
    }

    #[test]
    fn test_command_single_letter_d_and_a() {
        // prefixes of `done` and `all` are labels too
        assert_eq!(Command::parse("d"), Some(Command::Reroll('D')));
        assert_eq!(Command::parse("a"), Some(Command::Reroll('A')));
    }

    #[test]
    fn test_command_rejects_garbage() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("zz"), None);
        assert_eq!(Command::parse("7"), None);
        assert_eq!(Command::parse("done!"), None);
        assert_eq!(Command::parse("alll"), None);
    }

    #[test]
    fn test_command_parser_directly() {
        let res = command.parse("x").unwrap();
        assert_eq!(res, Command::Reroll('X'))
    }

    #[test]
    fn test_count() {
        assert_eq!(parse_count("4", "dice").unwrap(), 4);
        assert_eq!(parse_count("  12\n", "dice").unwrap(), 12);
        assert_eq!(parse_count("007", "dice").unwrap(), 7);
        assert_eq!(parse_count("+3", "dice").unwrap(), 3);
    }

    #[test]
    fn test_count_leading_zeros() {
        assert_eq!(parse_count("06", "number of sides").ok(), Some(6));
        assert_eq!(parse_count(" 0010 ", "number of dice").ok(), Some(10));
        assert!(matches!(
            parse_count("-007", "number of dice"),
            Err(Error::BelowMinimum { value: -7, .. })
        ));
        assert!(matches!(
            parse_count("00", "number of sides"),
            Err(Error::BelowMinimum { value: 0, .. })
        ));
    }

    #[test]
    fn test_count_sign_without_digits() {
        assert!(matches!(parse_count("+", "dice"), Err(Error::NotANumber(_))));
        assert!(matches!(parse_count("--3", "dice"), Err(Error::NotANumber(_))));
    }

    #[test]
    fn test_count_overflowing_i64() {
        assert!(matches!(
            parse_count("99999999999999999999", "dice"),
            Err(Error::NotANumber(_))
        ));
    }

    #[test]
    fn test_count_not_a_number() {
        assert!(matches!(parse_count("six", "sides"), Err(Error::NotANumber(s)) if s == "six"));
        assert!(matches!(parse_count("", "sides"), Err(Error::NotANumber(_))));
        assert!(matches!(parse_count("4.5", "sides"), Err(Error::NotANumber(_))));
        assert!(matches!(parse_count("4 5", "sides"), Err(Error::NotANumber(_))));
    }

    #[test]
    fn test_count_below_minimum() {
        assert!(matches!(
            parse_count("0", "sides"),
            Err(Error::BelowMinimum { what: "sides", value: 0 })
        ));
        assert!(matches!(
            parse_count("-2", "dice"),
            Err(Error::BelowMinimum { what: "dice", value: -2 })
        ));
    }

    #[test]
    fn test_count_too_large() {
        assert!(matches!(
            parse_count("5000000000", "sides"),
            Err(Error::TooLarge { value: 5_000_000_000, .. })
        ));
    }

    #[test]
    fn test_bad_gambler_answer() {
        assert!(parse_bad_gambler("y"));
        assert!(parse_bad_gambler(" Y\n"));
        assert!(parse_bad_gambler("yes"));
        assert!(!parse_bad_gambler("n"));
        assert!(!parse_bad_gambler(""));
        assert!(!parse_bad_gambler("yep"));
    }
}
