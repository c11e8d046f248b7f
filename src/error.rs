use thiserror::Error;

/// Everything that can go wrong outside of the rolling and classifying core.
#[derive(Debug, Error)]
pub enum Error {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("{what} must be at least 1, got {value}")]
    BelowMinimum { what: &'static str, value: i64 },

    #[error("{what} is too large, got {value}")]
    TooLarge { what: &'static str, value: i64 },

    #[error("can't roll more than {max} dice, got {value}")]
    TooManyDice { max: u32, value: i64 },

    #[error("die '{0}' appears more than once")]
    DuplicateLabel(char),

    #[error("no dice found with label '{0}'")]
    NoMatchingDie(char),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
