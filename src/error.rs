use std::{error::Error, fmt};

/// Indicates whether an error can be recovered from, and parsing can continue.
/// A failed match is always recoverable (an alternative can be tried, or repetition can stop),
/// whereas a badly formed grammar is a programming error caught when the parser is built.
pub trait Recoverable {
    fn is_recoverable(&self) -> bool;
}

/// The single parse failure signal. Carries no position or expectation detail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoMatch;

impl Recoverable for NoMatch {
    fn is_recoverable(&self) -> bool {
        true
    }
}

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NoMatch")
    }
}

impl Error for NoMatch {}

/// Rejected grammar construction, reported by the fallible combinator constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarError {
    EmptySequence,
    EmptyAlternation,
}

impl Recoverable for GrammarError {
    fn is_recoverable(&self) -> bool {
        false
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptySequence => write!(f, "GrammarError: 'and' requires at least one parser")?,
            Self::EmptyAlternation => {
                write!(f, "GrammarError: 'or' requires at least one candidate")?
            }
        };
        Ok(())
    }
}

impl Error for GrammarError {}
