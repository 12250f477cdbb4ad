use std::io;

use crate::opt::format_names;

pub type Result<T> = std::result::Result<T, ParseError>;

/// The kind of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownOption,
    UnexpectedPositional,
    ExpectedPositional,
    ArgumentRequired,
    RequiredOption,
    OneValuePerGroup,
    IntType,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnknownOption => "unknown option",
            ErrorKind::UnexpectedPositional => "unexpected positional argument",
            ErrorKind::ExpectedPositional => "expected a positional argument",
            ErrorKind::ArgumentRequired => "option requires an argument",
            ErrorKind::RequiredOption => "option required",
            ErrorKind::OneValuePerGroup => "one argument option allowed per short option group",
            ErrorKind::IntType => "required argument of type int",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a command line was rejected. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown option: {token}")]
    UnknownOption { token: String },

    #[error("unexpected positional argument: {token}")]
    UnexpectedPositional { token: String },

    #[error("expected a positional argument: {name}")]
    ExpectedPositional { name: String },

    #[error("option requires an argument: {token}")]
    ArgumentRequired { token: String },

    #[error("option required: {}", format_names(*short, long.as_deref()))]
    RequiredOption {
        long: Option<String>,
        short: Option<char>,
    },

    #[error("one argument option allowed per short option group: {token} -{short}")]
    OneValuePerGroup { token: String, short: char },

    #[error("required argument of type int: {token}")]
    IntType { token: String },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnknownOption { .. } => ErrorKind::UnknownOption,
            ParseError::UnexpectedPositional { .. } => ErrorKind::UnexpectedPositional,
            ParseError::ExpectedPositional { .. } => ErrorKind::ExpectedPositional,
            ParseError::ArgumentRequired { .. } => ErrorKind::ArgumentRequired,
            ParseError::RequiredOption { .. } => ErrorKind::RequiredOption,
            ParseError::OneValuePerGroup { .. } => ErrorKind::OneValuePerGroup,
            ParseError::IntType { .. } => ErrorKind::IntType,
        }
    }

    /// The raw command-line token that caused the error, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            ParseError::UnknownOption { token }
            | ParseError::UnexpectedPositional { token }
            | ParseError::ArgumentRequired { token }
            | ParseError::OneValuePerGroup { token, .. }
            | ParseError::IntType { token } => Some(token.as_str()),
            ParseError::ExpectedPositional { .. } | ParseError::RequiredOption { .. } => None,
        }
    }

    pub fn long_name(&self) -> Option<&str> {
        match self {
            ParseError::ExpectedPositional { name } => Some(name.as_str()),
            ParseError::RequiredOption { long, .. } => long.as_deref(),
            _ => None,
        }
    }

    pub fn short_name(&self) -> Option<char> {
        match self {
            ParseError::RequiredOption { short, .. } => *short,
            ParseError::OneValuePerGroup { short, .. } => Some(*short),
            _ => None,
        }
    }
}

/// Write `err` followed by a newline.
pub fn write_error<W: io::Write>(err: &ParseError, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", err)
}

/// Failure to read a result out of [`Matches`](crate::Matches).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no such option: {0}")]
    NotFound(String),

    #[error("option {name} is not of kind {expected}")]
    KindMismatch { name: String, expected: &'static str },
}
