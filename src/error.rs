//! The [`RankRatiovizError`] `enum` definition and error messages.
//!
use thiserror::Error;

/// The broad class an error falls into.
///
/// Plot checks are test oracles: callers usually only need to know whether
/// an input could not be read ([`ErrorKind::Parse`]), did not have the
/// expected JSON shape ([`ErrorKind::Schema`]), or was well-formed but wrong
/// ([`ErrorKind::Invariant`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Schema,
    Invariant,
}

/// The [`RankRatiovizError`] defines the standard set of errors that should
/// be passed to the user.
#[derive(Debug, Error)]
pub enum RankRatiovizError {
    // IO related errors
    #[error("File reading error: {0}")]
    IOError(#[from] std::io::Error),

    // File parsing related errors
    #[error(
        "Ranks file line {line} has {found} fields, but rank column {column} was requested"
    )]
    RanksTooFewColumns {
        line: u64,
        found: usize,
        column: usize,
    },
    #[error("Ranks file line {line}: could not parse '{value}' as a rank value")]
    InvalidRankValue { line: u64, value: String },
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    // Plot structure errors
    #[error("Plot JSON is missing the key '{0}'")]
    MissingKey(String),
    #[error("Plot JSON key '{key}' should be {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("Dataset record {position} is malformed: {message}")]
    MalformedRecord { position: usize, message: String },

    // Plot content errors
    #[error("Plot '{key}' is {found}, expected \"{expected}\"")]
    UnexpectedValue {
        key: &'static str,
        expected: &'static str,
        found: String,
    },
    #[error(
        "Invalid Vega-Lite $schema '{0}': must start with \"https://vega.github.io/schema\" \
         and end with \".json\""
    )]
    InvalidSchemaUrl(String),
    #[error("Plot dataset has {found} records, but the ranks file has {expected} features")]
    RecordCountMismatch { expected: usize, found: usize },
    #[error("Plot record {position} has feature '{feature}', which is not in the ranks file")]
    UnknownFeature { position: usize, feature: String },
    #[error(
        "Plot record {position} ('{feature}') has coefs {found}, but the ranks file has {expected}"
    )]
    CoefsMismatch {
        position: usize,
        feature: String,
        expected: f64,
        found: f64,
    },
    #[error(
        "Plot record {position} ('{feature}') has coefs {found}, which is less than the \
         previous value {previous}"
    )]
    OutOfOrder {
        position: usize,
        feature: String,
        previous: f64,
        found: f64,
    },
    #[error("Plot record {position} has x = {found}, expected {expected}")]
    NonContiguousX {
        position: usize,
        expected: i64,
        found: i64,
    },

    // Command line tool related errors
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),
}

impl RankRatiovizError {
    /// Classify this error as a parse, schema, or invariant failure.
    pub fn kind(&self) -> ErrorKind {
        use RankRatiovizError::*;
        match self {
            IOError(_)
            | RanksTooFewColumns { .. }
            | InvalidRankValue { .. }
            | JsonError(_)
            | UnknownParameter(_) => ErrorKind::Parse,
            MissingKey(_) | WrongType { .. } | MalformedRecord { .. } => ErrorKind::Schema,
            UnexpectedValue { .. }
            | InvalidSchemaUrl(_)
            | RecordCountMismatch { .. }
            | UnknownFeature { .. }
            | CoefsMismatch { .. }
            | OutOfOrder { .. }
            | NonContiguousX { .. } => ErrorKind::Invariant,
        }
    }
}
