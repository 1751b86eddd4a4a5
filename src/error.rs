//! Error types for geohash encoding, coordinate parsing and configuration.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TileHashError>;

/// Errors returned by the public entry points of this crate.
///
/// Every failure is reported as a value; no operation panics on bad input.
#[derive(Debug, Error)]
pub enum TileHashError {
    /// A precision argument (bit count or text length) is out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A geohash string contains a symbol outside the base-32 alphabet.
    #[error("Invalid geohash character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// A coordinate string could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A coordinate is non-finite or outside the valid lat/lng ranges.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while parsing a `"lat,lng"` coordinate string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected \"<lat>,<lng>\", got {0:?}")]
    WrongFieldCount(String),

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0} is not a valid latitude (valid range is [-90, 90])")]
    LatitudeOutOfRange(f64),

    #[error("{0} is not a valid longitude (valid range is [-180, 180])")]
    LongitudeOutOfRange(f64),
}
