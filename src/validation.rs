//! Parsing and validation for geographic coordinates.
//!
//! The geohash encoder accepts any double and never calls into this module;
//! callers that need domain-correct hashes validate here first.

use crate::error::{ParseError, Result, TileHashError};
use tilehash_types::Coordinate;
use tilehash_types::coordinate::{LAT_RANGE, LNG_RANGE};

/// Parse a `"<lat>,<lng>"` string into a [`Coordinate`].
///
/// Whitespace around each field is ignored. Both fields must be finite
/// numbers inside their valid ranges.
///
/// # Examples
///
/// ```
/// use tilehash::validation::parse_coordinate;
///
/// let coord = parse_coordinate("50.456, -80.2468").unwrap();
/// assert_eq!(coord.lat, 50.456);
/// assert_eq!(coord.lng, -80.2468);
///
/// assert!(parse_coordinate("90.1, 0.0").is_err());
/// assert!(parse_coordinate("11.11, 22.22, 33.33").is_err());
/// ```
pub fn parse_coordinate(text: &str) -> std::result::Result<Coordinate, ParseError> {
    let mut fields = text.split(',');
    let (Some(lat), Some(lng), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ParseError::WrongFieldCount(text.to_string()));
    };

    let lat = parse_field("latitude", lat)?;
    let lng = parse_field("longitude", lng)?;

    if !(LAT_RANGE.0..=LAT_RANGE.1).contains(&lat) {
        return Err(ParseError::LatitudeOutOfRange(lat));
    }

    if !(LNG_RANGE.0..=LNG_RANGE.1).contains(&lng) {
        return Err(ParseError::LongitudeOutOfRange(lng));
    }

    Ok(Coordinate::new(lat, lng))
}

fn parse_field(field: &'static str, raw: &str) -> std::result::Result<f64, ParseError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

/// Validates a coordinate has a finite latitude in [-90, 90] and a finite
/// longitude in [-180, 180].
///
/// # Examples
///
/// ```
/// use tilehash::Coordinate;
/// use tilehash::validation::validate_coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, -74.0)).is_err());
/// ```
pub fn validate_coordinate(coord: &Coordinate) -> Result<()> {
    if !coord.lat.is_finite() {
        return Err(TileHashError::InvalidCoordinate(format!(
            "Latitude must be finite, got: {}",
            coord.lat
        )));
    }

    if !coord.lng.is_finite() {
        return Err(TileHashError::InvalidCoordinate(format!(
            "Longitude must be finite, got: {}",
            coord.lng
        )));
    }

    if !(LAT_RANGE.0..=LAT_RANGE.1).contains(&coord.lat) {
        return Err(TileHashError::InvalidCoordinate(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            coord.lat
        )));
    }

    if !(LNG_RANGE.0..=LNG_RANGE.1).contains(&coord.lng) {
        return Err(TileHashError::InvalidCoordinate(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            coord.lng
        )));
    }

    Ok(())
}

/// Validates multiple coordinates, reporting the index of the first bad one.
pub fn validate_coordinates(coords: &[Coordinate]) -> Result<()> {
    for (idx, coord) in coords.iter().enumerate() {
        validate_coordinate(coord).map_err(|e| {
            TileHashError::InvalidCoordinate(format!("Coordinate at index {}: {}", idx, e))
        })?;
    }
    Ok(())
}
