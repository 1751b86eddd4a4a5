use geo::Point;
use serde::{Deserialize, Serialize};

/// Valid latitude range in degrees.
pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees.
pub const LNG_RANGE: (f64, f64) = (-180.0, 180.0);

/// A geographic coordinate (latitude, longitude) in degrees.
///
/// Coordinates are plain values: the type does not validate its inputs, so an
/// out-of-domain value can be represented. Use [`Coordinate::is_in_domain`]
/// or the validation helpers of the encoder crate before relying on range
/// correctness.
///
/// # Examples
///
/// ```
/// use tilehash_types::coordinate::Coordinate;
///
/// let denver_airport = Coordinate::new(39.855242, -104.672130);
/// assert_eq!(denver_airport.lat(), 39.855242);
/// assert!(denver_airport.is_in_domain());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, nominally in [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, nominally in [-180, 180]
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude (note the order).
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Get the latitude.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude.
    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// True when both components are finite and inside their valid ranges.
    pub fn is_in_domain(&self) -> bool {
        self.is_finite()
            && (LAT_RANGE.0..=LAT_RANGE.1).contains(&self.lat)
            && (LNG_RANGE.0..=LNG_RANGE.1).contains(&self.lng)
    }

    /// Convert to a `geo::Point` with x = longitude, y = latitude.
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        coord.to_point()
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Interprets the tuple as `(lat, lng)`.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
