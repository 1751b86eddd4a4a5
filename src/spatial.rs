//! Distance between coordinates, in kilometers.
//!
//! These functions are peers of the geohash encoder rather than part of it:
//! nothing in [`crate::geohash`] calls them.

use geo::{Distance, Haversine};
use serde::{Deserialize, Serialize};
use tilehash_types::Coordinate;

/// Length of one degree of latitude at the equator, in kilometers.
const DEGREE_LENGTH_KM: f64 = 110.25;

/// Distance metrics supported by [`distance_km`].
///
/// - **Approximate**: equirectangular projection; fast, accurate only for
///   nearby points (same neighborhood or city)
/// - **Haversine**: great-circle distance on a spherical Earth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Approximate,
    Haversine,
}

/// Approximate distance between two coordinates in kilometers.
///
/// Takes the Euclidean distance in degrees after scaling the longitude
/// difference by the cosine of `b`'s latitude. Error grows with distance and
/// the curvature of the Earth is ignored.
///
/// # Examples
///
/// ```rust
/// use tilehash::Coordinate;
/// use tilehash::spatial::approx_distance_km;
///
/// let voodoo_doughnuts = Coordinate::new(45.522869, -122.673132);
/// let powells_books = Coordinate::new(45.523437, -122.681381);
/// let d = approx_distance_km(&voodoo_doughnuts, &powells_books);
/// assert_eq!(format!("{:.2}", d), "0.64");
/// ```
pub fn approx_distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    let x = a.lat - b.lat;
    let y = (a.lng - b.lng) * b.lat.to_radians().cos();
    DEGREE_LENGTH_KM * (x * x + y * y).sqrt()
}

/// Great-circle distance between two coordinates in kilometers.
///
/// # Examples
///
/// ```rust
/// use tilehash::Coordinate;
/// use tilehash::spatial::haversine_distance_km;
///
/// let nyc = Coordinate::new(40.7128, -74.0060);
/// let la = Coordinate::new(34.0522, -118.2437);
/// let d = haversine_distance_km(&nyc, &la);
/// assert!(d > 3_900.0 && d < 4_000.0);
/// ```
pub fn haversine_distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    Haversine.distance(a.to_point(), b.to_point()) / 1000.0
}

/// Distance between two coordinates in kilometers using `metric`.
pub fn distance_km(a: &Coordinate, b: &Coordinate, metric: DistanceMetric) -> f64 {
    match metric {
        DistanceMetric::Approximate => approx_distance_km(a, b),
        DistanceMetric::Haversine => haversine_distance_km(a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Various places in and around the Mission and Castro
    const TARA_INDIAN_CUISINE: Coordinate = Coordinate::new(37.765492, -122.431229);
    const BLACKBIRD_BAR: Coordinate = Coordinate::new(37.767487, -122.429633);
    const MAD_DOG_IN_THE_FOG: Coordinate = Coordinate::new(37.772528, -122.431030);
    const SPIN_CITY_COFFEE: Coordinate = Coordinate::new(37.749287, -122.429181);
    const CIVIC_CENTER_BART: Coordinate = Coordinate::new(37.780396, -122.414135);

    // Maximum allowable error is 200 meters
    const DELTA_KM: f64 = 0.2;

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() <= DELTA_KM,
            "expected {} +/- {}, got {}",
            expected,
            DELTA_KM,
            actual
        );
    }

    #[test]
    fn test_approx_distance() {
        assert_close(0.27, approx_distance_km(&TARA_INDIAN_CUISINE, &BLACKBIRD_BAR));
        assert_close(0.85, approx_distance_km(&TARA_INDIAN_CUISINE, &MAD_DOG_IN_THE_FOG));
        assert_close(2.4, approx_distance_km(&TARA_INDIAN_CUISINE, &CIVIC_CENTER_BART));
        assert_close(1.81, approx_distance_km(&TARA_INDIAN_CUISINE, &SPIN_CITY_COFFEE));
    }

    #[test]
    fn test_haversine_distance() {
        assert_close(0.26, haversine_distance_km(&TARA_INDIAN_CUISINE, &BLACKBIRD_BAR));
        assert_close(2.24, haversine_distance_km(&TARA_INDIAN_CUISINE, &CIVIC_CENTER_BART));

        // Half the equator
        let d = haversine_distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
        assert!((d - 20_015.1).abs() < 1.0);
    }

    #[test]
    fn test_metrics_agree_for_nearby_points() {
        for other in [BLACKBIRD_BAR, MAD_DOG_IN_THE_FOG, SPIN_CITY_COFFEE] {
            let approx = distance_km(&TARA_INDIAN_CUISINE, &other, DistanceMetric::Approximate);
            let haversine = distance_km(&TARA_INDIAN_CUISINE, &other, DistanceMetric::Haversine);
            assert!((approx - haversine).abs() < 0.05);
        }
    }

    #[test]
    fn test_metrics_diverge_for_distant_points() {
        let nyc = Coordinate::new(40.7128, -74.0060);
        let la = Coordinate::new(34.0522, -118.2437);
        let approx = approx_distance_km(&nyc, &la);
        let haversine = haversine_distance_km(&nyc, &la);
        assert!((approx - haversine).abs() > 100.0);
    }

    #[test]
    fn test_zero_distance() {
        assert_eq!(approx_distance_km(&BLACKBIRD_BAR, &BLACKBIRD_BAR), 0.0);
        assert_eq!(haversine_distance_km(&BLACKBIRD_BAR, &BLACKBIRD_BAR), 0.0);
        assert_eq!(DistanceMetric::default(), DistanceMetric::Approximate);
    }
}
