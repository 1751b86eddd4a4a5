//! A configured front end over the geohash functions.

use tilehash_types::Coordinate;

use crate::builder::GeohasherBuilder;
use crate::config::Config;
use crate::error::Result;
use crate::geohash;
use crate::spatial;
use crate::validation::validate_coordinate;

/// Applies a [`Config`] to the free functions in [`crate::geohash`].
///
/// A `Geohasher` is immutable once built and can be shared across threads.
///
/// ```rust
/// use tilehash::{Coordinate, Geohasher};
///
/// let hasher = Geohasher::builder().geohash_length(5).build()?;
/// let jfk = Coordinate::new(40.641026, -73.777903);
/// assert_eq!(hasher.encode(&jfk)?, "dr5x1");
/// # Ok::<(), tilehash::TileHashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Geohasher {
    config: Config,
}

impl Geohasher {
    pub(crate) fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Start building a geohasher from the default configuration.
    pub fn builder() -> GeohasherBuilder {
        GeohasherBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Text length applied by [`Geohasher::encode`] and
    /// [`Geohasher::neighborhood`].
    pub fn geohash_length(&self) -> u8 {
        self.config.geohash_length
    }

    /// Bit width matching the configured text length.
    pub fn bits(&self) -> u8 {
        self.config.geohash_length * 5
    }

    fn check(&self, coord: &Coordinate) -> Result<()> {
        if self.config.validate_coordinates {
            validate_coordinate(coord).inspect_err(|e| {
                log::warn!("Rejecting coordinate {:?}: {}", coord, e);
            })?;
        }
        Ok(())
    }

    /// Encode a coordinate as a text geohash of the configured length.
    pub fn encode(&self, coord: &Coordinate) -> Result<String> {
        self.check(coord)?;
        log::trace!("encode {:?} at length {}", coord, self.config.geohash_length);
        geohash::encode_text(coord.lat, coord.lng, self.config.geohash_length)
    }

    /// Encode a coordinate as an integer geohash of the configured width.
    pub fn encode_bits(&self, coord: &Coordinate) -> Result<u64> {
        self.check(coord)?;
        geohash::encode_bits(coord.lat, coord.lng, self.bits())
    }

    /// Text geohashes of the coordinate's tile and its eight neighbors.
    pub fn neighborhood(&self, coord: &Coordinate) -> Result<[String; 9]> {
        self.check(coord)?;
        log::trace!(
            "neighborhood {:?} at length {}",
            coord,
            self.config.geohash_length
        );
        geohash::neighborhood_text(coord.lat, coord.lng, self.config.geohash_length)
    }

    /// Distance in kilometers using the configured metric.
    pub fn distance_km(&self, a: &Coordinate, b: &Coordinate) -> f64 {
        spatial::distance_km(a, b, self.config.distance_metric)
    }
}
