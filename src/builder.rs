//! Builder for [`Geohasher`] configuration.

use crate::config::Config;
use crate::error::{Result, TileHashError};
use crate::geohasher::Geohasher;
use crate::spatial::DistanceMetric;
use std::path::Path;

/// Builder for a [`Geohasher`].
#[derive(Debug, Clone, Default)]
pub struct GeohasherBuilder {
    config: Config,
}

impl GeohasherBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a JSON (or, with the `toml` feature, TOML) file.
    pub fn config_path<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.config = Config::from_path(path)?;
        Ok(self)
    }

    /// Set the text geohash length (1-12).
    pub fn geohash_length(mut self, length: u8) -> Self {
        self.config.geohash_length = length;
        self
    }

    /// Reject out-of-range coordinates before encoding.
    pub fn validate_coordinates(mut self, enabled: bool) -> Self {
        self.config.validate_coordinates = enabled;
        self
    }

    /// Set the metric used for distances.
    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.config.distance_metric = metric;
        self
    }

    /// Validate the configuration and build the geohasher.
    pub fn build(self) -> Result<Geohasher> {
        self.config.validate().map_err(TileHashError::Config)?;
        log::debug!("Building geohasher with {:?}", self.config);
        Ok(Geohasher::from_config(self.config))
    }
}
