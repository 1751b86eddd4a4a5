//! Serializable configuration for [`crate::Geohasher`].

use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TileHashError};
use crate::geohash::MAX_TEXT_LENGTH;
use crate::spatial::DistanceMetric;

/// Geohasher configuration
///
/// Loadable from JSON, or TOML with the `toml` feature.
///
/// # Example
///
/// ```rust
/// use tilehash::{Config, DistanceMetric};
///
/// let config = Config::default();
/// assert_eq!(config.geohash_length, 9);
///
/// let json = r#"{
///     "geohash_length": 6,
///     "validate_coordinates": true,
///     "distance_metric": "haversine"
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.distance_metric, DistanceMetric::Haversine);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Text geohash length in symbols (1-12, default: 9)
    #[serde(default = "Config::default_geohash_length")]
    pub geohash_length: u8,

    /// Reject non-finite or out-of-range coordinates before encoding.
    /// The encoder itself bisects any value deterministically.
    #[serde(default)]
    pub validate_coordinates: bool,

    /// Metric used by `Geohasher::distance_km`
    #[serde(default)]
    pub distance_metric: DistanceMetric,
}

impl Config {
    const fn default_geohash_length() -> u8 {
        9
    }

    pub fn with_geohash_length(mut self, length: u8) -> Self {
        self.geohash_length = length;
        self
    }

    pub fn with_coordinate_validation(mut self, enabled: bool) -> Self {
        self.validate_coordinates = enabled;
        self
    }

    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(1..=MAX_TEXT_LENGTH).contains(&self.geohash_length) {
            return Err(format!(
                "Geohash length must be between 1 and {}, got {}",
                MAX_TEXT_LENGTH, self.geohash_length
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load configuration from a file, choosing the format by extension.
    ///
    /// `.json` is always supported; `.toml` requires the `toml` feature.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                Self::from_json(&contents).map_err(|e| TileHashError::Config(e.to_string()))?
            }
            #[cfg(feature = "toml")]
            Some("toml") => {
                Self::from_toml(&contents).map_err(|e| TileHashError::Config(e.to_string()))?
            }
            other => {
                return Err(TileHashError::Config(format!(
                    "Unsupported config file extension: {:?}",
                    other
                )));
            }
        };

        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geohash_length: Self::default_geohash_length(),
            validate_coordinates: false,
            distance_metric: DistanceMetric::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.geohash_length, 9);
        assert!(!config.validate_coordinates);
        assert_eq!(config.distance_metric, DistanceMetric::Approximate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_invalid_length() {
        assert!(Config::default().with_geohash_length(0).validate().is_err());
        assert!(Config::default().with_geohash_length(13).validate().is_err());
        assert!(Config::from_json(r#"{"geohash_length": 15}"#).is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default()
            .with_geohash_length(12)
            .with_coordinate_validation(true)
            .with_distance_metric(DistanceMetric::Haversine);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"haversine\""));
        let deserialized = Config::from_json(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_toml() {
        let config = Config::default().with_geohash_length(7);
        let toml_str = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml_str).unwrap(), config);
        assert!(Config::from_toml("geohash_length = 0").is_err());
    }

    #[test]
    fn test_config_from_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"geohash_length": 5, "validate_coordinates": true}}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.geohash_length, 5);
        assert!(config.validate_coordinates);
    }

    #[test]
    fn test_config_from_path_errors() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(file, "geohash_length: 5").unwrap();
        assert!(matches!(
            Config::from_path(file.path()),
            Err(TileHashError::Config(_))
        ));

        let missing = Config::from_path("/definitely/not/here/config.json");
        assert!(matches!(missing, Err(TileHashError::Io(_))));
    }
}
