//! Fixed-precision geohash encoding with bit-channel neighbor arithmetic.
//!
//! ```rust
//! use tilehash::{encode_bits, encode_text, neighborhood_bits, neighborhood_text};
//!
//! let text = encode_text(37.777000, -122.416583, 9)?;
//! assert_eq!(text, "9q8yym4fy");
//!
//! let hash = encode_bits(37.777000, -122.416583, 45)?;
//! let tiles = neighborhood_bits(hash, 45);
//! assert_eq!(tiles[0], hash);
//!
//! let texts = neighborhood_text(37.777000, -122.416583, 9)?;
//! assert_eq!(texts[0], text);
//! # Ok::<(), tilehash::TileHashError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod geohash;
pub mod geohasher;
pub mod spatial;
pub mod validation;

pub use builder::GeohasherBuilder;
pub use config::Config;
pub use error::{ParseError, Result, TileHashError};
pub use geohasher::Geohasher;

pub use tilehash_types::Coordinate;

pub use geohash::{
    Direction, decode_text, encode_bits, encode_text, from_base32, neighbor, neighborhood_bits,
    neighborhood_text, tile_bounds, tile_center, to_base32,
};

pub use spatial::{DistanceMetric, approx_distance_km, distance_km, haversine_distance_km};

pub use validation::{parse_coordinate, validate_coordinate};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, Coordinate, Geohasher, GeohasherBuilder, Result, TileHashError};

    pub use crate::geohash::{
        Direction, encode_bits, encode_text, neighborhood_bits, neighborhood_text,
    };

    pub use crate::spatial::{DistanceMetric, approx_distance_km, haversine_distance_km};

    pub use crate::validation::parse_coordinate;
}
