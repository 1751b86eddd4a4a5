//! # tilehash-types
//!
//! Core coordinate types shared by the tilehash encoder and its peers.
//!
//! Coordinates are serializable with Serde and convert to and from the `geo`
//! crate's `Point` (x = longitude, y = latitude).
//!
//! ## Examples
//!
//! ```rust
//! use tilehash_types::coordinate::Coordinate;
//! use geo::Point;
//!
//! let jfk = Coordinate::new(40.641026, -73.777903);
//! let point: Point<f64> = jfk.into();
//! assert_eq!(point.x(), -73.777903);
//! assert_eq!(point.y(), 40.641026);
//! ```

pub mod coordinate;

pub use coordinate::Coordinate;
