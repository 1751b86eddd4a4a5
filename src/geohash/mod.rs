//! Geohash encoding and neighbor-tile arithmetic.
//!
//! A geohash is built by repeatedly bisecting the longitude and latitude
//! ranges and recording one bit per decision. Even-indexed decisions (counted
//! from the most significant bit) refine longitude, odd-indexed ones refine
//! latitude. The resulting integer is exposed directly ([`encode_bits`]) or as
//! base-32 text ([`encode_text`]).
//!
//! Neighbors are computed on the integer form by incrementing or decrementing
//! one interleaved bit channel at a time, so no coordinates are re-derived.
//!
//! ```rust
//! use tilehash::geohash::{encode_text, neighborhood_text};
//!
//! let hash = encode_text(39.855242, -104.672130, 9)?;
//! assert_eq!(hash, "9xjddpkjd");
//!
//! let tiles = neighborhood_text(39.855242, -104.672130, 9)?;
//! assert_eq!(tiles[0], hash);
//! # Ok::<(), tilehash::TileHashError>(())
//! ```

pub mod base32;
pub mod bits;
pub mod bounds;
mod channel;
pub mod neighbors;

pub use base32::{
    ALPHABET, MAX_TEXT_LENGTH, encode_text, from_base32, to_base32, to_base32_batch,
};
pub use bits::{MAX_BITS, encode_bits};
pub use bounds::{decode_text, tile_bounds, tile_center};
pub use neighbors::{Direction, neighbor, neighborhood_bits, neighborhood_text};
