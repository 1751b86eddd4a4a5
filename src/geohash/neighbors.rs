//! Neighbor-tile arithmetic on integer geohashes.
//!
//! The eight tiles around a geohash are found without decoding it: a move
//! north or south is a +1/-1 on the latitude channel, a move east or west a
//! +1/-1 on the longitude channel, and diagonals compose one move of each.
//!
//! The grid is treated as a torus. North of the top row is the bottom row
//! and east of the rightmost column is the leftmost column; poles and the
//! antimeridian get no special handling.

use serde::{Deserialize, Serialize};

use super::base32::{check_length, to_base32_batch};
use super::bits::{MAX_BITS, encode_bits};
use super::channel::{InterleavedChannel, width_mask};
use crate::error::Result;

/// Position of a tile relative to the center of a neighborhood.
///
/// [`Direction::ALL`] lists the directions in the order used by
/// [`neighborhood_bits`] and [`neighborhood_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Center,
    North,
    South,
    East,
    West,
    NorthEast,
    SouthEast,
    NorthWest,
    SouthWest,
}

impl Direction {
    /// All directions in neighborhood order.
    pub const ALL: [Direction; 9] = [
        Direction::Center,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::SouthWest,
    ];

    /// Tile offset as `(rows north, columns east)`.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Center => (0, 0),
            Direction::North => (1, 0),
            Direction::South => (-1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (1, 1),
            Direction::SouthEast => (-1, 1),
            Direction::NorthWest => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }

    /// The direction pointing back.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Center => Direction::Center,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    /// Index of this direction in a neighborhood array.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Channel layout for one geohash width.
///
/// Odd widths are rounded up to the next even width by appending one padding
/// slot below the least significant bit, so bit index 0 stays a longitude
/// slot. The padding slot is excluded from the latitude channel and stripped
/// again on the way out.
#[derive(Debug, Clone, Copy)]
struct TileGrid {
    bits: u8,
    padding: u8,
    lat: InterleavedChannel,
    lng: InterleavedChannel,
}

impl TileGrid {
    fn new(bits: u8) -> Self {
        let bits = if bits > MAX_BITS {
            log::warn!(
                "Clamping neighbor width of {} bits to {} bits",
                bits,
                MAX_BITS
            );
            MAX_BITS
        } else {
            bits
        };

        let padding = bits % 2;
        let width = bits + padding;

        Self {
            bits,
            padding,
            lat: InterleavedChannel::latitude(width).without(width_mask(padding)),
            lng: InterleavedChannel::longitude(width),
        }
    }

    #[inline]
    fn pad(&self, geohash: u64) -> u64 {
        (geohash & width_mask(self.bits)) << self.padding
    }

    #[inline]
    fn unpad(&self, hash: u64) -> u64 {
        hash >> self.padding
    }

    fn step(&self, hash: u64, direction: Direction) -> u64 {
        let (north, east) = direction.offset();

        let hash = match north {
            1 => self.lat.increment(hash),
            -1 => self.lat.decrement(hash),
            _ => hash,
        };

        match east {
            1 => self.lng.increment(hash),
            -1 => self.lng.decrement(hash),
            _ => hash,
        }
    }
}

/// Move one tile from `geohash` in `direction`.
///
/// `bits` is the width of `geohash`; bits above it are ignored. Widths above
/// 64 are clamped to 64.
///
/// # Examples
///
/// ```rust
/// use tilehash::geohash::{Direction, neighbor};
///
/// // 4-bit hash 0b0011: one tile north is 0b0110
/// assert_eq!(neighbor(0x3, 4, Direction::North), 0x6);
/// assert_eq!(neighbor(0x6, 4, Direction::South), 0x3);
/// ```
pub fn neighbor(geohash: u64, bits: u8, direction: Direction) -> u64 {
    let grid = TileGrid::new(bits);
    grid.unpad(grid.step(grid.pad(geohash), direction))
}

/// Compute a geohash and its eight surrounding tiles.
///
/// The result is ordered as [`Direction::ALL`]: self, north, south, east,
/// west, northeast, southeast, northwest, southwest. With `bits = 0` every
/// move is a no-op and all nine entries are zero.
///
/// # Examples
///
/// ```rust
/// use tilehash::geohash::neighborhood_bits;
///
/// let tiles = neighborhood_bits(0x3, 4);
/// assert_eq!(tiles, [0x3, 0x6, 0x2, 0x9, 0x1, 0xC, 0x8, 0x4, 0x0]);
/// ```
pub fn neighborhood_bits(geohash: u64, bits: u8) -> [u64; 9] {
    let grid = TileGrid::new(bits);
    let center = grid.pad(geohash);
    Direction::ALL.map(|direction| grid.unpad(grid.step(center, direction)))
}

/// Encode a point and return the text geohashes of its tile and the eight
/// surrounding tiles, in [`Direction::ALL`] order.
///
/// # Errors
///
/// Returns [`crate::TileHashError::InvalidArgument`] if `length` is not in
/// `1..=12`.
///
/// # Examples
///
/// ```rust
/// use tilehash::geohash::neighborhood_text;
///
/// let tiles = neighborhood_text(0.0, 0.0, 5)?;
/// assert_eq!(tiles[0], "s0000");
/// assert_eq!(tiles[1], "s0002");
/// assert_eq!(tiles[8], "7zzzz");
/// # Ok::<(), tilehash::TileHashError>(())
/// ```
pub fn neighborhood_text(lat: f64, lng: f64, length: u8) -> Result<[String; 9]> {
    check_length(length)?;
    let bits = length * 5;
    let hash = encode_bits(lat, lng, bits)?;
    Ok(to_base32_batch(&neighborhood_bits(hash, bits), length))
}
