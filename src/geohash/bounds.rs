//! Recover the rectangle a geohash stands for.

use geo::{Rect, coord};
use tilehash_types::Coordinate;

use super::base32::from_base32;
use super::bits::{Bisection, LAT_BOUNDS, LNG_BOUNDS, check_bits};
use crate::error::Result;

/// Bounding rectangle of a `bits`-wide geohash (x = longitude, y = latitude).
///
/// Replays the bisection decisions stored in the hash, most significant bit
/// first. The lower edges are inclusive: encoding a point on the west or
/// south edge reproduces `geohash`.
///
/// # Errors
///
/// Returns [`crate::TileHashError::InvalidArgument`] if `bits` exceeds 64.
///
/// # Examples
///
/// ```rust
/// use tilehash::geohash::tile_bounds;
///
/// // One bit: the eastern hemisphere
/// let east = tile_bounds(1, 1)?;
/// assert_eq!(east.min().x, 0.0);
/// assert_eq!(east.max().x, 180.0);
/// assert_eq!(east.min().y, -90.0);
/// assert_eq!(east.max().y, 90.0);
/// # Ok::<(), tilehash::TileHashError>(())
/// ```
pub fn tile_bounds(geohash: u64, bits: u8) -> Result<Rect<f64>> {
    check_bits(bits)?;

    let mut lat = Bisection::new(LAT_BOUNDS);
    let mut lng = Bisection::new(LNG_BOUNDS);

    for i in 0..bits {
        let upper = (geohash >> (bits - 1 - i)) & 1 == 1;
        if i % 2 == 0 {
            lng.take(upper);
        } else {
            lat.take(upper);
        }
    }

    Ok(Rect::new(
        coord! { x: lng.min, y: lat.min },
        coord! { x: lng.max, y: lat.max },
    ))
}

/// Center point of a `bits`-wide geohash tile.
pub fn tile_center(geohash: u64, bits: u8) -> Result<Coordinate> {
    let center = tile_bounds(geohash, bits)?.center();
    Ok(Coordinate::new(center.y, center.x))
}

/// Bounding rectangle of a text geohash.
///
/// ```rust
/// use tilehash::geohash::decode_text;
/// use geo::{Contains, Point};
///
/// let tile = decode_text("dr5x1nkx4")?;
/// assert!(tile.contains(&Point::new(-73.777903, 40.641026)));
/// # Ok::<(), tilehash::TileHashError>(())
/// ```
pub fn decode_text(text: &str) -> Result<Rect<f64>> {
    let (geohash, bits) = from_base32(text)?;
    tile_bounds(geohash, bits)
}
