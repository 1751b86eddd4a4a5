//! Bisection encoder producing the integer form of a geohash.

use crate::error::{Result, TileHashError};

/// Largest supported geohash width in bits.
pub const MAX_BITS: u8 = 64;

pub(crate) const LAT_BOUNDS: (f64, f64) = (-90.0, 90.0);
pub(crate) const LNG_BOUNDS: (f64, f64) = (-180.0, 180.0);

/// Reject bit widths the encoder cannot represent.
pub(crate) fn check_bits(bits: u8) -> Result<()> {
    if bits > MAX_BITS {
        log::warn!("Rejecting geohash width of {} bits", bits);
        return Err(TileHashError::InvalidArgument(format!(
            "bits out of range: {} (valid range is [0, {}])",
            bits, MAX_BITS
        )));
    }
    Ok(())
}

/// A coordinate range that is halved once per encoded bit.
///
/// Bounds are always held in `f64`, whatever precision the caller's
/// coordinates came from; narrower bounds lose bits during deep bisection.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bisection {
    pub(crate) min: f64,
    pub(crate) max: f64,
}

impl Bisection {
    pub(crate) fn new((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }

    #[inline]
    pub(crate) fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Record which half `value` falls in and shrink to that half.
    #[inline]
    pub(crate) fn split(&mut self, value: f64) -> bool {
        let mid = self.midpoint();
        if value < mid {
            self.max = mid;
            false
        } else {
            self.min = mid;
            true
        }
    }

    /// Shrink to the half named by `upper` without a comparison.
    #[inline]
    pub(crate) fn take(&mut self, upper: bool) {
        let mid = self.midpoint();
        if upper {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }
}

/// Encode a (lat, lng) point as a `bits`-wide integer geohash.
///
/// Bit 0 of the bisection sequence (the most significant bit of the result)
/// refines longitude, bit 1 latitude, and so on alternately. The result has
/// exactly `bits` significant positions; leading decisions that came out as
/// zero are simply high-order zero bits.
///
/// Any finite input is bisected deterministically, including values outside
/// the nominal lat/lng ranges. Range checking belongs to the caller.
///
/// # Errors
///
/// Returns [`TileHashError::InvalidArgument`] if `bits` exceeds 64.
///
/// # Examples
///
/// ```rust
/// use tilehash::geohash::encode_bits;
///
/// assert_eq!(encode_bits(37.751223, -122.438297, 8)?, 77);
/// assert_eq!(encode_bits(37.751223, -122.438297, 32)?, 1301409192);
/// assert_eq!(encode_bits(12.0, 34.0, 0)?, 0);
/// assert!(encode_bits(0.0, 0.0, 65).is_err());
/// # Ok::<(), tilehash::TileHashError>(())
/// ```
pub fn encode_bits(lat: f64, lng: f64, bits: u8) -> Result<u64> {
    check_bits(bits)?;

    let mut lat_range = Bisection::new(LAT_BOUNDS);
    let mut lng_range = Bisection::new(LNG_BOUNDS);
    let mut hash: u64 = 0;

    for i in 0..bits {
        let upper = if i % 2 == 0 {
            lng_range.split(lng)
        } else {
            lat_range.split(lat)
        };
        // After 64 pushes the first decision sits in the top bit.
        hash = (hash << 1) | u64::from(upper);
    }

    Ok(hash)
}
