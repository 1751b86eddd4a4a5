//! Interleaved bit channels of a geohash.
//!
//! Longitude decisions occupy every other bit starting at the most
//! significant one; latitude decisions fill the slots in between. Moving one
//! tile is a +1/-1 on a single channel, with carries and borrows kept inside
//! that channel's own slots.

/// Repeating `10` pattern: the longitude slots of an even-width hash.
const LNG_PATTERN: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Repeating `01` pattern: the latitude slots of an even-width hash.
const LAT_PATTERN: u64 = 0x5555_5555_5555_5555;

/// Mask covering the low `width` bits.
#[inline]
pub(crate) fn width_mask(width: u8) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// One channel of an interleaved hash, described by the slots it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InterleavedChannel {
    mask: u64,
}

impl InterleavedChannel {
    /// Longitude channel of an even-width hash.
    pub(crate) fn longitude(width: u8) -> Self {
        debug_assert!(width % 2 == 0 && width <= 64);
        Self {
            mask: LNG_PATTERN & width_mask(width),
        }
    }

    /// Latitude channel of an even-width hash.
    pub(crate) fn latitude(width: u8) -> Self {
        debug_assert!(width % 2 == 0 && width <= 64);
        Self {
            mask: LAT_PATTERN & width_mask(width),
        }
    }

    /// Drop `slots` from the channel. Dropped slots are left untouched by
    /// moves; carries and borrows pass through them.
    pub(crate) fn without(self, slots: u64) -> Self {
        Self {
            mask: self.mask & !slots,
        }
    }

    #[cfg(test)]
    pub(crate) fn mask(&self) -> u64 {
        self.mask
    }

    /// Add one to the channel, wrapping at the channel's width.
    ///
    /// Every slot outside the channel is filled with ones so the carry from
    /// the +1 runs straight through them; re-masking then discards whatever
    /// leaked out.
    #[inline]
    pub(crate) fn increment(&self, hash: u64) -> u64 {
        let moved = (hash | !self.mask).wrapping_add(1) & self.mask;
        moved | (hash & !self.mask)
    }

    /// Subtract one from the channel, wrapping at the channel's width.
    ///
    /// Uses `x - 1 == !(!x + 1)` restricted to the channel's slots.
    #[inline]
    pub(crate) fn decrement(&self, hash: u64) -> u64 {
        self.increment(hash ^ self.mask) ^ self.mask
    }
}
