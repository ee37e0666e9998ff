use std::fmt;

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Width of the identifier space in bits. The finger table has one entry
/// per bit. Changing this means changing [`RingId::of`] to produce ids of
/// the matching width; the two are swapped together.
pub const RING_BITS: usize = 64;

/// A coordinate on the modulo-2^64 identifier circle.
///
/// Ids are derived from strings with SHA-1 and truncated to the digest's
/// first 8 big-endian bytes. Collisions between distinct strings are
/// possible in principle and ignored by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RingId(pub u64);

impl RingId {
    /// Hash an arbitrary string onto the ring. Used identically for node
    /// addresses and data keys.
    pub fn of(value: &str) -> Self {
        let digest = Sha1::digest(value.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        Self(u64::from_be_bytes(prefix))
    }

    /// Start of finger interval `i`: `self + 2^i (mod 2^64)`.
    pub fn finger_start(self, i: usize) -> Self {
        debug_assert!(i < RING_BITS);
        Self(self.0.wrapping_add(1u64 << i))
    }

    /// True if `self` lies in the half-open interval `(from, to]` walking
    /// clockwise. With `from == to` the interval spans the entire ring,
    /// so every id qualifies; this is the single-node ownership case.
    pub fn in_open_closed(self, from: RingId, to: RingId) -> bool {
        if from == to {
            true
        } else if from < to {
            from < self && self <= to
        } else {
            // Interval wraps past 2^64.
            self > from || self <= to
        }
    }

    /// True if `self` lies strictly between `from` and `to` clockwise.
    /// With `from == to` the interval is the whole ring minus that point.
    pub fn in_open_open(self, from: RingId, to: RingId) -> bool {
        if from == to {
            self != from
        } else if from < to {
            from < self && self < to
        } else {
            self > from || self < to
        }
    }
}

impl fmt::Display for RingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
