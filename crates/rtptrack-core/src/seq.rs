//! Modular sequence arithmetic.
//!
//! Sequence numbers live on a cycle of size 2^16, so "older" and "newer" are
//! only meaningful for pairs less than half the cycle apart: a value that is
//! far ahead is indistinguishable from one that is slightly behind. The
//! comparison here follows the classic treatment in
//! <https://gafferongames.com/post/reliability_ordering_and_congestion_avoidance_over_udp/>,
//! extended with a fixed tie-break for diametric pairs so that the ordering
//! is asymmetric on every distinct pair.

use core::cmp::Ordering;
use core::fmt;

use crate::constants::{SEQ_HALF_SPAN, SEQ_MODULUS};

/// Returns true iff `b` is the more recent of the two values on the 2^16
/// cycle.
///
/// For pairs closer together than half the cycle this is ordinary recency
/// with wrap handling. Pairs exactly half the cycle apart carry no direction
/// information; the numerically smaller value is deemed older so that for
/// every `a != b` exactly one of `seq_less(a, b)` and `seq_less(b, a)` holds.
/// `seq_less(x, x)` is false for all `x`.
pub fn seq_less(a: u16, b: u16) -> bool {
    if a < b {
        b - a <= SEQ_HALF_SPAN
    } else {
        a - b > SEQ_HALF_SPAN
    }
}

/// Mask-arithmetic formulation of [`seq_less`].
///
/// Agrees with [`seq_less`] on all inputs; kept because the comparison sits
/// on the hot path and the two formulations optimize differently. The
/// benchmarks compare them.
pub fn seq_less_masked(a: u16, b: u16) -> bool {
    let d = (a as u32 + SEQ_HALF_SPAN as u32).wrapping_sub(b as u32) & (SEQ_MODULUS - 1);
    (d != 0 && d < SEQ_HALF_SPAN as u32) || (d == 0 && a < SEQ_HALF_SPAN)
}

/// Minimum circular distance between two sequence numbers.
///
/// The smaller of the clockwise and counter-clockwise distances on the
/// cycle. Symmetric, zero only for equal inputs, bounded by 2^15.
pub fn seq_dist(a: u16, b: u16) -> u16 {
    let abs = (a as i32 - b as i32).unsigned_abs();
    if abs > SEQ_HALF_SPAN as u32 {
        (SEQ_MODULUS - abs) as u16
    } else {
        abs as u16
    }
}

/// A 16-bit sequence number ordered by recency on the wrap-around cycle.
///
/// `Ord` delegates to [`seq_less`]. Modular recency is not transitive over
/// the whole domain; it is a total order only while all compared values span
/// less than half the cycle. The tracker's window invariant keeps every
/// co-resident key within that span, which is what makes storing `Seq` in a
/// [`std::collections::BTreeSet`] sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seq(u16);

impl Seq {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Circular distance to `other`.
    pub fn distance(self, other: Seq) -> u16 {
        seq_dist(self.0, other.0)
    }
}

impl From<u16> for Seq {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Seq> for u16 {
    fn from(seq: Seq) -> Self {
        seq.0
    }
}

impl PartialOrd for Seq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Seq {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0 == other.0 {
            Ordering::Equal
        } else if seq_less(self.0, other.0) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
