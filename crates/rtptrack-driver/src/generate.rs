//! Synthetic arrival generators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Endless in-order sequence starting at `start`, wrapping at 2^16.
#[derive(Debug, Clone)]
pub struct Monotonic {
    next: u16,
}

impl Monotonic {
    pub fn new(start: u16) -> Self {
        Self { next: start }
    }
}

impl Iterator for Monotonic {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let seq = self.next;
        self.next = self.next.wrapping_add(1);
        Some(seq)
    }
}

/// Randomized arrivals: an advancing base sequence disturbed by a bounded
/// jitter in either direction, the shape of a lightly reordered stream.
///
/// Seeded so a run can be replayed exactly.
#[derive(Debug)]
pub struct Jitter {
    base: u16,
    spread: u16,
    rng: StdRng,
}

impl Jitter {
    pub fn new(start: u16, spread: u16, seed: u64) -> Self {
        Self {
            base: start,
            spread: spread.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Iterator for Jitter {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let r = self.rng.gen_range(1..=self.spread);
        let seq = if self.rng.gen_bool(0.5) {
            self.base.wrapping_sub(r)
        } else {
            self.base.wrapping_add(r)
        };
        self.base = self.base.wrapping_add(1);
        Some(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rtptrack_core::seq_dist;

    #[test]
    fn monotonic_counts_up_and_wraps() {
        let seqs: Vec<u16> = Monotonic::new(65534).take(4).collect();
        assert_eq!(seqs, vec![65534, 65535, 0, 1]);
    }

    #[test]
    fn jitter_is_reproducible_per_seed() {
        let a: Vec<u16> = Jitter::new(0, 10, 42).take(50).collect();
        let b: Vec<u16> = Jitter::new(0, 10, 42).take(50).collect();
        assert_eq!(a, b);

        let c: Vec<u16> = Jitter::new(0, 10, 43).take(50).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn jitter_stays_within_spread_of_base() {
        let spread = 8u16;
        let mut gen = Jitter::new(1000, spread, 7);
        let mut base = 1000u16;
        for _ in 0..200 {
            let seq = gen.next().unwrap();
            let d = seq_dist(seq, base);
            assert!((1..=spread).contains(&d), "seq {seq} is {d} from base {base}");
            base = base.wrapping_add(1);
        }
    }

    #[test]
    fn jitter_spread_of_zero_is_clamped() {
        // Spread 0 would make the jitter range empty; it clamps to 1.
        let mut gen = Jitter::new(0, 0, 1);
        let mut base = 0u16;
        for _ in 0..20 {
            let seq = gen.next().unwrap();
            assert_eq!(seq_dist(seq, base), 1);
            base = base.wrapping_add(1);
        }
    }
}
