//! The arrival classifier.
//!
//! [`Tracker`] consumes sequence numbers one arrival at a time and decides,
//! for each, which region of the acceptable range it landed in. Arrivals
//! inside the window are stored; window inserts ahead of the maximum also
//! evict keys that have fallen off the back. Arrivals in the buffer beyond
//! either window are tolerated without touching the set, so an isolated
//! stray packet cannot move the window. Anything further out is a restart:
//! the set is dropped and reseeded at the new arrival.
//!
//! The tracker is single-owner, single-threaded state. Nothing here blocks,
//! suspends, or performs I/O; callers needing shared access serialize it
//! themselves.

use crate::config::TrackerConfig;
use crate::constants::TRACE_LEVEL;
use crate::error::ConfigError;
use crate::seq::{seq_dist, seq_less, Seq};
use crate::set::SeqSet;
use crate::taxonomy::{Category, Position, SubCategory, Taxonomy};

/// Classifies sequence-number arrivals against a rolling acceptance window.
#[derive(Debug)]
pub struct Tracker {
    set: SeqSet,
    config: TrackerConfig,
}

impl Tracker {
    /// Create a tracker with the default tree degree.
    pub fn new(
        aw: u16,
        bw: u16,
        ab: u16,
        bb: u16,
        debug_level: u8,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_config(TrackerConfig::new(
            aw,
            bw,
            ab,
            bb,
            debug_level,
        )?))
    }

    /// Create a tracker with an explicit tree degree.
    pub fn with_degree(
        aw: u16,
        bw: u16,
        ab: u16,
        bb: u16,
        degree: u8,
        debug_level: u8,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_config(TrackerConfig::with_degree(
            aw,
            bw,
            ab,
            bb,
            degree,
            debug_level,
        )?))
    }

    /// Create a tracker from an already-validated configuration.
    pub fn from_config(config: TrackerConfig) -> Self {
        Self {
            set: SeqSet::new(),
            config,
        }
    }

    /// Classify one arrival and update the window state.
    ///
    /// Infallible: every arrival maps to exactly one branch of the decision
    /// tree and yields a [`Taxonomy`].
    pub fn on_arrival(&mut self, seq: u16) -> Taxonomy {
        let m = match self.set.max() {
            None => return self.first_arrival(seq),
            Some(m) => m.get(),
        };

        if self.tracing() {
            tracing::trace!(seq, max = m, len = self.set.len(), "arrival");
        }

        if seq == m {
            return self.duplicate_of_max(seq);
        }

        if seq_less(seq, m) {
            self.behind(seq, m)
        } else {
            self.ahead(seq, m)
        }
    }

    /// Number of stored sequence numbers.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Most recent stored sequence number, if any. Inspection helper.
    pub fn max(&self) -> Option<u16> {
        self.set.max().map(Seq::get)
    }

    /// Oldest stored sequence number, if any. Inspection helper.
    pub fn min(&self) -> Option<u16> {
        self.set.min().map(Seq::get)
    }

    /// Total window span, `aw + bw`.
    pub fn window(&self) -> u16 {
        self.config.window()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// All stored keys newest-first. Diagnostic dump; linear in the set
    /// size.
    #[doc(hidden)]
    pub fn dump_descending(&self) -> Vec<u16> {
        self.set.descending().into_iter().map(Seq::get).collect()
    }

    fn tracing(&self) -> bool {
        self.config.debug_level() > TRACE_LEVEL
    }

    /// First arrival into an empty set seeds the window.
    fn first_arrival(&mut self, seq: u16) -> Taxonomy {
        let mut tax = Taxonomy {
            position: Position::Init,
            ..Taxonomy::default()
        };

        // A fresh set cannot contain the key; report it defensively if the
        // container claims otherwise.
        if self.set.insert(Seq::new(seq)) {
            tax.subcategory = SubCategory::Already;
        }
        tax.len = self.set.len();

        if self.tracing() {
            tracing::trace!(seq, len = tax.len, "initial arrival");
        }
        tax
    }

    /// The arrival equals the stored maximum. Nothing changes.
    fn duplicate_of_max(&self, seq: u16) -> Taxonomy {
        if self.tracing() {
            tracing::trace!(seq, len = self.set.len(), "duplicate of max");
        }
        Taxonomy {
            position: Position::Duplicate,
            len: self.set.len(),
            ..Taxonomy::default()
        }
    }

    fn ahead(&mut self, seq: u16, m: u16) -> Taxonomy {
        let tax = Taxonomy {
            position: Position::Ahead,
            ..Taxonomy::default()
        };
        let diff = seq_dist(seq, m);

        if diff > self.config.ahead_reach() {
            self.restart(seq, diff, tax)
        } else if diff > self.config.aw() {
            self.buffered(seq, diff, tax)
        } else {
            self.ahead_window(seq, m, diff, tax)
        }
    }

    fn behind(&mut self, seq: u16, m: u16) -> Taxonomy {
        let tax = Taxonomy {
            position: Position::Behind,
            ..Taxonomy::default()
        };
        let diff = seq_dist(seq, m);

        if diff > self.config.behind_reach() {
            self.restart(seq, diff, tax)
        } else if diff > self.config.bw() {
            self.buffered(seq, diff, tax)
        } else {
            self.behind_window(seq, diff, tax)
        }
    }

    /// Discontinuity beyond window + buffer: drop everything and reseed the
    /// window at the new arrival.
    fn restart(&mut self, seq: u16, diff: u16, mut tax: Taxonomy) -> Taxonomy {
        tax.category = Category::Restart;

        if self.tracing() {
            tracing::debug!(
                seq,
                diff,
                dropped = self.set.len(),
                position = %tax.position,
                "discontinuity, resynchronizing"
            );
        }

        self.set.clear();
        if self.set.insert(Seq::new(seq)) {
            tax.subcategory = SubCategory::Already;
        }
        tax.len = self.set.len();
        tax
    }

    /// Beyond the window but inside the buffer: tolerated, not stored.
    fn buffered(&self, seq: u16, diff: u16, mut tax: Taxonomy) -> Taxonomy {
        tax.category = Category::Buffer;
        tax.len = self.set.len();

        if self.tracing() {
            tracing::trace!(seq, diff, position = %tax.position, "buffered, set untouched");
        }
        tax
    }

    /// In-window arrival ahead of the maximum: store it, grade it, and slide
    /// the window forward.
    fn ahead_window(&mut self, seq: u16, m: u16, diff: u16, mut tax: Taxonomy) -> Taxonomy {
        tax.category = Category::Window;
        tax.jump = diff;

        let already = self.set.insert(Seq::new(seq));
        tax.subcategory = if already {
            SubCategory::Duplicate
        } else if diff == 1 {
            SubCategory::Next
        } else {
            SubCategory::Jump
        };

        if self.tracing() {
            tracing::trace!(
                seq,
                prev_max = m,
                diff,
                subcategory = %tax.subcategory,
                "stored ahead of max"
            );
        }

        self.evict_stale(seq);
        tax.len = self.set.len();
        tax
    }

    /// In-window arrival behind the maximum: store it. Late arrivals are not
    /// graded Next/Jump; only duplicates are distinguished.
    fn behind_window(&mut self, seq: u16, diff: u16, mut tax: Taxonomy) -> Taxonomy {
        tax.category = Category::Window;
        tax.jump = diff;

        if self.set.insert(Seq::new(seq)) {
            tax.subcategory = SubCategory::Duplicate;
        }

        if self.tracing() {
            tracing::trace!(
                seq,
                diff,
                subcategory = %tax.subcategory,
                "stored behind max"
            );
        }

        tax.len = self.set.len();
        tax
    }

    /// Delete keys that fell off the back of the window after it advanced to
    /// `seq`. Walks oldest-first and stops at the first retained key.
    fn evict_stale(&mut self, seq: u16) {
        let min = self
            .set
            .min()
            .expect("non-empty set must have a minimum")
            .get();

        let back = seq.wrapping_sub(self.config.window()).wrapping_add(1);
        if !seq_less(min, back) {
            return;
        }

        let mut stale = Vec::new();
        self.set.ascend(|k| {
            if seq_less(k.get(), back) {
                stale.push(k);
                true
            } else {
                false
            }
        });

        let evicted = stale.len();
        for k in stale {
            assert!(self.set.remove(k), "evicting key {k} that is not stored");
        }

        if self.tracing() {
            tracing::trace!(seq, back, evicted, len = self.set.len(), "window advanced");
        }
    }
}
