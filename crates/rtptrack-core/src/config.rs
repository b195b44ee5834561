//! Tracker configuration.
//!
//! The acceptable region around the current maximum is described by four
//! radii: a window on each side in which arrivals are stored, and a buffer
//! beyond each window in which arrivals are tolerated without being stored.
//! Anything past window + buffer on either side is treated as a stream
//! restart.

use crate::constants::{DEFAULT_DEGREE, DEGREE_MAX, DEGREE_MIN, EXTENT_MAX, EXTENT_MIN};
use crate::error::ConfigError;

/// Immutable tracker configuration with derived sums cached at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    aw: u16,
    bw: u16,
    ab: u16,
    bb: u16,
    degree: u8,
    debug_level: u8,

    // Cached sums. The extent bounds keep each under 2^16.
    window: u16,
    ahead_reach: u16,
    behind_reach: u16,
}

impl TrackerConfig {
    /// Start building a configuration from the four radii.
    pub fn builder(aw: u16, bw: u16, ab: u16, bb: u16) -> TrackerConfigBuilder {
        TrackerConfigBuilder {
            aw,
            bw,
            ab,
            bb,
            degree: DEFAULT_DEGREE,
            debug_level: 0,
        }
    }

    /// Build a configuration with the default tree degree.
    pub fn new(
        aw: u16,
        bw: u16,
        ab: u16,
        bb: u16,
        debug_level: u8,
    ) -> Result<Self, ConfigError> {
        Self::builder(aw, bw, ab, bb).debug_level(debug_level).build()
    }

    /// Build a configuration with an explicit tree degree.
    pub fn with_degree(
        aw: u16,
        bw: u16,
        ab: u16,
        bb: u16,
        degree: u8,
        debug_level: u8,
    ) -> Result<Self, ConfigError> {
        Self::builder(aw, bw, ab, bb)
            .degree(degree)
            .debug_level(debug_level)
            .build()
    }

    /// Ahead-window radius.
    pub fn aw(&self) -> u16 {
        self.aw
    }

    /// Behind-window radius.
    pub fn bw(&self) -> u16 {
        self.bw
    }

    /// Ahead-buffer radius (beyond the ahead window).
    pub fn ab(&self) -> u16 {
        self.ab
    }

    /// Behind-buffer radius (beyond the behind window).
    pub fn bb(&self) -> u16 {
        self.bb
    }

    /// Container tuning parameter.
    pub fn degree(&self) -> u8 {
        self.degree
    }

    /// Verbosity for branch traces.
    pub fn debug_level(&self) -> u8 {
        self.debug_level
    }

    /// Total window span, `aw + bw`. Stored keys never span more than this.
    pub fn window(&self) -> u16 {
        self.window
    }

    /// How far ahead of the maximum an arrival may land without being a
    /// restart, `aw + ab`.
    pub fn ahead_reach(&self) -> u16 {
        self.ahead_reach
    }

    /// How far behind the maximum an arrival may land without being a
    /// restart, `bw + bb`.
    pub fn behind_reach(&self) -> u16 {
        self.behind_reach
    }
}

/// Builder for [`TrackerConfig`]; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Copy)]
pub struct TrackerConfigBuilder {
    aw: u16,
    bw: u16,
    ab: u16,
    bb: u16,
    degree: u8,
    debug_level: u8,
}

impl TrackerConfigBuilder {
    pub fn degree(mut self, degree: u8) -> Self {
        self.degree = degree;
        self
    }

    pub fn debug_level(mut self, debug_level: u8) -> Self {
        self.debug_level = debug_level;
        self
    }

    /// Validate the bounds and produce the immutable configuration.
    ///
    /// Checks run in a fixed order (aw, bw, ab, bb, degree) and stop at the
    /// first violation, each with its own [`ConfigError`] kind.
    pub fn build(self) -> Result<TrackerConfig, ConfigError> {
        let Self {
            aw,
            bw,
            ab,
            bb,
            degree,
            debug_level,
        } = self;

        if aw <= EXTENT_MIN {
            return Err(ConfigError::WindowAheadMin(aw));
        }
        if aw > EXTENT_MAX {
            return Err(ConfigError::WindowAheadMax(aw));
        }
        if bw <= EXTENT_MIN {
            return Err(ConfigError::WindowBehindMin(bw));
        }
        if bw > EXTENT_MAX {
            return Err(ConfigError::WindowBehindMax(bw));
        }
        if ab <= EXTENT_MIN {
            return Err(ConfigError::BufferAheadMin(ab));
        }
        if ab > EXTENT_MAX {
            return Err(ConfigError::BufferAheadMax(ab));
        }
        if bb <= EXTENT_MIN {
            return Err(ConfigError::BufferBehindMin(bb));
        }
        if bb > EXTENT_MAX {
            return Err(ConfigError::BufferBehindMax(bb));
        }
        if degree < DEGREE_MIN {
            return Err(ConfigError::DegreeMin(degree));
        }
        if degree > DEGREE_MAX {
            return Err(ConfigError::DegreeMax(degree));
        }

        Ok(TrackerConfig {
            aw,
            bw,
            ab,
            bb,
            degree,
            debug_level,
            window: (u32::from(aw) + u32::from(bw)) as u16,
            ahead_reach: (u32::from(aw) + u32::from(ab)) as u16,
            behind_reach: (u32::from(bw) + u32::from(bb)) as u16,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_in_range_radii() {
        let cases: &[(u16, u16, u16, u16, u16)] = &[
            // (aw, bw, ab, bb, expected window)
            (10, 10, 10, 10, 20),
            (100, 100, 100, 100, 200),
            (1500, 1500, 1500, 1500, 3000),
            (10, 20, 10, 10, 30),
            (4, 4, 4, 4, 8),
        ];
        for &(aw, bw, ab, bb, window) in cases {
            let config = TrackerConfig::new(aw, bw, ab, bb, 0)
                .unwrap_or_else(|e| panic!("({aw}, {bw}, {ab}, {bb}): {e}"));
            assert_eq!(config.window(), window, "({aw}, {bw}, {ab}, {bb})");
            assert_eq!(config.ahead_reach(), aw + ab);
            assert_eq!(config.behind_reach(), bw + bb);
            assert_eq!(config.degree(), DEFAULT_DEGREE);
        }
    }

    #[test]
    fn rejects_each_bound_with_its_own_error() {
        let cases: &[(u16, u16, u16, u16, u8, ConfigError)] = &[
            (3, 10, 10, 10, 3, ConfigError::WindowAheadMin(3)),
            (1501, 10, 10, 10, 3, ConfigError::WindowAheadMax(1501)),
            (10, 3, 10, 10, 3, ConfigError::WindowBehindMin(3)),
            (10, 1501, 10, 10, 3, ConfigError::WindowBehindMax(1501)),
            (10, 10, 3, 10, 3, ConfigError::BufferAheadMin(3)),
            (10, 10, 1501, 10, 3, ConfigError::BufferAheadMax(1501)),
            (10, 10, 10, 3, 3, ConfigError::BufferBehindMin(3)),
            (10, 10, 10, 1501, 3, ConfigError::BufferBehindMax(1501)),
            (10, 10, 10, 10, 1, ConfigError::DegreeMin(1)),
            (10, 10, 10, 10, 11, ConfigError::DegreeMax(11)),
        ];
        for &(aw, bw, ab, bb, degree, want) in cases {
            let got = TrackerConfig::with_degree(aw, bw, ab, bb, degree, 0);
            assert_eq!(got, Err(want), "({aw}, {bw}, {ab}, {bb}, degree {degree})");
        }
    }

    #[test]
    fn first_failing_check_wins() {
        // Every field out of range: the aw check fires first.
        assert_eq!(
            TrackerConfig::new(0, 0, 0, 0, 0),
            Err(ConfigError::WindowAheadMin(0))
        );
        assert_eq!(
            TrackerConfig::new(1501, 1501, 1501, 1501, 0),
            Err(ConfigError::WindowAheadMax(1501))
        );
        // aw valid, everything after bw invalid: the bw check fires next.
        assert_eq!(
            TrackerConfig::new(10, 2, 2, 2, 0),
            Err(ConfigError::WindowBehindMin(2))
        );
    }

    #[test]
    fn builder_sets_degree_and_debug_level() {
        let config = TrackerConfig::builder(10, 10, 10, 10)
            .degree(5)
            .debug_level(11)
            .build()
            .unwrap();
        assert_eq!(config.degree(), 5);
        assert_eq!(config.debug_level(), 11);
    }

    #[test]
    fn degree_boundaries_are_inclusive() {
        assert!(TrackerConfig::with_degree(10, 10, 10, 10, 2, 0).is_ok());
        assert!(TrackerConfig::with_degree(10, 10, 10, 10, 10, 0).is_ok());
    }
}
