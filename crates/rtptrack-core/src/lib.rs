//! Arrival classification for 16-bit wrapping transport sequence numbers.
//!
//! Real-time transport streams identify packets with a sequence number that
//! wraps modulo 2^16. [`Tracker`] consumes these numbers one arrival at a
//! time and classifies each into a three-level taxonomy (position, category,
//! sub-category) while maintaining a bounded ordered set of recently
//! observed numbers that represents the acceptable window around the highest
//! observed sequence.

pub mod config;
pub mod constants;
pub mod error;
pub mod seq;
pub mod set;
pub mod taxonomy;
pub mod tracker;

pub use config::{TrackerConfig, TrackerConfigBuilder};
pub use error::ConfigError;
pub use seq::{seq_dist, seq_less, Seq};
pub use set::SeqSet;
pub use taxonomy::{Category, Position, SubCategory, Taxonomy};
pub use tracker::Tracker;
