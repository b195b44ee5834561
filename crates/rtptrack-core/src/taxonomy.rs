//! Per-arrival classification record.

use core::fmt;

/// Where the arrival landed relative to the current maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Unknown,
    /// First arrival ever seen (or first after a restart cleared the set).
    Init,
    /// More recent than the current maximum.
    Ahead,
    /// Older than the current maximum.
    Behind,
    /// Equal to the current maximum.
    Duplicate,
}

/// Which region of the acceptable range the arrival landed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Unknown,
    /// Discontinuity beyond window + buffer; the stream resynchronized here.
    Restart,
    /// Beyond the window but inside the buffer; tolerated, not stored.
    Buffer,
    /// Inside the window; stored.
    Window,
}

/// Fine-grained outcome within the category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubCategory {
    #[default]
    Unknown,
    /// Exactly one ahead of the previous maximum; the ideal arrival.
    Next,
    /// The key was already stored.
    Duplicate,
    /// A freshly initialized set already contained the key. Defensive;
    /// unreachable in correct operation.
    Already,
    /// Ahead of the previous maximum by more than one.
    Jump,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::Unknown => "Unknown",
            Position::Init => "Init",
            Position::Ahead => "Ahead",
            Position::Behind => "Behind",
            Position::Duplicate => "Duplicate",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Unknown => "Unknown",
            Category::Restart => "Restart",
            Category::Buffer => "Buffer",
            Category::Window => "Window",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubCategory::Unknown => "Unknown",
            SubCategory::Next => "Next",
            SubCategory::Duplicate => "Duplicate",
            SubCategory::Already => "Already",
            SubCategory::Jump => "Jump",
        };
        f.write_str(name)
    }
}

/// Classification of one arrival.
///
/// Fields not meaningful for the branch taken stay at their `Unknown` / zero
/// defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Taxonomy {
    pub position: Position,
    pub category: Category,
    pub subcategory: SubCategory,
    /// Number of stored keys after this arrival was processed.
    pub len: usize,
    /// Circular distance to the previous maximum, for window arrivals.
    pub jump: u16,
}
