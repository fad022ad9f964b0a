//! Store limits configuration
//!
//! The tracker has two kinds of externally meaningful constants: the
//! bounded text field sizes and the calendar's minimum year, plus the
//! per-collection capacity. They are grouped here so the CLI can load
//! overrides from a TOML file.

use serde::{Deserialize, Serialize};

/// Bounds enforced by the task store
///
/// All fields have defaults, and `#[serde(default)]` lets a TOML file
/// override only the keys it cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum title length in characters
    pub max_title_len: usize,

    /// Maximum description length in characters
    pub max_description_len: usize,

    /// Maximum assignee length in characters
    pub max_assignee_len: usize,

    /// Earliest year accepted for due dates
    pub min_year: i32,

    /// Maximum number of tasks in each of the pending and completed lists
    pub capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_title_len: 49,
            max_description_len: 199,
            max_assignee_len: 49,
            min_year: 2024,
            capacity: 100,
        }
    }
}
