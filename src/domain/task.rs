//! Task domain model
//!
//! Tasks are the units of work the store tracks. Text fields are bounded:
//! overlong input is silently truncated at construction time rather than
//! rejected, so a task always fits its configured limits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::Date;

/// Task urgency on a 1-5 scale, 1 being the most urgent
///
/// Construction is validating; a `Priority` in hand is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a priority, returning `None` when outside 1-5
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Returns the raw 1-5 value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Priority::new(value).ok_or_else(|| format!("priority must be 1-5, got {}", value))
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Truncates text to at most `max_chars` characters
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside
/// a multi-byte sequence.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// A single unit of work
///
/// Created by [`TaskStore::add`](crate::domain::TaskStore::add); the only
/// mutation it ever sees afterwards is the `completed` flag flipping to
/// true when it moves to the completed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Short title, truncated to the configured maximum
    pub title: String,

    /// Longer description, truncated to the configured maximum
    pub description: String,

    /// Who the task is assigned to, truncated to the configured maximum
    pub assignee: String,

    /// When the task is due
    pub due_date: Date,

    /// Urgency, 1 (highest) to 5 (lowest)
    pub priority: Priority,

    /// Whether the task has been completed
    pub completed: bool,

    /// When the task was created; never mutated
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Returns a one-word status label for display
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}
