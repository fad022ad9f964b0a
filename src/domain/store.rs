//! In-memory task store
//!
//! Holds two bounded lists: `pending`, kept sorted ascending by priority
//! with stable ties, and `completed`, kept in completion order. All
//! validation happens before any mutation, so a rejected call leaves the
//! store exactly as it was.

use chrono::Utc;
use thiserror::Error;

use super::date::Date;
use super::limits::Limits;
use super::task::{truncate_chars, Priority, Task};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Pending list is at capacity ({0})")]
    PendingFull(usize),

    #[error("Completed list is at capacity ({0})")]
    CompletedFull(usize),

    #[error("Priority must be between 1 and 5, got {0}")]
    InvalidPriority(u8),

    #[error("Invalid due date: {0}")]
    InvalidDate(Date),

    #[error("No pending task at index {index} (pending count is {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// The task tracker's storage engine
///
/// Owns every task it holds. Tasks enter through [`add`](Self::add) as
/// pending and move to the completed list through
/// [`complete`](Self::complete); nothing ever moves back or is deleted.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    pending: Vec<Task>,
    completed: Vec<Task>,
    limits: Limits,
}

impl TaskStore {
    /// Creates an empty store with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given limits
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            pending: Vec::new(),
            completed: Vec::new(),
            limits,
        }
    }

    /// Returns the limits this store enforces
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Adds a new pending task
    ///
    /// Checks, in order: pending capacity, priority range, due date
    /// validity. Text fields longer than their configured maximum are
    /// truncated, not rejected. The task is inserted after all existing
    /// tasks of equal or higher urgency, so equal-priority tasks keep
    /// their insertion order.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        assignee: &str,
        due_date: Date,
        priority: u8,
    ) -> Result<(), StoreError> {
        if self.pending.len() >= self.limits.capacity {
            return Err(StoreError::PendingFull(self.limits.capacity));
        }
        let priority =
            Priority::new(priority).ok_or(StoreError::InvalidPriority(priority))?;
        if !due_date.is_valid(self.limits.min_year) {
            return Err(StoreError::InvalidDate(due_date));
        }

        let task = Task {
            title: truncate_chars(title, self.limits.max_title_len),
            description: truncate_chars(description, self.limits.max_description_len),
            assignee: truncate_chars(assignee, self.limits.max_assignee_len),
            due_date,
            priority,
            completed: false,
            created_at: Utc::now(),
        };

        // Stable insertion: only entries with strictly greater priority
        // (numerically larger, less urgent) shift right, so the new task
        // lands at the back of its priority band.
        let pos = self
            .pending
            .iter()
            .rposition(|t| t.priority <= priority)
            .map_or(0, |i| i + 1);
        self.pending.insert(pos, task);

        Ok(())
    }

    /// Completes the pending task at `index`
    ///
    /// `index` is a position in the current pending list, not a stable
    /// identifier; completing or adding shifts later positions. The task
    /// is appended to the completed list with its flag set, and the
    /// remaining pending tasks keep their relative order. Capacity of the
    /// completed list is checked before anything moves.
    pub fn complete(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.pending.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                count: self.pending.len(),
            });
        }
        if self.completed.len() >= self.limits.capacity {
            return Err(StoreError::CompletedFull(self.limits.capacity));
        }

        let mut task = self.pending.remove(index);
        task.completed = true;
        self.completed.push(task);

        Ok(())
    }

    /// Returns the highest-priority pending task, if any
    ///
    /// The reference is a view into the store; it is valid only until the
    /// next mutating call.
    pub fn peek_next(&self) -> Option<&Task> {
        self.pending.first()
    }

    /// Read-only view of the pending list, sorted ascending by priority
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Read-only view of the completed list, in completion order
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Number of pending tasks
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// True when the store holds no tasks at all
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_date() -> Date {
        Date::new(27, 10, 2024)
    }

    fn add_simple(store: &mut TaskStore, title: &str, priority: u8) {
        store
            .add(title, "desc", "someone", valid_date(), priority)
            .unwrap();
    }

    #[test]
    fn new_store_is_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.pending_count(), 0);
        assert_eq!(store.completed_count(), 0);
        assert!(store.peek_next().is_none());
    }

    #[test]
    fn add_then_peek_returns_matching_fields() {
        for priority in 1..=5 {
            let mut store = TaskStore::new();
            store
                .add("Website Update", "Update content", "John Doe", valid_date(), priority)
                .unwrap();

            let next = store.peek_next().unwrap();
            assert_eq!(next.title, "Website Update");
            assert_eq!(next.description, "Update content");
            assert_eq!(next.assignee, "John Doe");
            assert_eq!(next.due_date, valid_date());
            assert_eq!(next.priority.value(), priority);
            assert!(!next.completed);
        }
    }

    #[test]
    fn pending_stays_sorted_by_priority() {
        let mut store = TaskStore::new();
        add_simple(&mut store, "c", 3);
        add_simple(&mut store, "a", 1);
        add_simple(&mut store, "b", 2);

        let priorities: Vec<u8> =
            store.pending().iter().map(|t| t.priority.value()).collect();
        assert_eq!(priorities, vec![1, 2, 3]);
        assert_eq!(store.peek_next().unwrap().title, "a");
    }

    #[test]
    fn equal_priority_preserves_insertion_order() {
        let mut store = TaskStore::new();
        add_simple(&mut store, "first", 2);
        add_simple(&mut store, "second", 2);
        add_simple(&mut store, "third", 2);

        let titles: Vec<&str> =
            store.pending().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn new_task_goes_behind_its_priority_band() {
        let mut store = TaskStore::new();
        add_simple(&mut store, "p1", 1);
        add_simple(&mut store, "p3", 3);
        add_simple(&mut store, "p2-a", 2);
        add_simple(&mut store, "p2-b", 2);

        let titles: Vec<&str> =
            store.pending().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["p1", "p2-a", "p2-b", "p3"]);
    }

    #[test]
    fn complete_moves_task_and_shifts_rest() {
        let mut store = TaskStore::new();
        add_simple(&mut store, "a", 1);
        add_simple(&mut store, "b", 2);
        add_simple(&mut store, "c", 3);

        store.complete(0).unwrap();

        assert_eq!(store.pending_count(), 2);
        assert_eq!(store.completed_count(), 1);
        assert_eq!(store.completed()[0].title, "a");
        assert!(store.completed()[0].completed);

        let titles: Vec<&str> =
            store.pending().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "c"]);
        assert!(store.pending().iter().all(|t| !t.completed));
    }

    #[test]
    fn complete_preserves_all_other_fields() {
        let mut store = TaskStore::new();
        store
            .add("Code Review", "Review the feature", "Bob", valid_date(), 4)
            .unwrap();
        let before = store.peek_next().unwrap().clone();

        store.complete(0).unwrap();
        let after = &store.completed()[0];

        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
        assert_eq!(after.assignee, before.assignee);
        assert_eq!(after.due_date, before.due_date);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.completed);
    }

    #[test]
    fn complete_out_of_range_leaves_store_unchanged() {
        let mut store = TaskStore::new();
        add_simple(&mut store, "a", 1);
        let snapshot = store.pending().to_vec();

        let err = store.complete(1).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 1, count: 1 });
        assert_eq!(store.pending(), snapshot.as_slice());
        assert_eq!(store.completed_count(), 0);

        assert!(TaskStore::new().complete(0).is_err());
    }

    #[test]
    fn add_rejects_invalid_priority_without_mutation() {
        let mut store = TaskStore::new();
        for bad in [0, 6] {
            let err = store
                .add("t", "d", "a", valid_date(), bad)
                .unwrap_err();
            assert_eq!(err, StoreError::InvalidPriority(bad));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_invalid_date_without_mutation() {
        let mut store = TaskStore::new();

        // Feb 30 in a non-leap year, month 13, year below minimum
        for bad in [
            Date::new(30, 2, 2025),
            Date::new(1, 13, 2024),
            Date::new(1, 1, 2023),
        ] {
            let err = store.add("t", "d", "a", bad, 1).unwrap_err();
            assert_eq!(err, StoreError::InvalidDate(bad));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_when_pending_full() {
        let mut store = TaskStore::new();
        for i in 0..100 {
            add_simple(&mut store, &format!("task {}", i), 3);
        }
        assert_eq!(store.pending_count(), 100);

        let err = store
            .add("overflow", "d", "a", valid_date(), 1)
            .unwrap_err();
        assert_eq!(err, StoreError::PendingFull(100));
        assert_eq!(store.pending_count(), 100);
    }

    #[test]
    fn complete_rejects_when_completed_full() {
        let limits = Limits {
            capacity: 2,
            ..Limits::default()
        };
        let mut store = TaskStore::with_limits(limits);
        add_simple(&mut store, "a", 1);
        add_simple(&mut store, "b", 2);
        store.complete(0).unwrap();
        store.complete(0).unwrap();

        add_simple(&mut store, "c", 3);
        let err = store.complete(0).unwrap_err();
        assert_eq!(err, StoreError::CompletedFull(2));

        // Rejected before any mutation: c is still pending
        assert_eq!(store.pending_count(), 1);
        assert_eq!(store.pending()[0].title, "c");
        assert_eq!(store.completed_count(), 2);
    }

    #[test]
    fn overlong_text_fields_are_truncated() {
        let mut store = TaskStore::new();
        let long_title = "t".repeat(80);
        let long_desc = "d".repeat(300);
        let long_assignee = "a".repeat(80);

        store
            .add(&long_title, &long_desc, &long_assignee, valid_date(), 1)
            .unwrap();

        let task = store.peek_next().unwrap();
        assert_eq!(task.title.chars().count(), 49);
        assert_eq!(task.description.chars().count(), 199);
        assert_eq!(task.assignee.chars().count(), 49);
    }

    #[test]
    fn custom_limits_are_enforced() {
        let limits = Limits {
            max_title_len: 5,
            min_year: 2030,
            ..Limits::default()
        };
        let mut store = TaskStore::with_limits(limits);

        let err = store
            .add("t", "d", "a", Date::new(1, 1, 2024), 1)
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate(_)));

        store
            .add("a long title", "d", "a", Date::new(1, 1, 2030), 1)
            .unwrap();
        assert_eq!(store.peek_next().unwrap().title, "a lon");
    }

    #[test]
    fn peek_does_not_mutate() {
        let mut store = TaskStore::new();
        add_simple(&mut store, "a", 1);

        let _ = store.peek_next();
        let _ = store.peek_next();
        assert_eq!(store.pending_count(), 1);
        assert_eq!(store.completed_count(), 0);
    }
}
