//! Triage - An in-memory priority task tracker
//!
//! Triage keeps pending work ordered by priority (1 is most urgent) with
//! stable ties, and moves finished tasks to a completion-ordered list.
//! State lives only in process memory; the CLI drives a demo sequence
//! against the store rather than persisting anything.

pub mod cli;
pub mod domain;

pub use domain::{Date, Limits, Priority, StoreError, Task, TaskStore};
