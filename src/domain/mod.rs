//! Domain models for triage
//!
//! Contains the core tracking logic without any I/O concerns.

mod date;
mod limits;
mod store;
mod task;

pub use date::Date;
pub use limits::Limits;
pub use store::{StoreError, TaskStore};
pub use task::{Priority, Task};
