//! Demo sequence driver
//!
//! Runs a fixed walkthrough against a fresh in-memory store: seed three
//! sample tasks, show the lists, complete the most urgent task, show the
//! lists again, then peek at the next task. In JSON mode the final state
//! is emitted as one document instead of the staged narrative.

use anyhow::{Context, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::{Date, Limits, Task, TaskStore};

#[derive(Serialize)]
struct DemoReport<'a> {
    pending: &'a [Task],
    completed: &'a [Task],
    next: Option<&'a Task>,
}

pub fn run(output: &Output, limits: Limits) -> Result<()> {
    output.debug(&format!(
        "store capacity {}, min year {}",
        limits.capacity, limits.min_year
    ));

    let mut store = TaskStore::with_limits(limits);

    let today = Date::new(27, 10, 2024);
    let next_week = Date::new(3, 11, 2024);

    store
        .add(
            "Website Update",
            "Update company website content",
            "John Doe",
            today,
            1,
        )
        .context("seeding 'Website Update'")?;
    store
        .add(
            "Client Meeting",
            "Prepare presentation for client",
            "Jane Smith",
            next_week,
            2,
        )
        .context("seeding 'Client Meeting'")?;
    store
        .add(
            "Code Review",
            "Review new feature implementation",
            "Bob Johnson",
            today,
            1,
        )
        .context("seeding 'Code Review'")?;

    output.section("Initial Task List:");
    print_all(output, &store);

    store.complete(0).context("completing the head task")?;

    output.section("After completing one task:");
    print_all(output, &store);

    if let Some(next) = store.peek_next() {
        output.section("Next task to handle:");
        output.task(next);
    }

    if output.is_json() {
        output.data(&DemoReport {
            pending: store.pending(),
            completed: store.completed(),
            next: store.peek_next(),
        });
    }

    Ok(())
}

fn print_all(output: &Output, store: &TaskStore) {
    output.section(&format!("Pending Tasks ({}):", store.pending_count()));
    for (i, task) in store.pending().iter().enumerate() {
        output.section(&format!("{}.", i + 1));
        output.task(task);
    }
    output.section(&format!("Completed Tasks ({}):", store.completed_count()));
    for (i, task) in store.completed().iter().enumerate() {
        output.section(&format!("{}.", i + 1));
        output.task(task);
    }
}
