//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::Task;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Returns true when JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints a diagnostic message, only in verbose text mode
    pub fn debug(&self, message: &str) {
        if self.verbose && self.format == OutputFormat::Text {
            eprintln!("[debug] {}", message);
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                // For text format, we expect the caller to handle it
                // This is a fallback that pretty-prints JSON
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints a section heading (text only, ignored in JSON mode)
    pub fn section(&self, heading: &str) {
        if self.format == OutputFormat::Text {
            println!("\n{}", heading);
        }
    }

    /// Prints one task's details (text only, ignored in JSON mode)
    pub fn task(&self, task: &Task) {
        if self.format != OutputFormat::Text {
            return;
        }
        println!("Task: {}", task.title);
        println!("Priority: {}", task.priority);
        println!("Assigned to: {}", task.assignee);
        println!("Due Date: {}", task.due_date);
        println!("Description: {}", task.description);
        println!("Status: {}", task.status_label());
        println!("--------------------");
    }
}
