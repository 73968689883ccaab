//! Observability subsystem for snapvault
//!
//! This module provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Monotonic operation counters
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use snapvault::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::FileCreated, &[("file", "a.txt")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_files_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Severity a lifecycle event is logged at.
pub fn event_severity(event: Event) -> Severity {
    match event {
        Event::CommandRejected => Severity::Warn,
        Event::VersionBranched | Event::SnapshotSkipped | Event::RollbackComplete => {
            Severity::Trace
        }
        _ => Severity::Info,
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event_severity(event), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event_severity(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_warnings() {
        assert_eq!(event_severity(Event::CommandRejected), Severity::Warn);
    }

    #[test]
    fn test_tree_movement_is_trace() {
        assert_eq!(event_severity(Event::VersionBranched), Severity::Trace);
        assert_eq!(event_severity(Event::RollbackComplete), Severity::Trace);
        assert_eq!(event_severity(Event::FileCreated), Severity::Info);
    }

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::SessionStart);
        log_event_with_fields(Event::FileCreated, &[("file", "a.txt")]);
    }
}
