//! Structured audit logging for Mycelium.
//!
//! Entries follow a WHO/WHAT/WHEN/OUTCOME shape and are written as text
//! lines or JSON Lines. Nothing is recorded until a logger is installed, so
//! library users pay only an atomic load per potential entry.
//!
//! # Modules
//!
//! - `entry`: audit entry types (AuditEntry, Severity, Outcome, ActionCategory)
//! - `logger`: thread-safe logger with file and stderr sinks
//! - `global`: process-wide logger used by the engine and the runners
//!
//! # Example
//!
//! ```ignore
//! use mycelium::audit::{init_global_logger, AuditConfig, AuditFormat, Severity};
//!
//! init_global_logger(
//!     AuditConfig::to_file("run.jsonl")
//!         .with_format(AuditFormat::JsonLines)
//!         .with_min_severity(Severity::Debug),
//! )?;
//! ```

mod entry;
mod global;
mod logger;

pub use entry::{ActionCategory, AuditEntry, Outcome, Severity};

pub use logger::{AuditConfig, AuditFormat, AuditLogger};

pub use global::{
    audit, audit_enabled, audit_error, audit_warn, global_logger, init_global_logger,
};
